//! 依赖解析器实现
//!
//! 对条目的字段按声明顺序做一次线性扫描：解析标签、检查可写性和字段类型、
//! 在注册表中查找候选、递归解析候选自身的依赖，最后写入字段。
//! 任一步失败立即返回，嵌套解析的错误原样向上传递。

use di_abstractions::{
    parse_field_tag, ComponentRegistry, DependencyResolver, Entry, FieldDescriptor, Injectable,
    ResolveContext, ResolveOptions, TargetType,
};
use infrastructure_common::{DependencyError, DependencyResult, QualifiedName};
use std::any::TypeId;
use std::sync::Arc;
use tracing::{debug, trace};

/// 默认依赖解析器
#[derive(Debug, Clone, Default)]
pub struct DefaultDependencyResolver {
    options: ResolveOptions,
}

impl DefaultDependencyResolver {
    /// 使用指定选项创建解析器
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// 解析选项
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// 按（类型限定名，实例名）顺序解析注册表中的全部条目
    ///
    /// 返回解析的条目数，遇到第一个错误即停止。
    pub fn resolve_all(&self, registry: &dyn ComponentRegistry) -> DependencyResult<usize> {
        let mut entries: Vec<&Entry> = registry.all_entries().collect();
        entries.sort_by(|a, b| {
            a.qualified_name()
                .cmp(&b.qualified_name())
                .then_with(|| a.name().cmp(b.name()))
        });

        for entry in &entries {
            self.resolve(entry, registry)?;
        }

        debug!("全部组件依赖解析完成，共 {} 个", entries.len());
        Ok(entries.len())
    }

    fn resolve_in(
        &self,
        entry: &Entry,
        registry: &dyn ComponentRegistry,
        ctx: &mut ResolveContext,
    ) -> DependencyResult<()> {
        ctx.enter(entry)?;
        trace!("解析组件依赖: {} (深度 {})", entry.label(), ctx.depth());
        let result = self.wire_fields(entry, registry, ctx);
        ctx.leave();
        result
    }

    fn wire_fields(
        &self,
        entry: &Entry,
        registry: &dyn ComponentRegistry,
        ctx: &mut ResolveContext,
    ) -> DependencyResult<()> {
        let instance = entry.instance();

        for field in instance.fields() {
            let instruction = parse_field_tag(&field)?;
            let Some(requested) = instruction.requested_name() else {
                trace!("跳过非依赖字段: {}.{}", field.owner, field.name);
                continue;
            };

            if !field.settable {
                return Err(DependencyError::not_settable(field.owner, field.name));
            }

            let (candidate, type_id) = match field.target {
                TargetType::Value { .. } => {
                    return Err(DependencyError::not_reference_type(field.owner, field.name));
                }
                TargetType::Concrete {
                    qualified_name,
                    type_id,
                } => (
                    find_by_type(registry, &qualified_name, requested, &field)?,
                    type_id,
                ),
                TargetType::Capability { type_id, .. } => (
                    find_by_capability(registry, type_id, requested, &field)?,
                    type_id,
                ),
            };

            self.resolve_in(candidate, registry, ctx)?;

            let value = candidate
                .provide(type_id)
                .ok_or_else(|| DependencyError::not_found(requested, field.owner, field.name))?;
            instance.inject(field.name, value)?;

            debug!(
                "装配依赖: {}.{} <- {}",
                field.owner,
                field.name,
                candidate.label()
            );
        }

        Ok(())
    }
}

impl DependencyResolver for DefaultDependencyResolver {
    fn resolve(
        &self,
        entry: &Entry,
        registry: &dyn ComponentRegistry,
    ) -> DependencyResult<Arc<dyn Injectable>> {
        let mut ctx = ResolveContext::new(self.options.clone());
        self.resolve_in(entry, registry, &mut ctx)?;
        Ok(entry.instance().clone())
    }
}

/// 使用默认选项解析条目的依赖
pub fn resolve_dependency(
    entry: &Entry,
    registry: &dyn ComponentRegistry,
) -> DependencyResult<Arc<dyn Injectable>> {
    DefaultDependencyResolver::default().resolve(entry, registry)
}

fn find_by_type<'r>(
    registry: &'r dyn ComponentRegistry,
    qualified_name: &QualifiedName,
    requested: &str,
    field: &FieldDescriptor,
) -> DependencyResult<&'r Entry> {
    registry
        .find(qualified_name, requested)
        .ok_or_else(|| DependencyError::not_found(requested, field.owner, field.name))
}

fn find_by_capability<'r>(
    registry: &'r dyn ComponentRegistry,
    type_id: TypeId,
    requested: &str,
    field: &FieldDescriptor,
) -> DependencyResult<&'r Entry> {
    let mut matches = registry
        .all_entries()
        .filter(|entry| entry.name() == requested && entry.satisfies(type_id));

    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (None, _) => Err(DependencyError::not_found(requested, field.owner, field.name)),
        (Some(_), Some(_)) => Err(DependencyError::not_unique(
            requested,
            field.owner,
            field.name,
        )),
    }
}
