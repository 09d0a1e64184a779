//! 依赖解析器抽象接口
//!
//! 提供依赖解析和解析链跟踪的能力

use crate::entry::Entry;
use crate::injectable::Injectable;
use crate::registry::ComponentRegistry;
use infrastructure_common::{DependencyError, DependencyResult, QualifiedName};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 依赖解析器 trait
///
/// 负责为条目中的依赖字段装配实例
pub trait DependencyResolver: Send + Sync {
    /// 解析条目的全部依赖字段，成功时返回已装配的实例
    fn resolve(
        &self,
        entry: &Entry,
        registry: &dyn ComponentRegistry,
    ) -> DependencyResult<Arc<dyn Injectable>>;
}

/// 解析上下文
///
/// 仅存在于一次解析调用内部，不在条目上留下任何状态。
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// 当前解析链，用于检测循环依赖
    resolution_chain: Vec<(QualifiedName, String)>,
    /// 解析选项
    options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            resolution_chain: Vec::new(),
            options,
        }
    }

    /// 进入条目
    pub fn enter(&mut self, entry: &Entry) -> DependencyResult<()> {
        let key = (entry.qualified_name(), entry.name().to_string());

        if self.options.detect_cycles && self.resolution_chain.contains(&key) {
            let mut chain: Vec<String> = self
                .resolution_chain
                .iter()
                .map(|(qualified_name, name)| format!("{}:{}", name, qualified_name.short_name()))
                .collect();
            chain.push(entry.label());
            return Err(DependencyError::CircularDependency {
                chain: chain.join(" -> "),
            });
        }

        if self.resolution_chain.len() >= self.options.max_depth {
            return Err(DependencyError::ResolutionTooDeep {
                max_depth: self.options.max_depth,
                entry: entry.label(),
            });
        }

        self.resolution_chain.push(key);
        Ok(())
    }

    /// 离开当前条目
    pub fn leave(&mut self) {
        self.resolution_chain.pop();
    }

    /// 当前解析深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }

    /// 解析选项
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::new(ResolveOptions::default())
    }
}

/// 解析选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// 最大递归深度
    pub max_depth: usize,
    /// 是否检测循环依赖
    pub detect_cycles: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            detect_cycles: true,
        }
    }
}
