//! 注册表条目

use crate::capability::{Capabilities, InstanceHandle};
use crate::injectable::Injectable;
use infrastructure_common::QualifiedName;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 注册表条目
///
/// 持有一个组件实例及其实例名、类型限定名和能力集合。条目归注册表独占，
/// 不可克隆。
pub struct Entry {
    name: String,
    qualified_name: QualifiedName,
    instance: Arc<dyn Injectable>,
    handle: InstanceHandle,
    capabilities: Capabilities,
}

impl Entry {
    /// 创建条目
    pub fn new<T: Injectable>(name: impl Into<String>, instance: Arc<T>) -> Self {
        let handle: InstanceHandle = instance.clone();
        Self {
            name: name.into(),
            qualified_name: QualifiedName::of::<T>(),
            capabilities: Capabilities::of::<T>().merge(T::capabilities()),
            instance,
            handle,
        }
    }

    /// 实例名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 类型限定名
    pub fn qualified_name(&self) -> QualifiedName {
        self.qualified_name
    }

    /// 组件实例
    pub fn instance(&self) -> &Arc<dyn Injectable> {
        &self.instance
    }

    /// 能力集合
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// 是否满足指定能力
    pub fn satisfies(&self, type_id: TypeId) -> bool {
        self.capabilities.satisfies(type_id)
    }

    /// 以指定目标类型提供实例（`Box<Arc<目标类型>>`）
    pub fn provide(&self, type_id: TypeId) -> Option<Box<dyn Any>> {
        self.capabilities.cast(type_id, &self.handle)
    }

    /// 向下转换为具体类型
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.handle.clone().downcast::<T>().ok()
    }

    /// 日志和错误消息中使用的标识（`name:Type`）
    pub fn label(&self) -> String {
        format!("{}:{}", self.name, self.qualified_name.short_name())
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("qualified_name", &self.qualified_name)
            .field("capabilities", &self.capabilities.type_names().collect::<Vec<_>>())
            .finish()
    }
}
