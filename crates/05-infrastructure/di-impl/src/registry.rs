//! 组件注册表实现

use di_abstractions::{ComponentRegistry, Entry, Injectable, DEFAULT_NAME};
use infrastructure_common::QualifiedName;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// 组件注册表
///
/// 两级映射：类型限定名 → 实例名 → 条目。启动时一次性构建，解析期间只读。
/// 写操作需要 `&mut self`，因此注册必然发生在所有解析之前。
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<QualifiedName, HashMap<String, Entry>>,
}

impl Registry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 以指定实例名注册组件
    ///
    /// 相同（类型，实例名）重复注册时覆盖旧条目。
    pub fn add_entry<T: Injectable>(&mut self, name: impl Into<String>, instance: Arc<T>) {
        let entry = Entry::new(name, instance);
        let qualified_name = entry.qualified_name();
        let name = entry.name().to_string();

        info!("注册组件: {} ({})", name, qualified_name);

        let replaced = self
            .entries
            .entry(qualified_name)
            .or_default()
            .insert(name.clone(), entry);
        if replaced.is_some() {
            warn!("组件已存在，覆盖注册: {} ({})", name, qualified_name);
        }
    }

    /// 以默认实例名注册组件
    pub fn register<T: Injectable>(&mut self, instance: Arc<T>) {
        self.add_entry(DEFAULT_NAME, instance);
    }

    /// 按类型限定名和实例名获取条目
    pub fn entry(&self, qualified_name: &QualifiedName, name: &str) -> Option<&Entry> {
        self.find(qualified_name, name)
    }

    /// 按具体类型和实例名获取条目
    pub fn entry_of<T: Injectable>(&self, name: &str) -> Option<&Entry> {
        self.find(&QualifiedName::of::<T>(), name)
    }

    /// 条目总数
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}

impl ComponentRegistry for Registry {
    fn lookup_by_type(&self, qualified_name: &QualifiedName) -> Option<&HashMap<String, Entry>> {
        self.entries.get(qualified_name)
    }

    fn all_entries(&self) -> Box<dyn Iterator<Item = &Entry> + '_> {
        Box::new(self.entries.values().flat_map(HashMap::values))
    }
}
