//! 组件注册表抽象接口

use crate::entry::Entry;
use infrastructure_common::QualifiedName;
use std::collections::HashMap;

/// 注册表只读接口
///
/// 解析期间注册表只读；实现必须允许多个解析调用并发读取。
/// 查找不会失败，缺失以 `None` 或空迭代表示。
pub trait ComponentRegistry: Send + Sync {
    /// 按类型限定名精确查找，返回实例名到条目的映射
    fn lookup_by_type(&self, qualified_name: &QualifiedName) -> Option<&HashMap<String, Entry>>;

    /// 枚举全部条目，顺序不稳定
    fn all_entries(&self) -> Box<dyn Iterator<Item = &Entry> + '_>;

    /// 按类型限定名和实例名查找条目
    fn find(&self, qualified_name: &QualifiedName, name: &str) -> Option<&Entry> {
        self.lookup_by_type(qualified_name)
            .and_then(|entries| entries.get(name))
    }
}
