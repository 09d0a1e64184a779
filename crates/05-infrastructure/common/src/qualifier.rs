//! 组件限定名
//!
//! 为组件的具体类型生成稳定的文本标识，作为注册表的外层键。

use std::fmt;

/// 组件具体类型的限定名
///
/// 由 [`std::any::type_name`] 派生（模块路径 + 类型名），与组件实现了哪些
/// 能力 trait 无关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName(&'static str);

impl QualifiedName {
    /// 获取类型的限定名
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(std::any::type_name::<T>())
    }

    /// 获取值的具体类型的限定名
    pub fn of_val<T: ?Sized + 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// 完整限定名
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// 获取简短的类型名称（不包含模块路径和泛型参数）
    pub fn short_name(&self) -> &'static str {
        let base = self.0.split('<').next().unwrap_or(self.0);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        self.0
    }
}
