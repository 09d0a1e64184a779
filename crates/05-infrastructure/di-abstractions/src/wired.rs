//! 依赖字段槽位

use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 可装配的依赖字段
///
/// - `Wired<T>`（`T` 为具体组件类型）按类型限定名查找
/// - `Wired<dyn Trait>` 按组件声明的能力查找
///
/// 装配前为空。同一条目重复解析时会以相同实例覆盖。
pub struct Wired<T: ?Sized> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> Wired<T> {
    /// 创建空槽位
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// 获取已装配的实例
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.read().clone()
    }

    /// 是否已装配
    pub fn is_wired(&self) -> bool {
        self.slot.read().is_some()
    }

    /// 是否装配为给定实例（只比较数据地址）
    pub fn ptr_eq(&self, other: &Arc<T>) -> bool {
        self.slot.read().as_ref().map_or(false, |current| {
            Arc::as_ptr(current).cast::<()>() == Arc::as_ptr(other).cast::<()>()
        })
    }
}

impl<T: ?Sized + 'static> Wired<T> {
    /// 写入装配值
    ///
    /// `value` 必须是 `Arc<T>`，否则原样返回。
    pub fn assign(&self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        let value = value.downcast::<Arc<T>>()?;
        *self.slot.write() = Some(*value);
        Ok(())
    }
}

impl<T: ?Sized> Default for Wired<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> From<Arc<T>> for Wired<T> {
    fn from(value: Arc<T>) -> Self {
        Self {
            slot: RwLock::new(Some(value)),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Wired<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_wired() { "wired" } else { "empty" };
        f.debug_struct("Wired")
            .field("target", &std::any::type_name::<T>())
            .field("state", &state)
            .finish()
    }
}
