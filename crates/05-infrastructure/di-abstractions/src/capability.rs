//! 组件能力集合
//!
//! 组件在注册时声明它满足的能力 trait（`dyn Trait`），解析时按 `TypeId`
//! 做集合成员判断，并通过注册时记录的转换函数得到 `Arc<dyn Trait>`。

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 类型擦除的实例句柄
pub type InstanceHandle = Arc<dyn Any + Send + Sync>;

type Caster = Box<dyn Fn(&InstanceHandle) -> Option<Box<dyn Any>> + Send + Sync>;

/// 单个能力：目标类型及从实例句柄到 `Arc<目标类型>` 的转换
pub struct Capability {
    type_id: TypeId,
    type_name: &'static str,
    cast: Caster,
}

impl Capability {
    /// 创建能力，`upcast` 通常是 `|this| this` 形式的非捕获闭包
    pub fn new<T, C>(upcast: fn(Arc<T>) -> Arc<C>) -> Self
    where
        T: Send + Sync + 'static,
        C: ?Sized + 'static,
    {
        Self {
            type_id: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            cast: Box::new(move |handle: &InstanceHandle| {
                let this = handle.clone().downcast::<T>().ok()?;
                Some(Box::new(upcast(this)) as Box<dyn Any>)
            }),
        }
    }

    /// 目标类型的 `TypeId`
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// 目标类型名称
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// 组件能力集合
#[derive(Debug, Default)]
pub struct Capabilities {
    provided: Vec<Capability>,
}

impl Capabilities {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 仅包含组件自身具体类型的集合
    pub fn of<T: Send + Sync + 'static>() -> Self {
        Self::new().provide::<T, T>(|this| this)
    }

    /// 声明组件 `T` 满足能力 `C`
    ///
    /// ```ignore
    /// Capabilities::new().provide::<Console, dyn Greeter>(|this| this)
    /// ```
    pub fn provide<T, C>(mut self, upcast: fn(Arc<T>) -> Arc<C>) -> Self
    where
        T: Send + Sync + 'static,
        C: ?Sized + 'static,
    {
        let capability = Capability::new(upcast);
        // 同一能力只保留最后一次声明
        self.provided.retain(|c| c.type_id != capability.type_id);
        self.provided.push(capability);
        self
    }

    /// 合并另一个集合，后者覆盖重复的能力
    pub fn merge(mut self, other: Capabilities) -> Self {
        for capability in other.provided {
            self.provided.retain(|c| c.type_id != capability.type_id);
            self.provided.push(capability);
        }
        self
    }

    /// 是否满足指定能力
    pub fn satisfies(&self, type_id: TypeId) -> bool {
        self.provided.iter().any(|c| c.type_id == type_id)
    }

    /// 将实例转换为 `Box<Arc<C>>`（`C` 由 `type_id` 指定）
    pub fn cast(&self, type_id: TypeId, handle: &InstanceHandle) -> Option<Box<dyn Any>> {
        self.provided
            .iter()
            .find(|c| c.type_id == type_id)
            .and_then(|c| (c.cast)(handle))
    }

    /// 已声明能力的类型名称
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.provided.iter().map(|c| c.type_name)
    }

    /// 能力数量
    pub fn len(&self) -> usize {
        self.provided.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.provided.is_empty()
    }
}
