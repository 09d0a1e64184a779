//! 组件字段扫描契约
//!
//! 编译期生成字段元数据以替代运行时反射：字段按声明顺序给出，
//! 标签保留原始文本，供解析器和错误消息使用。

use crate::capability::Capabilities;
use infrastructure_common::{Component, DependencyResult, QualifiedName};
use std::any::{Any, TypeId};

/// 字段声明类型的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    /// 具体组件类型的引用（`Wired<T>`），按限定名直接查找
    Concrete {
        qualified_name: QualifiedName,
        type_id: TypeId,
    },
    /// 能力 trait（`Wired<dyn Trait>`），在全部条目中按能力筛选
    Capability {
        contract: &'static str,
        type_id: TypeId,
    },
    /// 值类型字段，不能作为依赖装配
    Value { type_name: &'static str },
}

impl TargetType {
    /// 具体组件类型
    pub fn concrete<T: 'static>() -> Self {
        Self::Concrete {
            qualified_name: QualifiedName::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// 能力 trait 类型
    pub fn capability<C: ?Sized + 'static>() -> Self {
        Self::Capability {
            contract: std::any::type_name::<C>(),
            type_id: TypeId::of::<C>(),
        }
    }

    /// 值类型
    pub fn value<T: ?Sized>() -> Self {
        Self::Value {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// 装配目标的 `TypeId`，值类型没有
    pub fn type_id(&self) -> Option<TypeId> {
        match self {
            Self::Concrete { type_id, .. } | Self::Capability { type_id, .. } => Some(*type_id),
            Self::Value { .. } => None,
        }
    }
}

/// 字段描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// 声明字段的类型名（不含模块路径）
    pub owner: &'static str,
    /// 字段名
    pub name: &'static str,
    /// `#[boot("...")]` 的原始文本
    pub tag: Option<&'static str>,
    /// 是否可写（`pub` 字段）
    pub settable: bool,
    /// 声明类型分类
    pub target: TargetType,
}

impl FieldDescriptor {
    /// 创建字段描述符
    pub fn new(owner: &'static str, name: &'static str, target: TargetType) -> Self {
        Self {
            owner,
            name,
            tag: None,
            settable: true,
            target,
        }
    }

    /// 设置标签
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// 设置是否可写
    pub fn with_settable(mut self, settable: bool) -> Self {
        self.settable = settable;
        self
    }
}

/// 可注入组件 trait
///
/// 通常由 `#[derive(Injectable)]` 生成；手写实现时必须保证 `fields`
/// 按声明顺序返回，`inject` 能写入所有可写的 `Wired` 字段。
pub trait Injectable: Component {
    /// 按声明顺序列出全部字段
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// 向字段写入装配值（`Box<Arc<目标类型>>`）
    fn inject(&self, field: &str, value: Box<dyn Any>) -> DependencyResult<()>;

    /// 组件声明满足的能力 trait，自身具体类型由注册表自动加入
    fn capabilities() -> Capabilities
    where
        Self: Sized,
    {
        Capabilities::new()
    }
}
