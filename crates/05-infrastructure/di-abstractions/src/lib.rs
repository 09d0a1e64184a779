//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义字段扫描、组件注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`Injectable`] - 组件字段扫描与注入契约（通常由 `#[derive(Injectable)]` 生成）
//! - [`Wired`] - 依赖字段槽位
//! - [`Capabilities`] - 组件声明的能力集合
//! - [`Entry`] - 注册表条目
//! - [`ComponentRegistry`] - 注册表只读接口
//! - [`DependencyResolver`] - 依赖解析器接口
//! - [`WiringInstruction`] - 字段标签解析结果

pub mod capability;
pub mod entry;
pub mod injectable;
pub mod registry;
pub mod resolver;
pub mod tag;
pub mod wired;

pub use capability::*;
pub use entry::*;
pub use injectable::*;
pub use registry::*;
pub use resolver::*;
pub use tag::*;
pub use wired::*;

// 派生宏生成的代码只引用本 crate
pub use infrastructure_common::{
    Component, DependencyError, DependencyErrorKind, DependencyResult, LifecycleError,
    QualifiedName,
};
