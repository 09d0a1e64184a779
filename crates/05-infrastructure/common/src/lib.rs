//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn ADSP 组件装配的公共 traits 和工具。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件生命周期 trait（init / start / stop）
//! - [`QualifiedName`] - 组件具体类型的限定名
//! - [`DependencyError`] - 依赖装配错误分类
//!
//! ## 设计原则
//!
//! - 注册表以显式参数传递，不使用全局状态
//! - 错误消息自带定位信息（类型、字段、请求的实例名）

pub mod component;
pub mod errors;
pub mod qualifier;

pub use component::*;
pub use errors::*;
pub use qualifier::*;
