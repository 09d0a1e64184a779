//! # Component Macros
//!
//! 这个 crate 提供了用于依赖装配的派生宏，在编译期生成字段扫描元数据，
//! 替代运行时反射。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 生成 `di_abstractions::Injectable` 实现
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::Injectable;
//! use di_abstractions::{Component, Wired};
//!
//! pub trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! #[derive(Debug, Default, Injectable)]
//! #[injectable(provides(dyn Greeter))]
//! pub struct Console;
//!
//! #[derive(Debug, Default, Injectable)]
//! pub struct UserService {
//!     #[boot("wire")]
//!     pub database: Wired<Database>,
//!     #[boot("wire,name:replica")]
//!     pub replica: Wired<Database>,
//!     #[boot("wire")]
//!     pub greeter: Wired<dyn Greeter>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 可注入组件派生宏
///
/// 为结构体实现 `Injectable`：
///
/// - `fields()` 按声明顺序返回全部命名字段的描述符
/// - `inject()` 写入 `pub` 的 `Wired<...>` 字段
/// - `capabilities()` 返回 `#[injectable(provides(...))]` 声明的能力
///
/// # 字段属性
///
/// - `#[boot("wire")]` - 按类型装配
/// - `#[boot("wire,name:xxx")]` - 按类型和实例名装配
///
/// 标签文本原样保留，在解析依赖时才做语法检查。
///
/// # 结构体属性
///
/// - `#[injectable(provides(dyn TraitA, dyn TraitB))]` - 声明满足的能力 trait
#[proc_macro_derive(Injectable, attributes(boot, injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
