//! 组件基础接口定义
//!
//! 提供所有可注册组件必须实现的生命周期 trait

use crate::errors::LifecycleError;
use async_trait::async_trait;
use std::any::Any;
use std::fmt::Debug;

/// 组件基础 trait
///
/// 所有可注册到注册表中的组件都必须实现此 trait。生命周期钩子由外部的
/// 启动器按顺序调用，依赖装配发生在 `init` 之前。
///
/// 钩子以 `&self` 调用：组件在注册后以 `Arc` 共享，需要可变状态时使用内部可变性。
#[async_trait]
pub trait Component: Any + Send + Sync + Debug {
    /// 初始化组件，此时依赖字段已装配完成
    async fn init(&self) -> Result<(), LifecycleError> {
        Ok(())
    }

    /// 启动组件
    async fn start(&self) -> Result<(), LifecycleError> {
        Ok(())
    }

    /// 停止组件
    async fn stop(&self) -> Result<(), LifecycleError> {
        Ok(())
    }
}
