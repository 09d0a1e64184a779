//! # 组件装配演示
//!
//! 注册一组组件，按字段标签解析依赖，然后依次执行生命周期钩子。
//!
//! 解析选项从 `wiring.toml`（可选）和 `WIRING_RESOLVER__*` 环境变量读取，
//! 日志级别由 `RUST_LOG` 控制。

use async_trait::async_trait;
use component_macros::Injectable;
use di_abstractions::{Injectable, Wired, DEFAULT_NAME};
use di_impl::{load_resolve_options, DefaultDependencyResolver, Registry};
use infrastructure_common::{Component, LifecycleError};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 消息格式
trait Formatter: Send + Sync {
    fn format(&self, message: &str) -> String;
}

/// 纯文本格式
#[derive(Debug, Default, Injectable)]
#[injectable(provides(dyn Formatter))]
struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, message: &str) -> String {
        message.to_string()
    }
}

impl Component for PlainFormatter {}

/// 带时间戳前缀的格式
#[derive(Debug, Default, Injectable)]
#[injectable(provides(dyn Formatter))]
struct StampedFormatter;

impl Formatter for StampedFormatter {
    fn format(&self, message: &str) -> String {
        format!("[00:00:00] {message}")
    }
}

impl Component for StampedFormatter {}

/// 输出通道
#[derive(Debug, Default, Injectable)]
struct Console {
    #[boot("wire")]
    pub formatter: Wired<dyn Formatter>,
}

impl Console {
    fn print(&self, message: &str) {
        if let Some(formatter) = self.formatter.get() {
            info!("{}", formatter.format(message));
        }
    }
}

#[async_trait]
impl Component for Console {
    async fn start(&self) -> Result<(), LifecycleError> {
        self.print("控制台已就绪");
        Ok(())
    }
}

/// 审计通道，使用带时间戳的格式
#[derive(Debug, Default, Injectable)]
struct AuditTrail {
    #[boot("wire,name:audit")]
    pub formatter: Wired<dyn Formatter>,
}

impl Component for AuditTrail {}

/// 问候服务
#[derive(Debug, Default, Injectable)]
struct GreetingService {
    #[boot("wire")]
    pub console: Wired<Console>,
    #[boot("wire")]
    pub audit: Wired<AuditTrail>,
    pub greeting: String,
}

impl GreetingService {
    fn greet(&self, who: &str) {
        let message = format!("{}, {who}", self.greeting);
        if let Some(console) = self.console.get() {
            console.print(&message);
        }
        if let Some(formatter) = self.audit.get().and_then(|audit| audit.formatter.get()) {
            info!("审计: {}", formatter.format(&message));
        }
    }
}

#[async_trait]
impl Component for GreetingService {
    async fn init(&self) -> Result<(), LifecycleError> {
        if !self.console.is_wired() {
            return Err(LifecycleError::init_failed(
                "GreetingService",
                "console 未装配",
            ));
        }
        Ok(())
    }

    async fn stop(&self) -> Result<(), LifecycleError> {
        info!("问候服务停止");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let options = load_resolve_options("wiring.toml")?;
    info!(
        "解析选项: max_depth={}, detect_cycles={}",
        options.max_depth, options.detect_cycles
    );

    let console = Arc::new(Console::default());
    let service = Arc::new(GreetingService {
        greeting: "你好".to_string(),
        ..GreetingService::default()
    });

    let mut registry = Registry::new();
    registry.register(Arc::new(PlainFormatter));
    registry.add_entry("audit", Arc::new(StampedFormatter));
    registry.register(console.clone());
    registry.register(Arc::new(AuditTrail::default()));
    registry.register(service.clone());

    let resolved = DefaultDependencyResolver::new(options).resolve_all(&registry)?;
    info!("已解析 {} 个组件", resolved);

    let entry = registry
        .entry_of::<GreetingService>(DEFAULT_NAME)
        .ok_or_else(|| anyhow::anyhow!("GreetingService 未注册"))?;
    info!("{} 共有 {} 个字段", entry.label(), entry.instance().fields().len());

    let lifecycle: [Arc<dyn Component>; 2] = [console, service.clone()];
    for component in &lifecycle {
        component.init().await?;
    }
    for component in &lifecycle {
        component.start().await?;
    }

    service.greet("世界");

    for component in lifecycle.iter().rev() {
        component.stop().await?;
    }

    Ok(())
}
