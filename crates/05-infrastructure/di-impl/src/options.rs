//! 解析选项加载
//!
//! 选项来源按优先级从低到高：内置默认值、TOML 文件中的 `[resolver]` 表、
//! 以 `WIRING_RESOLVER__` 为前缀的环境变量。

use di_abstractions::ResolveOptions;
use infrastructure_common::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// 默认环境变量前缀
pub const ENV_PREFIX: &str = "WIRING";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OptionsDocument {
    resolver: ResolveOptions,
}

/// 解析选项加载器
#[derive(Debug, Clone)]
pub struct ResolveOptionsLoader {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl ResolveOptionsLoader {
    /// 创建只读取环境变量的加载器
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// 指定配置文件，文件不存在时忽略
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// 指定环境变量前缀
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// 加载并校验选项
    pub fn load(&self) -> ConfigResult<ResolveOptions> {
        let mut builder = config::Config::builder();
        if let Some(file) = &self.file {
            debug!("加载解析选项文件: {}", file.display());
            builder = builder.add_source(config::File::from(file.as_path()).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                error!("解析选项构建失败: {}", e);
                ConfigError::ParseError {
                    source: Box::new(e),
                }
            })?;

        let document: OptionsDocument = settings.try_deserialize().map_err(|e| {
            error!("解析选项绑定失败: {}", e);
            ConfigError::ParseError {
                source: Box::new(e),
            }
        })?;

        validate(&document.resolver)?;
        debug!(
            "解析选项: max_depth={}, detect_cycles={}",
            document.resolver.max_depth, document.resolver.detect_cycles
        );
        Ok(document.resolver)
    }
}

impl Default for ResolveOptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// 从文件和默认前缀的环境变量加载解析选项
pub fn load_resolve_options(path: impl AsRef<Path>) -> ConfigResult<ResolveOptions> {
    ResolveOptionsLoader::new().with_file(path).load()
}

fn validate(options: &ResolveOptions) -> ConfigResult<()> {
    if options.max_depth == 0 {
        return Err(ConfigError::ValidationError {
            message: "max_depth 必须大于 0".to_string(),
        });
    }
    Ok(())
}
