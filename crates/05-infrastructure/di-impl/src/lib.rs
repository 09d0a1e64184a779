//! # 依赖注入具体实现
//!
//! 提供注册表、依赖解析器和解析选项加载的具体实现
//!
//! ```ignore
//! let mut registry = Registry::new();
//! registry.register(Arc::new(Database::default()));
//! registry.register(Arc::new(UserService::default()));
//!
//! let entry = registry.entry_of::<UserService>(DEFAULT_NAME).ok_or("UserService 未注册")?;
//! let wired = resolve_dependency(entry, &registry)?;
//! ```

pub mod options;
pub mod registry;
pub mod resolver;

pub use options::*;
pub use registry::*;
pub use resolver::*;
