//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 依赖装配错误类型
///
/// 消息文本是对外契约的一部分，测试和日志会按字面比对。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("Error dependency value cannot be set into <{owner}.{field}>")]
    NotSettable { owner: String, field: String },

    #[error("Error multiple dependency values found for <{name}:{owner}.{field}>")]
    NotUnique {
        name: String,
        owner: String,
        field: String,
    },

    #[error("Error dependency value not found for <{name}:{owner}.{field}>")]
    NotFound {
        name: String,
        owner: String,
        field: String,
    },

    #[error("Error dependency field is not a pointer receiver <{owner}.{field}>")]
    NotReferenceType { owner: String, field: String },

    #[error("Error field contains unparsable tag  <{owner}.{field} `{tag}`>")]
    MalformedTag {
        owner: String,
        field: String,
        tag: String,
    },

    #[error("Error circular dependency detected <{chain}>")]
    CircularDependency { chain: String },

    #[error("Error dependency resolution exceeded max depth {max_depth} at <{entry}>")]
    ResolutionTooDeep { max_depth: usize, entry: String },
}

/// 依赖装配错误种类，供程序化处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyErrorKind {
    NotSettable,
    NotUnique,
    NotFound,
    NotReferenceType,
    MalformedTag,
    CircularDependency,
    ResolutionTooDeep,
}

impl DependencyError {
    /// 错误种类
    pub fn kind(&self) -> DependencyErrorKind {
        match self {
            Self::NotSettable { .. } => DependencyErrorKind::NotSettable,
            Self::NotUnique { .. } => DependencyErrorKind::NotUnique,
            Self::NotFound { .. } => DependencyErrorKind::NotFound,
            Self::NotReferenceType { .. } => DependencyErrorKind::NotReferenceType,
            Self::MalformedTag { .. } => DependencyErrorKind::MalformedTag,
            Self::CircularDependency { .. } => DependencyErrorKind::CircularDependency,
            Self::ResolutionTooDeep { .. } => DependencyErrorKind::ResolutionTooDeep,
        }
    }

    /// 创建字段不可设置错误
    pub fn not_settable(owner: impl Into<String>, field: impl Into<String>) -> Self {
        Self::NotSettable {
            owner: owner.into(),
            field: field.into(),
        }
    }

    /// 创建候选不唯一错误
    pub fn not_unique(
        name: impl Into<String>,
        owner: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::NotUnique {
            name: name.into(),
            owner: owner.into(),
            field: field.into(),
        }
    }

    /// 创建候选不存在错误
    pub fn not_found(
        name: impl Into<String>,
        owner: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            name: name.into(),
            owner: owner.into(),
            field: field.into(),
        }
    }

    /// 创建非引用类型字段错误
    pub fn not_reference_type(owner: impl Into<String>, field: impl Into<String>) -> Self {
        Self::NotReferenceType {
            owner: owner.into(),
            field: field.into(),
        }
    }

    /// 创建标签格式错误
    pub fn malformed_tag(
        owner: impl Into<String>,
        field: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self::MalformedTag {
            owner: owner.into(),
            field: field.into(),
            tag: tag.into(),
        }
    }
}

/// 生命周期管理错误类型
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("组件初始化失败: {component}, 原因: {message}")]
    InitFailed { component: String, message: String },

    #[error("组件启动失败: {component}, 原因: {message}")]
    StartFailed { component: String, message: String },

    #[error("组件停止失败: {component}, 原因: {message}")]
    StopFailed { component: String, message: String },
}

impl LifecycleError {
    /// 创建初始化失败错误
    pub fn init_failed(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InitFailed {
            component: component.into(),
            message: message.into(),
        }
    }

    /// 创建启动失败错误
    pub fn start_failed(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StartFailed {
            component: component.into(),
            message: message.into(),
        }
    }

    /// 创建停止失败错误
    pub fn stop_failed(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StopFailed {
            component: component.into(),
            message: message.into(),
        }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type LifecycleResult<T> = Result<T, LifecycleError>;
