//! 字段标签解析
//!
//! 标签语法：
//!
//! - `wire` 按类型装配，使用默认实例名
//! - `wire,name:<标识>` 按类型和实例名装配
//! - `wire,name:` 格式错误
//!
//! 首个逗号分隔项不是 `wire` 时，字段不参与装配。

use crate::injectable::FieldDescriptor;
use infrastructure_common::{DependencyError, DependencyResult};
use std::fmt;
use std::str::FromStr;

/// 标记字段可装配的标签项
pub const TAG_MARKER: &str = "wire";

/// 实例名选项前缀
pub const NAME_OPTION: &str = "name:";

/// 默认实例名
pub const DEFAULT_NAME: &str = "default";

/// 字段装配指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WiringInstruction {
    /// 不是依赖字段
    Absent,
    /// 按类型装配，使用默认实例名
    Unnamed,
    /// 按类型和指定实例名装配
    Named(String),
}

impl WiringInstruction {
    /// 请求的实例名，`Absent` 时为 `None`
    pub fn requested_name(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Unnamed => Some(DEFAULT_NAME),
            Self::Named(name) => Some(name),
        }
    }

    /// 是否需要装配
    pub fn is_wired(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// 标签语法错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedTag;

impl fmt::Display for MalformedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unparsable tag")
    }
}

impl std::error::Error for MalformedTag {}

impl FromStr for WiringInstruction {
    type Err = MalformedTag;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut items = raw.split(',').map(str::trim);
        if items.next() != Some(TAG_MARKER) {
            return Ok(Self::Absent);
        }

        let mut instruction = Self::Unnamed;
        for item in items {
            let name = item.strip_prefix(NAME_OPTION).ok_or(MalformedTag)?.trim();
            if name.is_empty() || instruction != Self::Unnamed {
                return Err(MalformedTag);
            }
            instruction = Self::Named(name.to_string());
        }
        Ok(instruction)
    }
}

/// 解析字段的标签
///
/// 没有标签的字段视为 `Absent`；语法错误转换为带有类型、字段和原始标签的
/// [`DependencyError::MalformedTag`]。
pub fn parse_field_tag(field: &FieldDescriptor) -> DependencyResult<WiringInstruction> {
    let Some(raw) = field.tag else {
        return Ok(WiringInstruction::Absent);
    };
    raw.parse()
        .map_err(|_| DependencyError::malformed_tag(field.owner, field.name, raw))
}
