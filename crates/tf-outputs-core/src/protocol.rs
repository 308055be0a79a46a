//! 协议行（GitHub Actions 日志命令）
use std::fmt;

/// 单行日志命令
/// - SetOutput：`::set-output name=<name>::<value>`
/// - AddMask：`::add-mask::<value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolLine {
    SetOutput { name: String, value: String },
    AddMask { value: String },
}

impl ProtocolLine {
    pub fn is_mask(&self) -> bool {
        matches!(self, ProtocolLine::AddMask { .. })
    }

    /// 行内携带的值（两种命令都有）
    pub fn value(&self) -> &str {
        match self {
            ProtocolLine::SetOutput { value, .. } | ProtocolLine::AddMask { value } => value,
        }
    }
}

impl fmt::Display for ProtocolLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // name 原样输出，不做转义
        match self {
            ProtocolLine::SetOutput { name, value } => write!(f, "::set-output name={name}::{value}"),
            ProtocolLine::AddMask { value } => write!(f, "::add-mask::{value}"),
        }
    }
}
