//! 外层适配（读取 / 解析输入）的错误类型
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputsError {
    #[error("failed to read outputs: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid outputs JSON: {0}")]
    Json(#[from] serde_json::Error),
}
