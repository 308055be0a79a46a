//! 输入解析（`terraform output -json` 格式）
use std::io::Read;

use crate::error::OutputsError;
use crate::types::OutputSet;

/// 从 JSON 文本解析输出集合，保持文档中的键顺序
pub fn parse_outputs(text: &str) -> Result<OutputSet, OutputsError> {
    Ok(serde_json::from_str(text)?)
}

/// 从任意读取器解析输出集合
pub fn read_outputs<R: Read>(mut reader: R) -> Result<OutputSet, OutputsError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_outputs(&buf)
}
