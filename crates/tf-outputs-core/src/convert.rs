//! 转换主流程：OutputSet → 惰性协议行序列
use serde_json::Value;

use crate::protocol::ProtocolLine;
use crate::types::{OutputDescriptor, OutputSet};

/// 将输出集合转换为 GitHub Actions 日志命令
/// 顺序保证：
/// - 按 `outputs` 的插入顺序逐项产出
/// - 每项先 `SetOutput`；若敏感，紧接着一行 `AddMask`，随后才处理下一项
pub fn convert_to_github(outputs: &OutputSet) -> GithubLines<'_> {
    GithubLines { entries: outputs.iter(), pending_mask: None }
}

/// 惰性迭代器（单次遍历，不可重置）
/// 跨项不缓冲：最多暂存当前项的掩码行
#[derive(Debug)]
pub struct GithubLines<'a> {
    entries: indexmap::map::Iter<'a, String, OutputDescriptor>,
    pending_mask: Option<String>,
}

impl Iterator for GithubLines<'_> {
    type Item = ProtocolLine;

    fn next(&mut self) -> Option<ProtocolLine> {
        if let Some(value) = self.pending_mask.take() {
            return Some(ProtocolLine::AddMask { value });
        }
        let (name, desc) = self.entries.next()?;
        // 只字符串化一次，两行中的值逐字节一致
        let value = stringify_value(&desc.value);
        if desc.sensitive {
            self.pending_mask = Some(value.clone());
        }
        Some(ProtocolLine::SetOutput { name: name.clone(), value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending_mask.is_some());
        let (lo, hi) = self.entries.size_hint();
        (lo + pending, hi.and_then(|h| h.checked_mul(2)).map(|h| h + pending))
    }
}

impl std::iter::FusedIterator for GithubLines<'_> {}

/// 值的自然字符串形式（与 `type` 无关）
/// - 字符串：原样，不带引号
/// - 数字：保留输入中的原始数字文本（大整数不丢精度）
/// - 布尔 / null：JSON 文本形式（`true`、`null`）
/// - 数组 / 对象：紧凑 JSON
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
