//! Terraform 输出 → GitHub Actions 日志命令 转换核心库
//!
//! 设计要点：
//! - 转换本身是纯函数：只读输入 `OutputSet`，惰性产出协议行，无副作用。
//! - 按输入顺序逐项输出；敏感项的 `::add-mask::` 紧跟其 `::set-output`。
//! - `type` 字段仅作记录，不参与格式化；所有值统一按自然字符串形式输出。
//! - 读取 JSON / 写出标准输出属于外层包装，这里只提供薄适配函数。

mod types;
mod protocol;
mod convert;
mod stats;
mod input;
mod error;
mod emit;

pub use types::{OutputDescriptor, OutputKind, OutputSet};
pub use protocol::ProtocolLine;
pub use convert::{convert_to_github, stringify_value, GithubLines};
pub use stats::EmitStats;
pub use input::{parse_outputs, read_outputs};
pub use error::OutputsError;
pub use emit::write_github_lines;
