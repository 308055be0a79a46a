//! 流式写出：逐行拉取转换结果并写入 `out`
use std::io::{self, Write};

use crate::convert::convert_to_github;
use crate::stats::EmitStats;
use crate::types::OutputSet;

/// 将转换结果逐行写入 `out`（每行以 `\n` 结尾）
/// - 不整体缓冲：每拉取一行即写一行
/// - 遇到首个 I/O 错误立即返回
pub fn write_github_lines(outputs: &OutputSet, out: &mut dyn Write) -> io::Result<EmitStats> {
    let mut stats = EmitStats::default();
    for line in convert_to_github(outputs) {
        writeln!(out, "{line}")?;
        if line.is_mask() {
            stats.masks_written += 1;
        } else {
            stats.outputs_written += 1;
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutputDescriptor, OutputKind};

    #[test]
    fn writes_newline_terminated_lines() {
        let mut outputs = OutputSet::new();
        outputs.insert("token".into(), OutputDescriptor::new(OutputKind::String, "t0k", true));
        outputs.insert("region".into(), OutputDescriptor::new(OutputKind::String, "eu-west-1", false));

        let mut buf: Vec<u8> = Vec::new();
        let stats = write_github_lines(&outputs, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "::set-output name=token::t0k\n::add-mask::t0k\n::set-output name=region::eu-west-1\n"
        );
        assert_eq!(stats, EmitStats { outputs_written: 2, masks_written: 1 });
        assert_eq!(stats.lines_written(), 3);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn stops_on_write_error() {
        let mut outputs = OutputSet::new();
        outputs.insert("a".into(), OutputDescriptor::new(OutputKind::Number, 1, false));
        let err = write_github_lines(&outputs, &mut FailingWriter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
