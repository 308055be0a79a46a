//! 写出统计信息

/// 写出统计（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmitStats {
    /// `::set-output` 行数（等于输入项数）
    pub outputs_written: usize,
    /// `::add-mask::` 行数（等于敏感项数）
    pub masks_written: usize,
}

impl EmitStats {
    pub fn lines_written(&self) -> usize {
        self.outputs_written + self.masks_written
    }
}
