//! Row geometry of the dropdown list, used to scroll a row into view.

use std::fmt::Debug;

/// Vertical placement of the dropdown's rows.
///
/// Offsets are measured from the top of the list inside its scroll
/// container, in whatever unit the renderer scrolls by.
pub trait RowLayout: Debug {
    /// Offset of the top edge of row `index`.
    fn row_top(&self, index: usize) -> u16;
}

/// Rows of identical height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformRows {
    pub height: u16,
}

impl UniformRows {
    pub const fn new(height: u16) -> Self {
        Self { height }
    }
}

impl Default for UniformRows {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RowLayout for UniformRows {
    fn row_top(&self, index: usize) -> u16 {
        u16::try_from(index)
            .unwrap_or(u16::MAX)
            .saturating_mul(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_rows_stack() {
        let rows = UniformRows::new(3);
        assert_eq!(rows.row_top(0), 0);
        assert_eq!(rows.row_top(4), 12);
        assert_eq!(rows.row_top(usize::MAX), u16::MAX);
    }
}
