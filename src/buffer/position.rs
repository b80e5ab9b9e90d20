/// Zero-based cursor position. `col` is a byte offset, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
#[display("{row}:{col}")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `col` made safe for slicing `line`: clamped to its length and moved back to
    /// the start of any multi-byte character it points into.
    pub fn col_in(&self, line: &str) -> usize {
        let mut col = self.col.min(line.len());
        while !line.is_char_boundary(col) {
            col -= 1;
        }
        col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn col_is_clamped_to_line() {
        assert_eq!(Position::new(0, 40).col_in("select"), 6);
        assert_eq!(Position::new(0, 2).col_in("select"), 2);
    }

    #[test]
    fn col_snaps_to_char_boundary() {
        // 'é' occupies bytes 1..3
        assert_eq!(Position::new(0, 2).col_in("aé"), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1, 7).to_string(), "1:7");
    }
}
