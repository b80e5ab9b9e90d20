use itertools::Itertools as _;

/// A single result value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Null,
    Text(String),
    /// Not valid UTF-8.
    Bytes(Vec<u8>),
}

impl Cell {
    /// Wrap raw column bytes, keeping them as text when they decode.
    pub fn from_bytes(bytes: Option<Vec<u8>>) -> Self {
        match bytes {
            None => Self::Null,
            Some(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Self::Text(text),
                Err(e) => Self::Bytes(e.into_bytes()),
            },
        }
    }

    /// The value as stored, newlines and all.
    pub fn raw(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Text(text) => text.clone(),
            Self::Bytes(bytes) => hex(bytes),
        }
    }

    /// The value as shown in a grid: one line, NULL spelled out.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.lines().join(" "),
            other => other.raw(),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

fn hex(bytes: &[u8]) -> String {
    format!("0x{}", bytes.iter().map(|b| format!("{b:02x}")).join(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::Null, "NULL")]
    #[case(Cell::from("plain"), "plain")]
    #[case(Cell::from("two\nlines"), "two lines")]
    #[case(Cell::from("crlf\r\nend"), "crlf end")]
    #[case(Cell::Bytes(vec![0xff, 0x00, 0x1a]), "0xff001a")]
    fn should_display(#[case] cell: Cell, #[case] shown: &str) {
        assert_eq!(cell.display(), shown);
    }

    #[test]
    fn bytes_stay_text_when_they_decode() {
        assert_eq!(Cell::from_bytes(Some(b"abc".to_vec())), Cell::from("abc"));
        assert_eq!(Cell::from_bytes(Some(vec![0xc3])), Cell::Bytes(vec![0xc3]));
        assert_eq!(Cell::from_bytes(None), Cell::Null);
    }
}
