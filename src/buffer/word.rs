use super::Position;

/// The run of non-whitespace characters touching the cursor, or an empty string.
///
/// A cursor sitting directly after a word still counts as touching it, which is
/// where the host leaves the cursor after typing a name in insert mode.
pub fn word_under_cursor<S: AsRef<str>>(buffer: &[S], at: Position) -> String {
    let Some(line) = buffer.get(at.row).map(AsRef::as_ref) else {
        return String::new();
    };
    let col = at.col_in(line);
    words(line)
        .find(|&(start, end)| start <= col && col <= end)
        .map(|(start, end)| line[start..end].to_string())
        .unwrap_or_default()
}

/// Table name written as `word`: trailing list and statement punctuation removed.
pub fn word_to_table(word: &str) -> &str {
    word.trim_end_matches([',', ';'])
}

/// Byte ranges of the whitespace-separated words of `line`.
fn words(line: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut start = None;
    line.char_indices()
        .map(Some)
        .chain(std::iter::once(None))
        .filter_map(move |item| match (item, start) {
            (Some((i, c)), None) if !c.is_whitespace() => {
                start = Some(i);
                None
            }
            (Some((i, c)), Some(s)) if c.is_whitespace() => {
                start = None;
                Some((s, i))
            }
            (None, Some(s)) => {
                start = None;
                Some((s, line.len()))
            }
            _ => None,
        })
}
