//! Statement boundaries. Statements are runs of non-blank lines; semicolons play
//! no part in splitting.
use super::is_blank;
use itertools::Itertools as _;

/// The statement containing `row`, joined with `\n`, and the index of `row`
/// within it. A blank (or out of range) row has no statement: `(None, 0)`.
pub fn statement_at<S: AsRef<str>>(buffer: &[S], row: usize) -> (Option<String>, usize) {
    match buffer.get(row) {
        Some(line) if !is_blank(line.as_ref()) => {}
        _ => return (None, 0),
    }
    let above = run_above(buffer, row);
    let below = run_below(buffer, row);
    let text = buffer[row - above..=row + below]
        .iter()
        .map(AsRef::as_ref)
        .join("\n");
    (Some(text), above)
}

/// All statements touching the rows `start_row..=end_row`, in document order.
///
/// A statement that starts above `start_row` or continues below `end_row` is
/// included in full. Blank boundary rows are not extended past.
pub fn statements_in_range<S: AsRef<str>>(
    buffer: &[S],
    start_row: usize,
    end_row: usize,
) -> Vec<String> {
    if buffer.is_empty() {
        return Vec::new();
    }
    let end_row = end_row.min(buffer.len() - 1);
    if start_row > end_row {
        return Vec::new();
    }

    let first = if is_blank(buffer[start_row].as_ref()) {
        start_row
    } else {
        start_row - run_above(buffer, start_row)
    };
    let last = if is_blank(buffer[end_row].as_ref()) {
        end_row
    } else {
        end_row + run_below(buffer, end_row)
    };

    let chunks = buffer[first..=last]
        .iter()
        .map(AsRef::as_ref)
        .chunk_by(|line| is_blank(line));
    (&chunks)
        .into_iter()
        .filter(|(blank, _)| !blank)
        .map(|(_, mut lines)| lines.join("\n"))
        .collect()
}

/// Number of consecutive non-blank lines directly above `row`.
fn run_above<S: AsRef<str>>(buffer: &[S], row: usize) -> usize {
    buffer[..row]
        .iter()
        .rev()
        .take_while(|line| !is_blank(line.as_ref()))
        .count()
}

/// Number of consecutive non-blank lines directly below `row`.
fn run_below<S: AsRef<str>>(buffer: &[S], row: usize) -> usize {
    buffer[row + 1..]
        .iter()
        .take_while(|line| !is_blank(line.as_ref()))
        .count()
}
