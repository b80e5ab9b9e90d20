//! Read-only views over a host buffer snapshot: cursor positions, statement
//! boundaries and the word under the cursor.
crate::reexport!(position);
crate::reexport!(segment);
crate::reexport!(word);

/// Whitespace-only lines separate statements just like empty ones.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
