use crate::*;

/// Spliced into the statement at the cursor so the cursor's identifier can be
/// recognised in the parsed tree.
pub const SENTINEL: &str = "NVIM_MYSQL_SENTINEL";

/// The namespace the qualifier in front of the cursor refers to, with aliases
/// resolved through the enclosing SELECT scopes.
///
/// `row` is relative to the statement and `col` is a byte column in that row.
/// Returns `None` when the cursor's word is unqualified or the cursor is outside
/// the statement.
pub fn resolve_namespace(
    text: &str,
    row: usize,
    col: usize,
) -> std::result::Result<Option<String>, ParseError> {
    let Some(marked) = splice_sentinel(text, row, col) else {
        return Ok(None);
    };
    let tree = parse(&marked)?;

    let mut walk = Walk::default();
    tree.walk(&mut |node| walk.visit(node));
    if let Some(namespace) = walk.scopes.close_all().pop() {
        walk.resolved = Some(namespace);
    }
    trace!("resolved namespace at {row}:{col}: {:?}", walk.resolved);
    Ok(walk.resolved)
}

/// The first table a statement names after a top-level `FROM`, `UPDATE` or `ALTER`.
pub fn first_table(text: &str) -> std::result::Result<Option<String>, ParseError> {
    let tree = parse(text)?;
    let mut introduced = false;
    for node in &tree.children {
        match (&node.kind, introduced) {
            (NodeKind::Keyword(k), _) if k.is_introducer() => introduced = true,
            (NodeKind::Identifier(ident), true) => return Ok(Some(ident.qualified_name())),
            _ => {}
        }
    }
    Ok(None)
}

/// Where completion candidates come from: the resolved qualifier when there is
/// one, else the statement's first table.
pub fn namespace_for_autocomplete(
    text: &str,
    row: usize,
    col: usize,
) -> std::result::Result<Option<String>, ParseError> {
    match resolve_namespace(text, row, col)? {
        Some(namespace) if !namespace.is_empty() => Ok(Some(namespace)),
        _ => first_table(text),
    }
}

fn splice_sentinel(text: &str, row: usize, col: usize) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let line = lines.get(row)?;
    let offset: usize = lines[..row].iter().map(|l| l.len() + 1).sum::<usize>()
        + Position::new(row, col).col_in(line);
    Some(format!("{}{SENTINEL}{}", &text[..offset], &text[offset..]))
}

#[derive(Default)]
struct Walk {
    scopes: ScopeStack,
    resolved: Option<String>,
}

impl Walk {
    fn visit(&mut self, node: &Node) {
        let is_select = node.is_keyword(Keyword::Select);
        if self.scopes.closes(node.level, is_select) {
            if let Some(namespace) = self.scopes.close() {
                self.resolved = Some(namespace);
            }
        }
        if is_select {
            self.scopes.open(node.level);
        }
        if let Some(ident) = node.identifier() {
            if let Some(alias) = ident.alias() {
                self.scopes.bind(alias, ident.qualified_name());
            }
            if let Some(qualifier) = ident.qualifier_before(SENTINEL) {
                debug!("cursor qualifier {qualifier:?} at depth {}", self.scopes.depth());
                self.scopes.set_target(qualifier);
            }
        }
    }
}

/// Byte offset where the word being completed starts in `line_segment` (the line
/// up to the cursor): just after the last `.`, else just after the last space.
pub fn find_start(line_segment: &str) -> Option<usize> {
    line_segment
        .rfind('.')
        .or_else(|| line_segment.rfind(' '))
        .map(|i| i + 1)
}
