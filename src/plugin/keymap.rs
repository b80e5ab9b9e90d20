use crate::*;
use std::collections::HashMap;

/// A buffer-local mapping installed for a plugin command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    /// Command line run by the mapping, arguments included.
    pub command: &'static str,
    pub buffers: &'static [BufferKind],
    pub mode: char,
    pub key: &'static str,
}

const QUERY: &[BufferKind] = &[BufferKind::Query];
const QUERY_TREE: &[BufferKind] = &[BufferKind::Query, BufferKind::Tree];
const ALL: &[BufferKind] = &[BufferKind::Query, BufferKind::Results, BufferKind::Tree];
const RESULTS: &[BufferKind] = &[BufferKind::Results];
const TREE: &[BufferKind] = &[BufferKind::Tree];

const fn map(command: &'static str, buffers: &'static [BufferKind], mode: char, key: &'static str) -> Keymap {
    Keymap {
        command,
        buffers,
        mode,
        key,
    }
}

pub const KEYMAPS: &[Keymap] = &[
    map("MySQLExecQueryUnderCursor", QUERY, 'n', "<leader>x"),
    map("MySQLExecQueriesInRange", QUERY, 'v', "<leader>x"),
    map("MySQLCountTableUnderCursor", QUERY_TREE, 'n', "<leader>c"),
    map("MySQLShowCreateTableFromTableUnderCursor", QUERY_TREE, 'n', "<leader>C"),
    map("MySQLDescribeTableUnderCursor", QUERY_TREE, 'n', "<leader>d"),
    map("MySQLShowIndexesFromTableUnderCursor", QUERY_TREE, 'n', "<leader>i"),
    map("MySQLSampleTableUnderCursor", QUERY_TREE, 'n', "<leader>s"),
    map("MySQLSelectAllFromTableUnderCursor", QUERY_TREE, 'n', "<leader>S"),
    map("MySQLShowResults", ALL, 'n', "R"),
    map("MySQLShowTree", ALL, 'n', "T"),
    map("MySQLKillQuery", ALL, 'n', "K"),
    map("MySQLShowResults csv", RESULTS, 'n', "<leader>c"),
    map("MySQLShowResults raw_column", RESULTS, 'n', "<leader>1"),
    map("MySQLShowResults table", RESULTS, 'n', "<leader>t"),
    map("MySQLShowResults vertical", RESULTS, 'n', "<leader>G"),
    map("MySQLTreeToggleDatabase", TREE, 'n', "<space>"),
];

impl Keymap {
    /// The `:map` command installing this mapping, with the key taken from
    /// `overrides` when the user remapped the command.
    pub fn render(&self, overrides: Option<&HashMap<String, String>>) -> String {
        let key = overrides
            .and_then(|o| o.get(self.command))
            .map_or(self.key, String::as_str);
        format!("{}noremap <buffer> {key} :{}<cr>", self.mode, self.command)
    }
}

pub fn keymap(command: &str) -> Option<&'static Keymap> {
    KEYMAPS.iter().find(|k| k.command == command)
}

/// Every mapping to install in a buffer of `kind`.
pub fn render_map_commands_for(kind: BufferKind, config: &Config) -> Vec<String> {
    KEYMAPS
        .iter()
        .filter(|k| k.buffers.contains(&kind))
        .map(|k| k.render(config.keymaps.as_ref()))
        .collect()
}
