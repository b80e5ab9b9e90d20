//! Database/table browser shown in the tree buffer.
use crate::*;
use std::collections::BTreeMap;

const EXPANDED: char = '▾';
const COLLAPSED: char = '▸';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeEntry {
    pub expanded: bool,
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    databases: BTreeMap<String, TreeEntry>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync with the server: vanished databases go, new ones arrive collapsed and
    /// expanded ones get their table list reloaded.
    pub async fn refresh<I: Introspect>(&mut self, introspector: &I) -> Result {
        let listed = introspector.databases().await?;
        self.databases.retain(|name, _| listed.contains(name));
        for name in listed {
            self.databases.entry(name).or_default();
        }
        for (name, entry) in self.databases.iter_mut().filter(|(_, e)| e.expanded) {
            entry.tables = introspector.tables(Some(name)).await?;
        }
        debug!("tree refreshed: {} databases", self.databases.len());
        Ok(())
    }

    pub fn open(&mut self, database: &str) {
        self.set_expanded(database, true);
    }

    pub fn close(&mut self, database: &str) {
        self.set_expanded(database, false);
    }

    pub fn toggle(&mut self, database: &str) {
        let expanded = self.is_expanded(database);
        self.set_expanded(database, !expanded);
    }

    pub fn is_expanded(&self, database: &str) -> bool {
        self.databases.get(database).is_some_and(|e| e.expanded)
    }

    fn set_expanded(&mut self, database: &str, expanded: bool) {
        match self.databases.get_mut(database) {
            Some(entry) => entry.expanded = expanded,
            None => warn!("'{database}' is not in the tree"),
        }
    }

    /// Tree buffer lines, databases sorted, tables of expanded ones indented below.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (name, entry) in &self.databases {
            let marker = if entry.expanded { EXPANDED } else { COLLAPSED };
            lines.push(format!("{name} {marker}"));
            if entry.expanded {
                lines.extend(entry.tables.iter().map(|t| format!("  {t}")));
            }
        }
        lines
    }
}

/// The database a tree row belongs to: `(database, expanded, row_of_database)`.
/// A database row is its own parent.
pub fn parent_database<S: AsRef<str>>(lines: &[S], row: usize) -> Option<(String, bool, usize)> {
    let end = row.checked_add(1)?.min(lines.len());
    lines[..end].iter().enumerate().rev().find_map(|(i, line)| {
        let line = line.as_ref();
        let marker = line.chars().last()?;
        let expanded = match marker {
            EXPANDED => true,
            COLLAPSED => false,
            _ => return None,
        };
        let name = line[..line.len() - marker.len_utf8()].trim();
        Some((name.to_string(), expanded, i))
    })
}
