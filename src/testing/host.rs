use crate::*;
use std::sync::Mutex;

/// Scriptable `Host` for tests.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub lines: Vec<String>,
    pub cursor: Position,
    pub kind: BufferKind,
    pub tab: TabId,
    pub tabs: Vec<TabId>,
    errors: Mutex<Vec<String>>,
}

impl FakeHost {
    /// A query buffer in tab `1` holding `lines`, cursor at zero-based `(row, col)`.
    pub fn new(lines: &[&str], (row, col): (usize, usize)) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            cursor: Position::new(row, col),
            tab: 1,
            tabs: vec![1],
            ..Default::default()
        }
    }

    pub fn in_buffer(mut self, kind: BufferKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("errors lock").clone()
    }
}

impl Host for FakeHost {
    fn buffer_lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn buffer_kind(&self) -> BufferKind {
        self.kind
    }

    fn current_tab(&self) -> TabId {
        self.tab
    }

    fn open_tabs(&self) -> Vec<TabId> {
        self.tabs.clone()
    }

    fn err_write(&self, message: &str) {
        self.errors.lock().expect("errors lock").push(message.to_string());
    }
}
