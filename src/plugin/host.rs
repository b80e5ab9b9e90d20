use crate::*;

/// Host-side identifier of a tabpage.
pub type TabId = u64;

/// What the current buffer is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum BufferKind {
    #[default]
    #[display("query")]
    Query,
    #[display("results")]
    Results,
    #[display("tree")]
    Tree,
}

/// The editor, as far as the plugin needs to see it.
pub trait Host {
    /// Lines of the current buffer.
    fn buffer_lines(&self) -> Vec<String>;

    /// Cursor in the current window, zero-based.
    fn cursor(&self) -> Position;

    fn buffer_kind(&self) -> BufferKind;

    fn current_tab(&self) -> TabId;

    /// Every tabpage still open.
    fn open_tabs(&self) -> Vec<TabId>;

    /// Show `message` on the host's error channel.
    fn err_write(&self, message: &str);

    fn current_line(&self) -> String {
        self.buffer_lines()
            .into_iter()
            .nth(self.cursor().row)
            .unwrap_or_default()
    }
}
