//! Entry points behind the editor commands. Each connected tabpage owns one
//! `Session`; the host forwards commands here with itself as the `Host`.
crate::reexport!(host);
crate::reexport!(keymap);

use crate::*;
use std::{collections::HashMap, path::Path, sync::Arc};
use tokio::sync::RwLock;

const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Queries run against the table under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Describe,
    ShowIndexes,
    ShowCreateTable,
    /// First 100 rows.
    Sample,
    SelectAll,
    Count,
}

impl TableAction {
    pub fn query(&self, table: &TableRef) -> String {
        match self {
            Self::Describe => format!("describe {table}"),
            Self::ShowIndexes => format!("show indexes from {table}"),
            Self::ShowCreateTable => format!("show create table {table}"),
            Self::Sample => format!("select * from {table} limit 100"),
            Self::SelectAll => format!("select * from {table}"),
            Self::Count => format!("select count(*) from {table}"),
        }
    }
}

/// Answer to the host's two-phase `completefunc` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Byte column where the completed word starts, `-1` for none.
    Start(i64),
    Candidates(Vec<Candidate>),
}

pub struct Plugin {
    config: Config,
    tabs: RwLock<HashMap<TabId, Arc<Session>>>,
}

impl Plugin {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tabs: RwLock::default(),
        }
    }

    /// Load the configuration and start logging.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_file)?;
        init_logging(&config)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn session<H: Host>(&self, host: &H) -> Result<Arc<Session>> {
        self.tabs
            .read()
            .await
            .get(&host.current_tab())
            .cloned()
            .ok_or(Error::NotConnected)
    }

    /// Connect the current tabpage to `target`, a connection string or an alias.
    /// An existing connection of the tab is replaced.
    pub async fn connect<H: Host>(&self, host: &H, target: &str) -> Result<Arc<Session>> {
        let (connection_string, server_name) = self.config.resolve_alias(target);
        let session = Arc::new(Session::connect(connection_string, server_name).await?);

        let tab = host.current_tab();
        let replaced = self.tabs.write().await.insert(tab, session.clone());
        if let Some(old) = replaced {
            debug!("tab {tab} was already connected, replacing");
            if let Some(old) = Arc::into_inner(old) {
                old.close().await;
            }
        }
        Ok(session)
    }

    pub async fn complete<H: Host>(&self, host: &H, findstart: bool, base: &str) -> Result<Completion> {
        let Ok(session) = self.session(host).await else {
            return Ok(match findstart {
                true => Completion::Start(0),
                false => Completion::Candidates(Vec::new()),
            });
        };

        if findstart {
            let line = host.current_line();
            let segment = &line[..host.cursor().col_in(&line)];
            let start = find_start(segment).map_or(-1, |s| s as i64);
            return Ok(Completion::Start(start));
        }

        let candidates = session
            .complete(host, base, self.config.completion_timeout())
            .await?;
        Ok(Completion::Candidates(candidates))
    }

    /// Run the statement around the cursor. A blank cursor line runs nothing.
    pub async fn exec_query_under_cursor<H: Host>(&self, host: &H) -> Result {
        let session = self.session(host).await?;
        let (query, _) = statement_at(&host.buffer_lines(), host.cursor().row);
        match query {
            Some(query) => session.execute_queries(&[query], false).await,
            None => Ok(()),
        }
    }

    /// Run every statement touching rows `start_row..=end_row`, combining their
    /// results when there is more than one.
    pub async fn exec_queries_in_range<H: Host>(&self, host: &H, start_row: usize, end_row: usize) -> Result {
        let session = self.session(host).await?;
        let queries = statements_in_range(&host.buffer_lines(), start_row, end_row);
        session.execute_queries(&queries, queries.len() > 1).await
    }

    /// Run `action` on the table under the cursor. In the tree buffer that is the
    /// table row under the cursor, and database rows are ignored.
    pub async fn run_on_table_under_cursor<H: Host>(&self, host: &H, action: TableAction) -> Result {
        let session = self.session(host).await?;
        let lines = host.buffer_lines();
        let cursor = host.cursor();

        let table = if host.buffer_kind() == BufferKind::Tree {
            let line = lines.get(cursor.row).map(String::as_str).unwrap_or_default();
            if !line.starts_with(' ') {
                return Ok(());
            }
            let Some((database, _, _)) = parent_database(&lines, cursor.row) else {
                return Ok(());
            };
            TableRef::new(Some(database), line.trim())
        } else {
            word_to_table(&word_under_cursor(&lines, cursor)).parse::<TableRef>()?
        };

        if !table_exists(&session.introspector().await?, &table).await? {
            return Err(Error::TableNotFound(table.to_string()));
        }
        session.execute_queries(&[action.query(&table)], false).await
    }

    pub async fn kill_query<H: Host>(&self, host: &H) -> Result {
        self.session(host).await?.kill_query().await
    }

    /// Results buffer lines in `format` (default `table`), or `None` when the
    /// buffer already shows them.
    pub async fn show_results<H: Host>(&self, host: &H, format: Option<&str>) -> Result<Option<Vec<String>>> {
        let format = format.map(str::parse).transpose()?.unwrap_or_default();
        let session = self.session(host).await?;
        Ok(session.show_results(format, false).await)
    }

    pub async fn show_tree<H: Host>(&self, host: &H) -> Result<Vec<String>> {
        self.session(host).await?.show_tree().await
    }

    /// Open or close the database the cursor is on in the tree buffer. Returns the
    /// new tree lines and the database's row, where the cursor should go.
    pub async fn toggle_tree_database<H: Host>(&self, host: &H) -> Result<Option<(Vec<String>, usize)>> {
        let session = self.session(host).await?;
        if host.buffer_kind() != BufferKind::Tree {
            return Err(Error::WrongBuffer("tree"));
        }
        let Some((database, _, row)) = parent_database(&host.buffer_lines(), host.cursor().row) else {
            return Ok(None);
        };
        let lines = session.toggle_tree_database(&database).await?;
        Ok(Some((lines, row)))
    }

    /// Drop sessions whose tabpage the host has closed.
    pub async fn cleanup_tabs<H: Host>(&self, host: &H) {
        let open = host.open_tabs();
        let closed: Vec<Arc<Session>> = {
            let mut tabs = self.tabs.write().await;
            let gone: Vec<TabId> = tabs.keys().filter(|t| !open.contains(t)).copied().collect();
            gone.iter().filter_map(|t| tabs.remove(t)).collect()
        };
        for session in closed {
            debug!("tab of {} is no longer open, closing", session.server_name);
            if let Some(session) = Arc::into_inner(session) {
                session.close().await;
            }
        }
    }

    /// `k`, `e`, `r` or empty for the tabline. Empty for tabs that are not connected.
    pub async fn status_flag(&self, tab: TabId) -> &'static str {
        match self.tabs.read().await.get(&tab) {
            Some(session) => session.status().await.flag(),
            None => "",
        }
    }

    pub async fn server_name(&self, tab: TabId) -> Option<String> {
        self.tabs.read().await.get(&tab).map(|s| s.server_name.clone())
    }

    /// Tabline spinner frame for animation step `tick`, when the spinner is enabled.
    pub fn spinner_char(&self, tick: usize) -> Option<char> {
        self.config
            .use_spinner
            .then(|| SPINNER_CHARS[tick % SPINNER_CHARS.len()])
    }

    /// Whether opening the `target` aux window must first close the other one and
    /// reopen it afterwards, so the preferred window keeps the larger split.
    pub fn reopen_other_aux_window(&self, target: BufferKind, other_open: bool) -> bool {
        let other = match target {
            BufferKind::Results => BufferKind::Tree,
            _ => BufferKind::Results,
        };
        other_open && self.config.aux_window_pref == other.to_string()
    }

    /// Whether a window showing `kind` may be closed when it is all that is left
    /// in its tab.
    pub fn auto_closeable(&self, kind: BufferKind) -> bool {
        match kind {
            BufferKind::Tree => true,
            BufferKind::Results => self.config.auto_close_results,
            BufferKind::Query => false,
        }
    }

    /// Mappings to install in a freshly opened buffer of `kind`.
    pub fn map_commands(&self, kind: BufferKind) -> Vec<String> {
        render_map_commands_for(kind, &self.config)
    }
}
