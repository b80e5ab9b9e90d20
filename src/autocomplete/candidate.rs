use crate::*;
use std::time::Duration;
use tokio::time::timeout;

/// One completion item, shaped like a host `complete-items` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub icase: bool,
    /// Column type, shown next to the word.
    pub menu: Option<String>,
}

impl Candidate {
    /// A candidate for `name`, backtick-quoted unless it is a plain identifier.
    pub fn new(name: &str, menu: Option<String>) -> Self {
        let plain = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_');
        Self {
            word: if plain {
                name.to_string()
            } else {
                format!("`{name}`")
            },
            icase: true,
            menu,
        }
    }
}

/// Candidates for the word at the host's cursor whose name starts with `base`.
///
/// When the namespace is a database its tables are offered, otherwise the
/// namespace is described as a table and its columns are offered. A failed or
/// timed out lookup is reported on the host's error channel and yields nothing.
/// Only a statement that cannot be parsed is an error.
pub async fn complete<H: Host, I: Introspect>(
    host: &H,
    introspector: &I,
    base: &str,
    limit: Duration,
) -> Result<Vec<Candidate>> {
    let base = base.trim_matches('`').to_lowercase();
    let lines = host.buffer_lines();
    let cursor = host.cursor();

    let (Some(statement), row) = statement_at(&lines, cursor.row) else {
        return Ok(Vec::new());
    };
    let Some(namespace) = namespace_for_autocomplete(&statement, row, cursor.col)? else {
        debug!("no namespace at {cursor}");
        return Ok(Vec::new());
    };
    debug!("completing '{base}' in namespace '{namespace}'");

    let names = match lookup(introspector, &namespace, limit).await {
        Ok(names) => names,
        Err(e) => {
            warn!("lookup of '{namespace}' failed: {e}");
            host.err_write(&format!("Unknown database or table: {namespace}\n"));
            return Ok(Vec::new());
        }
    };

    Ok(names
        .into_iter()
        .filter(|(name, _)| name.to_lowercase().starts_with(&base))
        .map(|(name, menu)| Candidate::new(&name, menu))
        .collect())
}

/// Tables of a database namespace, or columns (with their type) of a table namespace.
async fn lookup<I: Introspect>(
    introspector: &I,
    namespace: &str,
    limit: Duration,
) -> Result<Vec<(String, Option<String>)>> {
    let databases = timeout(limit, introspector.databases()).await??;
    if databases.iter().any(|d| d == namespace) {
        trace!("'{namespace}' is a database, completing a table");
        let tables = timeout(limit, introspector.tables(Some(namespace))).await??;
        return Ok(tables.into_iter().map(|t| (t, None)).collect());
    }

    trace!("'{namespace}' is not a database, completing a column");
    let table: TableRef = namespace.parse()?;
    let columns = timeout(limit, introspector.columns(&table)).await??;
    Ok(columns
        .into_iter()
        .map(|c| (c.name, Some(c.data_type.to_string())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;
    use rstest::rstest;

    const LIMIT: Duration = Duration::from_secs(1);

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[rstest]
    #[case("student", "student")]
    #[case("First Name", "`First Name`")]
    #[case("empty-db", "`empty-db`")]
    #[case("a1_b2", "a1_b2")]
    #[case("café", "`café`")]
    fn should_quote_when_needed(#[case] name: &str, #[case] word: &str) {
        let candidate = Candidate::new(name, None);
        assert_eq!(candidate.word, word);
        assert!(candidate.icase);
    }

    #[tokio::test]
    async fn completes_tables_of_a_database() {
        let server = school_server().await;
        let host = FakeHost::new(&["select", "from school.s"], (1, 13));
        let candidates = complete(&host, &server, "s", LIMIT).await.unwrap();
        assert_eq!(words(&candidates), ["soccer_team", "student"]);
        assert!(candidates.iter().all(|c| c.menu.is_none()));
        assert!(host.errors().is_empty());
    }

    #[tokio::test]
    async fn completes_columns_through_alias() {
        let server = school_server().await;
        let host = FakeHost::new(&["select s.", "from school.student s"], (0, 9));
        let candidates = complete(&host, &server, "", LIMIT).await.unwrap();
        assert_eq!(words(&candidates), ["id", "name", "`First Name`"]);
        assert_eq!(candidates[0].menu.as_deref(), Some("int(11)"));
    }

    #[tokio::test]
    async fn filters_case_insensitively_and_strips_backticks() {
        let server = school_server().await;
        let host = FakeHost::new(&["select s.", "from student s"], (0, 9));
        let candidates = complete(&host, &server, "`FI", LIMIT).await.unwrap();
        assert_eq!(words(&candidates), ["`First Name`"]);
    }

    #[tokio::test]
    async fn unqualified_word_uses_first_table() {
        let server = school_server().await;
        let host = FakeHost::new(&["select na from student"], (0, 9));
        let candidates = complete(&host, &server, "na", LIMIT).await.unwrap();
        assert_eq!(words(&candidates), ["name"]);
    }

    #[tokio::test]
    async fn unknown_namespace_is_reported() {
        let server = school_server().await;
        let host = FakeHost::new(&["select x.", "from nowhere x"], (0, 9));
        let candidates = complete(&host, &server, "", LIMIT).await.unwrap();
        assert!(candidates.is_empty());
        assert_eq!(host.errors(), ["Unknown database or table: nowhere\n"]);
    }

    #[tokio::test]
    async fn blank_line_or_no_namespace_yields_nothing() {
        let server = school_server().await;
        let host = FakeHost::new(&["select 1", "", "select 2"], (1, 0));
        assert!(complete(&host, &server, "", LIMIT).await.unwrap().is_empty());

        let host = FakeHost::new(&["select 1 + "], (0, 11));
        assert!(complete(&host, &server, "", LIMIT).await.unwrap().is_empty());
        assert!(host.errors().is_empty());
    }

    #[tokio::test]
    async fn parse_failure_propagates() {
        let server = school_server().await;
        let host = FakeHost::new(&["select s.", "from student s)"], (0, 9));
        assert!(matches!(
            complete(&host, &server, "", LIMIT).await,
            Err(Error::InvalidQuery(ParseError::UnbalancedParen { .. }))
        ));
    }
}
