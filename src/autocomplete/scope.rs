use std::collections::HashMap;

/// One SELECT's view of the table aliases, plus the qualifier written in front of
/// the cursor if the cursor sits in this SELECT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub level: usize,
    pub aliases: HashMap<String, String>,
    pub target: Option<String>,
}

impl Scope {
    pub fn new(level: usize) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// The target with aliases applied: a bound alias yields the table it names,
    /// anything else is taken literally.
    pub fn resolve(&self) -> Option<String> {
        let target = self.target.as_ref()?;
        Some(self.aliases.get(target).unwrap_or(target).clone())
    }
}

/// Scopes from the statement root (level 0) to the innermost SELECT.
///
/// The root is held apart from the nested scopes so it can never be popped while
/// walking a statement.
#[derive(Debug, Default)]
pub struct ScopeStack {
    root: Scope,
    nested: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> &Scope {
        self.nested.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Scope {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of open scopes, the root included.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// A node at `level` ends the innermost scope when it is a SELECT at that
    /// scope's own level (the next arm of a UNION) or when it sits shallower.
    ///
    /// NOTE: only depth is compared. A shallower node that happens to come after a
    /// subquery without belonging to the enclosing SELECT still closes it.
    pub fn closes(&self, level: usize, is_select: bool) -> bool {
        let top = self.top().level;
        (is_select && level == top) || level < top
    }

    /// Pop the innermost scope and resolve its target.
    pub fn close(&mut self) -> Option<String> {
        self.nested.pop()?.resolve()
    }

    /// Open a scope for a SELECT at `level`. A strictly deeper SELECT sees the
    /// enclosing aliases; a sibling starts empty.
    pub fn open(&mut self, level: usize) {
        let top = self.top();
        let aliases = if level > top.level {
            top.aliases.clone()
        } else {
            HashMap::new()
        };
        self.nested.push(Scope {
            level,
            aliases,
            target: None,
        });
    }

    /// Bind `alias` in the innermost scope, shadowing any inherited binding.
    pub fn bind(&mut self, alias: impl Into<String>, name: impl Into<String>) {
        self.top_mut().aliases.insert(alias.into(), name.into());
    }

    pub fn set_target(&mut self, target: Option<String>) {
        self.top_mut().target = target;
    }

    /// Close every scope, innermost first, and return the resolved targets in the
    /// order they were closed.
    pub fn close_all(self) -> Vec<String> {
        self.nested
            .into_iter()
            .rev()
            .chain(std::iter::once(self.root))
            .filter_map(|scope| scope.resolve())
            .collect()
    }
}
