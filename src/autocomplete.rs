//! Schema-aware completion.
//!
//! Completion runs in two calls, the way the host's `completefunc` protocol works:
//! `find_start` locates where the word being completed begins, then `complete`
//! works out which namespace (a database or a table) the word lives in and lists
//! the matching names from it.
//!
//! The namespace comes from `resolve_namespace`: the cursor is marked inside the
//! statement text, the statement is parsed into a `Node` tree and the tree is
//! walked with a stack of SELECT scopes that track table aliases. When the word
//! is not qualified, the first table the statement introduces is used instead.
crate::reexport!(scope);
crate::reexport!(resolver);
crate::reexport!(candidate);
mod resolver_tests;
