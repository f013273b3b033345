//! Structured query filters rendered to the backend's search grammar.
//!
//! Filters are built as values and only turned into text at the call
//! boundary, so identifiers and content types are always quoted the same way.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content type the backend uses to mark folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Which side of the folder/file split a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Only folders.
    Folders,
    /// Everything that is not a folder.
    Files,
}

/// A list query: parent scope, content-type predicates, and the
/// not-trashed predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Restrict to direct children of this folder.
    pub parent: Option<String>,
    /// Folder or file selection.
    pub kind: EntityKind,
    /// Content-type allow-list; empty means no restriction.
    pub mime_types: Vec<String>,
}

impl QueryFilter {
    /// Every non-trashed folder visible to the caller, anywhere in the store.
    pub fn all_folders() -> Self {
        Self {
            parent: None,
            kind: EntityKind::Folders,
            mime_types: Vec::new(),
        }
    }

    /// Direct child folders of `parent`.
    pub fn child_folders(parent: impl Into<String>) -> Self {
        Self {
            parent: Some(parent.into()),
            kind: EntityKind::Folders,
            mime_types: Vec::new(),
        }
    }

    /// Files directly inside `parent`, optionally narrowed to `mime_types`.
    pub fn child_files(parent: impl Into<String>, mime_types: &[String]) -> Self {
        Self {
            parent: Some(parent.into()),
            kind: EntityKind::Files,
            mime_types: mime_types.to_vec(),
        }
    }

    /// Render the filter into the backend's textual grammar.
    pub fn render(&self) -> String {
        let mut terms = Vec::with_capacity(4);

        if let Some(parent) = &self.parent {
            terms.push(format!("{} in parents", quote(parent)));
        }

        let op = match self.kind {
            EntityKind::Folders => "=",
            EntityKind::Files => "!=",
        };
        terms.push(format!("mimeType {op} {}", quote(FOLDER_MIME_TYPE)));

        if !self.mime_types.is_empty() {
            let alternatives = self
                .mime_types
                .iter()
                .map(|m| format!("mimeType = {}", quote(m)))
                .collect::<Vec<_>>()
                .join(" or ");
            terms.push(format!("({alternatives})"));
        }

        terms.push("trashed = false".to_string());
        terms.join(" and ")
    }
}

impl fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Wrap a value in single quotes, escaping backslashes and embedded quotes.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
