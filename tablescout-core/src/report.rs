//! Report file path resolution, rooted at the repository top.
//!
//! Every utility writes into one Markdown file per `(schema, table)` pair at
//! the repository root. Both names pass the identifier allow-list before they
//! become part of a file name, and the resolved path is re-checked against
//! the canonical root.

use std::path::{Path, PathBuf};

use crate::error::{Result, TableScoutError};
use crate::identifier::{IdentifierKind, sanitize_identifier};

/// Resolver for per-table exploration report paths.
///
/// Constructed with an explicit root for tests and embedding;
/// [`ReportPaths::discover`] is the default the CLI uses.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    root: PathBuf,
}

impl ReportPaths {
    /// Creates a resolver rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks upward from the current working directory until a directory
    /// containing `.git` is found, falling back to the working directory
    /// itself.
    pub fn discover() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(discover_root(&cwd))
    }

    /// The report root this resolver writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the exploration report path for a `(schema, table)` pair.
    ///
    /// Sanitizes both names, builds `{schema}_{table}_exploration.md`, and
    /// verifies the joined path is still prefixed by the canonical root.
    ///
    /// # Errors
    /// Returns an identifier error for unsafe names, an I/O error when the
    /// root cannot be canonicalized, and a security error if the resolved
    /// path would land outside the root.
    pub fn exploration_file(&self, schema: &str, table: &str) -> Result<PathBuf> {
        let schema = sanitize_identifier(schema, IdentifierKind::Schema)?;
        let table = sanitize_identifier(table, IdentifierKind::Table)?;

        let root = self.root.canonicalize().map_err(|e| {
            TableScoutError::io(
                format!("cannot resolve report root {}", self.root.display()),
                e,
            )
        })?;
        let path = root.join(format!("{schema}_{table}_exploration.md"));

        // Redundant with the sanitizer, but keeps the write inside the root
        // if the allow-list is ever relaxed.
        if !path.starts_with(&root) {
            return Err(TableScoutError::security(
                "output path would be outside the repository root",
            ));
        }

        Ok(path)
    }
}

fn discover_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(".git").is_dir() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
