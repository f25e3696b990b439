//! Error types for castpath operations.
//!
//! Two outcomes are deliberately *not* errors: a name that resolves to no
//! person (`Ok(None)` from the resolver) and a pair of nodes with no
//! connection (`None` from the search). Everything here aborts the current
//! query.

use crate::node::NodeKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The store could not be opened
    #[error("store unavailable at {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A store query failed
    #[error("store query failed: {0}")]
    Store(#[from] rusqlite::Error),

    /// Reverse lookup of an identifier that came from the graph missed
    #[error("{kind} {id} not found in store")]
    NotFound { kind: NodeKind, id: i64 },

    /// Predecessor walk broke an internal invariant
    #[error("corrupt path state: {0}")]
    CorruptState(String),

    /// Invalid store configuration
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot header is not one this build understands
    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl Error {
    /// Returns `true` for failures that mean the store itself is unusable.
    #[must_use]
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. } | Self::Store(_))
    }
}
