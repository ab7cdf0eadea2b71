//! Error types for the dexdoc lookup engine.
//!
//! This module defines all error types used throughout the crate,
//! organized by subsystem: Registry, Resolve, and Render.
//!
//! Every resolve/render error is recoverable at the request boundary:
//! callers substitute a fallback reply and keep serving requests.

use thiserror::Error;

/// Errors raised while loading a registry snapshot.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The snapshot file could not be read.
    #[error("failed to read registry snapshot '{path}': {source}")]
    Read {
        /// Path of the snapshot file.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not a valid entry dump.
    #[error("failed to parse registry snapshot '{path}': {source}")]
    Parse {
        /// Path of the snapshot file.
        path: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while resolving a symbol reference against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The symbol is absent at every resolution stage.
    #[error("docs for `{path}` not found")]
    NotFound {
        /// The qualified path that was looked up.
        path: String,
    },

    /// An alias entry whose canonical target is missing, or whose target
    /// is itself an alias (chains are capped at one hop).
    #[error("alias `{path}` does not resolve to a canonical entry")]
    AliasUnresolvable {
        /// Path of the alias entry that failed to chase.
        path: String,
    },
}

/// Errors raised while rendering a resolved entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Raw source can only be rendered for method entries.
    #[error("`{path}` is not a method, can only render method source")]
    UnsupportedTarget {
        /// Path of the entry that was requested.
        path: String,
    },

    /// The entry is a method but the registry recorded no source for it.
    #[error("no source recorded for `{path}`")]
    SourceMissing {
        /// Path of the method entry.
        path: String,
    },

    /// The method source exceeds the chat-friendly line limit.
    #[error("method source too long ({lines} / {limit})")]
    SourceTooLong {
        /// Line count of the recorded source.
        lines: usize,
        /// The configured maximum.
        limit: usize,
    },
}

/// A unified error type for the entire crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Registry snapshot error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Symbol resolution error.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Reply rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller should answer with a fallback reply instead of
    /// treating this as a programming or infrastructure failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Resolve(_) | Error::Render(_))
    }
}

/// A specialized Result type for dexdoc operations.
pub type Result<T> = std::result::Result<T, Error>;
