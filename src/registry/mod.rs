//! Registry collaborator interface and the snapshot implementation.
//!
//! The registry is the pre-built, read-only index of documented symbols.
//! The resolution pipeline only ever consumes it through the [`Registry`]
//! trait, so any index source can back it; [`Snapshot`] is the concrete
//! JSON-backed implementation used by the CLI and the test suite.
//!
//! # Architecture
//!
//! The registry module is organized into:
//! - `entry`: The documented-symbol record and its metadata types
//! - `snapshot`: An immutable, wholesale-reloadable `Registry` impl
//!
//! A snapshot is loaded once and treated as immutable for its lifetime.
//! Refreshing is explicit and wholesale: load a new snapshot and swap it
//! at the call site, never mutate one in place.

pub mod entry;
pub mod snapshot;

// Re-export commonly used types
pub use entry::{Entry, SourceLocation, Tag};
pub use snapshot::Snapshot;

use crate::error::RegistryError;

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Read-only access to the documentation index.
///
/// Implementations must be consistent across calls: the index is an
/// immutable snapshot, so repeated lookups with the same arguments return
/// the same entries. `methods_of` preserves declaration order within the
/// namespace, which the resolver's first-match tie-break depends on.
pub trait Registry {
    /// Looks up an entry by its exact qualified path.
    fn lookup_exact(&self, path: &str) -> Option<&Entry>;

    /// All method entries of a namespace, in declaration order.
    fn methods_of(&self, namespace: &str) -> Vec<&Entry>;
}
