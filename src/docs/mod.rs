//! The parse/resolve/render pipeline.
//!
//! # Architecture
//!
//! The docs module is organized into:
//! - `path`: raw-input parsing and classification
//! - `permalink`: documentation-host URL schemes
//! - `resolve`: multi-stage registry lookup and alias chasing
//! - `message`: chat-markdown composition
//! - `render`: reply and embed construction
//! - `fallback`: lighthearted replies for recoverable failures
//!
//! The [`lookup`] and [`source`] functions run the whole pipeline for a
//! single request. Every stage is pure and read-only over the registry
//! snapshot, so the pipeline is freely callable from concurrent request
//! handlers with no locking.

pub mod fallback;
pub mod message;
pub mod path;
pub mod permalink;
pub mod render;
pub mod resolve;

// Re-export the request-facing types
pub use path::{SymbolKind, SymbolRef};
pub use render::{Embed, EmbedField, Reply};

use tracing::info;

use crate::config::DocsConfig;
use crate::registry::Registry;
use crate::Result;

/// Resolves raw user input and renders its documentation reply.
///
/// Returns `Ok(None)` when the input is empty ("no path supplied");
/// callers answer that the same way they answer a lookup miss.
///
/// # Errors
///
/// Recoverable [`crate::error::ResolveError`]s when the symbol is
/// missing or its alias cannot be chased.
pub fn lookup(raw: &str, registry: &dyn Registry, config: &DocsConfig) -> Result<Option<Reply>> {
    let Some(reference) = SymbolRef::parse(raw, config) else {
        info!("no path supplied");
        return Ok(None);
    };

    let entry = resolve::resolve(&reference, registry)?;
    let (canonical, alias_name) = resolve::chase(entry, registry)?;

    info!(
        path = %canonical.path,
        kind = ?reference.kind,
        summary = %canonical.summary(),
        "rendering documentation reply"
    );

    Ok(Some(render::render(canonical, alias_name, config)))
}

/// Resolves raw user input and renders the method's source.
///
/// Returns `Ok(None)` for empty input, like [`lookup`].
///
/// # Errors
///
/// Recoverable resolve errors, plus [`crate::error::RenderError`] when
/// the entry is not a method, has no recorded source, or its source
/// exceeds the chat-friendly length limit.
pub fn source(raw: &str, registry: &dyn Registry, config: &DocsConfig) -> Result<Option<Reply>> {
    let Some(reference) = SymbolRef::parse(raw, config) else {
        info!("no path supplied");
        return Ok(None);
    };

    let entry = resolve::resolve(&reference, registry)?;
    let (canonical, _alias_name) = resolve::chase(entry, registry)?;

    info!(path = %canonical.path, "rendering method source");

    Ok(Some(render::render_source(canonical, config)?))
}
