//! dexdoc: documentation symbol lookup and reply rendering
//!
//! A lookup engine that resolves loosely-formatted symbol references
//! (class names, `Class#instance_method`, `Class.class_method`) against a
//! pre-built documentation index and renders chat-ready replies with
//! permalink metadata.
//!
//! # Overview
//!
//! This library provides:
//! - A path parser that classifies and namespace-qualifies raw input
//! - A multi-stage resolver with fallback namespace search and one-hop
//!   alias chasing
//! - A deterministic renderer producing markdown content plus a generic
//!   embed payload any chat transport can map onto its own schema
//!
//! # Architecture
//!
//! ```text
//! raw text ──► SymbolRef::parse ──► resolve ──► chase ──► render ──► Reply
//!                                     │           │
//!                                     └───────────┴──► Registry (immutable
//!                                                      snapshot, external)
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types for the entire crate
//! - [`config`] - Library/host configuration consumed by the pipeline
//! - [`registry`] - Registry trait and the JSON-backed snapshot
//! - [`docs`] - The parse/resolve/render pipeline
//!
//! # Example
//!
//! ```ignore
//! use dexdoc::config::DocsConfig;
//! use dexdoc::registry::Snapshot;
//!
//! let config = DocsConfig::default();
//! let registry = Snapshot::load("registry.json".as_ref())?;
//!
//! if let Some(reply) = dexdoc::docs::lookup("Bot#run", &registry, &config)? {
//!     println!("{}", reply.content);
//! }
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod docs;
pub mod error;
pub mod registry;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
