//! Path parsing: classify and namespace-qualify raw symbol input.

use crate::config::DocsConfig;
use crate::registry::Entry;

/// What a symbol path refers to, derived from its member separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A class, module, or constant path with no member separator.
    Object,
    /// A `Namespace#member` path.
    InstanceMethod,
    /// A `Namespace.member` path.
    ClassMethod,
}

impl SymbolKind {
    /// The member separator character for this kind, if any.
    pub fn separator(self) -> Option<char> {
        match self {
            SymbolKind::Object => None,
            SymbolKind::InstanceMethod => Some('#'),
            SymbolKind::ClassMethod => Some('.'),
        }
    }

    /// The docs-page anchor suffix for this kind, if any.
    pub fn anchor_suffix(self) -> Option<&'static str> {
        match self {
            SymbolKind::Object => None,
            SymbolKind::InstanceMethod => Some("-instance_method"),
            SymbolKind::ClassMethod => Some("-class_method"),
        }
    }

    /// Classifies a resolved registry entry by its recorded separator.
    pub fn of_entry(entry: &Entry) -> SymbolKind {
        match entry.separator {
            Some('#') => SymbolKind::InstanceMethod,
            Some('.') => SymbolKind::ClassMethod,
            _ => SymbolKind::Object,
        }
    }
}

/// A parsed, classified, namespace-qualified symbol reference.
///
/// Created once per incoming request and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRef {
    /// The trimmed input as the user supplied it.
    pub raw: String,
    /// The input with the root namespace prefix guaranteed present.
    pub qualified: String,
    /// Classification of the reference.
    pub kind: SymbolKind,
}

impl SymbolRef {
    /// Parses raw user input into a symbol reference.
    ///
    /// Returns `None` for empty input ("no path supplied"); that outcome
    /// is not an error and callers answer it with a fallback reply.
    /// Existence checks belong to the resolver, not here.
    pub fn parse(raw: &str, config: &DocsConfig) -> Option<SymbolRef> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let kind = classify(raw);

        let prefix = config.namespace_prefix();
        let qualified = if raw.starts_with(&prefix) {
            raw.to_string()
        } else {
            format!("{prefix}{raw}")
        };

        Some(SymbolRef {
            raw: raw.to_string(),
            qualified,
            kind,
        })
    }
}

/// Classifies a path by its member separator. The instance-method pattern
/// is tested before the class-method pattern, so `#` wins when both could
/// match; anything else is an object path.
fn classify(path: &str) -> SymbolKind {
    if matches_member(path, '#') {
        SymbolKind::InstanceMethod
    } else if matches_member(path, '.') {
        SymbolKind::ClassMethod
    } else {
        SymbolKind::Object
    }
}

/// Whether `path` looks like `NAME<sep>NAME`: a letter-led receiver of at
/// least two characters, the separator, and a non-empty member name.
fn matches_member(path: &str, separator: char) -> bool {
    let Some(idx) = path.find(separator) else {
        return false;
    };
    idx >= 2
        && idx + separator.len_utf8() < path.len()
        && path.chars().next().is_some_and(char::is_alphabetic)
}
