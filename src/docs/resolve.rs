//! Symbol resolution: multi-stage lookup plus one-hop alias chasing.
//!
//! Resolution is pure and synchronous: the registry is an in-memory
//! snapshot, there are no retries and no I/O, and nothing here caches or
//! mutates shared state, so these functions are freely callable from
//! concurrent request handlers.

use tracing::debug;

use super::path::{SymbolKind, SymbolRef};
use crate::error::ResolveError;
use crate::registry::{Entry, Registry};

/// Resolves a symbol reference to a registry entry.
///
/// Stages, in order:
/// 1. Exact lookup of the qualified path.
/// 2. For member references, split off the trailing name and scan the
///    parent namespace's methods in declaration order; the first entry
///    whose name and separator both match wins. Overloaded names sharing
///    a separator are not disambiguated further.
///
/// # Errors
///
/// [`ResolveError::NotFound`] with the qualified path when every stage
/// misses.
pub fn resolve<'r>(
    reference: &SymbolRef,
    registry: &'r dyn Registry,
) -> Result<&'r Entry, ResolveError> {
    if let Some(entry) = registry.lookup_exact(&reference.qualified) {
        debug!(path = %reference.qualified, "exact lookup hit");
        return Ok(entry);
    }

    if reference.kind != SymbolKind::Object
        && let Some((namespace, separator, name)) = split_member(&reference.qualified)
        && registry.lookup_exact(namespace).is_some()
    {
        debug!(%namespace, %name, "scanning parent namespace");
        if let Some(entry) = registry
            .methods_of(namespace)
            .into_iter()
            .find(|method| method.name == name && method.separator == Some(separator))
        {
            return Ok(entry);
        }
    }

    Err(ResolveError::NotFound {
        path: reference.qualified.clone(),
    })
}

/// Redirects an alias entry to its canonical target.
///
/// Non-alias entries pass through unchanged with no display name. For an
/// alias, the canonical path is the enclosing namespace joined with the
/// recorded target name; the returned display name is the alias's own
/// short name, so renderers can annotate `alias: send` while showing the
/// canonical documentation.
///
/// # Errors
///
/// [`ResolveError::AliasUnresolvable`] when the canonical target is
/// missing, when the alias record is incomplete, or when the target is
/// itself an alias; indirection is capped at one hop.
pub fn chase<'r>(
    entry: &'r Entry,
    registry: &'r dyn Registry,
) -> Result<(&'r Entry, Option<&'r str>), ResolveError> {
    if !entry.is_alias {
        return Ok((entry, None));
    }

    let unresolvable = || ResolveError::AliasUnresolvable {
        path: entry.path.clone(),
    };

    let canonical_path = canonical_path_of(entry).ok_or_else(unresolvable)?;
    debug!(alias = %entry.path, canonical = %canonical_path, "chasing alias");

    match registry.lookup_exact(&canonical_path) {
        Some(canonical) if !canonical.is_alias => Ok((canonical, Some(entry.name.as_str()))),
        _ => Err(unresolvable()),
    }
}

/// Joins an alias entry's namespace, separator, and target name into the
/// canonical path. `None` when the record is missing any of the three.
fn canonical_path_of(entry: &Entry) -> Option<String> {
    let namespace = entry.namespace_path.as_deref()?;
    let separator = entry.separator?;
    let target = entry.alias_source_name.as_deref()?;
    Some(format!("{namespace}{separator}{target}"))
}

/// Splits a qualified path into (namespace, separator, name) at the last
/// member separator, giving the longest leading namespace.
fn split_member(path: &str) -> Option<(&str, char, &str)> {
    let idx = path.rfind(['#', '.'])?;
    let separator = path[idx..].chars().next()?;
    let namespace = &path[..idx];
    let name = &path[idx + separator.len_utf8()..];
    (!namespace.is_empty() && !name.is_empty()).then_some((namespace, separator, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsConfig;
    use crate::registry::Snapshot;

    fn class(path: &str) -> Entry {
        Entry {
            path: path.to_string(),
            entry_type: "class".to_string(),
            visibility: "public".to_string(),
            ..Entry::default()
        }
    }

    fn method(namespace: &str, name: &str, separator: char) -> Entry {
        Entry {
            path: format!("{namespace}{separator}{name}"),
            name: name.to_string(),
            entry_type: "method".to_string(),
            visibility: "public".to_string(),
            namespace_path: Some(namespace.to_string()),
            separator: Some(separator),
            ..Entry::default()
        }
    }

    fn parse(raw: &str) -> SymbolRef {
        SymbolRef::parse(raw, &DocsConfig::default()).unwrap()
    }

    #[test]
    fn test_exact_lookup_identity() {
        let snapshot = Snapshot::from_entries(vec![
            class("Discordrb::Bot"),
            method("Discordrb::Bot", "run", '#'),
        ]);

        let entry = resolve(&parse("Bot#run"), &snapshot).unwrap();
        assert_eq!(entry.path, "Discordrb::Bot#run");
    }

    #[test]
    fn test_prefix_idempotence() {
        let snapshot = Snapshot::from_entries(vec![class("Discordrb::Bot")]);

        let bare = resolve(&parse("Bot"), &snapshot).unwrap();
        let qualified = resolve(&parse("Discordrb::Bot"), &snapshot).unwrap();
        assert_eq!(bare.path, qualified.path);
    }

    #[test]
    fn test_namespace_scan_fallback() {
        // `run` is inherited, so the exact path the user asks under is
        // absent; the parent scan still finds it.
        let mut inherited = method("Discordrb::Gateway", "run", '#');
        inherited.docstring = "Runs the loop.".to_string();
        // Member is indexed under Bot even though its own path differs.
        inherited.path = "Discordrb::Gateway#run".to_string();
        inherited.namespace_path = Some("Discordrb::Bot".to_string());

        let snapshot = Snapshot::from_entries(vec![class("Discordrb::Bot"), inherited]);

        let entry = resolve(&parse("Bot#run"), &snapshot).unwrap();
        assert_eq!(entry.docstring, "Runs the loop.");
    }

    #[test]
    fn test_namespace_scan_respects_separator() {
        let snapshot = Snapshot::from_entries(vec![
            class("Discordrb::Bot"),
            method("Discordrb::Bot", "run", '.'),
        ]);

        // Only the class method `Bot.run` exists; the scan must reject
        // it for the instance-method query on separator mismatch.
        let err = resolve(&parse("Bot#run"), &snapshot).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                path: "Discordrb::Bot#run".to_string()
            }
        );
    }

    #[test]
    fn test_first_match_wins_for_duplicates() {
        let mut first = method("Discordrb::Bot", "send", '#');
        first.path = "Discordrb::Bot#send".to_string();
        first.docstring = "first declaration".to_string();
        let mut second = method("Discordrb::Bot", "send", '#');
        second.path = "Discordrb::Bot#send(overload)".to_string();
        second.docstring = "second declaration".to_string();

        let snapshot = Snapshot::from_entries(vec![class("Discordrb::Bot"), second, first]);

        // Exact lookup hits the canonical path; remove it to force the
        // scan and check declaration order.
        let entry = resolve(&parse("Bot#send"), &snapshot).unwrap();
        assert_eq!(entry.docstring, "first declaration");

        let scan_only = Snapshot::from_entries(vec![
            class("Discordrb::Bot"),
            {
                let mut dup = method("Discordrb::Bot", "send", '#');
                dup.path = "Discordrb::Bot#send(a)".to_string();
                dup.docstring = "declared first".to_string();
                dup
            },
            {
                let mut dup = method("Discordrb::Bot", "send", '#');
                dup.path = "Discordrb::Bot#send(b)".to_string();
                dup.docstring = "declared second".to_string();
                dup
            },
        ]);
        let entry = resolve(&parse("Bot#send"), &scan_only).unwrap();
        assert_eq!(entry.docstring, "declared first");
    }

    #[test]
    fn test_not_found_carries_qualified_path() {
        let snapshot = Snapshot::from_entries(vec![class("Discordrb::Bot")]);

        let err = resolve(&parse("Bot#nonexistent"), &snapshot).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                path: "Discordrb::Bot#nonexistent".to_string()
            }
        );
    }

    #[test]
    fn test_chase_passes_through_non_alias() {
        let snapshot = Snapshot::from_entries(vec![class("Discordrb::Bot")]);
        let entry = snapshot.lookup_exact("Discordrb::Bot").unwrap();

        let (canonical, display) = chase(entry, &snapshot).unwrap();
        assert_eq!(canonical.path, "Discordrb::Bot");
        assert!(display.is_none());
    }

    #[test]
    fn test_chase_resolves_one_hop() {
        let mut canonical = method("Discordrb::Channel", "send_message", '#');
        canonical.docstring = "Sends a message.".to_string();
        let mut alias = method("Discordrb::Channel", "send", '#');
        alias.is_alias = true;
        alias.alias_source_name = Some("send_message".to_string());

        let snapshot =
            Snapshot::from_entries(vec![class("Discordrb::Channel"), canonical, alias]);
        let entry = snapshot.lookup_exact("Discordrb::Channel#send").unwrap();

        let (canonical, display) = chase(entry, &snapshot).unwrap();
        assert_eq!(canonical.path, "Discordrb::Channel#send_message");
        assert_eq!(display, Some("send"));
    }

    #[test]
    fn test_chase_rejects_missing_target() {
        let mut alias = method("Discordrb::Channel", "send", '#');
        alias.is_alias = true;
        alias.alias_source_name = Some("send_message".to_string());

        let snapshot = Snapshot::from_entries(vec![alias]);
        let entry = snapshot.lookup_exact("Discordrb::Channel#send").unwrap();

        let err = chase(entry, &snapshot).unwrap_err();
        assert!(matches!(err, ResolveError::AliasUnresolvable { .. }));
    }

    #[test]
    fn test_chase_rejects_alias_chain() {
        let mut hop_two = method("Discordrb::Channel", "send_message", '#');
        hop_two.is_alias = true;
        hop_two.alias_source_name = Some("send_message_impl".to_string());
        let mut alias = method("Discordrb::Channel", "send", '#');
        alias.is_alias = true;
        alias.alias_source_name = Some("send_message".to_string());

        let snapshot = Snapshot::from_entries(vec![hop_two, alias]);
        let entry = snapshot.lookup_exact("Discordrb::Channel#send").unwrap();

        let err = chase(entry, &snapshot).unwrap_err();
        assert_eq!(
            err,
            ResolveError::AliasUnresolvable {
                path: "Discordrb::Channel#send".to_string()
            }
        );
    }

    #[test]
    fn test_chase_rejects_incomplete_alias_record() {
        let mut alias = method("Discordrb::Channel", "send", '#');
        alias.is_alias = true;
        // No alias_source_name recorded.

        let snapshot = Snapshot::from_entries(vec![alias]);
        let entry = snapshot.lookup_exact("Discordrb::Channel#send").unwrap();
        assert!(chase(entry, &snapshot).is_err());
    }

    #[test]
    fn test_split_member() {
        assert_eq!(
            split_member("Discordrb::Bot#run"),
            Some(("Discordrb::Bot", '#', "run"))
        );
        // Longest leading namespace: split happens at the last separator.
        assert_eq!(
            split_member("Discordrb::Bot#run.now"),
            Some(("Discordrb::Bot#run", '.', "now"))
        );
        assert_eq!(split_member("Discordrb::Bot"), None);
        assert_eq!(split_member("#run"), None);
    }
}
