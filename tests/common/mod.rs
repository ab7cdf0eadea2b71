//! Common test helpers and utilities.

#![allow(dead_code)]

use dexdoc::config::DocsConfig;
use dexdoc::registry::{Entry, Snapshot, SourceLocation, Tag};

/// Builds a class entry with public visibility.
pub fn class(path: &str, docstring: &str) -> Entry {
    Entry {
        path: path.to_string(),
        name: path.rsplit("::").next().unwrap_or(path).to_string(),
        entry_type: "class".to_string(),
        visibility: "public".to_string(),
        docstring: docstring.to_string(),
        ..Entry::default()
    }
}

/// Builds a method entry with public visibility.
pub fn method(namespace: &str, name: &str, separator: char, docstring: &str) -> Entry {
    Entry {
        path: format!("{namespace}{separator}{name}"),
        name: name.to_string(),
        entry_type: "method".to_string(),
        visibility: "public".to_string(),
        docstring: docstring.to_string(),
        namespace_path: Some(namespace.to_string()),
        separator: Some(separator),
        ..Entry::default()
    }
}

/// A registry fixture mirroring a slice of the discordrb index:
/// a bot class, an instance method with a return tag, and an
/// alias/canonical method pair on a channel class.
pub fn fixture_registry() -> Snapshot {
    let bot = class("Discordrb::Bot", "The bot class.");

    let mut run = method("Discordrb::Bot", "run", '#', "");
    run.tags.push(Tag {
        tag_name: "return".to_string(),
        types: vec!["Bot".to_string()],
        text: "the running bot instance".to_string(),
    });
    run.signature = Some("def run(async = false)".to_string());
    run.source = Some("def run(async = false)\n  @running = true\nend".to_string());
    run.source_locations.push(SourceLocation {
        file: "discordrb/bot.rb".to_string(),
        line: 131,
    });

    let channel = class("Discordrb::Channel", "A Discord channel.");

    let mut send_message = method(
        "Discordrb::Channel",
        "send_message",
        '#',
        "Sends a message to this channel.",
    );
    send_message.signature = Some("def send_message(content)".to_string());
    send_message.source_locations.push(SourceLocation {
        file: "discordrb/data/channel.rb".to_string(),
        line: 427,
    });

    let mut send = method("Discordrb::Channel", "send", '#', "");
    send.is_alias = true;
    send.alias_source_name = Some("send_message".to_string());

    Snapshot::from_entries(vec![bot, run, channel, send_message, send])
}

/// The default pipeline configuration used across the tests.
pub fn fixture_config() -> DocsConfig {
    DocsConfig::default()
}
