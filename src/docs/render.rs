//! Reply rendering: compose the text/metadata reply for a resolved entry.
//!
//! Rendering is a deterministic composition with no I/O. The content is
//! chat markdown; the embed is a generic link/metadata payload that the
//! transport maps onto its own message schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::message::MarkdownWriter;
use super::path::SymbolKind;
use super::permalink::LinkScheme;
use crate::config::DocsConfig;
use crate::error::RenderError;
use crate::registry::Entry;

/// Maximum method source length, in lines, to render into chat.
pub const MAX_SOURCE_LINES: usize = 20;

/// Title of the embed, naming the documentation host.
pub const DOCS_TITLE: &str = "[View on Git Docs]";

/// Body placeholder for entries with no docstring and no return tag.
pub const NO_DOCS_PLACEHOLDER: &str = "No documentation available..";

/// A reply ready for a chat transport: markdown content plus embed.
///
/// Built fresh per render call; has no lifecycle beyond the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// The plain-text (chat markdown) message body.
    pub content: String,
    /// Structured link/metadata payload.
    pub embed: Embed,
}

/// Generic embed metadata, transport-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Embed {
    /// Embed title, a documentation-host label.
    pub title: String,
    /// Permalink to the symbol's documentation page.
    pub url: String,
    /// One markdown link per definition site.
    pub description: String,
    /// Version stamp of the documented library.
    pub footer_text: String,
    /// Extra name/value fields, for transports that support them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

/// A name/value pair inside an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbedField {
    /// Field label.
    pub name: String,
    /// Field content.
    pub value: String,
}

/// Renders the documentation reply for a resolved (and alias-chased)
/// entry.
///
/// Layout: bold header (path, plus return types when tagged), inline-code
/// annotation block, body (docstring verbatim, else capitalized return
/// text, else a placeholder), optional fenced signature block.
pub fn render(entry: &Entry, alias_name: Option<&str>, config: &DocsConfig) -> Reply {
    let return_tag = entry.return_tag();
    let mut msg = MarkdownWriter::new();

    msg.bold(|m| {
        m.write(&entry.path);
        if let Some(tag) = return_tag {
            m.write(" \u{279c} (");
            m.write(&tag.types.join(", "));
            m.write(")");
        }
    });

    msg.space();

    msg.inline_code(|m| {
        m.write("[");
        m.write(&entry.entry_type);
        m.write(", ");
        m.write(&entry.visibility);
        if entry.docstring.is_empty()
            && let Some(kind) = entry.attr_kind()
        {
            m.write(", ");
            m.write(kind);
        }
        if let Some(name) = alias_name {
            m.write(", alias: ");
            m.write(name);
        }
        m.write("]");
    });

    msg.newline();

    if entry.docstring.is_empty() {
        if let Some(tag) = return_tag {
            msg.write(&capitalize(&tag.text));
        } else {
            msg.italics(|m| {
                m.write(NO_DOCS_PLACEHOLDER);
            });
        }
    } else {
        // Verbatim: body text keeps the docstring's own line breaks.
        msg.write(&entry.docstring);
    }

    if let Some(signature) = &entry.signature {
        msg.code_block("rb", signature);
    }

    Reply {
        content: msg.finish(),
        embed: embed_for(entry, config),
    }
}

/// Renders a method's raw source into a fenced code block.
///
/// # Errors
///
/// - [`RenderError::UnsupportedTarget`] for non-method entries.
/// - [`RenderError::SourceMissing`] when the registry recorded none.
/// - [`RenderError::SourceTooLong`] beyond [`MAX_SOURCE_LINES`].
pub fn render_source(entry: &Entry, config: &DocsConfig) -> Result<Reply, RenderError> {
    if !entry.is_method() {
        return Err(RenderError::UnsupportedTarget {
            path: entry.path.clone(),
        });
    }

    let source = entry
        .source
        .as_deref()
        .ok_or_else(|| RenderError::SourceMissing {
            path: entry.path.clone(),
        })?;

    let lines = source.lines().count();
    if lines > MAX_SOURCE_LINES {
        return Err(RenderError::SourceTooLong {
            lines,
            limit: MAX_SOURCE_LINES,
        });
    }

    let mut msg = MarkdownWriter::new();
    msg.code_block("rb", source);

    Ok(Reply {
        content: msg.finish(),
        embed: embed_for(entry, config),
    })
}

/// Builds the embed payload: docs-page permalink, one source-location
/// link per definition site, and the library version stamp.
fn embed_for(entry: &Entry, config: &DocsConfig) -> Embed {
    let kind = SymbolKind::of_entry(entry);
    let scheme = LinkScheme::SourceHosting {
        base: &config.pages_base,
    };

    let description = entry
        .source_locations
        .iter()
        .map(|loc| {
            format!(
                "[`{file}#L{line}`]({repo}/tree/{tag}/{root}/{file}#L{line})",
                file = loc.file,
                line = loc.line,
                repo = config.source_repo,
                tag = config.version_tag,
                root = config.source_root,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Embed {
        title: DOCS_TITLE.to_string(),
        url: scheme.build(&entry.path, kind),
        description,
        footer_text: config.version_stamp(),
        fields: Vec::new(),
    }
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
