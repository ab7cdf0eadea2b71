//! The documented-symbol record and its metadata types.
//!
//! Entries are produced by an external index builder and consumed here
//! read-only. Every field is serde-defaulted so that incomplete records
//! degrade to empty strings and flags instead of failing to load.

use serde::{Deserialize, Serialize};

/// A docstring tag, e.g. a `@return` annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// The tag name without its sigil, e.g. `return` or `deprecated`.
    pub tag_name: String,
    /// Types attached to the tag, in declaration order.
    pub types: Vec<String>,
    /// Free-form tag text.
    pub text: String,
}

/// A file/line pair where the symbol is defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLocation {
    /// Path of the defining file, relative to the library source root.
    pub file: String,
    /// 1-indexed line of the definition.
    pub line: u32,
}

/// A single documented symbol from the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Fully qualified path, e.g. `Discordrb::Bot#run`.
    pub path: String,
    /// Short name of the symbol, e.g. `run`.
    pub name: String,
    /// Kind of the symbol as recorded by the index, e.g. `class` or `method`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Visibility as recorded by the index, e.g. `public`.
    pub visibility: String,
    /// The symbol's docstring; empty when undocumented.
    pub docstring: String,
    /// Method signature, when the index recorded one.
    pub signature: Option<String>,
    /// Raw method source, when the index recorded it.
    pub source: Option<String>,
    /// Docstring tags in declaration order.
    pub tags: Vec<Tag>,
    /// Whether this entry is a name-only redirect to another member.
    pub is_alias: bool,
    /// Short name of the alias's canonical target, for alias entries.
    pub alias_source_name: Option<String>,
    /// Qualified path of the enclosing namespace, for member entries.
    pub namespace_path: Option<String>,
    /// Member separator: `#` for instance methods, `.` for class methods.
    pub separator: Option<char>,
    /// Whether the member is an attribute reader.
    pub reader: bool,
    /// Whether the member is an attribute writer.
    pub writer: bool,
    /// Definition sites of the symbol.
    pub source_locations: Vec<SourceLocation>,
}

impl Entry {
    /// Whether this entry is a method-like member (carries a separator).
    pub fn is_method(&self) -> bool {
        self.separator.is_some()
    }

    /// The entry's `return` tag, if any.
    pub fn return_tag(&self) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.tag_name == "return")
    }

    /// The docstring with literal newlines collapsed to single spaces,
    /// for single-line contexts. Reply bodies use the docstring verbatim.
    pub fn summary(&self) -> String {
        self.docstring.replace('\n', " ")
    }

    /// Accessor kind from the reader/writer flags: both set is an
    /// accessor, one set is a reader or writer, neither means no
    /// attribute annotation.
    pub fn attr_kind(&self) -> Option<&'static str> {
        match (self.reader, self.writer) {
            (true, true) => Some("attr_accessor"),
            (true, false) => Some("attr_reader"),
            (false, true) => Some("attr_writer"),
            (false, false) => None,
        }
    }
}
