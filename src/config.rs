//! Configuration for the lookup pipeline.
//!
//! [`DocsConfig`] carries everything the pipeline needs to know about the
//! documented library and its documentation hosts: the root namespace used
//! to qualify raw paths, the base URLs of the two link schemes, and the
//! version stamps printed in embed footers. Defaults match the discordrb
//! documentation hosts; a JSON file can override any field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

/// Library and documentation-host settings consumed by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Name of the documented library, stamped into embed footers.
    pub library_name: String,
    /// Root namespace prepended to unqualified paths (without `::`).
    pub root_namespace: String,
    /// Base URL of the doc-site host (RubyDoc-style escaping).
    pub doc_site_base: String,
    /// Base URL of the rendered-pages host, including its version tag.
    pub pages_base: String,
    /// Base URL of the source repository, used for source-location links.
    pub source_repo: String,
    /// Path prefix of library sources inside the repository.
    pub source_root: String,
    /// Released version of the documented library.
    pub library_version: String,
    /// Version tag (e.g. a git ref) the documentation was built from.
    pub version_tag: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            library_name: "discordrb".to_string(),
            root_namespace: "Discordrb".to_string(),
            doc_site_base: "http://www.rubydoc.info/github/meew0/discordrb/master".to_string(),
            pages_base: "https://meew0.github.io/discordrb/master".to_string(),
            source_repo: "https://github.com/meew0/discordrb".to_string(),
            source_root: "lib".to_string(),
            library_version: "3.4.0".to_string(),
            version_tag: "master".to_string(),
        }
    }
}

impl DocsConfig {
    /// Loads a configuration file, overriding the defaults field by field.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse config '{}': {e}", path.display()))
        })
    }

    /// The namespace prefix carried by every qualified path, e.g. `Discordrb::`.
    pub fn namespace_prefix(&self) -> String {
        format!("{}::", self.root_namespace)
    }

    /// Version stamp printed in embed footers, e.g. `discordrb v3.4.0@master`.
    pub fn version_stamp(&self) -> String {
        format!(
            "{} v{}@{}",
            self.library_name, self.library_version, self.version_tag
        )
    }
}
