//! Deterministic permalink construction for documentation hosts.
//!
//! Two host conventions exist for the same symbol: the doc-site host
//! (RubyDoc-style, percent-escaped namespace separators, `:` member
//! anchors) and the rendered-pages host (plain `/` separators plus an
//! instance/class anchor suffix). [`LinkScheme`] makes the convention a
//! pluggable strategy so callers pick per use site.
//!
//! Substituting the namespace separator must happen before character
//! escaping, otherwise the escape pass would corrupt the separator token.

use super::path::SymbolKind;

/// A documentation-host URL convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScheme<'a> {
    /// Doc-site convention: `::` becomes `%2F`, `?` becomes `%3F`, `#`
    /// becomes `:`, appended to the base URL.
    DocSite {
        /// Base URL of the doc-site host.
        base: &'a str,
    },
    /// Rendered-pages convention: `::` becomes `/`, `?` becomes `%3F`,
    /// method paths gain an instance/class anchor suffix, appended to
    /// the base URL (which carries the version tag).
    SourceHosting {
        /// Base URL of the pages host, including its version tag.
        base: &'a str,
    },
}

impl LinkScheme<'_> {
    /// Builds the permalink for a qualified path under this scheme.
    ///
    /// Stateless and deterministic: identical input always yields the
    /// identical URL string.
    pub fn build(self, qualified: &str, kind: SymbolKind) -> String {
        match self {
            LinkScheme::DocSite { base } => {
                let link = qualified.replace("::", "%2F");
                let link = link.replace('?', "%3F");
                let link = link.replace('#', ":");
                format!("{base}/{link}")
            }
            LinkScheme::SourceHosting { base } => {
                let link = qualified.replace("::", "/");
                let link = link.replace('?', "%3F");
                let suffix = kind.anchor_suffix().unwrap_or("");
                format!("{base}/{link}{suffix}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_SITE: LinkScheme<'static> = LinkScheme::DocSite {
        base: "http://www.rubydoc.info/github/meew0/discordrb/master",
    };
    const PAGES: LinkScheme<'static> = LinkScheme::SourceHosting {
        base: "https://meew0.github.io/discordrb/master",
    };

    #[test]
    fn test_doc_site_instance_method() {
        assert_eq!(
            DOC_SITE.build("Discordrb::Bot#run", SymbolKind::InstanceMethod),
            "http://www.rubydoc.info/github/meew0/discordrb/master/Discordrb%2FBot:run"
        );
    }

    #[test]
    fn test_doc_site_is_deterministic() {
        let first = DOC_SITE.build("Discordrb::Bot#run", SymbolKind::InstanceMethod);
        let second = DOC_SITE.build("Discordrb::Bot#run", SymbolKind::InstanceMethod);
        assert_eq!(first, second);
    }

    #[test]
    fn test_doc_site_escapes_question_mark() {
        assert_eq!(
            DOC_SITE.build("Discordrb::Channel#nsfw?", SymbolKind::InstanceMethod),
            "http://www.rubydoc.info/github/meew0/discordrb/master/Discordrb%2FChannel:nsfw%3F"
        );
    }

    #[test]
    fn test_pages_instance_method_suffix() {
        assert_eq!(
            PAGES.build("Discordrb::Bot#run", SymbolKind::InstanceMethod),
            "https://meew0.github.io/discordrb/master/Discordrb/Bot#run-instance_method"
        );
    }

    #[test]
    fn test_pages_class_method_suffix() {
        assert_eq!(
            PAGES.build("Discordrb::Bot.new", SymbolKind::ClassMethod),
            "https://meew0.github.io/discordrb/master/Discordrb/Bot.new-class_method"
        );
    }

    #[test]
    fn test_pages_object_has_no_suffix() {
        assert_eq!(
            PAGES.build("Discordrb::Bot", SymbolKind::Object),
            "https://meew0.github.io/discordrb/master/Discordrb/Bot"
        );
    }

    #[test]
    fn test_separator_substitution_precedes_escaping() {
        // A `?` inside the path must not corrupt the already-substituted
        // namespace separator.
        let url = DOC_SITE.build("Discordrb::Await#match?", SymbolKind::InstanceMethod);
        assert!(url.ends_with("/Discordrb%2FAwait:match%3F"));
    }
}
