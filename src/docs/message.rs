//! Chat-markdown composition helper.
//!
//! A small append-only writer for the markdown dialect common to chat
//! transports: bold, italics, inline code, and fenced code blocks. The
//! styled helpers take closures so nested spans read like the markup
//! they produce.

/// Append-only builder for chat-markdown message content.
#[derive(Debug, Default)]
pub struct MarkdownWriter {
    buffer: String,
}

impl MarkdownWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw text.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Appends a single space.
    pub fn space(&mut self) -> &mut Self {
        self.buffer.push(' ');
        self
    }

    /// Appends a newline.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Writes a bold span.
    pub fn bold(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.buffer.push_str("**");
        f(self);
        self.buffer.push_str("**");
        self
    }

    /// Writes an italic span.
    pub fn italics(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.buffer.push('*');
        f(self);
        self.buffer.push('*');
        self
    }

    /// Writes an inline code span.
    pub fn inline_code(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.buffer.push('`');
        f(self);
        self.buffer.push('`');
        self
    }

    /// Writes a fenced code block with a language tag.
    pub fn code_block(&mut self, lang: &str, body: &str) -> &mut Self {
        self.buffer.push_str("\n```");
        self.buffer.push_str(lang);
        self.buffer.push('\n');
        self.buffer.push_str(body);
        self.buffer.push_str("\n```\n");
        self
    }

    /// Consumes the writer and returns the composed message.
    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_inline_code() {
        let mut msg = MarkdownWriter::new();
        msg.bold(|m| {
            m.write("Discordrb::Bot");
        });
        msg.space();
        msg.inline_code(|m| {
            m.write("[class, public]");
        });
        assert_eq!(msg.finish(), "**Discordrb::Bot** `[class, public]`");
    }

    #[test]
    fn test_italics() {
        let mut msg = MarkdownWriter::new();
        msg.italics(|m| {
            m.write("No documentation available..");
        });
        assert_eq!(msg.finish(), "*No documentation available..*");
    }

    #[test]
    fn test_code_block() {
        let mut msg = MarkdownWriter::new();
        msg.code_block("rb", "def run\nend");
        assert_eq!(msg.finish(), "\n```rb\ndef run\nend\n```\n");
    }

    #[test]
    fn test_nested_spans() {
        let mut msg = MarkdownWriter::new();
        msg.bold(|m| {
            m.write("path");
            m.write(" \u{279c} (Bot)");
        });
        assert_eq!(msg.finish(), "**path \u{279c} (Bot)**");
    }
}
