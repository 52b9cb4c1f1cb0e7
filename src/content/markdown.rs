//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use lazy_static::lazy_static;
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::MarkdownConfig;
use crate::helpers::{html_escape, text_content_of};

lazy_static! {
    static ref RAW_H1: Regex = Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").unwrap();
}

/// Text of the first `<h1>` element in a raw HTML block
fn raw_h1_text(html: &str) -> Option<String> {
    RAW_H1.captures(html).map(|caps| text_content_of(&caps[1]))
}

/// Output of a markdown render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: String,
    /// Text of the first level-1 heading
    pub first_heading: Option<String>,
}

/// Capability to turn markdown into HTML
pub trait RenderMarkdown {
    fn render(&self, markdown: &str) -> RenderedMarkdown;
}

/// Markdown renderer with optional syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::from_config(&MarkdownConfig::default())
    }

    /// Create with site settings
    pub fn from_config(config: &MarkdownConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: config.highlight_theme.clone(),
            highlight: config.highlight,
        }
    }

    /// Highlight a fenced code block, falling back to escaped plain text
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");
        let plain = || {
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                html_escape(lang),
                html_escape(code)
            )
        };

        if !self.highlight {
            return plain();
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        else {
            return plain();
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                plain()
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderMarkdown for MarkdownRenderer {
    fn render(&self, markdown: &str) -> RenderedMarkdown {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a fenced or indented code block
        let mut code_block: Option<Option<String>> = None;
        let mut code = String::new();
        let mut first_heading: Option<String> = None;
        let mut heading_text: Option<String> = None;
        let mut html_block: Option<String> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some(lang);
                    code.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().flatten();
                    let highlighted = self.highlight_code(&code, lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
                Event::Text(text) if code_block.is_some() => code.push_str(&text),
                Event::Start(Tag::Heading {
                    level: HeadingLevel::H1,
                    ..
                }) if first_heading.is_none() && heading_text.is_none() => {
                    heading_text = Some(String::new());
                    events.push(event);
                }
                Event::End(TagEnd::Heading(HeadingLevel::H1)) if heading_text.is_some() => {
                    first_heading = heading_text.take();
                    events.push(event);
                }
                Event::SoftBreak | Event::HardBreak if heading_text.is_some() => {
                    if let Some(buf) = heading_text.as_mut() {
                        buf.push('\n');
                    }
                    events.push(event);
                }
                Event::Start(Tag::HtmlBlock) => {
                    html_block = Some(String::new());
                    events.push(event);
                }
                Event::Html(ref raw) if html_block.is_some() => {
                    if let Some(buf) = html_block.as_mut() {
                        buf.push_str(raw);
                    }
                    events.push(event);
                }
                Event::End(TagEnd::HtmlBlock) => {
                    if let Some(raw) = html_block.take() {
                        if first_heading.is_none() && heading_text.is_none() {
                            first_heading = raw_h1_text(&raw);
                        }
                    }
                    events.push(event);
                }
                Event::Text(ref text) | Event::Code(ref text) => {
                    if let Some(buf) = heading_text.as_mut() {
                        buf.push_str(text);
                    }
                    events.push(event);
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        RenderedMarkdown {
            html: html_output,
            first_heading: first_heading.map(|h| h.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("# Hello World\n\nThis is a test.");
        assert!(out.html.contains("<h1>Hello World</h1>"));
        assert!(out.html.contains("<p>This is a test.</p>"));
        assert_eq!(out.first_heading.as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_first_h1_only() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("## Intro\n\n# Mein `erster` Post\n\n# Second");
        assert_eq!(out.first_heading.as_deref(), Some("Mein erster Post"));
    }

    #[test]
    fn test_raw_html_h1_counts_as_first_heading() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("<h1>Raw Title</h1>\n\nBody\n\n# Later");
        assert!(out.html.contains("<h1>Raw Title</h1>"));
        assert_eq!(out.first_heading.as_deref(), Some("Raw Title"));

        let out = renderer.render("<h1 class=\"post\">Tom <em>&amp;</em> Jerry</h1>\n\n# Later");
        assert_eq!(out.first_heading.as_deref(), Some("Tom & Jerry"));
    }

    #[test]
    fn test_markdown_h1_before_raw_h1_wins() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("# First\n\n<h1>Second</h1>\n");
        assert_eq!(out.first_heading.as_deref(), Some("First"));
    }

    #[test]
    fn test_multiline_setext_heading_keeps_line_break() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("Line one\nline two\n===");
        assert_eq!(out.first_heading.as_deref(), Some("Line one\nline two"));
    }

    #[test]
    fn test_no_heading() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("Just text\n\n## Sub");
        assert_eq!(out.first_heading, None);
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let out = renderer.render("```rust\nfn main() {}\n```");
        assert!(out.html.contains("highlight rust"));
        assert!(!out.html.contains("<pre><code class=\"language-rust\">fn"));
    }

    #[test]
    fn test_code_block_without_highlighting() {
        let renderer = MarkdownRenderer::from_config(&MarkdownConfig {
            highlight: false,
            highlight_theme: String::new(),
        });
        let out = renderer.render("```\n<b>&</b>\n```");
        assert!(out
            .html
            .contains(r#"<pre><code class="language-text">&lt;b&gt;&amp;&lt;/b&gt;"#));
    }
}
