//! Markdown compilation with syntax highlighting

use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::html_escape;

lazy_static! {
    static ref MDX_COMMENT: Regex = Regex::new(r"(?s)\{/\*.*?\*/\}").unwrap();
}

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front-matter is split off before we get here, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut in_code_block = false;
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_block_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted =
                        self.highlight_code(&code_block_content, code_block_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    in_code_block = false;
                    code_block_lang = None;
                }
                Event::Text(text) if in_code_block => code_block_content.push_str(&text),
                _ if in_code_block => {}
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted =
            theme.and_then(|t| highlighted_html_for_string(code, &self.syntax_set, syntax, t).ok());

        match highlighted {
            Some(highlighted) if self.line_numbers => self.add_line_numbers(&highlighted, lang),
            Some(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                lang, highlighted
            ),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(code)
            ),
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
            lang,
            gutter,
            lines.join("\n")
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce an MDX source to plain markdown.
///
/// Drops `{/* ... */}` comments and top-level `import`/`export` statements.
/// Statements inside fenced code blocks are left alone. An unterminated
/// comment is reported as an error.
pub fn strip_mdx(source: &str) -> Result<String, String> {
    let without_comments = MDX_COMMENT.replace_all(source, "");
    if let Some(pos) = without_comments.find("{/*") {
        let line = without_comments[..pos].matches('\n').count() + 1;
        return Err(format!("unterminated MDX comment starting on line {}", line));
    }

    let mut out = String::with_capacity(without_comments.len());
    let mut fence: Option<&str> = None;

    for line in without_comments.lines() {
        let trimmed = line.trim_start();

        match fence {
            Some(marker) => {
                if trimmed.starts_with(marker) {
                    fence = None;
                }
            }
            None => {
                if trimmed.starts_with("```") {
                    fence = Some("```");
                } else if trimmed.starts_with("~~~") {
                    fence = Some("~~~");
                } else if line.starts_with("import ") || line.starts_with("export ") {
                    continue;
                }
            }
        }

        out.push_str(line);
        out.push('\n');
    }

    Ok(out)
}
