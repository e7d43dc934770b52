//! The ordered substitution pipeline.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::fence::FenceStash;
use crate::theme::{ClassAttrs, Theme};
use crate::util::{escape_html, quote_escaped, starts_with_tag};

// `R` enables CRLF mode: `^`/`$` also break on `\r` and `.` never matches it.
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([A-Za-z0-9_]*)\r?\n([\s\S]*?)```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^### (.+)$").unwrap());
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^## (.+)$").unwrap());
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^# (.+)$").unwrap());
static RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^---$").unwrap());
static BOLD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)\*\*\*(.+?)\*\*\*").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?R)\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?R)\*(.+?)\*").unwrap());
static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^&gt; (.+)$").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[-*] (.+)$").unwrap());
static ITEM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)(?:<li[^>]*>.*</li>(?:\r\n|\n|\r)?)+").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[0-9]+\. (.+)$").unwrap());
static LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^.+$").unwrap());
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r\n|\n|\r){3,}").unwrap());

static DEFAULT_RENDERER: LazyLock<MarkdownRenderer> = LazyLock::new(MarkdownRenderer::new);

/// Render markdown with the default theme.
///
/// Accepts `&str` or `Option<&str>`; empty and absent input both yield an
/// empty string.
///
/// # Examples
///
/// ```
/// use reddot_markdown::render_markdown;
///
/// assert_eq!(render_markdown(""), "");
/// assert_eq!(render_markdown(None), "");
/// assert!(render_markdown("**bold**").contains("<strong"));
/// ```
pub fn render_markdown<'a>(markdown: impl Into<Option<&'a str>>) -> String {
    DEFAULT_RENDERER.render(markdown)
}

/// Markdown-to-HTML renderer bound to a [`Theme`].
///
/// Rendering is a pure function of the input: the renderer holds only the
/// pre-formatted class attributes and can be shared across threads.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    attrs: ClassAttrs,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer using the default studio theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(&Theme::default())
    }

    /// Create a renderer using the given theme.
    #[must_use]
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            attrs: ClassAttrs::from(theme),
        }
    }

    /// Render markdown to an HTML fragment.
    ///
    /// Never fails: malformed markup is emitted as escaped literal text.
    ///
    /// The literal two-character sequence `\n` becomes a line break across the
    /// whole document before anything else runs, including inside fenced code,
    /// so `printf("a\n")` in a code block renders with a real newline.
    pub fn render<'a>(&self, markdown: impl Into<Option<&'a str>>) -> String {
        let Some(markdown) = markdown.into().filter(|md| !md.is_empty()) else {
            return String::new();
        };

        let a = &self.attrs;
        let mut fences = FenceStash::default();

        let html = markdown.replace("\\n", "\n");
        let html = escape_html(&html);

        let html = substitute(&FENCED_CODE, html, |caps| fences.push(&caps[1], &caps[2]));
        let html = substitute(&INLINE_CODE, html, |caps| {
            format!("<code{}>{}</code>", a.inline_code, &caps[1])
        });
        let html = substitute(&IMAGE, html, |caps| {
            format!(
                r#"<img src="{}" alt="{}"{} loading="lazy" />"#,
                quote_escaped(&caps[2]),
                quote_escaped(&caps[1]),
                a.image
            )
        });
        let html = substitute(&LINK, html, |caps| {
            format!(
                r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">{}</a>"#,
                quote_escaped(&caps[2]),
                a.link,
                &caps[1]
            )
        });

        let html = substitute(&H3, html, |caps| format!("<h3{}>{}</h3>", a.h3, &caps[1]));
        let html = substitute(&H2, html, |caps| format!("<h2{}>{}</h2>", a.h2, &caps[1]));
        let html = substitute(&H1, html, |caps| format!("<h1{}>{}</h1>", a.h1, &caps[1]));
        let html = substitute(&RULE, html, |_| format!("<hr{} />", a.rule));

        let html = substitute(&BOLD_ITALIC, html, |caps| {
            format!("<strong{}><em>{}</em></strong>", a.strong, &caps[1])
        });
        let html = substitute(&BOLD, html, |caps| {
            format!("<strong{}>{}</strong>", a.strong, &caps[1])
        });
        let html = substitute(&ITALIC, html, |caps| format!("<em>{}</em>", &caps[1]));

        let html = substitute(&BLOCKQUOTE, html, |caps| {
            format!("<blockquote{}>{}</blockquote>", a.blockquote, &caps[1])
        });

        let html = substitute(&UNORDERED_ITEM, html, |caps| {
            format!("<li{}>{}</li>", a.unordered_item, &caps[1])
        });
        let html = substitute(&ITEM_RUN, html, |caps| {
            // Keep the run's trailing newline outside the list so `</ul>`
            // stays on the last item's line.
            let run = &caps[0];
            let (items, tail) = line_break_suffix(run)
                .map_or((run, ""), |tail| (&run[..run.len() - tail.len()], tail));
            format!("<ul{}>{items}</ul>{tail}", a.list)
        });
        // Ordered items are never wrapped in `<ol>`. Known defect, kept until
        // the expected markup is confirmed.
        let html = substitute(&ORDERED_ITEM, html, |caps| {
            format!("<li{}>{}</li>", a.ordered_item, &caps[1])
        });

        let html = substitute(&LINE, html, |caps| {
            let line = &caps[0];
            if starts_with_tag(line) || line.trim().is_empty() {
                line.to_owned()
            } else {
                format!("<p{}>{line}</p>", a.paragraph)
            }
        });

        let html = substitute(&BLANK_RUN, html, |caps| {
            let run = &caps[0];
            let eol = ["\r\n", "\n", "\r"]
                .into_iter()
                .find(|eol| run.starts_with(eol))
                .unwrap_or("\n");
            eol.repeat(2)
        });
        let html = fences.restore(html, a);

        tracing::debug!(
            input_len = markdown.len(),
            output_len = html.len(),
            fenced_blocks = fences.len(),
            "Rendered markdown"
        );

        html
    }
}

/// The line terminator ending `text`, if any.
fn line_break_suffix(text: &str) -> Option<&'static str> {
    ["\r\n", "\n", "\r"]
        .into_iter()
        .find(|eol| text.ends_with(eol))
}

/// Apply one stage, reusing the input buffer when nothing matched.
fn substitute(
    re: &Regex,
    text: String,
    replacer: impl FnMut(&Captures<'_>) -> String,
) -> String {
    let replaced = match re.replace_all(&text, replacer) {
        Cow::Owned(replaced) => Some(replaced),
        Cow::Borrowed(_) => None,
    };
    replaced.unwrap_or(text)
}
