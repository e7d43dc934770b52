//! Staged markdown-to-HTML renderer for Red Dot Studio blog content.
//!
//! This crate converts a blog post's Markdown body into an HTML fragment that
//! the site injects directly into the page. It is not a CommonMark parser:
//! the output is produced by a fixed, ordered sequence of substitutions.
//!
//! # Pipeline
//!
//! Each stage operates on the output of the previous one:
//!
//! 1. Literal `\n` sequences become line breaks
//! 2. `&`, `<` and `>` are entity-escaped (the only XSS boundary)
//! 3. Fenced code blocks
//! 4. Inline code
//! 5. Images
//! 6. Links
//! 7. `###`, `##` and `#` headings
//! 8. Horizontal rules
//! 9. Bold-italic, bold and italic emphasis
//! 10. Blockquotes (matched on the escaped `&gt; ` marker)
//! 11. Unordered items wrapped in `<ul>`, then ordered items (never wrapped)
//! 12. Paragraph wrapping of remaining text lines
//! 13. Collapsing runs of blank lines
//!
//! Fenced code bodies are set aside during stage 3 and restored after stage
//! 13, so no later stage rewrites their content.
//!
//! # Example
//!
//! ```
//! use reddot_markdown::{MarkdownRenderer, Theme, render_markdown};
//!
//! let html = render_markdown("# Hello\n\n**Bold** text");
//! assert!(html.contains("<h1"));
//!
//! let renderer = MarkdownRenderer::with_theme(&Theme::unstyled());
//! assert_eq!(renderer.render("*hi*"), "<em>hi</em>");
//! assert_eq!(renderer.render(None), "");
//! ```

mod fence;
mod renderer;
mod theme;
mod util;

pub use renderer::{MarkdownRenderer, render_markdown};
pub use theme::Theme;
pub use util::{escape_attr, escape_html};
