//! Fenced code block isolation.
//!
//! Fence bodies are removed from the text during the fence stage and replaced
//! with an indexed `<pre data-fence="N"></pre>` placeholder. User text cannot
//! contain a literal `<` once entity escaping has run, so only placeholders
//! produced here can match during [`FenceStash::restore`].

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::theme::ClassAttrs;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<pre data-fence="([0-9]+)"></pre>"#).unwrap());

/// A fenced code block captured during rendering.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FencedBlock {
    /// Language tag after the opening fence. Accepted but not used for highlighting.
    pub(crate) lang: Option<String>,
    /// Trimmed, already escaped body.
    pub(crate) code: String,
}

/// Fenced blocks set aside for the duration of one render call.
#[derive(Debug, Default)]
pub(crate) struct FenceStash {
    blocks: Vec<FencedBlock>,
}

impl FenceStash {
    /// Store a block and return the placeholder to leave in the text.
    pub(crate) fn push(&mut self, lang: &str, code: &str) -> String {
        let index = self.blocks.len();
        let lang = (!lang.is_empty()).then(|| lang.to_owned());
        tracing::trace!(index, lang = ?lang, "Captured fenced code block");
        self.blocks.push(FencedBlock {
            lang,
            code: code.trim().to_owned(),
        });
        format!(r#"<pre data-fence="{index}"></pre>"#)
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Replace every placeholder with its `<pre><code>` block.
    pub(crate) fn restore(&self, html: String, attrs: &ClassAttrs) -> String {
        if self.blocks.is_empty() {
            return html;
        }
        let restored = match PLACEHOLDER.replace_all(&html, |caps: &Captures<'_>| {
            let block = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| self.blocks.get(index));
            match block {
                Some(block) => format!(
                    "<pre{}><code{}>{}</code></pre>",
                    attrs.code_block, attrs.code_block_code, block.code
                ),
                None => caps[0].to_owned(),
            }
        }) {
            Cow::Owned(restored) => Some(restored),
            Cow::Borrowed(_) => None,
        };
        restored.unwrap_or(html)
    }
}
