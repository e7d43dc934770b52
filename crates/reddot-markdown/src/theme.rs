//! CSS classes attached to the elements the renderer emits.

/// Class names applied to each kind of generated element.
///
/// An empty string omits the `class` attribute entirely. The default theme is
/// the studio site's Tailwind class set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    /// `<pre>` wrapper of a fenced code block.
    pub code_block: String,
    /// `<code>` inside a fenced code block.
    pub code_block_code: String,
    /// Inline `<code>` span.
    pub inline_code: String,
    /// `<img>` element.
    pub image: String,
    /// `<a>` element.
    pub link: String,
    /// `<h1>` heading.
    pub h1: String,
    /// `<h2>` heading.
    pub h2: String,
    /// `<h3>` heading.
    pub h3: String,
    /// `<hr>` rule.
    pub rule: String,
    /// `<strong>` emphasis (also the outer element of bold-italic).
    pub strong: String,
    /// `<blockquote>` element.
    pub blockquote: String,
    /// `<ul>` wrapping a run of unordered items.
    pub list: String,
    /// `<li>` generated from `-` or `*` items.
    pub unordered_item: String,
    /// `<li>` generated from numbered items.
    pub ordered_item: String,
    /// `<p>` wrapping a text line.
    pub paragraph: String,
}

impl Theme {
    /// Theme with no classes; every element is emitted bare.
    #[must_use]
    pub fn unstyled() -> Self {
        Self {
            code_block: String::new(),
            code_block_code: String::new(),
            inline_code: String::new(),
            image: String::new(),
            link: String::new(),
            h1: String::new(),
            h2: String::new(),
            h3: String::new(),
            rule: String::new(),
            strong: String::new(),
            blockquote: String::new(),
            list: String::new(),
            unordered_item: String::new(),
            ordered_item: String::new(),
            paragraph: String::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            code_block: "bg-neutral-900 border border-neutral-800 rounded-lg p-4 overflow-x-auto my-6"
                .to_owned(),
            code_block_code: "text-sm text-gray-300 font-mono".to_owned(),
            inline_code: "bg-neutral-800 text-red-400 px-1.5 py-0.5 rounded text-sm font-mono"
                .to_owned(),
            image: "rounded-lg my-6 w-full".to_owned(),
            link: "text-red-dot hover:underline".to_owned(),
            h1: "text-3xl font-display font-bold text-white mt-10 mb-4".to_owned(),
            h2: "text-2xl font-display font-bold text-white mt-10 mb-4".to_owned(),
            h3: "text-xl font-display font-semibold text-white mt-8 mb-3".to_owned(),
            rule: "border-neutral-800 my-8".to_owned(),
            strong: "text-white".to_owned(),
            blockquote: "border-l-2 border-red-dot pl-4 my-4 text-gray-400 italic".to_owned(),
            list: "my-4 space-y-1".to_owned(),
            unordered_item: "text-gray-300 ml-4 list-disc".to_owned(),
            ordered_item: "text-gray-300 ml-4 list-decimal".to_owned(),
            paragraph: "text-gray-400 leading-relaxed mb-4".to_owned(),
        }
    }
}

/// Pre-formatted ` class="..."` attributes, escaped once at construction.
#[derive(Clone, Debug)]
pub(crate) struct ClassAttrs {
    pub(crate) code_block: String,
    pub(crate) code_block_code: String,
    pub(crate) inline_code: String,
    pub(crate) image: String,
    pub(crate) link: String,
    pub(crate) h1: String,
    pub(crate) h2: String,
    pub(crate) h3: String,
    pub(crate) rule: String,
    pub(crate) strong: String,
    pub(crate) blockquote: String,
    pub(crate) list: String,
    pub(crate) unordered_item: String,
    pub(crate) ordered_item: String,
    pub(crate) paragraph: String,
}

impl From<&Theme> for ClassAttrs {
    fn from(theme: &Theme) -> Self {
        Self {
            code_block: class_attr(&theme.code_block),
            code_block_code: class_attr(&theme.code_block_code),
            inline_code: class_attr(&theme.inline_code),
            image: class_attr(&theme.image),
            link: class_attr(&theme.link),
            h1: class_attr(&theme.h1),
            h2: class_attr(&theme.h2),
            h3: class_attr(&theme.h3),
            rule: class_attr(&theme.rule),
            strong: class_attr(&theme.strong),
            blockquote: class_attr(&theme.blockquote),
            list: class_attr(&theme.list),
            unordered_item: class_attr(&theme.unordered_item),
            ordered_item: class_attr(&theme.ordered_item),
            paragraph: class_attr(&theme.paragraph),
        }
    }
}

fn class_attr(classes: &str) -> String {
    let classes = classes.trim();
    if classes.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, crate::util::escape_attr(classes))
    }
}
