//! URL slug generation for blog posts.

/// Maximum slug length in characters.
const MAX_SLUG_LEN: usize = 200;

/// Derive a URL slug from a post title.
///
/// Lowercases the title, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, strips leading and trailing dashes and
/// truncates to 200 characters.
///
/// # Examples
///
/// ```
/// use reddot_content::generate_slug;
///
/// assert_eq!(generate_slug("Hello, World!"), "hello-world");
/// assert_eq!(generate_slug("  Design -- Systems 2.0 "), "design-systems-2-0");
/// ```
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    // ASCII only, so byte length equals char count
    slug.truncate(MAX_SLUG_LEN);
    slug
}
