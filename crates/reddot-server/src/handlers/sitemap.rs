//! Sitemap endpoint.

use std::fmt::Write;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use chrono::SecondsFormat;
use reddot_content::{ContentStore, SitemapEntry};
use reddot_markdown::escape_html;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/sitemap.xml.
pub(crate) async fn get_sitemap<S: ContentStore>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    let entries = state.store.sitemap_entries().await?;
    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);

    Ok((
        [(header::CONTENT_TYPE, "application/xml")],
        render_sitemap(&base_url, &entries),
    ))
}

/// Pick the public origin: configured URL, then `x-forwarded-host` (assumed
/// HTTPS behind a proxy), then the `host` header.
fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(url) = configured {
        return url.trim_end_matches('/').to_owned();
    }

    let header_value = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    if let Some(host) = header_value("x-forwarded-host") {
        return format!("https://{host}");
    }
    let host = header_value("host").unwrap_or("localhost");
    format!("http://{host}")
}

fn render_sitemap(base_url: &str, entries: &[SitemapEntry]) -> String {
    let base = escape_html(base_url);
    let mut xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{base}/</loc>
    <changefreq>weekly</changefreq>
    <priority>1.0</priority>
  </url>
  <url>
    <loc>{base}/blog</loc>
    <changefreq>daily</changefreq>
    <priority>0.9</priority>
  </url>"#
    );

    for entry in entries {
        let _ = write!(
            xml,
            "
  <url>
    <loc>{base}/blog/{slug}</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>weekly</changefreq>
    <priority>0.8</priority>
  </url>",
            slug = escape_html(&entry.slug),
            lastmod = entry.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
    }

    xml.push_str("\n</urlset>");
    xml
}
