pub mod classify;
pub mod dates;
pub mod extract;
pub mod sections;

use scraper::Html;
use url::Url;

use crate::release::Release;

/// Two-pass pipeline: html → dated sections → release records.
pub fn process_page(html: &str, base: &Url) -> Vec<Release> {
    let doc = Html::parse_document(html);
    extract::extract_records(sections::walk_sections(&doc), base)
}

// ── Tests ──
