use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use tracing::debug;
use url::Url;

use super::classify::{classify_brand, classify_sport};
use super::dates::{is_tba, normalize_date};
use super::sections::Section;
use crate::release::Release;

/// Path segment of the calendar's own navigation (month pickers, list/grid toggles).
const CALENDAR_PATH: &str = "/release-calendar";
const MIN_NAME_CHARS: usize = 6;

static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:checklist guide|checklist|guide)$").unwrap());

/// Turn dated sections into release records, dropping repeats of the same (date, url).
pub fn extract_records<'a, I>(sections: I, base: &Url) -> Vec<Release>
where
    I: IntoIterator<Item = Section<'a>>,
{
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut releases = Vec::new();

    for section in sections {
        let header = section.heading_text();
        if is_tba(&header) {
            debug!("Skipping TBA section");
            continue;
        }
        let Some(date) = normalize_date(&header) else {
            debug!("Skipping non-date section {:?}", header);
            continue;
        };

        for anchor in section.elements().filter(|e| e.value().name() == "a") {
            let (url, name) = match candidate(anchor, base) {
                Ok(c) => c,
                Err(reason) => {
                    debug!("{}: skipping link ({})", date, reason);
                    continue;
                }
            };

            if !seen.insert((date.clone(), url.to_string())) {
                debug!("{}: duplicate {}", date, url);
                continue;
            }

            releases.push(Release {
                date: date.clone(),
                sport: classify_sport(url.as_str()),
                brand: classify_brand(&name),
                name,
                url: url.into(),
            });
        }
    }

    releases
}

/// Resolve and validate one anchor. `Err` carries the skip reason for logs.
fn candidate(anchor: ElementRef<'_>, base: &Url) -> Result<(Url, String), &'static str> {
    let href = anchor.value().attr("href").map(str::trim).unwrap_or("");
    if href.is_empty() {
        return Err("no href");
    }
    if href.starts_with('#') {
        return Err("fragment link");
    }

    let url = base.join(href).map_err(|_| "unresolvable href")?;
    if url.path().contains(CALENDAR_PATH) {
        return Err("calendar navigation");
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err("not a web link");
    }
    if site_host(&url).is_none() || site_host(&url) != site_host(base) {
        return Err("off-site");
    }

    let text: String = anchor.text().collect();
    let name = clean_name(&text);
    if name.chars().count() < MIN_NAME_CHARS {
        return Err("name too short");
    }
    Ok((url, name))
}

/// Host without a leading `www.`, so both spellings count as the same site.
fn site_host(url: &Url) -> Option<&str> {
    url.host_str().map(|h| h.strip_prefix("www.").unwrap_or(h))
}

/// Collapse whitespace and drop one trailing "Checklist Guide" / "Checklist" / "Guide".
pub fn clean_name(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    SUFFIX_RE.replace(&collapsed, "").trim().to_string()
}

// ── Tests ──
