use std::sync::LazyLock;

use regex::Regex;

static HEADER_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+(\d+),\s+(\d+)").unwrap());

const MONTHS: &[(&str, &str)] = &[
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// Sections announced but not yet scheduled.
pub fn is_tba(header: &str) -> bool {
    header.trim().eq_ignore_ascii_case("TBA")
}

/// "Mar 3, 2025" → "2025-03-03". `None` means the header is not a date.
pub fn normalize_date(text: &str) -> Option<String> {
    let caps = HEADER_DATE_RE.captures(text)?;
    let (_, month) = MONTHS.iter().find(|(abbr, _)| *abbr == &caps[1])?;
    let day = &caps[2];
    let year = &caps[3];
    Some(format!("{}-{}-{:0>2}", year, month, day))
}

// ── Tests ──
