use crate::release::{Brand, Sport};

/// Checked top to bottom; the first keyword found in the URL wins.
const SPORT_KEYWORDS: &[(&str, Sport)] = &[
    ("basketball", Sport::Basketball),
    ("baseball", Sport::Baseball),
    ("football", Sport::Football),
    ("soccer", Sport::Soccer),
    ("hockey", Sport::Hockey),
    ("racing", Sport::Racing),
    ("wrestling", Sport::Wrestling),
    ("golf", Sport::Golf),
    ("tennis", Sport::Tennis),
    ("mma", Sport::Mma),
    ("multi-sport", Sport::Other),
    ("non-sport", Sport::Other),
];

/// Checked top to bottom; the first brand found in the name wins.
const BRANDS: &[(&str, Brand)] = &[
    ("panini", Brand::Panini),
    ("topps", Brand::Topps),
    ("upper deck", Brand::UpperDeck),
    ("donruss", Brand::Donruss),
    ("bowman", Brand::Bowman),
    ("fleer", Brand::Fleer),
    ("rittenhouse", Brand::Rittenhouse),
    ("cryptozoic", Brand::Cryptozoic),
    ("leaf", Brand::Leaf),
];

pub fn classify_sport(url: &str) -> Sport {
    first_match(url, SPORT_KEYWORDS).unwrap_or(Sport::Other)
}

pub fn classify_brand(name: &str) -> Brand {
    first_match(name, BRANDS).unwrap_or(Brand::Unknown)
}

fn first_match<T: Copy>(haystack: &str, table: &[(&str, T)]) -> Option<T> {
    let lower = haystack.to_lowercase();
    table
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, label)| *label)
}

// ── Tests ──
