use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One dated product release pulled from the calendar page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// `YYYY-MM-DD`, taken from the section header.
    pub date: String,
    pub sport: Sport,
    pub name: String,
    pub brand: Brand,
    /// Absolute, same-site URL.
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
    Baseball,
    Football,
    Soccer,
    Hockey,
    Racing,
    Wrestling,
    Golf,
    Tennis,
    Mma,
    Other,
}

impl Sport {
    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Basketball => "basketball",
            Sport::Baseball => "baseball",
            Sport::Football => "football",
            Sport::Soccer => "soccer",
            Sport::Hockey => "hockey",
            Sport::Racing => "racing",
            Sport::Wrestling => "wrestling",
            Sport::Golf => "golf",
            Sport::Tennis => "tennis",
            Sport::Mma => "mma",
            Sport::Other => "other",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Panini,
    Topps,
    #[serde(rename = "Upper Deck")]
    UpperDeck,
    Donruss,
    Bowman,
    Fleer,
    Rittenhouse,
    Cryptozoic,
    Leaf,
    Unknown,
}

impl Brand {
    pub fn as_str(self) -> &'static str {
        match self {
            Brand::Panini => "Panini",
            Brand::Topps => "Topps",
            Brand::UpperDeck => "Upper Deck",
            Brand::Donruss => "Donruss",
            Brand::Bowman => "Bowman",
            Brand::Fleer => "Fleer",
            Brand::Rittenhouse => "Rittenhouse",
            Brand::Cryptozoic => "Cryptozoic",
            Brand::Leaf => "Leaf",
            Brand::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Release counts per sport, ordered by the enum's declaration order.
pub fn count_by_sport(releases: &[Release]) -> BTreeMap<Sport, usize> {
    let mut counts = BTreeMap::new();
    for r in releases {
        *counts.entry(r.sport).or_insert(0) += 1;
    }
    counts
}

// ── Tests ──
