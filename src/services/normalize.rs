//! Free-text normalization and canonicalization.
//!
//! User input for category and style is free text, often Italian and often
//! accented. Everything funnels through [`normalize`] before matching, and
//! the canonicalizers are total: unknown input always resolves to a safe
//! default, never an error.

use crate::models::place::Category;
use crate::models::trip::Style;

/// Lowercase, trim, and strip diacritics. Used for matching free-text input
/// and dataset tags against the fixed taxonomy.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(strip_diacritic)
        .collect()
}

fn strip_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

// Synonym token lists, post-normalization. English and Italian, since the
// product UI accepts both.
const WILDCARD: &[&str] = &[
    "any", "anything", "anywhere", "random", "wherever", "ovunque", "dovunque", "qualsiasi",
];
const CITY: &[&str] = &["city", "cities", "citta", "town", "urban"];
const VILLAGE: &[&str] = &["village", "villages", "borgo", "borghi", "paese", "paesino"];
const SEA: &[&str] = &["sea", "beach", "coast", "mare", "spiaggia", "costa"];
const MOUNTAIN: &[&str] = &["mountain", "mountains", "montagna", "monti", "monte", "alpi"];
const NATURE: &[&str] = &["nature", "natura", "park", "parco", "bosco", "forest"];
const RELAX: &[&str] = &["relax", "spa", "terme", "wellness", "benessere"];
const FAMILY: &[&str] = &["family", "famiglia", "kids", "bambini"];
const WINERY: &[&str] = &["winery", "wineries", "wine", "vino", "cantina", "cantine"];

fn any_token(text: &str, synonyms: &[&str]) -> bool {
    text.split_whitespace()
        .any(|token| synonyms.contains(&token))
}

/// Resolve free-text category input to the closed taxonomy.
///
/// Total and deterministic: empty or unrecognized input falls back to the
/// wildcard, never an error. Text naming both city and village roots (a
/// common way users ask for "towns of any size") resolves to the combined
/// category.
pub fn canonical_category(raw: Option<&str>) -> Category {
    let text = match raw {
        Some(raw) => normalize(raw),
        None => return Category::default(),
    };
    if text.is_empty() || any_token(&text, WILDCARD) {
        return Category::default();
    }

    let city = any_token(&text, CITY);
    let village = any_token(&text, VILLAGE);
    if city && village {
        return Category::CityOrVillage;
    }
    if city {
        return Category::City;
    }
    if village {
        return Category::Village;
    }

    if any_token(&text, SEA) {
        Category::Sea
    } else if any_token(&text, MOUNTAIN) {
        Category::Mountain
    } else if any_token(&text, NATURE) {
        Category::Nature
    } else if any_token(&text, RELAX) {
        Category::Relax
    } else if any_token(&text, FAMILY) {
        Category::Family
    } else if any_token(&text, WINERY) {
        Category::Winery
    } else {
        Category::default()
    }
}

const GEM: &[&str] = &[
    "gem", "gems", "hidden", "offbeat", "unusual", "chicca", "chicche", "nascosto", "nascosti",
    "insolito", "insolita",
];

/// Resolve free-text style input. Defaults to mainstream.
pub fn canonical_style(raw: Option<&str>) -> Style {
    let text = match raw {
        Some(raw) => normalize(raw),
        None => return Style::default(),
    };
    if any_token(&text, GEM) {
        Style::Gem
    } else {
        Style::Mainstream
    }
}
