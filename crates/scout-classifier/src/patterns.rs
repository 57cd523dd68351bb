//! Compiled regexes shared by the local tiers. Patterns run against
//! folded text (lowercase, no diacritics, punctuation collapsed).

use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Comparators ────────────────────────────────────────────────────────────
pattern!(RE_AGE_UNDER, r"\b(?:under|younger than|below|less than)\s+(\d{1,2})\b");
pattern!(RE_AGE_UNDER_SHORT, r"\bu(\d{2})\b");
pattern!(RE_AGE_OVER, r"\b(?:over|older than|above)\s+(\d{1,2})\b");
pattern!(RE_AGE_RANGE, r"\baged?\s+(\d{1,2})\s+(?:to|and)\s+(\d{1,2})\b");
pattern!(RE_MINUTES, r"\b(\d{2,5})\s*(?:minutes|minute|mins)\b");
pattern!(RE_LIMIT, r"\b(?:top|best)\s+(\d{1,2})\b");

// ── Tier 1 templates ───────────────────────────────────────────────────────
pattern!(RE_COMPARE_PREFIX, r"^compare\s+(.+)$");
pattern!(RE_VERSUS, r"^(.+?)\s+(?:vs|versus)\s+(.+)$");
pattern!(RE_NAME_SEPARATOR, r"\s+(?:vs|versus|and|with|against|to)\s+|\s*,\s*");
pattern!(
    RE_YOUNG_GROUP,
    r"\byoung\s+(?:[a-z]+\s+)?(prospects|talents|players|[a-z]+ers|[a-z]+s)\b"
);
pattern!(RE_PROSPECT_WORD, r"\b(?:prospects|wonderkids|rising stars)\b");
pattern!(RE_PROSPECTS_UNDER, r"\b(?:prospects|talents|wonderkids)\b.*\bunder\s+(\d{1,2})\b");
pattern!(RE_LEADERBOARD, r"^(?:who (?:are|is) )?(?:the )?(?:top|best|leading|highest)\b");
pattern!(
    RE_POSITION_LISTING,
    r"^(?:show(?: me)?|list|find|get)\s+(?:all\s+)?(?:the\s+)?(?:[a-z]+\s+)?(goalkeepers|keepers|defenders|centre backs|center backs|fullbacks|midfielders|forwards|strikers|wingers|attackers)\b"
);
pattern!(
    RE_NAME_SEARCH,
    r"^(?:find|search for|search|show me|look up|who is|tell me about)\s+(.+)$"
);

/// First capture group of `re` in `text`, parsed as a number.
pub fn capture_number<T: std::str::FromStr>(re: &LazyLock<Option<Regex>>, text: &str) -> Option<T> {
    re.as_ref()?
        .captures(text)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Capture groups `1..` of `re` in `text`, if it matches.
pub fn captures(re: &LazyLock<Option<Regex>>, text: &str) -> Option<Vec<String>> {
    let caps = re.as_ref()?.captures(text)?;
    Some(
        caps.iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect(),
    )
}

pub fn is_match(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(text))
}
