//! Filter extraction shared by the local tiers.

use scout_core::models::CandidateFilters;

use crate::patterns::{self, capture_number, captures};
use crate::vocabulary;

/// League, position, age comparators, and minutes mentioned in `folded`.
/// Team names need the roster and are resolved by the extraction tier.
pub fn extract_filters(folded: &str) -> CandidateFilters {
    let mut filters = CandidateFilters {
        league: vocabulary::find_league(folded).map(str::to_string),
        position: vocabulary::find_position(folded).map(str::to_string),
        ..CandidateFilters::default()
    };

    if let Some(range) = captures(&patterns::RE_AGE_RANGE, folded) {
        let bounds: Vec<u32> = range.iter().filter_map(|s| s.parse().ok()).collect();
        if let &[low, high] = bounds.as_slice() {
            filters.age_min = Some(low.min(high));
            filters.age_max = Some(low.max(high));
        }
    }
    // "under 21" means at most 20.
    if let Some(n) = capture_number::<u32>(&patterns::RE_AGE_UNDER, folded)
        .or_else(|| capture_number(&patterns::RE_AGE_UNDER_SHORT, folded))
    {
        filters.age_max = Some(n.saturating_sub(1));
    }
    if let Some(n) = capture_number::<u32>(&patterns::RE_AGE_OVER, folded) {
        filters.age_min = Some(n + 1);
    }
    filters.min_minutes = capture_number(&patterns::RE_MINUTES, folded);
    filters
}

/// Requested result size, e.g. `top 5`.
pub fn extract_limit(folded: &str) -> Option<usize> {
    capture_number::<usize>(&patterns::RE_LIMIT, folded).filter(|n| *n > 0)
}

/// Whether `folded` mentions anything that narrows the pool beyond a name.
pub fn has_filter_vocabulary(folded: &str) -> bool {
    !extract_filters(folded).is_empty() || !vocabulary::find_stats(folded).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_league_position_and_comparators() {
        let f = extract_filters("show me defenders under 25 in serie a with 900 minutes");
        assert_eq!(f.league.as_deref(), Some("ITA-Serie A"));
        assert_eq!(f.position.as_deref(), Some("Defender"));
        assert_eq!(f.age_max, Some(24));
        assert_eq!(f.age_min, None);
        assert_eq!(f.min_minutes, Some(900));
    }

    #[test]
    fn older_than_and_ranges() {
        assert_eq!(extract_filters("forwards older than 30").age_min, Some(31));
        let f = extract_filters("midfielders aged 19 to 22");
        assert_eq!((f.age_min, f.age_max), (Some(19), Some(22)));
        assert_eq!(extract_filters("u21 keepers").age_max, Some(20));
    }

    #[test]
    fn plain_names_carry_no_filters() {
        assert!(!has_filter_vocabulary("haaland"));
        assert!(has_filter_vocabulary("haaland goals"));
        assert_eq!(extract_limit("top 5 scorers"), Some(5));
        assert_eq!(extract_limit("top scorers"), None);
    }
}
