//! Candidate pool filtering shared by the handlers.

use scout_core::corpus::matching::fold;
use scout_core::models::{CandidateFilters, EntityRecord};

/// Folded, case- and diacritic-insensitive substring match. A blank
/// wanted value matches everything.
pub fn text_matches(field: &str, wanted: &str) -> bool {
    let wanted = fold(wanted);
    wanted.is_empty() || fold(field).contains(&wanted)
}

pub fn matches_filters(record: &EntityRecord, filters: &CandidateFilters) -> bool {
    filters.league.as_deref().map_or(true, |l| text_matches(&record.league, l))
        && filters.position.as_deref().map_or(true, |p| text_matches(&record.position, p))
        && filters.team.as_deref().map_or(true, |t| text_matches(&record.team, t))
        && filters.age_min.map_or(true, |min| record.age >= min)
        && filters.age_max.map_or(true, |max| record.age <= max)
        && filters.min_minutes.map_or(true, |min| record.minutes >= min)
}

/// Any-of positional compatibility. No constraints admits everyone.
pub fn position_compatible(record: &EntityRecord, constraints: &[String]) -> bool {
    constraints.is_empty() || constraints.iter().any(|c| text_matches(&record.position, c))
}
