use scout_core::corpus::matching::fold;

use crate::vocabulary;

/// A query normalized once and shared by every tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Text as received, trimmed.
    pub raw: String,
    /// Folded text: lowercase, no diacritics, punctuation collapsed.
    pub folded: String,
    /// Folded text with list commas kept, e.g. `compare a, b and c`.
    pub listed: String,
    /// The query asks for a relation to other entities.
    pub relational: bool,
}

impl ParsedQuery {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        let folded = fold(raw);
        let listed = raw
            .split(',')
            .map(fold)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let relational = vocabulary::has_relational_cue(&folded);
        Self {
            raw: raw.to_string(),
            folded,
            listed,
            relational,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.folded.split(' ').filter(|t| !t.is_empty())
    }
}
