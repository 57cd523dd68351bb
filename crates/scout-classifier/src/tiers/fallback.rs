use scout_core::models::{RequestVariant, UnresolvedRequest};

/// Terminal tier: always resolves to the unresolved variant with example
/// queries.
#[derive(Debug, Clone)]
pub struct FallbackTier {
    suggestions: Vec<String>,
}

impl FallbackTier {
    pub fn new(suggestions: Vec<String>) -> Self {
        Self { suggestions }
    }

    pub fn resolve(&self) -> RequestVariant {
        RequestVariant::Unresolved(UnresolvedRequest {
            suggestions: self.suggestions.clone(),
        })
    }
}
