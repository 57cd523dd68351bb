//! The classification tiers, evaluated in order by the tier policy.

mod extraction;
mod fallback;
mod interpretation;
mod pattern;

pub use extraction::EntityExtractionTier;
pub use fallback::FallbackTier;
pub use interpretation::InterpretationTier;
pub use pattern::PatternTier;

use async_trait::async_trait;
use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::ClassificationError;
use scout_core::models::{RequestVariant, Tier};

use crate::query::ParsedQuery;

/// One strategy in the ordered classification sequence.
///
/// `Ok(None)` means the tier declined; errors are absorbed by the policy.
#[async_trait]
pub trait ClassificationTier: Send + Sync {
    fn tier(&self) -> Tier;

    async fn attempt(
        &self,
        query: &ParsedQuery,
        snapshot: &CorpusSnapshot,
    ) -> Result<Option<RequestVariant>, ClassificationError>;
}
