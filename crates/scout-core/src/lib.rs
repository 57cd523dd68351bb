//! # scout-core
//!
//! Foundation crate for the Scout query pipeline.
//! Defines the corpus snapshot, request/result models, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod corpus;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScoutConfig;
pub use corpus::{CorpusSnapshot, SnapshotCell};
pub use errors::{ScoutError, ScoutResult};
pub use models::{
    ClassificationResult, ClassificationState, Confidence, EntityRecord, RankedCandidate,
    RequestVariant, ResultEnvelope, Tier,
};
