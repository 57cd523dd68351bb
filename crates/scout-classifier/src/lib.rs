//! # scout-classifier
//!
//! Turns a free-text scouting question into a typed analysis request.
//!
//! Tiers run in order (pattern templates, roster-aware entity
//! extraction, an optional external interpreter) and the first confident
//! one wins. Anything left over resolves to the fallback with example
//! queries. Tier failures never escape; they are recorded as degradation
//! events on the result.

pub mod classifier;
pub mod filters;
pub mod http;
pub mod patterns;
pub mod payload;
pub mod policy;
pub mod query;
pub mod state;
pub mod tiers;
pub mod vocabulary;

pub use classifier::QueryClassifier;
pub use http::HttpInterpreter;
pub use payload::{parse_payload, request_schema};
pub use policy::TierPolicy;
pub use query::ParsedQuery;
