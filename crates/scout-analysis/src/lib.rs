//! # scout-analysis
//!
//! Analysis router and handlers, response formatter, result cache, and the
//! [`ScoutEngine`] entry point.

pub mod cache;
pub mod engine;
pub mod formatter;
pub mod router;

pub use cache::ResultCache;
pub use engine::ScoutEngine;
pub use formatter::ResponseFormatter;
pub use router::{AnalysisOutput, AnalysisRouter};
