mod json_provider;
pub mod matching;
mod snapshot;

pub use json_provider::JsonCorpusProvider;
pub use snapshot::{CorpusSnapshot, NameMatch, SnapshotCell};
