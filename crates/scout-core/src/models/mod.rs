mod candidate;
mod classification;
mod degradation_event;
mod entity;
mod envelope;
mod request;

pub use candidate::{ProspectBucket, RankedCandidate};
pub use classification::{ClassificationResult, ClassificationState, Confidence, Tier};
pub use degradation_event::DegradationEvent;
pub use entity::EntityRecord;
pub use envelope::{
    Comparison, Diagnostics, EnvelopeError, ErrorKind, PairwiseDelta, ResponseKind, ResultData,
    ResultEnvelope,
};
pub use request::{
    CandidateFilters, CompareRequest, ProspectRequest, RequestVariant, SearchRequest,
    TacticalRequest, UnresolvedRequest,
};
