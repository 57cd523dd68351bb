use scout_core::config::BucketThresholds;
use scout_core::models::ProspectBucket;

/// Map a rating in [0, 1] onto the ordinal prospect buckets.
pub fn bucket_for(rating: f64, thresholds: &BucketThresholds) -> ProspectBucket {
    if rating >= thresholds.elite {
        ProspectBucket::Elite
    } else if rating >= thresholds.high {
        ProspectBucket::High
    } else if rating >= thresholds.solid {
        ProspectBucket::Solid
    } else {
        ProspectBucket::Developing
    }
}
