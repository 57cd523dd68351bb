/// Scout version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight-map key for the youth term `weight * max(0, reference_age - age)`.
pub const AGE_FACTOR: &str = "age_factor";

/// Minutes at which a player counts as a regular starter.
pub const REGULAR_STARTER_MINUTES: u32 = 2_000;

/// Age at or under which a candidate counts as young in insights.
pub const YOUNG_AGE: u32 = 23;

/// Longest reasoning excerpt quoted in a narrative.
pub const MAX_REASONING_CHARS: usize = 150;
