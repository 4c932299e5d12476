//! Static lookup tables keyed by species id.
//!
//! All three tables share the same policy: unknown ids resolve to the
//! tomato entry instead of failing.

pub mod care_tips;
pub mod growth_profiles;
pub mod milestone_stages;

pub use care_tips::care_tips;
pub use growth_profiles::{lookup_profile, GrowthProfile, DEFAULT_SPECIES, SPECIES};
pub use milestone_stages::{stages_for, MilestoneStage};
