//! Growth Tracker
//!
//! Synthetic plant-growth curves for the storefront's growth tracker widget.
//!
//! Pipeline:
//! - `tables/`: static per-species profiles, growth stages and care tips
//! - `generator`: logistic-style height series with bounded daily noise
//! - `analysis`: current height, growth rate and health label
//! - `milestones`: growth stages placed on the nearest time label
//! - `tracker`: runs the pipeline and builds display view models
//!
//! Unknown species and time ranges never fail; they resolve to the tomato
//! tables and the month range.

pub mod analysis;
pub mod config;
pub mod generator;
pub mod milestones;
pub mod rng;
pub mod tables;
pub mod time_range;
pub mod tracker;
pub mod view_models;

// Re-export commonly used types
pub use analysis::{analyze, GrowthSummary, HealthStatus};
pub use config::{ConfigError, TrackerConfig};
pub use generator::{generate, generate_with_min_growth, GrowthSeries};
pub use milestones::{derive_milestones, Milestone};
pub use rng::GrowthRng;
pub use tables::{care_tips, lookup_profile, stages_for, GrowthProfile, MilestoneStage};
pub use time_range::{LabelUnit, TimeRange};
pub use tracker::{build_report, GrowthReport, GrowthTracker};
pub use view_models::GrowthView;
