//! Growth Tracker
//!
//! Runs the full pipeline for one selection:
//! profile lookup → series → summary → milestones → tips.
//!
//! The tracker owns its RNG, so repeated calls with the same selection
//! produce fresh curves (the widget's "refresh" button), while a seeded
//! tracker replays the same sequence of curves.

use rand::Rng;
use serde::Serialize;

use crate::analysis::{analyze, GrowthSummary};
use crate::config::TrackerConfig;
use crate::generator::{generate_with_min_growth, GrowthSeries};
use crate::milestones::{derive_milestones, Milestone};
use crate::rng::GrowthRng;
use crate::tables::{care_tips, lookup_profile, GrowthProfile};
use crate::time_range::TimeRange;
use crate::view_models::{
    chart_title, ChartView, GrowthView, MilestoneView, StatCards, DATASET_LABEL, X_AXIS_TITLE,
    Y_AXIS_TITLE,
};

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthReport {
    /// Species as requested (may be unknown)
    pub species_id: String,
    pub profile: &'static GrowthProfile,
    pub time_range: TimeRange,
    pub series: GrowthSeries,
    pub summary: GrowthSummary,
    pub milestones: Vec<Milestone>,
    pub tips: &'static [&'static str],
}

impl GrowthReport {
    /// Build the display view for the widget
    pub fn view(&self) -> GrowthView {
        GrowthView {
            species_id: self.species_id.clone(),
            plant_name: self.profile.display_name.to_string(),
            time_range: self.time_range.to_string(),
            stats: StatCards::from_summary(&self.summary),
            chart: ChartView {
                title: chart_title(&self.species_id),
                labels: self.series.labels.clone(),
                heights: self.series.heights.clone(),
                dataset_label: DATASET_LABEL,
                x_axis_title: X_AXIS_TITLE,
                y_axis_title: Y_AXIS_TITLE,
            },
            milestones: self.milestones.iter().map(MilestoneView::from).collect(),
            tips: self.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Run the pipeline with a caller-supplied RNG.
pub fn build_report<R: Rng + ?Sized>(
    species_id: &str,
    range: TimeRange,
    min_daily_growth: f64,
    rng: &mut R,
) -> GrowthReport {
    let profile = lookup_profile(species_id);
    let series = generate_with_min_growth(profile, range, min_daily_growth, rng);
    let summary = analyze(&series, range);
    let milestones = derive_milestones(species_id, range, &series);

    tracing::debug!(
        "Report for '{}' ({}): {} points, current {} cm, {:?}",
        species_id,
        range,
        series.len(),
        summary.current_height,
        summary.health_status
    );

    GrowthReport {
        species_id: species_id.to_string(),
        profile,
        time_range: range,
        series,
        summary,
        milestones,
        tips: care_tips(species_id),
    }
}

/// Stateful entry point for the widget
#[derive(Debug, Clone)]
pub struct GrowthTracker {
    config: TrackerConfig,
    rng: GrowthRng,
}

impl Default for GrowthTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl GrowthTracker {
    pub fn new(config: TrackerConfig) -> Self {
        let rng = GrowthRng::from_optional_seed(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Generate a report for a species and range.
    pub fn report(&mut self, species_id: &str, range: TimeRange) -> GrowthReport {
        build_report(species_id, range, self.config.min_daily_growth, &mut self.rng)
    }

    /// Same as `report` with the range given as a selector string.
    pub fn report_for(&mut self, species_id: &str, range: &str) -> GrowthReport {
        self.report(species_id, TimeRange::parse_or_default(range))
    }
}
