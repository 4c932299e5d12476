//! View Models for the growth tracker widget
//!
//! Display-ready data for the stat cards, the chart, the milestone list and
//! the tips panel. Rendering itself is the UI layer's job; everything here
//! serializes straight to JSON.

use serde::Serialize;

use crate::analysis::GrowthSummary;
use crate::milestones::Milestone;

pub const DATASET_LABEL: &str = "Plant Height (cm)";
pub const X_AXIS_TITLE: &str = "Time";
pub const Y_AXIS_TITLE: &str = "Height (cm)";

// ============================================================================
// Stat cards
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCards {
    /// "12.5 cm"
    pub current_height: String,
    /// "0.4 cm/week"
    pub growth_rate: String,
    /// "30 days"
    pub days_growing: String,
    /// "Needs Attention"
    pub health_status: String,
    /// "status-warning"
    pub health_class: String,
}

impl StatCards {
    pub fn from_summary(summary: &GrowthSummary) -> Self {
        Self {
            current_height: format!("{} cm", format_number(summary.current_height)),
            growth_rate: format!("{} cm/{}", format_number(summary.growth_rate), summary.rate_unit),
            days_growing: format!("{} days", summary.total_duration),
            health_status: summary.health_status.display_text().to_string(),
            health_class: summary.health_status.css_class().to_string(),
        }
    }
}

// ============================================================================
// Chart
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub title: String,
    pub labels: Vec<String>,
    pub heights: Vec<f64>,
    pub dataset_label: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
}

// ============================================================================
// Milestones
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneView {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub date: String,
}

impl From<&Milestone> for MilestoneView {
    fn from(m: &Milestone) -> Self {
        Self {
            icon: m.icon.to_string(),
            title: m.title.to_string(),
            description: m.description.to_string(),
            date: m.date_label.clone(),
        }
    }
}

/// Everything the widget shows for one species/range selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthView {
    pub species_id: String,
    pub plant_name: String,
    pub time_range: String,
    pub stats: StatCards,
    pub chart: ChartView,
    pub milestones: Vec<MilestoneView>,
    pub tips: Vec<String>,
}

/// "Tomato Growth Progress". Uses the raw selection, so unknown species
/// keep their own name even though they are simulated as tomato.
pub fn chart_title(species_id: &str) -> String {
    let mut chars = species_id.chars();
    match chars.next() {
        Some(first) => format!("{}{} Growth Progress", first.to_uppercase(), chars.as_str()),
        None => "Growth Progress".to_string(),
    }
}

/// Shortest decimal form of a one-decimal value: 12.0 → "12", 0.4 → "0.4".
pub fn format_number(value: f64) -> String {
    // -0.0 + 0.0 == +0.0, avoids printing "-0"
    format!("{}", value + 0.0)
}
