//! Growth Analyzer
//!
//! Summarizes a series into the four stat cards: current height, average
//! growth rate, days growing, and a health label.
//!
//! Health combines the rate with the consistency of growth, measured as the
//! population variance of successive differences. Rules are checked in order
//! and the first match wins:
//! - rate > 0.3 AND variance < 0.1 → Excellent
//! - rate > 0.2 OR variance < 0.2  → Good
//! - rate > 0.1                    → Fair
//! - otherwise                     → Needs Attention

use serde::Serialize;

use crate::generator::{round1, GrowthSeries};
use crate::time_range::TimeRange;

pub const EXCELLENT_MIN_RATE: f64 = 0.3;
pub const EXCELLENT_MAX_VARIANCE: f64 = 0.1;
pub const GOOD_MIN_RATE: f64 = 0.2;
pub const GOOD_MAX_VARIANCE: f64 = 0.2;
pub const FAIR_MIN_RATE: f64 = 0.1;

/// Qualitative health label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl HealthStatus {
    /// Classify from growth rate and diff variance.
    pub fn classify(growth_rate: f64, variance: f64) -> Self {
        if growth_rate > EXCELLENT_MIN_RATE && variance < EXCELLENT_MAX_VARIANCE {
            HealthStatus::Excellent
        } else if growth_rate > GOOD_MIN_RATE || variance < GOOD_MAX_VARIANCE {
            HealthStatus::Good
        } else if growth_rate > FAIR_MIN_RATE {
            HealthStatus::Fair
        } else {
            HealthStatus::NeedsAttention
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::NeedsAttention => "Needs Attention",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "status-excellent",
            HealthStatus::Good => "status-good",
            HealthStatus::Fair => "status-fair",
            HealthStatus::NeedsAttention => "status-warning",
        }
    }
}

/// Summary statistics for one series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSummary {
    /// Last height in the series (cm)
    pub current_height: f64,
    /// Average growth per `rate_unit`, one decimal
    pub growth_rate: f64,
    pub rate_unit: &'static str,
    /// Days covered by the range
    pub total_duration: u32,
    pub health_status: HealthStatus,
}

impl GrowthSummary {
    /// Fixed summary for series too short to analyze.
    pub fn placeholder(current_height: f64) -> Self {
        Self {
            current_height,
            growth_rate: 0.2,
            rate_unit: "week",
            total_duration: 30,
            health_status: HealthStatus::Good,
        }
    }
}

/// Analyze a series generated for `range`.
///
/// Series with fewer than two points get the placeholder summary.
pub fn analyze(series: &GrowthSeries, range: TimeRange) -> GrowthSummary {
    let heights = &series.heights;
    let current_height = series.last_height().unwrap_or(0.0);

    let first_height = match series.first_height() {
        Some(h) if heights.len() >= 2 => h,
        _ => return GrowthSummary::placeholder(current_height),
    };

    let unit = range.label_unit();
    let total_growth = current_height - first_height;
    let growth_rate = round1(total_growth / range.label_count() as f64);

    let diffs = successive_diffs(heights);
    let variance = population_variance(&diffs);

    GrowthSummary {
        current_height,
        growth_rate,
        rate_unit: unit.rate_unit(),
        total_duration: range.total_days(),
        health_status: HealthStatus::classify(growth_rate, variance),
    }
}

/// `d[i] = h[i+1] - h[i]`
pub fn successive_diffs(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Population variance (divides by n). Empty input has zero variance.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
