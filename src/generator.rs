//! Series Generator
//!
//! Synthesizes a height-over-time curve for one species and time range.
//!
//! Model (per simulated day):
//!   stage      = height / max_height
//!   multiplier = 4 * stage * (1 - stage)      // 0 at both ends, 1 at half height
//!   daily      = base_rate * multiplier + U(-variability, +variability)
//!   daily      = max(daily, min_growth)
//!   height    += daily
//!
//! Height starts at 0, so early growth is carried by the noise floor until
//! the logistic term takes over. After each label bucket the height is
//! capped at `max_height` and recorded rounded to one decimal.

use rand::Rng;
use serde::Serialize;

use crate::tables::GrowthProfile;
use crate::time_range::TimeRange;

/// Floor on daily growth so a curve never stalls or shrinks.
pub const MIN_DAILY_GROWTH: f64 = 0.05;

/// Labeled height series (cm)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSeries {
    pub labels: Vec<String>,
    pub heights: Vec<f64>,
}

impl GrowthSeries {
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn first_height(&self) -> Option<f64> {
        self.heights.first().copied()
    }

    pub fn last_height(&self) -> Option<f64> {
        self.heights.last().copied()
    }
}

/// Generate a growth series with the default growth floor.
pub fn generate<R: Rng + ?Sized>(profile: &GrowthProfile, range: TimeRange, rng: &mut R) -> GrowthSeries {
    generate_with_min_growth(profile, range, MIN_DAILY_GROWTH, rng)
}

/// Generate a growth series with an explicit daily growth floor.
pub fn generate_with_min_growth<R: Rng + ?Sized>(
    profile: &GrowthProfile,
    range: TimeRange,
    min_growth: f64,
    rng: &mut R,
) -> GrowthSeries {
    let labels = range.labels();
    let days_per_label = range.days_per_label();

    let mut heights = Vec::with_capacity(labels.len());
    let mut height = 0.0_f64;

    for _ in 0..labels.len() {
        for _ in 0..days_per_label {
            height += daily_growth(profile, height, min_growth, rng);
        }
        height = height.min(profile.max_height);
        // rounding can push a fractional max up by 0.05
        heights.push(round1(height).min(profile.max_height));
    }

    GrowthSeries { labels, heights }
}

/// One day of growth at the given height.
fn daily_growth<R: Rng + ?Sized>(profile: &GrowthProfile, height: f64, min_growth: f64, rng: &mut R) -> f64 {
    let stage = height / profile.max_height;
    let multiplier = 4.0 * stage * (1.0 - stage);
    let noise = if profile.variability > 0.0 {
        rng.gen_range(-profile.variability..profile.variability)
    } else {
        0.0
    };
    (profile.base_rate * multiplier + noise).max(min_growth)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
