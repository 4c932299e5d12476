//! Milestone Deriver
//!
//! Places each growth stage of a species on the time label whose height is
//! closest to `threshold * final_height`.
//!
//! Every stage yields exactly one milestone, even when the curve never gets
//! near its threshold: the best-fit label is used regardless. Output follows
//! stage order (ascending threshold), which is not necessarily chronological.

use serde::Serialize;

use crate::generator::GrowthSeries;
use crate::tables::{stages_for, MilestoneStage};
use crate::time_range::TimeRange;

/// A growth stage placed on the timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub date_label: String,
}

/// Derive milestones for a species from its generated series.
///
/// `range` is accepted for parity with the other pipeline stages; labels are
/// taken from the series itself so every `date_label` is one of them.
pub fn derive_milestones(species_id: &str, range: TimeRange, series: &GrowthSeries) -> Vec<Milestone> {
    let stages = stages_for(species_id);
    let (Some(final_height), Some(last_label)) = (series.last_height(), series.labels.len().checked_sub(1)) else {
        tracing::debug!("Empty {} series for '{}', no milestones", range, species_id);
        return Vec::new();
    };

    stages
        .iter()
        .map(|stage| place_stage(stage, final_height, series, last_label))
        .collect()
}

/// Place one stage; the index is clamped to the last label when the series
/// carries more heights than labels.
fn place_stage(stage: &MilestoneStage, final_height: f64, series: &GrowthSeries, last_label: usize) -> Milestone {
    let target = stage.threshold * final_height;
    let index = closest_index(&series.heights, target)
        .unwrap_or(0)
        .min(last_label);

    Milestone {
        title: stage.title,
        description: stage.description,
        icon: stage.icon,
        date_label: series.labels[index].clone(),
    }
}

/// Index of the value closest to `target`; ties go to the lowest index.
pub fn closest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        let diff = (v - target).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((i, diff)),
        }
    }
    best.map(|(i, _)| i)
}
