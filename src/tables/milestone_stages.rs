//! Growth Stage Definitions
//!
//! Biological milestones per species, expressed as fractions of the final
//! height a series reaches. Each list is ordered by ascending threshold.
//!
//! Only tomato, basil, mint and pepper have their own stage lists. Every
//! other species (lettuce and cilantro included) uses the tomato list.

use serde::Serialize;

/// A single growth stage with its height threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneStage {
    /// Fraction of final height in (0, 1]
    pub threshold: f64,
    /// Icon reference for the UI layer
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

// ============================================================================
// EMBEDDED STAGE DATA
// ============================================================================

static TOMATO_STAGES: &[MilestoneStage] = &[
    MilestoneStage { threshold: 0.1, icon: "fas fa-seedling", title: "Germination", description: "Seeds have sprouted" },
    MilestoneStage { threshold: 0.25, icon: "fas fa-leaf", title: "First True Leaves", description: "First set of true leaves appeared" },
    MilestoneStage { threshold: 0.5, icon: "fas fa-tree", title: "Vegetative Growth", description: "Plant is focusing on leaf and stem growth" },
    MilestoneStage { threshold: 0.75, icon: "fas fa-sun", title: "Flowering", description: "Flowers are forming" },
    MilestoneStage { threshold: 0.9, icon: "fas fa-apple-alt", title: "Fruiting", description: "Small tomatoes are developing" },
];

static BASIL_STAGES: &[MilestoneStage] = &[
    MilestoneStage { threshold: 0.1, icon: "fas fa-seedling", title: "Germination", description: "Seeds have sprouted" },
    MilestoneStage { threshold: 0.3, icon: "fas fa-leaf", title: "First True Leaves", description: "First set of true leaves appeared" },
    MilestoneStage { threshold: 0.6, icon: "fas fa-tree", title: "Bushy Growth", description: "Multiple stems with abundant leaves" },
    MilestoneStage { threshold: 0.8, icon: "fas fa-cut", title: "Ready for Harvest", description: "Leaves are ready for first harvest" },
];

static MINT_STAGES: &[MilestoneStage] = &[
    MilestoneStage { threshold: 0.15, icon: "fas fa-seedling", title: "Sprouting", description: "First shoots emerging" },
    MilestoneStage { threshold: 0.4, icon: "fas fa-leaf", title: "Leaf Development", description: "Characteristic mint leaves forming" },
    MilestoneStage { threshold: 0.7, icon: "fas fa-expand-arrows-alt", title: "Spreading", description: "Plant is spreading through runners" },
    MilestoneStage { threshold: 0.9, icon: "fas fa-cut", title: "Ready for Harvest", description: "Aromatic leaves ready for harvest" },
];

static PEPPER_STAGES: &[MilestoneStage] = &[
    MilestoneStage { threshold: 0.1, icon: "fas fa-seedling", title: "Germination", description: "Seeds have sprouted" },
    MilestoneStage { threshold: 0.3, icon: "fas fa-leaf", title: "True Leaves", description: "First set of true leaves appeared" },
    MilestoneStage { threshold: 0.5, icon: "fas fa-tree", title: "Vegetative Growth", description: "Plant is developing strong stems" },
    MilestoneStage { threshold: 0.7, icon: "fas fa-sun", title: "Flowering", description: "White flowers are forming" },
    MilestoneStage { threshold: 0.9, icon: "fas fa-pepper-hot", title: "Fruiting", description: "Peppers are developing" },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Get the ordered stage list for a species, falling back to tomato.
pub fn stages_for(species_id: &str) -> &'static [MilestoneStage] {
    match species_id.trim() {
        "tomato" => TOMATO_STAGES,
        "basil" => BASIL_STAGES,
        "mint" => MINT_STAGES,
        "pepper" => PEPPER_STAGES,
        other => {
            tracing::debug!("No stage list for '{}', using tomato stages", other);
            TOMATO_STAGES
        }
    }
}
