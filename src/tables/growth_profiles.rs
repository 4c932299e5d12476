//! Species Growth Profiles
//!
//! Static per-species parameters for the growth model.
//!
//! Columns:
//! - base_rate: peak daily growth (cm/day) reached at half of max height
//! - variability: amplitude of the uniform daily noise (cm)
//! - max_height: asymptotic height the curve is capped at (cm)

use serde::Serialize;

/// Growth parameters for one species
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthProfile {
    pub species_id: &'static str,
    pub display_name: &'static str,
    pub base_rate: f64,
    pub variability: f64,
    pub max_height: f64,
}

/// Species used when a lookup misses.
pub const DEFAULT_SPECIES: &str = "tomato";

// ============================================================================
// EMBEDDED PROFILE DATA
// ============================================================================

static PROFILES: &[GrowthProfile] = &[
    GrowthProfile { species_id: "tomato", display_name: "Tomato", base_rate: 0.4, variability: 0.15, max_height: 60.0 },
    GrowthProfile { species_id: "basil", display_name: "Basil", base_rate: 0.3, variability: 0.1, max_height: 40.0 },
    GrowthProfile { species_id: "mint", display_name: "Mint", base_rate: 0.35, variability: 0.12, max_height: 30.0 },
    GrowthProfile { species_id: "pepper", display_name: "Pepper", base_rate: 0.25, variability: 0.08, max_height: 45.0 },
    GrowthProfile { species_id: "lettuce", display_name: "Lettuce", base_rate: 0.28, variability: 0.09, max_height: 25.0 },
    GrowthProfile { species_id: "cilantro", display_name: "Cilantro", base_rate: 0.22, variability: 0.07, max_height: 20.0 },
];

/// All known species in selector order.
pub static SPECIES: &[&str] = &["tomato", "basil", "mint", "pepper", "lettuce", "cilantro"];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Find the profile for a species id, if it is known.
pub fn find_profile(species_id: &str) -> Option<&'static GrowthProfile> {
    let key = species_id.trim();
    PROFILES.iter().find(|p| p.species_id == key)
}

/// Get the growth profile for a species.
///
/// Unknown ids resolve to the tomato profile; this is a fallback policy,
/// not a failure.
///
/// # Examples
/// ```
/// use growth_tracker_rust::tables::growth_profiles::lookup_profile;
///
/// assert_eq!(lookup_profile("basil").max_height, 40.0);
/// assert_eq!(lookup_profile("dragonfruit").species_id, "tomato");
/// ```
pub fn lookup_profile(species_id: &str) -> &'static GrowthProfile {
    match find_profile(species_id) {
        Some(profile) => profile,
        None => {
            tracing::debug!("Unknown species '{}', using {} profile", species_id, DEFAULT_SPECIES);
            default_profile()
        }
    }
}

/// The fallback profile.
pub fn default_profile() -> &'static GrowthProfile {
    // PROFILES[0] is tomato; the table test pins this
    &PROFILES[0]
}

/// Get all profiles (for testing/debugging)
pub fn all_profiles() -> &'static [GrowthProfile] {
    PROFILES
}
