//! Care tips shown beside the growth chart.

static TOMATO_TIPS: &[&str] = &[
    "Water consistently to prevent blossom end rot",
    "Provide support as plants grow taller",
    "Prune suckers for larger fruit production",
    "Ensure at least 6 hours of sunlight daily",
    "Feed with balanced fertilizer every 2 weeks",
];

static BASIL_TIPS: &[&str] = &[
    "Pinch off flower buds to encourage leaf growth",
    "Water at the base to prevent leaf diseases",
    "Harvest from the top to promote bushier growth",
    "Provide at least 6 hours of sunlight",
    "Space plants to ensure good air circulation",
];

static MINT_TIPS: &[&str] = &[
    "Keep soil consistently moist",
    "Harvest regularly to encourage new growth",
    "Provide partial shade in hot climates",
    "Prune to prevent flowering for better flavor",
];

static PEPPER_TIPS: &[&str] = &[
    "Allow soil to dry slightly between waterings",
    "Provide support for heavy fruit-bearing branches",
    "Feed with phosphorus-rich fertilizer when flowering",
    "Maintain warm temperatures (above 18°C)",
    "Harvest when peppers reach full size and color",
];

static LETTUCE_TIPS: &[&str] = &[
    "Keep soil consistently moist but not soggy",
    "Provide partial shade in hot weather",
    "Harvest outer leaves first for continuous growth",
    "Plant in succession for ongoing harvests",
    "Harvest in the morning for crispest leaves",
];

static CILANTRO_TIPS: &[&str] = &[
    "Plant in succession every 2-3 weeks for continuous harvest",
    "Keep soil consistently moist",
    "Harvest leaves before flowering begins",
    "Grow in partial shade in hot climates",
    "Harvest by cutting stems near the base",
];

/// Care tips for a species; unknown ids get the tomato tips.
pub fn care_tips(species_id: &str) -> &'static [&'static str] {
    match species_id.trim() {
        "tomato" => TOMATO_TIPS,
        "basil" => BASIL_TIPS,
        "mint" => MINT_TIPS,
        "pepper" => PEPPER_TIPS,
        "lettuce" => LETTUCE_TIPS,
        "cilantro" => CILANTRO_TIPS,
        _ => TOMATO_TIPS,
    }
}
