//! Deterministic food-chaining rules.
//!
//! Candidates are collected in priority order: the curated table for the
//! exact food, then texture rules and flavor rules from the food's profile,
//! then a fixed set of plain foods. The last tier is always present, so the
//! backend never returns an empty list.

use std::collections::HashSet;

use crate::domain::{
    chain_suggestion::{
        entities::{SuggestionCandidate, SuggestionRequest},
        ports::SuggestionBackend,
    },
    common::entities::app_errors::CoreError,
};

type Rule = (&'static str, f64, &'static str);

const CURATED: &[(&str, &[Rule])] = &[
    (
        "chicken nuggets",
        &[
            ("Chicken tenders", 0.92, "Same crispy breaded coating and mild chicken flavor in a slightly larger piece"),
            ("Popcorn chicken", 0.90, "Bite-sized pieces with the same crunchy coating and savory chicken taste"),
            ("Chicken patty", 0.85, "Familiar mild chicken flavor and crisp coating in a round shape"),
            ("Fish sticks", 0.78, "Similar crispy breaded texture with a mild, flaky center"),
            ("Mozzarella sticks", 0.70, "Crunchy golden coating with a soft, melty cheesy center"),
        ],
    ),
    (
        "mac and cheese",
        &[
            ("Cheese tortellini", 0.85, "Soft pasta with the same creamy, cheesy flavor"),
            ("Buttered shells", 0.80, "Same soft pasta shape with a mild, buttery taste"),
            ("Cheesy rice", 0.72, "Soft, warm texture with a familiar cheesy flavor"),
            ("Cheese quesadilla", 0.68, "Warm melted cheese with a soft tortilla texture"),
        ],
    ),
    (
        "pizza",
        &[
            ("Cheese flatbread", 0.88, "Same crisp crust and melty cheese on a thinner base"),
            ("Pizza bagel", 0.85, "Familiar tomato and cheese flavor on a chewy bagel"),
            ("Cheesy garlic bread", 0.78, "Crisp bread texture with the same cheesy, savory taste"),
            ("Cheese quesadilla", 0.75, "Warm, melty cheese with a crisp toasted outside"),
        ],
    ),
    (
        "french fries",
        &[
            ("Potato wedges", 0.88, "Same salty potato flavor with a softer, thicker bite"),
            ("Tater tots", 0.86, "Crispy outside and soft potato center with the same salty taste"),
            ("Sweet potato fries", 0.75, "Same crispy fry shape with a slightly sweet flavor"),
            ("Hash browns", 0.72, "Crisp, golden potato texture with a mild salty flavor"),
        ],
    ),
    (
        "grilled cheese",
        &[
            ("Cheese quesadilla", 0.85, "Warm melted cheese inside a crisp, toasted wrap"),
            ("Sourdough cheese toastie", 0.82, "Familiar crisp, buttery bread with a slightly tangy flavor"),
            ("Ham and cheese melt", 0.80, "Same toasted bread and melty cheese with a mild savory addition"),
        ],
    ),
    (
        "plain pasta",
        &[
            ("Buttered egg noodles", 0.85, "Soft noodles with the same plain, mild flavor"),
            ("Orzo", 0.80, "Small soft pasta shape with a familiar mild taste"),
            ("Pasta with parmesan", 0.75, "Same soft texture with a light cheesy, salty flavor"),
        ],
    ),
    (
        "peanut butter sandwich",
        &[
            ("Almond butter sandwich", 0.85, "Same soft bread and creamy, nutty spread"),
            ("Peanut butter toast", 0.82, "Same nutty flavor on warm, crisp toast"),
            ("Peanut butter and banana sandwich", 0.78, "Familiar creamy peanut butter with a soft, sweet addition"),
        ],
    ),
    (
        "yogurt",
        &[
            ("Fruit smoothie", 0.80, "Cold, creamy texture with a similar fruity sweetness"),
            ("Vanilla pudding", 0.75, "Smooth, creamy texture served chilled"),
            ("Cottage cheese", 0.68, "Cold and creamy with a mild, slightly tangy taste"),
        ],
    ),
];

const TEXTURE_RULES: &[(&[&str], &[Rule])] = &[
    (
        &["crunchy", "crispy", "crisp"],
        &[
            ("Pretzels", 0.70, "Shares the crunchy texture with a light salty flavor"),
            ("Crackers", 0.68, "Light, crisp texture with a plain flavor"),
            ("Tortilla chips", 0.66, "Same satisfying crunch with a mild corn taste"),
            ("Apple slices", 0.60, "Fresh, crisp crunch with a mild sweet taste"),
        ],
    ),
    (
        &["soft", "tender", "fluffy"],
        &[
            ("Mashed potatoes", 0.70, "Soft, smooth texture with a mild flavor"),
            ("Pancakes", 0.66, "Soft, fluffy texture with a gentle sweet taste"),
            ("Banana", 0.62, "Soft texture with a gentle natural sweetness"),
        ],
    ),
    (
        &["creamy", "smooth"],
        &[
            ("Vanilla pudding", 0.70, "Smooth, creamy texture with a mild sweet flavor"),
            ("Mashed sweet potato", 0.66, "Creamy, smooth texture with a mild sweet flavor"),
            ("Hummus with pita", 0.62, "Creamy texture with a mild, savory taste"),
        ],
    ),
    (
        &["chewy"],
        &[
            ("Bagel", 0.68, "Similar chewy bread texture with a plain flavor"),
            ("Soft pretzel", 0.66, "Chewy texture with a light salty flavor"),
            ("Dried mango", 0.60, "Chewy texture with a fruity sweetness"),
        ],
    ),
];

const FLAVOR_RULES: &[(&[&str], &[Rule])] = &[
    (
        &["salty"],
        &[
            ("Pretzels", 0.62, "Shares a salty flavor with a light crunch"),
            ("Popcorn", 0.60, "Light, salty flavor with an airy crunch"),
            ("Salted edamame", 0.55, "Mild, salty flavor with a tender bite"),
        ],
    ),
    (
        &["sweet"],
        &[
            ("Apple slices with honey", 0.60, "Sweet flavor with a crisp texture"),
            ("Banana bread", 0.58, "Soft texture and gentle sweet flavor"),
            ("Strawberries", 0.55, "Fresh, fruity sweetness"),
        ],
    ),
    (
        &["mild", "bland", "plain"],
        &[
            ("White rice", 0.60, "Plain, mild flavor with a soft texture"),
            ("Toast", 0.58, "Plain flavor with a warm, crisp texture"),
            ("Scrambled eggs", 0.55, "Mild flavor and soft texture"),
        ],
    ),
    (
        &["savory", "umami"],
        &[
            ("Cheese crackers", 0.60, "Savory, cheesy flavor with a crunch"),
            ("Chicken noodle soup", 0.58, "Warm, savory flavor with soft noodles"),
        ],
    ),
    (
        &["cheesy"],
        &[
            ("Cheese crackers", 0.62, "Same cheesy flavor with a light crunch"),
            ("Cheese quesadilla", 0.60, "Warm, melty cheesy flavor in a soft tortilla"),
        ],
    ),
    (
        &["tangy", "sour"],
        &[
            ("Yogurt with berries", 0.55, "Tangy, creamy taste with a fruity finish"),
            ("Dill pickles", 0.52, "Crunchy texture with a tangy flavor"),
        ],
    ),
];

const SAFE_FOODS: &[Rule] = &[
    ("White rice", 0.50, "Soft texture and plain, mild flavor that goes with most meals"),
    ("Buttered noodles", 0.50, "Soft, smooth noodles with a gentle buttery taste"),
    ("Plain crackers", 0.45, "Light, crisp texture with a simple salty flavor"),
    ("Toast", 0.45, "Warm, crisp texture with a plain, familiar flavor"),
    ("Banana", 0.40, "Soft texture with a gentle natural sweetness"),
];

/// The rule-table backend. Needs no external service and cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSuggestionBackend;

impl RuleBasedSuggestionBackend {
    pub fn new() -> Self {
        Self
    }

    /// Ranked candidates for `request`, at most `request.count` long and
    /// never empty while `request.count > 0`.
    pub fn suggest(&self, request: &SuggestionRequest) -> Vec<SuggestionCandidate> {
        let current = request.food_name.trim().to_lowercase();
        let mut seen: HashSet<String> = HashSet::from([current.clone()]);
        let mut candidates = Vec::new();

        let mut push_rules = |rules: &[Rule]| {
            for (name, score, reasoning) in rules {
                if seen.insert(name.to_lowercase()) {
                    candidates.push(SuggestionCandidate::new(*name, *score, *reasoning));
                }
            }
        };

        if let Some((_, rules)) = CURATED.iter().find(|(food, _)| *food == current) {
            push_rules(*rules);
        }

        if let Some(profile) = &request.profile {
            for rules in matching_rules(TEXTURE_RULES, profile.texture.as_deref()) {
                push_rules(rules);
            }
            for rules in matching_rules(FLAVOR_RULES, profile.flavor_profile.as_deref()) {
                push_rules(rules);
            }
        }

        push_rules(SAFE_FOODS);

        candidates.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        candidates.truncate(request.count);
        candidates
    }
}

fn matching_rules(
    table: &'static [(&'static [&'static str], &'static [Rule])],
    trait_value: Option<&str>,
) -> impl Iterator<Item = &'static [Rule]> {
    let lowered = trait_value.map(str::to_lowercase).unwrap_or_default();
    table
        .iter()
        .filter(move |(keywords, _)| {
            !lowered.is_empty() && keywords.iter().any(|keyword| lowered.contains(keyword))
        })
        .map(|(_, rules)| *rules)
}

impl SuggestionBackend for RuleBasedSuggestionBackend {
    async fn generate(
        &self,
        request: SuggestionRequest,
    ) -> Result<Vec<SuggestionCandidate>, CoreError> {
        Ok(self.suggest(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::tone::{is_gentle, mentions_sensory_trait},
        food_profile::entities::FoodProfile,
    };

    fn suggest_for(food_name: &str, profile: Option<FoodProfile>, count: usize) -> Vec<SuggestionCandidate> {
        RuleBasedSuggestionBackend.suggest(&SuggestionRequest {
            food_name: food_name.to_string(),
            profile,
            count,
        })
    }

    fn all_rules() -> impl Iterator<Item = &'static Rule> {
        CURATED
            .iter()
            .flat_map(|(_, rules)| rules.iter())
            .chain(TEXTURE_RULES.iter().flat_map(|(_, rules)| rules.iter()))
            .chain(FLAVOR_RULES.iter().flat_map(|(_, rules)| rules.iter()))
            .chain(SAFE_FOODS.iter())
    }

    #[test]
    fn test_every_rule_reasoning_is_gentle_and_sensory() {
        for (name, score, reasoning) in all_rules() {
            assert!(is_gentle(name), "{name}");
            assert!(is_gentle(reasoning), "{reasoning}");
            assert!(mentions_sensory_trait(reasoning), "{reasoning}");
            assert!((0.0..=1.0).contains(score), "{name}: {score}");
        }
    }

    #[test]
    fn test_curated_match_is_case_insensitive() {
        let candidates = suggest_for("Chicken Nuggets", None, 5);

        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0].food_name, "Chicken tenders");
        assert!(
            candidates
                .iter()
                .any(|c| c.food_name.to_lowercase().contains("chicken") && c.similarity_score >= 0.8)
        );
    }

    #[test]
    fn test_unknown_food_without_profile_falls_back_to_safe_foods() {
        let candidates = suggest_for("Dragonfruit sorbet", None, 3);

        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.similarity_score <= 0.5));
    }

    #[test]
    fn test_profile_texture_outranks_flavor_and_fallback() {
        let profile = FoodProfile::new("Veggie straws")
            .with_texture("Crunchy")
            .with_flavor("salty");
        let candidates = suggest_for("Veggie straws", Some(profile), 10);

        assert_eq!(candidates[0].food_name, "Pretzels");
        assert!((candidates[0].similarity_score - 0.70).abs() < f64::EPSILON);
        assert!(candidates.iter().any(|c| c.food_name == "Popcorn"));
        let names: HashSet<_> = candidates.iter().map(|c| c.food_name.clone()).collect();
        assert_eq!(names.len(), candidates.len(), "duplicates are collapsed");
    }

    #[test]
    fn test_never_suggests_the_current_food() {
        let candidates = suggest_for("white rice", None, 10);
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.food_name.to_lowercase() != "white rice"));
    }

    #[test]
    fn test_results_are_sorted_descending() {
        let profile = FoodProfile::new("x").with_texture("soft").with_flavor("sweet");
        let candidates = suggest_for("Pizza", Some(profile), 10);

        assert!(
            candidates
                .windows(2)
                .all(|pair| pair[0].similarity_score >= pair[1].similarity_score)
        );
    }
}
