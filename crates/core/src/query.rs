//! The search-and-filter query engine.
//!
//! A [`Query`] is a structured set of optional filter fields plus an optional
//! free-text search term. Each active filter is applied as an independent
//! predicate pass with logical AND semantics, so filter order never changes
//! the result set. When a search term is present the surviving records are
//! ordered by an additive relevance score; the sort is stable, so ties keep
//! their store order. Every output record carries the derived seasonal flag.
//!
//! Unknown enumeration values for `category`, `health_goal` and `season`
//! deliberately match nothing instead of erroring; the boundary stays
//! permissive and returns an empty result set.

use serde::Deserialize;

use crate::constants::{
    SCORE_BENEFIT_CATEGORY, SCORE_BENEFIT_DESCRIPTION, SCORE_MINERAL_KEYS, SCORE_NAME,
    SCORE_SHORT_DESCRIPTION, SCORE_TAG, SCORE_VITAMIN_KEYS,
};
use crate::food::{Food, SeasonalFood};
use crate::season::Season;
use crate::store::FoodStore;

/// Structured filter fields plus an optional free-text search term.
///
/// All fields are optional and independently combinable. Empty or
/// whitespace-only values are treated as absent, and `category = "all"` is a
/// no-op.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct Query {
    pub category: Option<String>,
    pub search: Option<String>,
    pub vitamin: Option<String>,
    pub mineral: Option<String>,
    pub nutrient: Option<String>,
    pub benefit: Option<String>,
    pub health_goal: Option<String>,
    pub season: Option<String>,
}

impl Query {
    /// True when no filter field or search term is active.
    pub fn is_empty(&self) -> bool {
        [
            &self.category,
            &self.search,
            &self.vitamin,
            &self.mineral,
            &self.nutrient,
            &self.benefit,
            &self.health_goal,
            &self.season,
        ]
        .into_iter()
        .all(|field| active(field).is_none())
    }

    /// Runs this query against a store snapshot.
    ///
    /// Filters the store's records, orders them by relevance when a search
    /// term is present, and attaches the seasonal flag for `month0`
    /// (0 = January) to every record in the result.
    pub fn run(&self, store: &FoodStore, month0: u32) -> Vec<SeasonalFood> {
        let current = Season::for_month0(month0);
        let mut matches: Vec<&Food> = store.all().iter().filter(|f| self.matches(f)).collect();

        if let Some(term) = active(&self.search) {
            let term = term.to_lowercase();
            let mut scored: Vec<(u32, &Food)> = matches
                .into_iter()
                .map(|food| (relevance_score(food, &term), food))
                .collect();
            // Stable sort keeps store order for equal scores.
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            matches = scored.into_iter().map(|(_, food)| food).collect();
        }

        matches
            .into_iter()
            .map(|food| SeasonalFood::derive(food.clone(), current))
            .collect()
    }

    /// True when `food` survives every active filter (logical AND).
    fn matches(&self, food: &Food) -> bool {
        if let Some(label) = active(&self.category) {
            if label != "all" && food.category.as_str() != label {
                return false;
            }
        }

        if let Some(term) = active(&self.search) {
            if !matches_search(food, &term.to_lowercase()) {
                return false;
            }
        }

        if let Some(code) = active(&self.vitamin) {
            if !has_nonzero_amount(&food.nutritional_facts.vitamins, code) {
                return false;
            }
        }

        if let Some(code) = active(&self.mineral) {
            if !has_nonzero_amount(&food.nutritional_facts.minerals, code) {
                return false;
            }
        }

        if let Some(text) = active(&self.nutrient) {
            if !matches_nutrient(food, &text.to_lowercase()) {
                return false;
            }
        }

        if let Some(text) = active(&self.benefit) {
            if !matches_benefit(food, &text.to_lowercase()) {
                return false;
            }
        }

        if let Some(goal) = active(&self.health_goal) {
            if !food.benefits.iter().any(|b| b.category.as_str() == goal) {
                return false;
            }
        }

        if let Some(label) = active(&self.season) {
            match Season::parse(label) {
                Some(season) => {
                    if !food.in_season(season) {
                        return false;
                    }
                }
                // Unknown season labels match nothing.
                None => return false,
            }
        }

        true
    }
}

/// Returns the trimmed value of an optional field, or `None` when the field
/// is absent or empty. Empty fields are no-ops.
fn active(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Free-text predicate: case-insensitive substring over name, descriptions,
/// tags, and benefit categories/descriptions. `term` must be lower-cased.
fn matches_search(food: &Food, term: &str) -> bool {
    food.name.to_lowercase().contains(term)
        || food.short_description.to_lowercase().contains(term)
        || food.description.to_lowercase().contains(term)
        || food.tags.iter().any(|tag| tag.to_lowercase().contains(term))
        || food.benefits.iter().any(|b| {
            b.category.as_str().contains(term) || b.description.to_lowercase().contains(term)
        })
}

/// True when `map[code]` is present with a non-zero amount. A stored zero is
/// treated the same as an absent key, matching the permissive truthiness of
/// the original filters.
fn has_nonzero_amount(map: &std::collections::BTreeMap<String, f64>, code: &str) -> bool {
    map.get(code).is_some_and(|amount| *amount != 0.0)
}

/// True when any vitamin or mineral key name contains `text` (lower-cased).
/// This matches on the code name, never the amount.
fn matches_nutrient(food: &Food, text: &str) -> bool {
    food.nutritional_facts
        .vitamins
        .keys()
        .chain(food.nutritional_facts.minerals.keys())
        .any(|code| code.to_lowercase().contains(text))
}

/// True when any benefit category or description contains `text`
/// (lower-cased).
fn matches_benefit(food: &Food, text: &str) -> bool {
    food.benefits
        .iter()
        .any(|b| b.category.as_str().contains(text) || b.description.to_lowercase().contains(text))
}

/// Additive relevance score for a lower-cased search term.
///
/// Used only to order an already-filtered result set, never to filter it.
fn relevance_score(food: &Food, term: &str) -> u32 {
    let mut score = 0;

    if food.name.to_lowercase().contains(term) {
        score += SCORE_NAME;
    }
    if food.short_description.to_lowercase().contains(term) {
        score += SCORE_SHORT_DESCRIPTION;
    }

    score += SCORE_TAG
        * food
            .tags
            .iter()
            .filter(|tag| tag.to_lowercase().contains(term))
            .count() as u32;

    for benefit in &food.benefits {
        if benefit.category.as_str().contains(term) {
            score += SCORE_BENEFIT_CATEGORY;
        }
        if benefit.description.to_lowercase().contains(term) {
            score += SCORE_BENEFIT_DESCRIPTION;
        }
    }

    let vitamin_keys = joined_keys(&food.nutritional_facts.vitamins);
    if vitamin_keys.contains(term) {
        score += SCORE_VITAMIN_KEYS;
    }
    let mineral_keys = joined_keys(&food.nutritional_facts.minerals);
    if mineral_keys.contains(term) {
        score += SCORE_MINERAL_KEYS;
    }

    score
}

/// Joins map keys into one lower-cased, space-separated string for substring
/// matching.
fn joined_keys(map: &std::collections::BTreeMap<String, f64>) -> String {
    map.keys()
        .map(|k| k.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FoodStore;

    // Small fixture store exercising every filter dimension. Record order is
    // significant for the stable-sort tests.
    fn fixture_store() -> FoodStore {
        FoodStore::from_json(
            r#"[
            {
                "id": "1", "name": "Orange", "slug": "orange", "category": "fruit",
                "shortDescription": "A juicy citrus fruit",
                "description": "Oranges are rich in vitamin C and folate.",
                "nutritionalFacts": {
                    "calories": 47.0, "protein": 0.9, "carbs": 12.0, "fiber": 2.4, "sugar": 9.0, "fat": 0.1,
                    "vitamins": { "C": 53.2, "folate": 30.0 },
                    "minerals": { "potassium": 181.0 }
                },
                "benefits": [
                    { "category": "immunity", "description": "Vitamin C supports immune defence", "icon": "shield" }
                ],
                "tags": ["citrus", "vitamin c rich"],
                "season": ["winter"]
            },
            {
                "id": "2", "name": "Spinach", "slug": "spinach", "category": "vegetable",
                "shortDescription": "A leafy green vegetable",
                "description": "Spinach provides iron, folate and vitamin K.",
                "nutritionalFacts": {
                    "calories": 23.0, "protein": 2.9, "carbs": 3.6, "fiber": 2.2, "sugar": 0.4, "fat": 0.4,
                    "vitamins": { "A": 469.0, "K": 483.0, "folate": 194.0 },
                    "minerals": { "iron": 2.7, "magnesium": 79.0 }
                },
                "benefits": [
                    { "category": "bones", "description": "Vitamin K supports bone health", "icon": "bone" },
                    { "category": "energy", "description": "Iron helps fight fatigue", "icon": "bolt" }
                ],
                "tags": ["leafy green"],
                "season": ["spring", "fall"]
            },
            {
                "id": "3", "name": "Basil", "slug": "basil", "category": "herb",
                "shortDescription": "An aromatic culinary herb",
                "description": "Basil adds flavour and a touch of vitamin K.",
                "nutritionalFacts": {
                    "calories": 22.0, "protein": 3.2, "carbs": 2.7, "fiber": 1.6, "sugar": 0.3, "fat": 0.6,
                    "vitamins": { "K": 414.8 },
                    "minerals": { "calcium": 177.0, "zinc": 0.0 }
                },
                "benefits": [
                    { "category": "digestion", "description": "Traditionally used to settle the stomach", "icon": "leaf" }
                ],
                "tags": ["aromatic"],
                "season": ["summer"]
            },
            {
                "id": "4", "name": "Mint", "slug": "mint", "category": "herb",
                "shortDescription": "A cooling aromatic herb",
                "description": "Mint is refreshing in drinks and salads.",
                "nutritionalFacts": {
                    "calories": 44.0, "protein": 3.3, "carbs": 8.4, "fiber": 6.8, "sugar": 0.0, "fat": 0.7,
                    "vitamins": { "A": 203.0 },
                    "minerals": { "iron": 11.9 }
                },
                "benefits": [
                    { "category": "digestion", "description": "Soothes the digestive tract", "icon": "leaf" }
                ],
                "tags": ["aromatic"],
                "season": ["summer"]
            }
        ]"#,
        )
        .expect("fixture should be valid")
    }

    fn names(results: &[SeasonalFood]) -> Vec<&str> {
        results.iter().map(|r| r.food.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_store_order() {
        let store = fixture_store();
        let query = Query::default();
        assert!(query.is_empty());

        let results = query.run(&store, 0);
        assert_eq!(names(&results), vec!["Orange", "Spinach", "Basil", "Mint"]);
    }

    #[test]
    fn test_category_filter_keeps_only_exact_matches() {
        let store = fixture_store();
        let query = Query {
            category: Some("herb".into()),
            ..Query::default()
        };

        let results = query.run(&store, 0);
        assert_eq!(names(&results), vec!["Basil", "Mint"]);
        assert!(results.iter().all(|r| r.food.category.as_str() == "herb"));
    }

    #[test]
    fn test_category_all_is_a_no_op() {
        let store = fixture_store();
        let query = Query {
            category: Some("all".into()),
            ..Query::default()
        };
        assert_eq!(query.run(&store, 0).len(), store.len());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let store = fixture_store();
        let query = Query {
            category: Some("legume".into()),
            ..Query::default()
        };
        assert!(query.run(&store, 0).is_empty());
    }

    #[test]
    fn test_vitamin_filter_requires_present_nonzero_amount() {
        let store = fixture_store();
        let query = Query {
            vitamin: Some("C".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Orange"]);
    }

    #[test]
    fn test_mineral_filter_ignores_zero_amounts() {
        let store = fixture_store();
        // Basil tracks zinc with amount 0.0, which does not count as present.
        let query = Query {
            mineral: Some("zinc".into()),
            ..Query::default()
        };
        assert!(query.run(&store, 0).is_empty());
    }

    #[test]
    fn test_nutrient_filter_matches_key_names_case_insensitively() {
        let store = fixture_store();
        let query = Query {
            nutrient: Some("IRON".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Spinach", "Mint"]);
    }

    #[test]
    fn test_benefit_filter_matches_category_and_description() {
        let store = fixture_store();
        let by_category = Query {
            benefit: Some("digestion".into()),
            ..Query::default()
        };
        assert_eq!(names(&by_category.run(&store, 0)), vec!["Basil", "Mint"]);

        let by_description = Query {
            benefit: Some("fatigue".into()),
            ..Query::default()
        };
        assert_eq!(names(&by_description.run(&store, 0)), vec!["Spinach"]);
    }

    #[test]
    fn test_health_goal_requires_exact_category_match() {
        let store = fixture_store();
        let query = Query {
            health_goal: Some("bones".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Spinach"]);

        // "bone" is a substring but not an exact enum value.
        let partial = Query {
            health_goal: Some("bone".into()),
            ..Query::default()
        };
        assert!(partial.run(&store, 0).is_empty());
    }

    #[test]
    fn test_season_filter_and_unknown_label() {
        let store = fixture_store();
        let query = Query {
            season: Some("summer".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Basil", "Mint"]);

        let unknown = Query {
            season: Some("monsoon".into()),
            ..Query::default()
        };
        assert!(unknown.run(&store, 0).is_empty());
    }

    #[test]
    fn test_combined_filters_intersect() {
        let store = fixture_store();
        let combined = Query {
            category: Some("herb".into()),
            season: Some("summer".into()),
            ..Query::default()
        };
        let combined_results = combined.run(&store, 0);
        let combined_names = names(&combined_results);

        // AND semantics: the result equals the intersection of each
        // single-field result.
        let by_category = Query {
            category: Some("herb".into()),
            ..Query::default()
        };
        let by_season = Query {
            season: Some("summer".into()),
            ..Query::default()
        };
        let category_results = by_category.run(&store, 0);
        let category_names = names(&category_results);
        let season_results = by_season.run(&store, 0);
        let season_names = names(&season_results);
        let intersection: Vec<&str> = category_names
            .iter()
            .filter(|name| season_names.contains(name))
            .copied()
            .collect();

        assert_eq!(combined_names, intersection);
        assert_eq!(combined_names, vec!["Basil", "Mint"]);
    }

    #[test]
    fn test_search_excludes_non_matching_records() {
        let store = fixture_store();
        let query = Query {
            search: Some("citrus".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Orange"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = fixture_store();
        let query = Query {
            search: Some("CITRUS".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Orange"]);
    }

    #[test]
    fn test_vitamin_search_ranks_by_relevance() {
        let store = fixture_store();
        let query = Query {
            search: Some("vitamin".into()),
            ..Query::default()
        };

        let results = query.run(&store, 0);
        // Orange scores on a tag and a benefit description, Spinach only on a
        // benefit description, Basil matches solely on its long description
        // (which filters but does not score). Mint has no match at all and is
        // excluded entirely.
        assert_eq!(names(&results), vec!["Orange", "Spinach", "Basil"]);
    }

    #[test]
    fn test_vitamin_c_search_matches_tag_and_benefit() {
        let store = fixture_store();
        let query = Query {
            search: Some("vitamin c".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Orange"]);
    }

    #[test]
    fn test_search_tie_preserves_store_order() {
        let store = fixture_store();
        // Basil and Mint both match "aromatic" identically: short description
        // and one tag each.
        let query = Query {
            search: Some("aromatic".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Basil", "Mint"]);
    }

    #[test]
    fn test_no_search_means_no_reordering() {
        let store = fixture_store();
        let query = Query {
            nutrient: Some("folate".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.run(&store, 0)), vec!["Orange", "Spinach"]);
    }

    #[test]
    fn test_results_carry_seasonal_flag_for_given_month() {
        let store = fixture_store();
        let query = Query::default();

        // Month 0 is January, i.e. winter: only Orange is in season.
        let winter = query.run(&store, 0);
        let orange = winter.iter().find(|r| r.food.name == "Orange").expect("present");
        assert!(orange.is_in_season);
        let basil = winter.iter().find(|r| r.food.name == "Basil").expect("present");
        assert!(!basil.is_in_season);

        // Month 6 is July, i.e. summer: the herbs flip on, Orange flips off.
        let summer = query.run(&store, 6);
        assert!(!summer.iter().find(|r| r.food.name == "Orange").expect("present").is_in_season);
        assert!(summer.iter().find(|r| r.food.name == "Mint").expect("present").is_in_season);
    }

    #[test]
    fn test_whitespace_only_fields_are_no_ops() {
        let store = fixture_store();
        let query = Query {
            search: Some("   ".into()),
            category: Some("".into()),
            ..Query::default()
        };
        assert!(query.is_empty());
        assert_eq!(query.run(&store, 0).len(), store.len());
    }
}
