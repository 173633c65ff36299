//! The food record data model.
//!
//! Records are immutable after load. The JSON wire form is camelCase to match
//! the original dataset (`shortDescription`, `nutritionalFacts`, `funFact`),
//! and the closed enumerations ([`Category`], [`HealthGoal`]) reject unknown
//! values at deserialization time.

use std::collections::BTreeMap;

use nutriverse_types::Slug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::season::Season;

/// The closed food category enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruit,
    Vegetable,
    Herb,
}

impl Category {
    /// Returns the lowercase label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruit => "fruit",
            Category::Vegetable => "vegetable",
            Category::Herb => "herb",
        }
    }

    /// Parses a lowercase category label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "fruit" => Some(Category::Fruit),
            "vegetable" => Some(Category::Vegetable),
            "herb" => Some(Category::Herb),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed health-goal enumeration used by [`HealthBenefit::category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthGoal {
    Hair,
    Skin,
    Immunity,
    Heart,
    Brain,
    Digestion,
    Bones,
    Energy,
    Weight,
    Eyes,
}

impl HealthGoal {
    /// Returns the lowercase label for this health goal.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthGoal::Hair => "hair",
            HealthGoal::Skin => "skin",
            HealthGoal::Immunity => "immunity",
            HealthGoal::Heart => "heart",
            HealthGoal::Brain => "brain",
            HealthGoal::Digestion => "digestion",
            HealthGoal::Bones => "bones",
            HealthGoal::Energy => "energy",
            HealthGoal::Weight => "weight",
            HealthGoal::Eyes => "eyes",
        }
    }
}

impl std::fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed-shape macro values plus open vitamin/mineral maps.
///
/// Macro fields are always present and non-negative. In the vitamin and
/// mineral maps, an absent key means "not tracked", which is distinct from a
/// zero amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub fat: f64,
    /// Vitamin code (e.g. "C", "B6", "folate") to amount.
    #[serde(default)]
    pub vitamins: BTreeMap<String, f64>,
    /// Mineral code (e.g. "iron", "potassium") to amount.
    #[serde(default)]
    pub minerals: BTreeMap<String, f64>,
}

/// A single health benefit attributed to a food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthBenefit {
    pub category: HealthGoal,
    pub description: String,
    pub icon: String,
}

/// An immutable food record as loaded from the dataset.
///
/// Uniquely identified by `id` (stable identifier) and `slug` (URL-safe,
/// unique, used for lookup by external callers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,
    #[schema(value_type = String)]
    pub slug: Slug,
    pub category: Category,
    #[serde(default)]
    pub image: String,
    pub short_description: String,
    pub description: String,
    pub nutritional_facts: NutritionalFacts,
    #[serde(default)]
    pub benefits: Vec<HealthBenefit>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub season: Vec<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
}

impl Food {
    /// True when this record carries the given season label.
    pub fn in_season(&self, season: Season) -> bool {
        self.season.contains(&season)
    }
}

/// A food record augmented with the derived seasonal flag.
///
/// This is the engine's output shape; the flag is computed per request from
/// the current calendar month and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalFood {
    #[serde(flatten)]
    pub food: Food,
    pub is_in_season: bool,
}

impl SeasonalFood {
    /// Attaches the seasonal flag for `season` to a food record.
    pub fn derive(food: Food, season: Season) -> Self {
        let is_in_season = food.in_season(season);
        Self { food, is_in_season }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food_json() -> &'static str {
        r#"{
            "id": "1",
            "name": "Orange",
            "slug": "orange",
            "category": "fruit",
            "image": "/images/orange.jpg",
            "shortDescription": "A juicy citrus fruit",
            "description": "Oranges are rich in vitamin C.",
            "nutritionalFacts": {
                "calories": 47.0,
                "protein": 0.9,
                "carbs": 12.0,
                "fiber": 2.4,
                "sugar": 9.0,
                "fat": 0.1,
                "vitamins": { "C": 53.2, "folate": 30.0 },
                "minerals": { "potassium": 181.0 }
            },
            "benefits": [
                { "category": "immunity", "description": "Supports immune defence", "icon": "shield" }
            ],
            "tags": ["citrus", "juicy"],
            "season": ["winter"],
            "funFact": "Oranges are a hybrid of pomelo and mandarin."
        }"#
    }

    #[test]
    fn test_food_deserializes_camel_case_wire_form() {
        let food: Food = serde_json::from_str(sample_food_json()).expect("should parse");
        assert_eq!(food.name, "Orange");
        assert_eq!(food.slug.as_str(), "orange");
        assert_eq!(food.category, Category::Fruit);
        assert_eq!(food.short_description, "A juicy citrus fruit");
        assert_eq!(food.nutritional_facts.vitamins.get("C"), Some(&53.2));
        assert_eq!(food.benefits[0].category, HealthGoal::Immunity);
        assert_eq!(food.season, vec![Season::Winter]);
    }

    #[test]
    fn test_food_rejects_unknown_category() {
        let json = sample_food_json().replace("\"fruit\"", "\"legume\"");
        assert!(serde_json::from_str::<Food>(&json).is_err());
    }

    #[test]
    fn test_seasonal_food_serializes_flattened_flag() {
        let food: Food = serde_json::from_str(sample_food_json()).expect("should parse");
        let seasonal = SeasonalFood::derive(food, Season::Winter);
        assert!(seasonal.is_in_season);

        let value = serde_json::to_value(&seasonal).expect("serialize");
        assert_eq!(value["isInSeason"], serde_json::Value::Bool(true));
        assert_eq!(value["shortDescription"], "A juicy citrus fruit");
        assert_eq!(value["funFact"], "Oranges are a hybrid of pomelo and mandarin.");
    }

    #[test]
    fn test_seasonal_flag_false_outside_season() {
        let food: Food = serde_json::from_str(sample_food_json()).expect("should parse");
        let seasonal = SeasonalFood::derive(food, Season::Summer);
        assert!(!seasonal.is_in_season);
    }
}
