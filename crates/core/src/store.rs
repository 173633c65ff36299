//! The immutable in-memory record store.
//!
//! The full collection is loaded once at process start from a bundled data
//! source (or an explicit file/JSON override) and never mutated thereafter.
//! There is no shared mutable state, so the store is thread-safe by
//! construction; servers share one instance behind an `Arc`.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{FoodError, FoodResult};
use crate::food::Food;

/// The JSON dataset compiled into the crate.
const BUNDLED_DATA: &str = include_str!("../data/foods.json");

/// Immutable, ordered collection of food records.
#[derive(Debug)]
pub struct FoodStore {
    foods: Vec<Food>,
}

impl FoodStore {
    /// Loads the dataset bundled into the crate.
    ///
    /// # Errors
    ///
    /// Returns a `FoodError` if the bundled dataset fails to parse or
    /// violates a store invariant. This indicates a packaging defect and is
    /// surfaced at startup rather than per request.
    pub fn bundled() -> FoodResult<Self> {
        Self::from_json(BUNDLED_DATA)
    }

    /// Parses a store from a JSON array of food records.
    ///
    /// # Errors
    ///
    /// Returns `FoodError::Deserialization` for malformed JSON,
    /// `FoodError::DuplicateSlug` when two records share a slug, or
    /// `FoodError::InvalidRecord` when a record carries a negative
    /// nutritional amount.
    pub fn from_json(json: &str) -> FoodResult<Self> {
        let foods: Vec<Food> = serde_json::from_str(json).map_err(FoodError::Deserialization)?;
        Self::validated(foods)
    }

    /// Reads and parses a store from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `FoodError::FileRead` if the file cannot be read, plus any
    /// error `from_json` can produce.
    pub fn from_path(path: &Path) -> FoodResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(FoodError::FileRead)?;
        let store = Self::from_json(&contents)?;
        tracing::info!(
            "loaded {} food records from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    fn validated(foods: Vec<Food>) -> FoodResult<Self> {
        let mut slugs = HashSet::new();
        for food in &foods {
            if !slugs.insert(food.slug.as_str()) {
                return Err(FoodError::DuplicateSlug(food.slug.as_str().to_owned()));
            }
            validate_amounts(food)?;
        }
        Ok(Self { foods })
    }

    /// Returns every record, original load order preserved.
    pub fn all(&self) -> &[Food] {
        &self.foods
    }

    /// Looks up a single record by its slug.
    ///
    /// # Errors
    ///
    /// Returns `FoodError::SlugNotFound` when no record has that slug.
    pub fn by_slug(&self, slug: &str) -> FoodResult<&Food> {
        self.foods
            .iter()
            .find(|food| food.slug.as_str() == slug)
            .ok_or_else(|| FoodError::SlugNotFound(slug.to_owned()))
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Checks that every nutritional amount on a record is non-negative.
fn validate_amounts(food: &Food) -> FoodResult<()> {
    let facts = &food.nutritional_facts;
    let macros = [
        ("calories", facts.calories),
        ("protein", facts.protein),
        ("carbs", facts.carbs),
        ("fiber", facts.fiber),
        ("sugar", facts.sugar),
        ("fat", facts.fat),
    ];
    for (field, value) in macros {
        if value < 0.0 {
            return Err(FoodError::InvalidRecord {
                slug: food.slug.as_str().to_owned(),
                reason: format!("negative {field} value {value}"),
            });
        }
    }

    for (code, amount) in facts.vitamins.iter().chain(facts.minerals.iter()) {
        if *amount < 0.0 {
            return Err(FoodError::InvalidRecord {
                slug: food.slug.as_str().to_owned(),
                reason: format!("negative amount {amount} for nutrient '{code}'"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let store = FoodStore::bundled().expect("bundled dataset should be valid");
        assert!(!store.is_empty());
    }

    #[test]
    fn test_by_slug_round_trips_every_record() {
        let store = FoodStore::bundled().expect("bundled dataset should be valid");
        for food in store.all() {
            let found = store.by_slug(food.slug.as_str()).expect("slug should resolve");
            assert_eq!(found, food);
        }
    }

    #[test]
    fn test_by_slug_unknown_slug_is_not_found() {
        let store = FoodStore::bundled().expect("bundled dataset should be valid");
        let err = store.by_slug("no-such-food").expect_err("should fail");
        assert!(matches!(err, FoodError::SlugNotFound(slug) if slug == "no-such-food"));
    }

    #[test]
    fn test_from_json_rejects_duplicate_slugs() {
        let json = r#"[
            {
                "id": "1", "name": "A", "slug": "same", "category": "fruit",
                "shortDescription": "", "description": "",
                "nutritionalFacts": { "calories": 1.0, "protein": 0.0, "carbs": 0.0, "fiber": 0.0, "sugar": 0.0, "fat": 0.0 }
            },
            {
                "id": "2", "name": "B", "slug": "same", "category": "herb",
                "shortDescription": "", "description": "",
                "nutritionalFacts": { "calories": 1.0, "protein": 0.0, "carbs": 0.0, "fiber": 0.0, "sugar": 0.0, "fat": 0.0 }
            }
        ]"#;
        let err = FoodStore::from_json(json).expect_err("should reject");
        assert!(matches!(err, FoodError::DuplicateSlug(slug) if slug == "same"));
    }

    #[test]
    fn test_from_json_rejects_negative_amounts() {
        let json = r#"[
            {
                "id": "1", "name": "A", "slug": "a", "category": "fruit",
                "shortDescription": "", "description": "",
                "nutritionalFacts": {
                    "calories": 10.0, "protein": 0.0, "carbs": 0.0, "fiber": 0.0, "sugar": 0.0, "fat": 0.0,
                    "vitamins": { "C": -1.0 }
                }
            }
        ]"#;
        let err = FoodStore::from_json(json).expect_err("should reject");
        assert!(matches!(err, FoodError::InvalidRecord { slug, .. } if slug == "a"));
    }

    #[test]
    fn test_all_preserves_load_order() {
        let json = r#"[
            {
                "id": "1", "name": "First", "slug": "first", "category": "fruit",
                "shortDescription": "", "description": "",
                "nutritionalFacts": { "calories": 1.0, "protein": 0.0, "carbs": 0.0, "fiber": 0.0, "sugar": 0.0, "fat": 0.0 }
            },
            {
                "id": "2", "name": "Second", "slug": "second", "category": "herb",
                "shortDescription": "", "description": "",
                "nutritionalFacts": { "calories": 1.0, "protein": 0.0, "carbs": 0.0, "fiber": 0.0, "sugar": 0.0, "fat": 0.0 }
            }
        ]"#;
        let store = FoodStore::from_json(json).expect("should parse");
        let names: Vec<&str> = store.all().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
