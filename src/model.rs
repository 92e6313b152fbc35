use crate::converters::{convert, UnitSystem};
use crate::instructions::{parse, ParsedInstructions};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// TheMealDB exposes ingredients as numbered slots strIngredient1..strIngredient20
const INGREDIENT_SLOTS: usize = 20;

/// One ingredient line of a recipe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// A full recipe record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "MealRecord")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    pub tags: Vec<String>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

/// Abbreviated record returned by the filter endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    // strIngredientN / strMeasureN and everything else we don't name
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn slot_text(slots: &HashMap<String, Value>, key: &str) -> String {
    slots
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = slot_text(&record.slots, &format!("strIngredient{}", slot));
                if name.is_empty() {
                    return None;
                }
                Some(Ingredient {
                    name,
                    measure: slot_text(&record.slots, &format!("strMeasure{}", slot)),
                })
            })
            .collect();

        Meal {
            id: record.id,
            name: record.name,
            thumbnail: record.thumbnail.unwrap_or_default(),
            category: non_blank(record.category),
            area: non_blank(record.area),
            instructions: record.instructions.unwrap_or_default(),
            tags: record
                .tags
                .map(|tags| {
                    tags.split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            youtube: non_blank(record.youtube),
            source: non_blank(record.source),
            ingredients,
        }
    }
}

impl From<&Meal> for MealSummary {
    fn from(meal: &Meal) -> Self {
        MealSummary {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail: meal.thumbnail.clone(),
        }
    }
}

/// Which list a filter narrows by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Category,
    Area,
    Ingredient,
}

impl FilterKind {
    /// Query-string key the API uses for this filter
    pub fn query_key(&self) -> &'static str {
        match self {
            FilterKind::Category => "c",
            FilterKind::Area => "a",
            FilterKind::Ingredient => "i",
        }
    }

    /// Field carrying the option name in list responses
    pub(crate) fn list_field(&self) -> &'static str {
        match self {
            FilterKind::Category => "strCategory",
            FilterKind::Area => "strArea",
            FilterKind::Ingredient => "strIngredient",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::Category => "category",
            FilterKind::Area => "area",
            FilterKind::Ingredient => "ingredient",
        };
        f.write_str(name)
    }
}

/// Values available for each filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub areas: Vec<String>,
    pub ingredients: Vec<String>,
}

/// An ingredient line with its measure expressed in the chosen unit system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedIngredient {
    pub name: String,
    pub measure: String,
}

impl fmt::Display for ConvertedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.measure, self.name)
        }
    }
}

/// Everything the detail view shows for one recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub meal: Meal,
    pub unit_system: UnitSystem,
    pub ingredients: Vec<ConvertedIngredient>,
    pub instructions: ParsedInstructions,
}

impl RecipeDetail {
    pub fn new(meal: Meal, unit_system: UnitSystem) -> Self {
        let ingredients = meal
            .ingredients
            .iter()
            .map(|ingredient| ConvertedIngredient {
                name: ingredient.name.clone(),
                measure: convert(&ingredient.measure, unit_system),
            })
            .collect();
        let instructions = parse(&meal.instructions);

        RecipeDetail {
            meal,
            unit_system,
            ingredients,
            instructions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_meal() -> Value {
        json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350\u{b0} F.\r\nCombine soy sauce.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strTags": "Meat,Casserole",
            "strYoutube": "",
            "strSource": null,
            "strIngredient1": "soy sauce",
            "strIngredient2": "water",
            "strIngredient3": "",
            "strIngredient4": null,
            "strIngredient5": "brown sugar",
            "strMeasure1": "3/4 cup",
            "strMeasure2": "1/2 cup",
            "strMeasure3": "",
            "strMeasure4": null,
            "strMeasure5": null
        })
    }

    #[test]
    fn test_meal_from_api_record() {
        let meal: Meal = serde_json::from_value(sample_meal()).unwrap();
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.category.as_deref(), Some("Chicken"));
        assert_eq!(meal.tags, vec!["Meat", "Casserole"]);
        assert!(meal.youtube.is_none());
        assert!(meal.source.is_none());
        assert_eq!(
            meal.ingredients,
            vec![
                Ingredient {
                    name: "soy sauce".to_string(),
                    measure: "3/4 cup".to_string()
                },
                Ingredient {
                    name: "water".to_string(),
                    measure: "1/2 cup".to_string()
                },
                Ingredient {
                    name: "brown sugar".to_string(),
                    measure: String::new()
                },
            ]
        );
    }

    #[test]
    fn test_recipe_detail_converts_measures() {
        let meal: Meal = serde_json::from_value(sample_meal()).unwrap();
        let detail = RecipeDetail::new(meal, UnitSystem::Metric);

        assert_eq!(detail.ingredients[0].to_string(), "180 ml soy sauce");
        assert_eq!(detail.ingredients[1].to_string(), "120 ml water");
        assert_eq!(detail.ingredients[2].to_string(), "brown sugar");
        assert_eq!(
            detail.instructions.steps,
            vec!["Preheat oven to 350\u{b0} F.", "Combine soy sauce."]
        );
    }

    #[test]
    fn test_filter_kind_keys() {
        assert_eq!(FilterKind::Category.query_key(), "c");
        assert_eq!(FilterKind::Area.query_key(), "a");
        assert_eq!(FilterKind::Ingredient.query_key(), "i");
        assert_eq!(FilterKind::Area.to_string(), "area");
    }
}
