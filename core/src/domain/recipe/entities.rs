use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::common::entities::notice::{Notice, Resolved};

pub const ALLERGENS_FOUND_NOTICE: &str = "This recipe contains ingredients you may be allergic to.";
pub const NO_ALLERGENS_FOUND_NOTICE: &str =
    "No allergens found in this recipe that match your preferences.";

/// A recipe as synthesized by the model. Field names on the wire follow the
/// camelCase shape the prompt asks the model for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeData {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutritional_info: NutritionalInfo,
    #[serde(deserialize_with = "scalar_string")]
    pub cooking_time: String,
    #[serde(deserialize_with = "scalar_string")]
    pub servings: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
}

/// Free-text nutrient amounts ("~300 kcal", "15g"). The five named keys are
/// required, any other nutrient the model reports lands in `additional`.
/// Bare numbers and lists from the model are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    #[serde(deserialize_with = "scalar_string")]
    pub calories: String,
    #[serde(deserialize_with = "scalar_string")]
    pub protein: String,
    #[serde(deserialize_with = "scalar_string")]
    pub carbs: String,
    #[serde(deserialize_with = "scalar_string")]
    pub fat: String,
    #[serde(deserialize_with = "scalar_string")]
    pub fiber: String,
    #[serde(flatten, deserialize_with = "string_map")]
    pub additional: BTreeMap<String, String>,
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(value_text)
}

fn string_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let map = BTreeMap::<String, Value>::deserialize(deserializer)?;

    Ok(map
        .into_iter()
        .map(|(key, value)| (key, value_text(value)))
        .collect())
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        Value::Array(items) => items
            .into_iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

impl NutritionalInfo {
    pub fn get(&self, nutrient: &str) -> Option<&str> {
        match nutrient {
            "calories" => Some(&self.calories),
            "protein" => Some(&self.protein),
            "carbs" => Some(&self.carbs),
            "fat" => Some(&self.fat),
            "fiber" => Some(&self.fiber),
            other => self.additional.get(other).map(String::as_str),
        }
    }
}

impl RecipeData {
    /// Complete stand-in record used when the model reply cannot be turned
    /// into a recipe.
    pub fn placeholder(food_name: &str) -> Self {
        let name = if food_name.trim().is_empty() {
            "Delicious Recipe".to_string()
        } else {
            food_name.to_string()
        };

        Self {
            name,
            description: "A wonderful dish full of flavor and nutrition.".to_string(),
            ingredients: vec![
                "200g main ingredient".to_string(),
                "1 tbsp oil".to_string(),
                "2 cloves garlic, minced".to_string(),
                "Salt and pepper to taste".to_string(),
            ],
            steps: vec![
                "Prepare all ingredients by washing and chopping them as needed.".to_string(),
                "Heat oil in a pan over medium heat.".to_string(),
                "Add ingredients and cook until done.".to_string(),
                "Serve hot and enjoy!".to_string(),
            ],
            nutritional_info: NutritionalInfo {
                calories: "~300 kcal".to_string(),
                protein: "15g".to_string(),
                carbs: "30g".to_string(),
                fat: "12g".to_string(),
                fiber: "5g".to_string(),
                additional: BTreeMap::new(),
            },
            cooking_time: "30 minutes".to_string(),
            servings: "4".to_string(),
            tips: vec![
                "For best results, use fresh ingredients.".to_string(),
                "This recipe can be stored in the refrigerator for up to 3 days.".to_string(),
            ],
            allergens: Some(Vec::new()),
        }
    }

    /// Recipe allergens naming any of `user_allergens`, case-insensitively
    /// and by substring. Purely local, no model call.
    pub fn matching_allergens(&self, user_allergens: &[String]) -> Resolved<Vec<String>> {
        let wanted: Vec<String> = user_allergens
            .iter()
            .map(|allergen| allergen.trim().to_lowercase())
            .filter(|allergen| !allergen.is_empty())
            .collect();

        let matches: Vec<String> = self
            .allergens
            .iter()
            .flatten()
            .filter(|allergen| {
                let allergen = allergen.to_lowercase();
                wanted.iter().any(|user| allergen.contains(user.as_str()))
            })
            .cloned()
            .collect();

        let notice = if matches.is_empty() {
            Notice::success(NO_ALLERGENS_FOUND_NOTICE)
        } else {
            Notice::warning(ALLERGENS_FOUND_NOTICE)
        };

        Resolved::with_notice(matches, notice)
    }

    /// Recipe summary handed to the chat assistant as context.
    pub fn chat_context(&self) -> String {
        format!(
            "Recipe: {}\nDescription: {}\nIngredients: {}\nCooking Time: {}\nServings: {}",
            self.name,
            self.description,
            self.ingredients.join(", "),
            self.cooking_time,
            self.servings
        )
    }
}
