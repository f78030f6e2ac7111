use ferrischef_core::domain::recipe::entities::RecipeData;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeDetailsValidator {
    #[validate(length(
        min = 1,
        max = 200,
        message = "food_name must be between 1 and 200 characters"
    ))]
    pub food_name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShoppingListValidator {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AllergenCheckValidator {
    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub allergens: Vec<String>,

    /// When present, its listed allergens are matched locally and the model
    /// is not consulted.
    #[serde(default)]
    pub recipe: Option<RecipeData>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatValidator {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "question must be between 1 and 2000 characters"
    ))]
    pub question: String,

    #[serde(default)]
    pub recipe: Option<RecipeData>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatWelcomeValidator {
    pub recipe: RecipeData,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct VoiceInstructionsValidator {
    pub steps: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeImageValidator {
    #[validate(length(
        min = 1,
        max = 500,
        message = "prompt must be between 1 and 500 characters"
    ))]
    pub prompt: String,
}
