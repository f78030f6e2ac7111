use axum::extract::State;
use ferrischef_core::domain::{
    common::entities::notice::Notice,
    recipe::{
        entities::RecipeData, nutrition::NutritionBreakdown, ports::RecipeService,
        value_objects::GetRecipeDetailsInput,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::RecipeDetailsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetailsResponse {
    pub data: RecipeData,
    pub nutrition: NutritionBreakdown,
    pub notices: Vec<Notice>,
}

#[utoipa::path(
    post,
    path = "/details",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Generates a full recipe for a dish name. Falls back to a generic recipe, with an error notice, when the model cannot be reached or answers unusably.",
    responses(
        (status = 200, body = RecipeDetailsResponse)
    ),
    request_body = RecipeDetailsValidator
)]
pub async fn get_recipe_details(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeDetailsValidator>,
) -> Result<Response<RecipeDetailsResponse>, ApiError> {
    let result = state
        .service
        .get_recipe_details(GetRecipeDetailsInput {
            food_name: payload.food_name,
        })
        .await;

    let nutrition = NutritionBreakdown::from(&result.data.nutritional_info);

    Ok(Response::OK(RecipeDetailsResponse {
        data: result.data,
        nutrition,
        notices: result.notices,
    }))
}
