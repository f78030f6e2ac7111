use axum::extract::State;
use ferrischef_core::domain::{
    common::entities::notice::Notice,
    recipe::{ports::RecipeService, value_objects::CheckAllergensInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::AllergenCheckValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergensResponse {
    /// Offending ingredients, or the recipe allergens that matched.
    pub data: Vec<String>,
    pub notices: Vec<Notice>,
}

#[utoipa::path(
    post,
    path = "/allergens",
    tag = "recipe",
    summary = "Check ingredients or a recipe for allergens",
    description = "With a `recipe`, its allergens are matched against `allergens` locally. Otherwise the model checks `ingredients`.",
    responses(
        (status = 200, body = AllergensResponse)
    ),
    request_body = AllergenCheckValidator
)]
pub async fn check_allergens(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AllergenCheckValidator>,
) -> Result<Response<AllergensResponse>, ApiError> {
    let result = match payload.recipe {
        Some(recipe) => recipe.matching_allergens(&payload.allergens),
        None => {
            state
                .service
                .check_for_allergens(CheckAllergensInput {
                    ingredients: payload.ingredients,
                    user_allergens: payload.allergens,
                })
                .await
        }
    };

    Ok(Response::OK(AllergensResponse {
        data: result.data,
        notices: result.notices,
    }))
}

#[cfg(test)]
mod tests {
    use ferrischef_core::domain::{
        common::entities::notice::NoticeLevel,
        recipe::entities::{ALLERGENS_FOUND_NOTICE, NO_ALLERGENS_FOUND_NOTICE, RecipeData},
    };
    use serde_json::json;

    use super::*;
    use crate::application::http::test::test_server;

    fn recipe_with_allergens(allergens: &[&str]) -> RecipeData {
        RecipeData {
            allergens: Some(allergens.iter().map(|a| a.to_string()).collect()),
            ..RecipeData::placeholder("Pad Thai")
        }
    }

    #[tokio::test]
    async fn test_recipe_allergens_are_matched_locally() {
        let server = test_server().await;

        let response = server
            .post("/recipes/allergens")
            .json(&json!({
                "allergens": ["peanuts", "gluten", "shellfish"],
                "recipe": recipe_with_allergens(&["Peanuts", "Eggs"]),
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<AllergensResponse>();
        assert_eq!(body.data, vec!["Peanuts"]);
        assert_eq!(body.notices.len(), 1);
        assert_eq!(body.notices[0].level, NoticeLevel::Warning);
        assert_eq!(body.notices[0].message, ALLERGENS_FOUND_NOTICE);
    }

    #[tokio::test]
    async fn test_recipe_without_matches_reports_success() {
        let server = test_server().await;

        let response = server
            .post("/recipes/allergens")
            .json(&json!({
                "allergens": ["shellfish"],
                "recipe": recipe_with_allergens(&["Eggs"]),
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<AllergensResponse>();
        assert!(body.data.is_empty());
        assert_eq!(body.notices[0].level, NoticeLevel::Success);
        assert_eq!(body.notices[0].message, NO_ALLERGENS_FOUND_NOTICE);
    }

    #[tokio::test]
    async fn test_no_user_allergens_is_empty() {
        let server = test_server().await;

        let response = server
            .post("/recipes/allergens")
            .json(&json!({ "ingredients": ["2 eggs", "100g butter"] }))
            .await;

        response.assert_status_ok();
        assert!(response.json::<AllergensResponse>().data.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_model_is_empty() {
        let server = test_server().await;

        let response = server
            .post("/recipes/allergens")
            .json(&json!({ "ingredients": ["2 eggs"], "allergens": ["egg"] }))
            .await;

        response.assert_status_ok();
        assert!(response.json::<AllergensResponse>().data.is_empty());
    }
}
