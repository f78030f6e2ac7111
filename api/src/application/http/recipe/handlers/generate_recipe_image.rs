use axum::extract::State;
use ferrischef_core::domain::{
    common::entities::notice::Notice,
    recipe::{ports::RecipeService, value_objects::GenerateImageInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::RecipeImageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeImageResponse {
    /// `data:image/...;base64,` URI, or null when no image was produced.
    pub data: Option<String>,
    pub notices: Vec<Notice>,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "recipe",
    summary = "Generate a food photo",
    responses(
        (status = 200, body = RecipeImageResponse)
    ),
    request_body = RecipeImageValidator
)]
pub async fn generate_recipe_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeImageValidator>,
) -> Result<Response<RecipeImageResponse>, ApiError> {
    let result = state
        .service
        .generate_image(GenerateImageInput {
            prompt: payload.prompt,
        })
        .await;

    Ok(Response::OK(RecipeImageResponse {
        data: result.data,
        notices: result.notices,
    }))
}
