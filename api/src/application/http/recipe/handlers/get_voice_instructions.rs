use axum::extract::State;
use ferrischef_core::domain::{
    common::entities::notice::Notice,
    recipe::{ports::RecipeService, value_objects::VoiceInstructionsInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::VoiceInstructionsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoiceInstructionsResponse {
    pub data: Vec<String>,
    pub notices: Vec<Notice>,
}

#[utoipa::path(
    post,
    path = "/voice-instructions",
    tag = "recipe",
    summary = "Rewrite steps for hands-free cooking",
    description = "Turns recipe steps into conversational text-to-speech instructions. Falls back to the steps unchanged.",
    responses(
        (status = 200, body = VoiceInstructionsResponse)
    ),
    request_body = VoiceInstructionsValidator
)]
pub async fn get_voice_instructions(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<VoiceInstructionsValidator>,
) -> Result<Response<VoiceInstructionsResponse>, ApiError> {
    let result = state
        .service
        .get_voice_instructions(VoiceInstructionsInput {
            steps: payload.steps,
        })
        .await;

    Ok(Response::OK(VoiceInstructionsResponse {
        data: result.data,
        notices: result.notices,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::application::http::test::test_server;

    #[tokio::test]
    async fn test_unreachable_model_returns_steps() {
        let server = test_server().await;

        let response = server
            .post("/recipes/voice-instructions")
            .json(&json!({ "steps": ["Preheat oven to 200C", "Bake 20 minutes"] }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<VoiceInstructionsResponse>().data,
            vec!["Preheat oven to 200C", "Bake 20 minutes"]
        );
    }

    #[tokio::test]
    async fn test_empty_steps_are_accepted() {
        let server = test_server().await;

        let response = server
            .post("/recipes/voice-instructions")
            .json(&json!({ "steps": [] }))
            .await;

        response.assert_status_ok();
        assert!(response.json::<VoiceInstructionsResponse>().data.is_empty());
    }
}
