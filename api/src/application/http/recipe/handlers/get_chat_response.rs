use axum::extract::State;
use ferrischef_core::domain::{
    chat::entities::ChatMessage,
    common::entities::notice::Notice,
    recipe::{ports::RecipeService, value_objects::ChatInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::ChatValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub data: ChatMessage,
    pub notices: Vec<Notice>,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "recipe",
    summary = "Ask the cooking assistant",
    description = "Answers a cooking question in the context of the given recipe. Always answers, with an apology when the model is unavailable.",
    responses(
        (status = 200, body = ChatResponse)
    ),
    request_body = ChatValidator
)]
pub async fn get_chat_response(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    let context = payload
        .recipe
        .as_ref()
        .map(|recipe| recipe.chat_context())
        .unwrap_or_default();

    let result = state
        .service
        .get_chatbot_response(ChatInput {
            question: payload.question,
            context,
        })
        .await;

    Ok(Response::OK(ChatResponse {
        data: ChatMessage::bot(result.data),
        notices: result.notices,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use ferrischef_core::domain::{
        chat::entities::Sender,
        recipe::{entities::RecipeData, services::CHAT_UNAVAILABLE},
    };
    use serde_json::json;

    use super::*;
    use crate::application::http::test::test_server;

    #[tokio::test]
    async fn test_unreachable_model_apologizes() {
        let server = test_server().await;

        let response = server
            .post("/recipes/chat")
            .json(&json!({
                "question": "Can I use tofu instead?",
                "recipe": RecipeData::placeholder("Pad Thai"),
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<ChatResponse>();
        assert_eq!(body.data.sender, Sender::Bot);
        assert_eq!(body.data.content, CHAT_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let server = test_server().await;

        let response = server
            .post("/recipes/chat")
            .json(&json!({ "question": "" }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
