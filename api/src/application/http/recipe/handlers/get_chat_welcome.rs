use ferrischef_core::domain::chat::entities::ChatMessage;

use crate::application::http::{
    recipe::{handlers::get_chat_response::ChatResponse, validators::ChatWelcomeValidator},
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};

#[utoipa::path(
    post,
    path = "/chat/welcome",
    tag = "recipe",
    summary = "Opening message for a recipe chat",
    responses(
        (status = 200, body = ChatResponse)
    ),
    request_body = ChatWelcomeValidator
)]
pub async fn get_chat_welcome(
    ValidateJson(payload): ValidateJson<ChatWelcomeValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    Ok(Response::OK(ChatResponse {
        data: ChatMessage::welcome(&payload.recipe.name),
        notices: Vec::new(),
    }))
}
