use super::handlers::{
    check_allergens::{__path_check_allergens, check_allergens},
    generate_recipe_image::{__path_generate_recipe_image, generate_recipe_image},
    generate_shopping_list::{__path_generate_shopping_list, generate_shopping_list},
    get_chat_response::{__path_get_chat_response, get_chat_response},
    get_chat_welcome::{__path_get_chat_welcome, get_chat_welcome},
    get_recipe_details::{__path_get_recipe_details, get_recipe_details},
    get_voice_instructions::{__path_get_voice_instructions, get_voice_instructions},
    identify_recipe::{__path_identify_recipe, identify_recipe},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::post,
};
use utoipa::OpenApi;

use super::handlers::identify_recipe::MAX_IMAGE_SIZE;

#[derive(OpenApi)]
#[openapi(paths(
    identify_recipe,
    get_recipe_details,
    generate_shopping_list,
    check_allergens,
    get_chat_response,
    get_chat_welcome,
    get_voice_instructions,
    generate_recipe_image
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/recipes/identify", root_path),
            post(identify_recipe).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
        .route(
            &format!("{}/recipes/details", root_path),
            post(get_recipe_details),
        )
        .route(
            &format!("{}/recipes/shopping-list", root_path),
            post(generate_shopping_list),
        )
        .route(
            &format!("{}/recipes/allergens", root_path),
            post(check_allergens),
        )
        .route(
            &format!("{}/recipes/chat", root_path),
            post(get_chat_response),
        )
        .route(
            &format!("{}/recipes/chat/welcome", root_path),
            post(get_chat_welcome),
        )
        .route(
            &format!("{}/recipes/voice-instructions", root_path),
            post(get_voice_instructions),
        )
        .route(
            &format!("{}/recipes/image", root_path),
            post(generate_recipe_image),
        )
}
