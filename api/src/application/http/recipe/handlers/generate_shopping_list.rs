use axum::extract::State;
use ferrischef_core::domain::{
    common::entities::notice::Notice,
    recipe::{ports::RecipeService, value_objects::GenerateShoppingListInput},
    shopping_list::entities::ShoppingList,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::ShoppingListValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListResponse {
    pub data: ShoppingList,
    pub clipboard_text: String,
    pub notices: Vec<Notice>,
}

#[utoipa::path(
    post,
    path = "/shopping-list",
    tag = "recipe",
    summary = "Build a shopping list",
    description = "Groups recipe ingredients into a shopping list. Falls back to the ingredients themselves.",
    responses(
        (status = 200, body = ShoppingListResponse)
    ),
    request_body = ShoppingListValidator
)]
pub async fn generate_shopping_list(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ShoppingListValidator>,
) -> Result<Response<ShoppingListResponse>, ApiError> {
    let result = state
        .service
        .generate_shopping_list(GenerateShoppingListInput {
            ingredients: payload.ingredients,
        })
        .await;

    let list = ShoppingList::from_items(result.data);
    let clipboard_text = list.to_clipboard_text();

    Ok(Response::OK(ShoppingListResponse {
        data: list,
        clipboard_text,
        notices: result.notices,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::application::http::test::test_server;

    #[tokio::test]
    async fn test_unreachable_model_echoes_ingredients() {
        let server = test_server().await;

        let response = server
            .post("/recipes/shopping-list")
            .json(&json!({ "ingredients": ["200g chicken breast", "1 onion"] }))
            .await;

        response.assert_status_ok();
        let body = response.json::<ShoppingListResponse>();
        let items: Vec<&str> = body.data.items.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(items, vec!["200g chicken breast", "1 onion"]);
        assert_eq!(body.clipboard_text, "☐ 200g chicken breast\n☐ 1 onion");
    }

    #[tokio::test]
    async fn test_empty_ingredients_are_accepted() {
        let server = test_server().await;

        let response = server
            .post("/recipes/shopping-list")
            .json(&json!({ "ingredients": [] }))
            .await;

        response.assert_status_ok();
        let body = response.json::<ShoppingListResponse>();
        assert!(body.data.items.is_empty());
        assert_eq!(body.clipboard_text, "");
    }
}
