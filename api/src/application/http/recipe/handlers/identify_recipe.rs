use axum::extract::{Multipart, State};
use ferrischef_core::domain::{
    common::entities::notice::Notice,
    recipe::{
        entities::RecipeData,
        ports::RecipeService,
        value_objects::{IdentifyRecipeInput, ImageInput},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdentifyRecipeResponse {
    pub data: Option<RecipeData>,
    pub notices: Vec<Notice>,
}

/// Multipart body for `/recipes/identify`; one of the two parts is required.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct IdentifyRecipeForm {
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQ")]
    pub image_data_uri: Option<String>,
}

#[utoipa::path(
    post,
    path = "/identify",
    tag = "recipe",
    summary = "Identify a dish from a photo",
    description = "Names the dish in the uploaded photo, then generates its recipe. Send the photo as an `image` file part, or as an `image_data_uri` text part holding a base64 data URI.",
    request_body(content = IdentifyRecipeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = IdentifyRecipeResponse),
        (status = 400, description = "Missing, empty or oversized image")
    ),
)]
pub async fn identify_recipe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<IdentifyRecipeResponse>, ApiError> {
    let mut image: Option<ImageInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                if data.is_empty() {
                    return Err(ApiError::BadRequest("Image is empty".to_string()));
                }

                image = Some(ImageInput::from_bytes(data.to_vec(), content_type.as_deref()));
            }
            "image_data_uri" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read image_data_uri: {}", e))
                })?;

                image = Some(ImageInput::from_base64(&value).map_err(ApiError::from)?);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .identify_recipe_from_image(IdentifyRecipeInput { image })
        .await;

    Ok(Response::OK(IdentifyRecipeResponse {
        data: result.data,
        notices: result.notices,
    }))
}
