use crate::application::http::{
    cooking::router::CookingApiDoc, health::HealthApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FerrisChef API",
        description = "Recipe identification, generation and cooking-mode assistance"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/cooking", api = CookingApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
