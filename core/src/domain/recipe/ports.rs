use std::future::Future;

use crate::domain::{
    common::entities::{app_errors::CoreError, notice::Resolved},
    recipe::{
        entities::RecipeData,
        value_objects::{
            ChatInput, CheckAllergensInput, GenerateImageInput, GenerateShoppingListInput,
            GenerationSettings, GetRecipeDetailsInput, IdentifyRecipeInput, ImageInput,
            VoiceInstructionsInput,
        },
    },
};

/// LLM Client trait for calling the generative model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Text-only completion. Returns the first candidate's first text part.
    fn generate_text(
        &self,
        prompt: String,
        settings: GenerationSettings,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Completion over a prompt plus one inline image.
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
        settings: GenerationSettings,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Image generation. Returns a `data:` URI for the first image part, or
    /// `None` when the model answered without one.
    fn generate_image(
        &self,
        prompt: String,
        settings: GenerationSettings,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

/// Recipe use cases. Every method resolves: failures become a fallback value
/// plus notices instead of an error.
pub trait RecipeService: Send + Sync {
    fn identify_recipe_from_image(
        &self,
        input: IdentifyRecipeInput,
    ) -> impl Future<Output = Resolved<Option<RecipeData>>> + Send;

    fn get_recipe_details(
        &self,
        input: GetRecipeDetailsInput,
    ) -> impl Future<Output = Resolved<RecipeData>> + Send;

    fn generate_shopping_list(
        &self,
        input: GenerateShoppingListInput,
    ) -> impl Future<Output = Resolved<Vec<String>>> + Send;

    fn check_for_allergens(
        &self,
        input: CheckAllergensInput,
    ) -> impl Future<Output = Resolved<Vec<String>>> + Send;

    fn get_chatbot_response(&self, input: ChatInput) -> impl Future<Output = Resolved<String>> + Send;

    fn get_voice_instructions(
        &self,
        input: VoiceInstructionsInput,
    ) -> impl Future<Output = Resolved<Vec<String>>> + Send;

    fn generate_image(
        &self,
        input: GenerateImageInput,
    ) -> impl Future<Output = Resolved<Option<String>>> + Send;
}
