use tracing::instrument;

use crate::domain::{
    common::{
        entities::{
            app_errors::CoreError,
            notice::{Notice, Resolved},
        },
        services::Service,
    },
    recipe::{
        entities::RecipeData,
        extraction::{ExtractionError, extract_list, extract_object},
        ports::{LLMClient, RecipeService},
        prompts::{
            IDENTIFY_DISH_PROMPT, render_allergen_check_prompt, render_chat_prompt,
            render_image_generation_prompt, render_recipe_details_prompt,
            render_shopping_list_prompt, render_voice_instructions_prompt,
        },
        value_objects::{
            ChatInput, CheckAllergensInput, GenerateImageInput, GenerateShoppingListInput,
            GenerationSettings, GetRecipeDetailsInput, IdentifyRecipeInput,
            VoiceInstructionsInput,
        },
    },
};

pub const UNIDENTIFIED_FOOD_NOTICE: &str = "Unable to identify food in the image";
pub const IDENTIFY_FAILED_NOTICE: &str = "Failed to identify recipe from image";
pub const RECIPE_DETAILS_FAILED_NOTICE: &str = "Failed to get recipe details";
pub const SHOPPING_LIST_FAILED_NOTICE: &str = "Failed to generate shopping list";
pub const CHAT_NO_ANSWER: &str = "I'm sorry, I couldn't find an answer to that question.";
pub const CHAT_UNAVAILABLE: &str = "I'm having trouble answering that right now. Please try again.";

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn complete_text(&self, prompt: String) -> Result<String, CoreError> {
        let reply = self
            .llm_client
            .generate_text(prompt, GenerationSettings::TEXT)
            .await?;

        if reply.trim().is_empty() {
            return Err(CoreError::EmptyModelOutput);
        }

        Ok(reply)
    }

    async fn try_recipe_details(&self, food_name: &str) -> Result<RecipeData, CoreError> {
        let reply = self
            .complete_text(render_recipe_details_prompt(food_name))
            .await?;

        Ok(extract_object(&reply)?)
    }

    async fn try_list(&self, prompt: String, wrapper_key: &str) -> Result<Vec<String>, CoreError> {
        let reply = self.complete_text(prompt).await?;

        Ok(extract_list(&reply, wrapper_key)?)
    }
}

/// Ingredient lines with their leading quantity word dropped.
fn strip_quantities(ingredients: &[String]) -> Vec<String> {
    ingredients
        .iter()
        .map(|ingredient| {
            ingredient
                .split(' ')
                .skip(1)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(mime_type = %input.image.mime_type, size = input.image.data.len()))]
    async fn identify_recipe_from_image(
        &self,
        input: IdentifyRecipeInput,
    ) -> Resolved<Option<RecipeData>> {
        let identification = self
            .llm_client
            .generate_with_image(
                IDENTIFY_DISH_PROMPT.to_string(),
                input.image,
                GenerationSettings::VISION,
            )
            .await;

        let food_name = match identification {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                tracing::error!("Error identifying recipe: {}", e);
                return Resolved::with_notice(None, Notice::error(IDENTIFY_FAILED_NOTICE));
            }
        };

        if food_name.is_empty() {
            tracing::warn!("Vision model returned no dish name");
            return Resolved::with_notice(None, Notice::error(UNIDENTIFIED_FOOD_NOTICE));
        }

        tracing::info!(food_name = %food_name, "Identified dish");

        let mut details = self
            .get_recipe_details(GetRecipeDetailsInput { food_name })
            .await;

        if !details.is_degraded() {
            let message = format!("Identified recipe: {}", details.data.name);
            details.notices.push(Notice::success(message));
        }

        details.map(Some)
    }

    #[instrument(skip(self, input), fields(food_name = %input.food_name))]
    async fn get_recipe_details(&self, input: GetRecipeDetailsInput) -> Resolved<RecipeData> {
        match self.try_recipe_details(&input.food_name).await {
            Ok(recipe) => Resolved::ok(recipe),
            Err(e) => {
                tracing::error!("Error getting recipe details: {}", e);
                Resolved::with_notice(
                    RecipeData::placeholder(&input.food_name),
                    Notice::error(RECIPE_DETAILS_FAILED_NOTICE),
                )
            }
        }
    }

    #[instrument(skip(self, input), fields(ingredients = input.ingredients.len()))]
    async fn generate_shopping_list(
        &self,
        input: GenerateShoppingListInput,
    ) -> Resolved<Vec<String>> {
        let prompt = render_shopping_list_prompt(&input.ingredients);

        match self.try_list(prompt, "list").await {
            Ok(list) => Resolved::ok(list),
            Err(CoreError::Extraction(ExtractionError::UnexpectedShape(_))) => {
                tracing::warn!("Shopping list reply had no list, stripping quantities instead");
                Resolved::ok(strip_quantities(&input.ingredients))
            }
            Err(e) => {
                tracing::error!("Error generating shopping list: {}", e);
                Resolved::with_notice(input.ingredients, Notice::error(SHOPPING_LIST_FAILED_NOTICE))
            }
        }
    }

    #[instrument(skip(self, input), fields(allergens = input.user_allergens.len()))]
    async fn check_for_allergens(&self, input: CheckAllergensInput) -> Resolved<Vec<String>> {
        if input.user_allergens.is_empty() {
            return Resolved::ok(Vec::new());
        }

        let prompt = render_allergen_check_prompt(&input.ingredients, &input.user_allergens);

        match self.try_list(prompt, "allergens").await {
            Ok(matches) => Resolved::ok(matches),
            Err(e) => {
                tracing::error!("Error checking allergens: {}", e);
                Resolved::ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self, input))]
    async fn get_chatbot_response(&self, input: ChatInput) -> Resolved<String> {
        let prompt = render_chat_prompt(&input.question, &input.context);

        match self.complete_text(prompt).await {
            Ok(answer) => Resolved::ok(answer),
            Err(CoreError::EmptyModelOutput) => Resolved::ok(CHAT_NO_ANSWER.to_string()),
            Err(e) => {
                tracing::error!("Error getting chatbot response: {}", e);
                Resolved::ok(CHAT_UNAVAILABLE.to_string())
            }
        }
    }

    #[instrument(skip(self, input), fields(steps = input.steps.len()))]
    async fn get_voice_instructions(&self, input: VoiceInstructionsInput) -> Resolved<Vec<String>> {
        let prompt = render_voice_instructions_prompt(&input.steps);

        match self.try_list(prompt, "instructions").await {
            Ok(instructions) => Resolved::ok(instructions),
            Err(e) => {
                tracing::error!("Error generating voice instructions: {}", e);
                Resolved::ok(input.steps)
            }
        }
    }

    #[instrument(skip(self, input))]
    async fn generate_image(&self, input: GenerateImageInput) -> Resolved<Option<String>> {
        let prompt = render_image_generation_prompt(&input.prompt);

        match self
            .llm_client
            .generate_image(prompt, GenerationSettings::IMAGE_GENERATION)
            .await
        {
            Ok(image) => {
                if image.is_none() {
                    tracing::warn!("Image model answered without an image part");
                }
                Resolved::ok(image)
            }
            Err(e) => {
                tracing::error!("Error generating image: {}", e);
                Resolved::ok(None)
            }
        }
    }
}
