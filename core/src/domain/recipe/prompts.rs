//! Prompt templates for each model task. All builders are pure.

pub const IDENTIFY_DISH_PROMPT: &str = "Identify exactly what food/dish is shown in this image. Only return the name of the dish, nothing else.";

pub fn render_recipe_details_prompt(food_name: &str) -> String {
    format!(
        r#"Create a detailed recipe for "{food_name}".
Return data in a valid JSON format with the following structure:
{{
  "name": "Recipe name",
  "description": "Short description",
  "ingredients": ["ingredient 1", "ingredient 2", ...],
  "steps": ["step 1", "step 2", ...],
  "nutritionalInfo": {{
    "calories": "amount",
    "protein": "amount",
    "carbs": "amount",
    "fat": "amount",
    "fiber": "amount"
  }},
  "cookingTime": "total time",
  "servings": "number of servings",
  "tips": ["tip 1", "tip 2", ...],
  "allergens": ["allergen 1", "allergen 2", ...]
}}

Make sure each value is specific and detailed. For ingredients, include quantities.
For steps, be thorough and specific. Include common allergens in the allergens array."#
    )
}

pub fn render_shopping_list_prompt(ingredients: &[String]) -> String {
    let ingredients = ingredients.join("\n");

    format!(
        r#"Convert these recipe ingredients into a smart, organized shopping list.
Group similar items together, and return only the shopping list items:
{ingredients}

Return as a JSON array of strings, with each string being a shopping list item."#
    )
}

pub fn render_allergen_check_prompt(ingredients: &[String], user_allergens: &[String]) -> String {
    let allergens = user_allergens.join(", ");
    let ingredients = ingredients.join("\n");

    format!(
        r#"Check if any of these ingredients contain or may contain these allergens: {allergens}.
Ingredients:
{ingredients}

Return only the ingredients that contain allergens along with which allergen they contain,
formatted as a JSON array of strings."#
    )
}

pub fn render_chat_prompt(question: &str, context: &str) -> String {
    format!(
        r#"You are a helpful cooking assistant. Answer the following cooking question with accurate and helpful information.
The user's current recipe context is: {context}

User question: {question}

Provide a detailed but concise answer focused on the cooking question."#
    )
}

pub fn render_voice_instructions_prompt(steps: &[String]) -> String {
    let steps = steps.join("\n");

    format!(
        r#"Convert these cooking steps into clear, conversational voice instructions
that would be easy to follow in a hands-free cooking mode:
{steps}

Return as a JSON array of strings, with each string being a voice instruction.
Keep them concise but thorough, and make them suitable for text-to-speech."#
    )
}

pub fn render_image_generation_prompt(description: &str) -> String {
    format!(
        "Generate a beautiful, professional photo of: {description}. Make it look like a high-quality food photography image."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recipe_prompt_embeds_food_and_schema() {
        let prompt = render_recipe_details_prompt("Chicken Tikka Masala");

        assert!(prompt.contains("\"Chicken Tikka Masala\""));
        assert!(prompt.contains("\"nutritionalInfo\": {"));
        assert!(prompt.contains("\"cookingTime\""));
        assert!(prompt.contains("include quantities"));
    }

    #[test]
    fn test_shopping_list_prompt_lists_one_ingredient_per_line() {
        let prompt = render_shopping_list_prompt(&strings(&["200g chicken breast", "1 onion"]));

        assert!(prompt.contains("200g chicken breast\n1 onion"));
        assert!(prompt.contains("JSON array of strings"));
    }

    #[test]
    fn test_empty_lists_produce_empty_sections() {
        let prompt = render_voice_instructions_prompt(&[]);

        assert!(prompt.contains("hands-free cooking mode:\n\n"));
    }

    #[test]
    fn test_allergen_prompt_joins_allergens_with_commas() {
        let prompt =
            render_allergen_check_prompt(&strings(&["2 eggs"]), &strings(&["gluten", "dairy"]));

        assert!(prompt.contains("these allergens: gluten, dairy."));
        assert!(prompt.contains("Ingredients:\n2 eggs"));
    }

    #[test]
    fn test_chat_prompt_includes_question_and_context() {
        let prompt = render_chat_prompt("Can I use tofu?", "Recipe: Pad Thai");

        assert!(prompt.contains("recipe context is: Recipe: Pad Thai"));
        assert!(prompt.contains("User question: Can I use tofu?"));
    }

    #[test]
    fn test_image_prompt_is_deterministic() {
        assert_eq!(
            render_image_generation_prompt("lemon tart"),
            render_image_generation_prompt("lemon tart")
        );
        assert!(render_image_generation_prompt("lemon tart").contains("photo of: lemon tart."));
    }
}
