pub mod check_allergens;
pub mod generate_recipe_image;
pub mod generate_shopping_list;
pub mod get_chat_response;
pub mod get_chat_welcome;
pub mod get_recipe_details;
pub mod get_voice_instructions;
pub mod identify_recipe;
