use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(content: String, sender: Sender) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            content,
            sender,
            timestamp: now,
        }
    }

    pub fn user(content: String) -> Self {
        Self::new(content, Sender::User)
    }

    pub fn bot(content: String) -> Self {
        Self::new(content, Sender::Bot)
    }

    /// Greeting shown when a chat opens for a recipe.
    pub fn welcome(recipe_name: &str) -> Self {
        Self::bot(format!(
            "Hi there! I'm your cooking assistant for {}. You can ask me any questions about the recipe, cooking techniques, substitutions, or other culinary advice. How can I help you today?",
            recipe_name
        ))
    }
}
