use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct VoiceCommandValidator {
    #[validate(length(min = 1, message = "steps must not be empty"))]
    pub steps: Vec<String>,

    /// Voice instructions for the steps; may be shorter than `steps`.
    #[serde(default)]
    pub instructions: Vec<String>,

    #[serde(default)]
    pub current_step: usize,

    #[validate(length(min = 1, max = 500, message = "transcript must be between 1 and 500 characters"))]
    pub transcript: String,

    /// Voices the client's speech engine offers.
    #[serde(default)]
    pub voices: Vec<String>,
}
