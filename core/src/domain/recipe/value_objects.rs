use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

static DATA_URI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(image/[a-z0-9.+-]+);base64,").expect("data URI pattern is valid")
});

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Sampling parameters sent as `generation_config` with every model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationSettings {
    pub const VISION: Self = Self {
        temperature: 0.4,
        top_p: 0.9,
        top_k: 32,
        max_output_tokens: 1024,
    };

    pub const TEXT: Self = Self {
        temperature: 0.4,
        top_p: 0.9,
        top_k: 32,
        max_output_tokens: 2048,
    };

    pub const IMAGE_GENERATION: Self = Self {
        temperature: 0.7,
        top_p: 0.9,
        top_k: 32,
        max_output_tokens: 2048,
    };
}

/// Image sent to the vision model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageInput {
    /// Raw upload bytes. Non-image content types fall back to JPEG.
    pub fn from_bytes(data: Vec<u8>, content_type: Option<&str>) -> Self {
        let mime_type = content_type
            .filter(|ct| ct.starts_with("image/"))
            .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
            .to_string();

        Self { mime_type, data }
    }

    /// Base64 payload, optionally prefixed with `data:image/<type>;base64,`.
    pub fn from_base64(encoded: &str) -> Result<Self, CoreError> {
        let encoded = encoded.trim();
        let (mime_type, payload) = match DATA_URI_PREFIX.captures(encoded) {
            Some(captures) => {
                let prefix_len = captures.get(0).map(|m| m.end()).unwrap_or(0);
                let mime_type = captures
                    .get(1)
                    .map(|m| m.as_str())
                    .unwrap_or(DEFAULT_IMAGE_MIME_TYPE);
                (mime_type.to_string(), &encoded[prefix_len..])
            }
            None => (DEFAULT_IMAGE_MIME_TYPE.to_string(), encoded),
        };

        let data = general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| CoreError::Invalid(format!("image is not valid base64: {}", e)))?;

        if data.is_empty() {
            return Err(CoreError::Invalid("image is empty".to_string()));
        }

        Ok(Self { mime_type, data })
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }
}

#[derive(Debug, Clone)]
pub struct IdentifyRecipeInput {
    pub image: ImageInput,
}

#[derive(Debug, Clone)]
pub struct GetRecipeDetailsInput {
    pub food_name: String,
}

#[derive(Debug, Clone)]
pub struct GenerateShoppingListInput {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CheckAllergensInput {
    pub ingredients: Vec<String>,
    pub user_allergens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub question: String,
    pub context: String,
}

#[derive(Debug, Clone)]
pub struct VoiceInstructionsInput {
    pub steps: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateImageInput {
    pub prompt: String,
}
