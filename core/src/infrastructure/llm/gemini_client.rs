use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{
        ports::LLMClient,
        value_objects::{GenerationSettings, ImageInput},
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    image_model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

impl From<GenerationSettings> for GenerationConfig {
    fn from(settings: GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_p: settings.top_p,
            top_k: settings.top_k,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    inline_data: Option<InlineDataResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataResponse {
    mime_type: String,
    data: String,
}

impl GeminiRequest {
    fn new(parts: Vec<Part>, settings: GenerationSettings) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: settings.into(),
        }
    }
}

impl GeminiResponse {
    fn parts(&self) -> &[PartResponse] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    fn first_text(&self) -> Option<&str> {
        self.parts().first().and_then(|p| p.text.as_deref())
    }

    fn first_image_data_uri(&self) -> Option<String> {
        self.parts()
            .iter()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| d.mime_type.starts_with("image/"))
            .map(|d| format!("data:{};base64,{}", d.mime_type, d.data))
    }
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            image_model_name: config.gemini_image_model,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_gemini_api(
        &self,
        model_name: &str,
        request: GeminiRequest,
    ) -> Result<GeminiResponse, CoreError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model_name);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }

    async fn complete(
        &self,
        parts: Vec<Part>,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let response = self
            .call_gemini_api(&self.model_name, GeminiRequest::new(parts, settings))
            .await?;

        response
            .first_text()
            .map(str::to_owned)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    #[instrument(skip(self, prompt), fields(model = %self.model_name))]
    async fn generate_text(
        &self,
        prompt: String,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        self.complete(vec![Part::Text { text: prompt }], settings)
            .await
    }

    #[instrument(
        skip(self, prompt, image),
        fields(model = %self.model_name, mime_type = %image.mime_type, size = image.data.len())
    )]
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let data = image.to_base64();
        let parts = vec![
            Part::Text { text: prompt },
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type,
                    data,
                },
            },
        ];

        self.complete(parts, settings).await
    }

    #[instrument(skip(self, prompt), fields(model = %self.image_model_name))]
    async fn generate_image(
        &self,
        prompt: String,
        settings: GenerationSettings,
    ) -> Result<Option<String>, CoreError> {
        let request = GeminiRequest::new(vec![Part::Text { text: prompt }], settings);
        let response = self
            .call_gemini_api(&self.image_model_name, request)
            .await?;

        Ok(response.first_image_data_uri())
    }
}
