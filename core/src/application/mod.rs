use anyhow::bail;
use tracing::info;

use crate::{
    domain::common::{FerrisChefConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type FerrisChefService = Service<GeminiLLMClient>;

pub async fn create_service(config: FerrisChefConfig) -> Result<FerrisChefService, anyhow::Error> {
    if config.llm.gemini_api_key.trim().is_empty() {
        bail!("GEMINI_API_KEY must be set to reach the generative model");
    }

    info!(
        model = %config.llm.gemini_model,
        image_model = %config.llm.gemini_image_model,
        "creating recipe service"
    );

    let llm_client = GeminiLLMClient::new(config.llm);

    Ok(Service::new(llm_client))
}
