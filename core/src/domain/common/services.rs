use std::sync::Arc;

use crate::domain::recipe::ports::LLMClient;

/// Application service. Every use case is implemented on this type, generic
/// over the outbound ports it needs.
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
