//! Gemini-backed text generator

use platform::gemini::GeminiClient;
use platform::secret::ApiKey;

use crate::domain::repository::TextGenerator;
use crate::error::GenerationFailure;

#[derive(Debug, Clone, Default)]
pub struct GeminiTextGenerator {
    client: GeminiClient,
}

impl GeminiTextGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl TextGenerator for GeminiTextGenerator {
    async fn generate(
        &self,
        api_key: &ApiKey,
        instruction: &str,
    ) -> Result<Option<String>, GenerationFailure> {
        tracing::debug!(model = %self.client.model(), "Calling text generator");
        Ok(self.client.generate_content(api_key, instruction).await?)
    }
}
