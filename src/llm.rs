#[cfg(feature = "ssr")]
mod llm_impl {
    use async_trait::async_trait;
    use serde_json::json;
    use thiserror::Error;

    /// Model invoked for every generation request. Fixed by the server, not
    /// user-selectable.
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";

    const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

    #[derive(Debug, Error)]
    pub enum ModelError {
        #[error("OPENAI_API_KEY is not configured")]
        MissingApiKey,
        #[error("request to the model API failed: {0}")]
        Http(#[from] reqwest::Error),
        #[error("model API returned status {0}: {1}")]
        Api(u16, String),
        #[error("model response had no text content")]
        EmptyResponse,
    }

    /// Narrow seam around the hosted generation model so the request handler
    /// can be exercised with a deterministic stub.
    #[async_trait]
    pub trait ReviewModel: Send + Sync {
        async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
    }

    /// Production model client. One call per request, no retries; the API
    /// key is read from the environment at call time.
    pub struct OpenAiModel {
        client: reqwest::Client,
    }

    impl OpenAiModel {
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }
    }

    impl Default for OpenAiModel {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ReviewModel for OpenAiModel {
        async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
            let api_key =
                std::env::var("OPENAI_API_KEY").map_err(|_| ModelError::MissingApiKey)?;

            let response = self
                .client
                .post(CHAT_COMPLETIONS_URL)
                .header("Authorization", format!("Bearer {}", api_key))
                .json(&json!({
                    "model": OPENAI_MODEL,
                    "messages": [
                        { "role": "user", "content": prompt }
                    ],
                }))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ModelError::Api(status.as_u16(), body));
            }

            let body = response.json::<serde_json::Value>().await?;
            let text = body["choices"][0]["message"]["content"]
                .as_str()
                .ok_or(ModelError::EmptyResponse)?;
            Ok(text.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
pub use llm_impl::*;
