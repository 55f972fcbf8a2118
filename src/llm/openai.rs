use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    config::LlmConfig,
    error::{CiError, Result},
    llm::{
        traits::LanguageModel,
        types::{
            ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
            USER_ROLE,
        },
    },
};

pub struct OpenAiClient {
    client: Client,
    endpoint: Url,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let token_value = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.api_key.expose_secret()
        ))?;

        headers.append("Authorization", token_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let endpoint =
            Url::parse(&format!("{}/chat/completions", config.base_url))?;

        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
        })
    }

    fn request_body(&self, prompt: String) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: USER_ROLE.into(),
                content: prompt,
            }],
        }
    }
}

/// Content of the first choice, which must exist and be non-null.
pub fn first_choice_content(
    response: ChatCompletionResponse,
) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            CiError::language_model("response contained no message content")
        })
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    async fn complete(&self, prompt: String) -> Result<String> {
        debug!("requesting completion from model {}", self.model);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&self.request_body(prompt))
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletionResponse>()
            .await?;

        first_choice_content(response)
    }
}
