use async_trait::async_trait;

use crate::error::Result;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel {
    /// Sends `prompt` as a single user message and returns the content of the
    /// first choice exactly as received.
    async fn complete(&self, prompt: String) -> Result<String>;
}
