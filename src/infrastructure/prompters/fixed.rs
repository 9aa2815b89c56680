use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::ConfirmPrompt;
use crate::domain::models::Prompter;

/// Answers every prompt the same way without asking. Used for non-interactive
/// runs.
pub struct FixedPrompter {
    pub answer: bool,
}

#[async_trait]
impl Prompter for FixedPrompter {
    #[allow(clippy::implicit_return)]
    async fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool> {
        tracing::info!(message = prompt.message, answer = self.answer, "answered prompt");
        return Ok(self.answer);
    }
}
