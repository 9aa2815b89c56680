use anyhow::Result;
use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::domain::models::ConfirmPrompt;
use crate::domain::models::Prompter;

/// Asks on the controlling terminal, outside of the TUI.
pub struct TerminalPrompter {}

#[async_trait]
impl Prompter for TerminalPrompter {
    #[allow(clippy::implicit_return)]
    async fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool> {
        let selection = tokio::task::spawn_blocking(move || {
            return Select::with_theme(&ColorfulTheme::default())
                .with_prompt(&prompt.message)
                .items(&[&prompt.accept, &prompt.decline])
                .default(1)
                .interact_opt();
        })
        .await??;

        return Ok(selection == Some(0));
    }
}
