#[cfg(test)]
#[path = "tui_test.rs"]
mod tests;

use anyhow::anyhow;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::oneshot;

use crate::domain::models::ConfirmPrompt;
use crate::domain::models::ConfirmRequest;
use crate::domain::models::Event;
use crate::domain::models::Prompter;

/// Shows the prompt as a modal in the running UI and waits for the answer.
pub struct TuiPrompter {
    tx: mpsc::UnboundedSender<Event>,
}

impl TuiPrompter {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> TuiPrompter {
        return TuiPrompter { tx };
    }
}

#[async_trait]
impl Prompter for TuiPrompter {
    #[allow(clippy::implicit_return)]
    async fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool> {
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(Event::Confirm(ConfirmRequest { prompt, reply }))
            .map_err(|_| return anyhow!("UI is not running"))?;

        // A modal dismissed by shutdown drops the sender, which reads as a
        // decline.
        return Ok(answer.await.unwrap_or(false));
    }
}
