#[cfg(test)]
#[path = "clipboard_test.rs"]
mod tests;

use anyhow::anyhow;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::sync::oneshot;

/// Text to copy, and where to report whether it landed.
pub struct ClipboardRequest {
    pub text: String,
    pub reply: oneshot::Sender<Result<()>>,
}

/// Handle to the background task owning the system clipboard.
#[derive(Clone)]
pub struct ClipboardService {
    tx: mpsc::UnboundedSender<ClipboardRequest>,
}

impl ClipboardService {
    pub fn new() -> (ClipboardService, mpsc::UnboundedReceiver<ClipboardRequest>) {
        let (tx, rx) = mpsc::unbounded_channel::<ClipboardRequest>();
        return (ClipboardService { tx }, rx);
    }

    pub fn healthcheck() -> Result<()> {
        arboard::Clipboard::new()?;
        return Ok(());
    }

    pub async fn start(rx: mpsc::UnboundedReceiver<ClipboardRequest>) -> Result<()> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                ClipboardService::serve(rx, |text| {
                    clipboard.set_text(text)?;
                    return Ok(());
                })
                .await;
            }
            Err(err) => {
                tracing::warn!(error = ?err, "clipboard is unavailable");
                let reason = err.to_string();
                ClipboardService::serve(rx, move |_| {
                    return Err(anyhow!("Clipboard is not available: {reason}"));
                })
                .await;
            }
        }

        return Ok(());
    }

    /// Answers every request with the outcome of `set_text`. A failed copy
    /// is reported to its requester and never stops the service.
    pub async fn serve<F>(mut rx: mpsc::UnboundedReceiver<ClipboardRequest>, mut set_text: F)
    where
        F: FnMut(String) -> Result<()>,
    {
        while let Some(request) = rx.recv().await {
            let res = set_text(request.text);
            if let Err(err) = &res {
                tracing::warn!(error = ?err, "failed to copy to clipboard");
            }
            if request.reply.send(res).is_err() {
                tracing::debug!("clipboard requester went away");
            }
        }
    }

    pub async fn set(&self, text: String) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(ClipboardRequest { text, reply })
            .map_err(|_| return anyhow!("Clipboard service is not running."))?;

        return rx
            .await
            .map_err(|_| return anyhow!("Clipboard service stopped before copying."))?;
    }
}
