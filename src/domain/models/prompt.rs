use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::oneshot;

/// A yes/no question for the user. Anything but an explicit accept counts as
/// a decline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub message: String,
    pub accept: String,
    pub decline: String,
}

impl ConfirmPrompt {
    pub fn large_payload(file_count: usize, content_length: usize) -> ConfirmPrompt {
        let kb = (content_length as f64 / 1024.0).round() as u64;
        return ConfirmPrompt {
            message: format!("You're trying to process {file_count} files with a total of {kb}KB of content. This might take longer than expected or time out."),
            accept: "Continue Anyway".to_string(),
            decline: "Cancel".to_string(),
        };
    }

    pub fn overwrite(filepath: &str) -> ConfirmPrompt {
        return ConfirmPrompt {
            message: format!("File {filepath} already exists. Do you want to overwrite it?"),
            accept: "Overwrite".to_string(),
            decline: "Skip".to_string(),
        };
    }

    pub fn open_files(count: usize) -> ConfirmPrompt {
        return ConfirmPrompt {
            message: format!("Do you want to open the generated test files? ({count} written)"),
            accept: "Yes".to_string(),
            decline: "No".to_string(),
        };
    }
}

/// A pending prompt travelling to the UI together with the channel its answer
/// goes back on.
pub struct ConfirmRequest {
    pub prompt: ConfirmPrompt,
    pub reply: oneshot::Sender<bool>,
}

#[async_trait]
pub trait Prompter {
    /// Asks the user and resolves to true only on an explicit accept.
    async fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool>;
}

pub type PrompterRef = std::sync::Arc<dyn Prompter + Send + Sync>;
