use std::env;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::models::Editor;
use crate::domain::models::EditorName;

/// Hands the files to `$VISUAL` or `$EDITOR`, waiting until it exits.
#[derive(Default)]
pub struct ExternalEditor {}

fn editor_command() -> Option<String> {
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(cmd) = env::var(var) {
            if !cmd.trim().is_empty() {
                return Some(cmd);
            }
        }
    }

    return None;
}

#[async_trait]
impl Editor for ExternalEditor {
    fn name(&self) -> EditorName {
        return EditorName::External;
    }

    #[allow(clippy::implicit_return)]
    async fn open(&self, paths: &[PathBuf]) -> Result<()> {
        let cmd = match editor_command() {
            Some(cmd) => cmd,
            None => bail!("Neither $VISUAL nor $EDITOR is set, cannot open files"),
        };

        // Editors are often configured with flags, e.g. "code --wait".
        let mut parts = cmd.split_whitespace();
        let program = parts.next().unwrap_or_default().to_string();

        let status = Command::new(&program)
            .args(parts)
            .args(paths)
            .status()
            .await?;

        if !status.success() {
            bail!(format!("{program} exited with {status}"));
        }

        return Ok(());
    }
}
