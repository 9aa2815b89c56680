#[cfg(test)]
#[path = "applier_test.rs"]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use tokio::fs;

use super::Workspace;
use crate::domain::models::ConfirmPrompt;
use crate::domain::models::DevexyError;
use crate::domain::models::GeneratedTest;
use crate::domain::models::PrompterRef;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: Vec<String>,
}

impl ApplyReport {
    pub fn summary(&self) -> String {
        let mut parts = vec![];
        if !self.succeeded.is_empty() {
            parts.push(format!(
                "Successfully created {} test files",
                self.succeeded.len()
            ));
        }
        if !self.failed.is_empty() {
            parts.push(format!(
                "Failed to create {} test files. Check the log for details.",
                self.failed.len()
            ));
        }
        if !self.skipped.is_empty() {
            parts.push(format!("Skipped {} existing files", self.skipped.len()));
        }
        if parts.is_empty() {
            return "No test files to create".to_string();
        }

        return parts.join(". ");
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

fn no_workspace() -> DevexyError {
    return DevexyError::Precondition(
        "No workspace folder found. Please open a workspace or folder to save test files."
            .to_string(),
    );
}

pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).await?;
    return Ok(());
}

/// Writes generated files into the workspace, asking before clobbering
/// anything that already exists.
pub struct WorkspaceApplier {
    workspace: Option<Workspace>,
    prompter: PrompterRef,
}

impl WorkspaceApplier {
    pub fn new(workspace: Option<Workspace>, prompter: PrompterRef) -> WorkspaceApplier {
        return WorkspaceApplier {
            workspace,
            prompter,
        };
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        return self.workspace.as_ref();
    }

    /// Per file failures are collected, only a missing workspace fails the
    /// whole batch.
    pub async fn apply(&self, tests: &[GeneratedTest]) -> Result<ApplyReport> {
        if self.workspace.is_none() {
            return Err(no_workspace().into());
        }

        let mut report = ApplyReport::default();
        for test in tests {
            match self.write_file(&test.filepath, &test.content).await {
                Ok(WriteOutcome::Written(path)) => {
                    tracing::info!(path = ?path, "created test file");
                    report.succeeded.push(test.filepath.to_string());
                }
                Ok(WriteOutcome::Skipped(path)) => {
                    tracing::info!(path = ?path, "skipped existing test file");
                    report.skipped.push(test.filepath.to_string());
                }
                Err(err) => {
                    tracing::error!(filepath = test.filepath, error = ?err, "failed to create test file");
                    report.failed.push(test.filepath.to_string());
                }
            }
        }

        return Ok(report);
    }

    pub async fn write_file(&self, relative: &str, content: &str) -> Result<WriteOutcome> {
        let workspace = self.workspace.as_ref().ok_or_else(no_workspace)?;
        let path = workspace.contained(relative)?;

        if let Some(parent) = path.parent() {
            ensure_dir(parent).await?;
        }

        if fs::try_exists(&path).await? {
            let overwrite = self
                .prompter
                .confirm(ConfirmPrompt::overwrite(relative))
                .await?;
            if !overwrite {
                return Ok(WriteOutcome::Skipped(path));
            }
        }

        fs::write(&path, content).await?;
        return Ok(WriteOutcome::Written(path));
    }
}
