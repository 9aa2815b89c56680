#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Editor;
use crate::domain::models::EditorName;

/// Lists the files instead of opening them.
#[derive(Default)]
pub struct NoopEditor {}

#[async_trait]
impl Editor for NoopEditor {
    fn name(&self) -> EditorName {
        return EditorName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn open(&self, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            println!("{}", path.display());
        }
        return Ok(());
    }
}
