#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EditorName {
    External,
    None,
}

impl EditorName {
    pub fn parse(text: &str) -> Option<EditorName> {
        return EditorName::iter().find(|e| return e.to_string() == text);
    }
}

/// Opens written files for the user to review.
#[async_trait]
pub trait Editor {
    fn name(&self) -> EditorName;
    async fn open(&self, paths: &[PathBuf]) -> Result<()>;
}
