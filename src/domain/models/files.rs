use serde_derive::Deserialize;
use serde_derive::Serialize;

/// A workspace file as sent to the backend. `filepath` is always relative to
/// the workspace root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub filepath: String,
    pub content: String,
}

impl FileContent {
    pub fn new(filepath: &str, content: &str) -> FileContent {
        return FileContent {
            filepath: filepath.to_string(),
            content: content.to_string(),
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsContent {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
}

/// A test file produced by the backend, waiting to be written into the
/// workspace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTest {
    pub filepath: String,
    pub content: String,
}
