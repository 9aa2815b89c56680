#[cfg(test)]
#[path = "workspace_test.rs"]
mod tests;

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use tokio::fs;

use crate::domain::models::DevexyError;
use crate::domain::models::FileContent;

/// Splits a typed selection of paths on whitespace and commas.
pub fn split_paths(text: &str) -> Vec<String> {
    return text
        .split(|c: char| return c.is_whitespace() || c == ',')
        .filter(|entry| return !entry.is_empty())
        .map(|entry| return entry.to_string())
        .collect();
}

/// The root folder generated files are written into and selections are
/// resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Workspace {
        return Workspace { root };
    }

    /// A workspace only exists if its root is an existing directory.
    pub fn open(root: Option<PathBuf>) -> Option<Workspace> {
        let root = root?;
        if !root.is_dir() {
            tracing::warn!(root = ?root, "workspace root is not a directory");
            return None;
        }

        return Some(Workspace::new(root));
    }

    pub fn root(&self) -> &Path {
        return &self.root;
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        return self.root.join(path);
    }

    /// Joins a workspace relative path, refusing anything that would land
    /// outside the root.
    pub fn contained(&self, relative: &str) -> Result<PathBuf> {
        let path = Path::new(relative);
        let escapes = path.components().any(|component| {
            return !matches!(component, Component::Normal(_) | Component::CurDir);
        });
        if relative.trim().is_empty() || escapes {
            return Err(DevexyError::Precondition(format!(
                "Refusing to write {relative} outside of the workspace"
            ))
            .into());
        }

        return Ok(self.root.join(path));
    }

    /// Forward slash path relative to the root. Paths outside the workspace
    /// are returned unchanged.
    pub fn relative_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) => {
                return relative
                    .components()
                    .map(|component| return component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            }
            Err(_) => return path.to_string_lossy().to_string(),
        }
    }
}

/// Validates a selection, resolving relative entries against the workspace.
pub fn select_files(workspace: Option<&Workspace>, entries: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = vec![];
    for entry in entries {
        let path = match workspace {
            Some(workspace) => workspace.resolve(entry),
            None => PathBuf::from(entry),
        };

        if !path.is_file() {
            return Err(DevexyError::Precondition(format!("File not found: {entry}")).into());
        }

        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    return Ok(paths);
}

pub fn display_path(workspace: Option<&Workspace>, path: &Path) -> String {
    match workspace {
        Some(workspace) => return workspace.relative_path(path),
        None => return path.to_string_lossy().to_string(),
    }
}

/// Reads each file fresh from disk, keyed by its workspace relative path.
pub async fn read_files(
    workspace: Option<&Workspace>,
    paths: &[PathBuf],
) -> Result<Vec<FileContent>> {
    let mut files = vec![];
    for path in paths {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| return format!("Failed to read {}", path.display()))?;

        files.push(FileContent {
            filepath: display_path(workspace, path),
            content,
        });
    }

    return Ok(files);
}
