#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use std::path::Path;

/// Editor language id for a file, inferred from its extension.
pub fn language_from_path(filepath: &str) -> &'static str {
    let extension = Path::new(filepath)
        .extension()
        .map(|ext| return ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "js" => return "javascript",
        "ts" => return "typescript",
        "jsx" => return "javascriptreact",
        "tsx" => return "typescriptreact",
        "py" => return "python",
        "java" => return "java",
        "cs" => return "csharp",
        "go" => return "go",
        "rb" => return "ruby",
        "php" => return "php",
        "rs" => return "rust",
        "swift" => return "swift",
        "kt" | "kts" => return "kotlin",
        _ => return "plaintext",
    }
}
