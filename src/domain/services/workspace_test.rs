use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use super::read_files;
use super::select_files;
use super::split_paths;
use super::Workspace;
use crate::domain::models::DevexyError;
use crate::domain::models::FileContent;

#[test]
fn it_splits_paths_on_whitespace_and_commas() {
    assert_eq!(
        split_paths(" src/a.py, src/b.py\nsrc/c.py,,"),
        vec!["src/a.py", "src/b.py", "src/c.py"]
    );
    assert!(split_paths("   ").is_empty());
}

#[test]
fn it_makes_paths_relative() {
    let workspace = Workspace::new(PathBuf::from("/work/project"));
    assert_eq!(
        workspace.relative_path(&PathBuf::from("/work/project/src/a.py")),
        "src/a.py"
    );
    assert_eq!(
        workspace.relative_path(&PathBuf::from("/elsewhere/b.py")),
        "/elsewhere/b.py"
    );
}

#[test]
fn it_refuses_paths_escaping_the_root() {
    let workspace = Workspace::new(PathBuf::from("/work/project"));
    assert_eq!(
        workspace.contained("tests/test_a.py").unwrap(),
        PathBuf::from("/work/project/tests/test_a.py")
    );

    for path in ["../evil.py", "/etc/passwd", "tests/../../evil.py", ""] {
        let err = workspace.contained(path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DevexyError>(),
            Some(DevexyError::Precondition(_))
        ));
    }
}

#[test]
fn it_only_opens_existing_directories() -> Result<()> {
    let tmp_dir = TempDir::new()?;
    assert!(Workspace::open(Some(tmp_dir.path().to_path_buf())).is_some());
    assert!(Workspace::open(Some(tmp_dir.path().join("missing"))).is_none());
    assert!(Workspace::open(None).is_none());

    return Ok(());
}

#[tokio::test]
async fn it_reads_selected_files_relative_to_workspace() -> Result<()> {
    let tmp_dir = TempDir::new()?;
    std::fs::create_dir_all(tmp_dir.path().join("src"))?;
    std::fs::write(tmp_dir.path().join("src/a.py"), "def add(a, b): return a + b")?;

    let workspace = Workspace::new(tmp_dir.path().to_path_buf());
    let paths = select_files(
        Some(&workspace),
        &["src/a.py".to_string(), "src/a.py".to_string()],
    )?;
    assert_eq!(paths.len(), 1);

    let files = read_files(Some(&workspace), &paths).await?;
    assert_eq!(
        files,
        vec![FileContent::new("src/a.py", "def add(a, b): return a + b")]
    );

    return Ok(());
}

#[test]
fn it_rejects_missing_files() -> Result<()> {
    let tmp_dir = TempDir::new()?;
    let workspace = Workspace::new(tmp_dir.path().to_path_buf());
    let err = select_files(Some(&workspace), &["nope.py".to_string()]).unwrap_err();

    assert_eq!(
        err.downcast_ref::<DevexyError>(),
        Some(&DevexyError::Precondition(
            "File not found: nope.py".to_string()
        ))
    );

    return Ok(());
}
