use super::EditorName;

#[test]
fn it_parses_editor_names() {
    assert_eq!(EditorName::parse("external"), Some(EditorName::External));
    assert_eq!(EditorName::parse("none"), Some(EditorName::None));
    assert_eq!(EditorName::parse("neovim"), None);
}
