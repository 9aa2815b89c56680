use anyhow::Result;
use test_utils::coverage_fixture;
use tokio::sync::oneshot;
use tui_textarea::Input;
use tui_textarea::Key;

use super::AppState;
use super::Tab;
use super::FILES_FIELD;
use super::PASSWORD_FIELD;
use super::SOURCE_FILES_FIELD;
use super::TEST_DIR_FIELD;
use super::TEST_FILES_FIELD;
use super::USERNAME_FIELD;
use crate::domain::models::Action;
use crate::domain::models::ConfirmPrompt;
use crate::domain::models::ConfirmRequest;
use crate::domain::models::CoverageAnalysisResponse;
use crate::domain::models::Event;
use crate::domain::models::GeneratedTest;
use crate::domain::models::Panel;
use crate::domain::models::Status;
use crate::domain::models::StatusUpdate;
use crate::domain::models::TestType;

fn type_text(app_state: &mut AppState, text: &str) {
    for c in text.chars() {
        app_state.handle_event(Event::KeyboardCharInput(Input {
            key: Key::Char(c),
            ctrl: false,
            alt: false,
        }));
    }
}

fn logged_in<'a>() -> AppState<'a> {
    let mut app_state = AppState::default();
    app_state.handle_event(Event::LoginStatus {
        logged_in: true,
        username: Some("alice".to_string()),
    });
    return app_state;
}

fn generated_test(filepath: &str) -> GeneratedTest {
    return GeneratedTest {
        filepath: filepath.to_string(),
        content: "def test_a(): pass".to_string(),
    };
}

mod login {
    use super::*;

    #[test]
    fn it_submits_credentials() {
        let mut app_state = AppState::default();
        type_text(&mut app_state, "alice");
        app_state.handle_event(Event::KeyboardTab());
        type_text(&mut app_state, "pw123");

        let actions = app_state.handle_event(Event::KeyboardEnter());

        assert_eq!(
            actions,
            vec![Action::Login {
                username: "alice".to_string(),
                password: "pw123".to_string(),
            }]
        );
    }

    #[test]
    fn it_requires_both_fields() {
        let mut app_state = AppState::default();
        let actions = app_state.handle_event(Event::KeyboardEnter());
        assert!(actions.is_empty());
        assert_eq!(
            app_state.status(Panel::Login),
            Some(&StatusUpdate::new(
                Panel::Login,
                Status::Error,
                "Username is required"
            ))
        );

        type_text(&mut app_state, "alice");
        let actions = app_state.handle_event(Event::KeyboardEnter());
        assert!(actions.is_empty());
        assert_eq!(
            app_state.status(Panel::Login).map(|e| return e.message.as_str()),
            Some("Password is required")
        );
    }

    #[test]
    fn it_clears_the_password_once_logged_in() {
        let mut app_state = AppState::default();
        app_state.login_form.set_value(USERNAME_FIELD, "alice");
        app_state.login_form.set_value(PASSWORD_FIELD, "pw123");

        app_state.handle_event(Event::LoginStatus {
            logged_in: true,
            username: Some("alice".to_string()),
        });

        assert!(app_state.logged_in);
        assert_eq!(app_state.username, Some("alice".to_string()));
        assert_eq!(app_state.login_form.value(PASSWORD_FIELD), "");
    }

    #[test]
    fn it_resets_the_session_on_logout() {
        let mut app_state = logged_in();
        app_state.handle_event(Event::UpdateTestResults(vec![generated_test("tests/a.py")]));
        app_state.handle_event(Event::KeyboardCTRL('n'));

        let actions = app_state.handle_event(Event::KeyboardCTRL('l'));
        assert_eq!(actions, vec![Action::Logout()]);

        app_state.handle_event(Event::LoginStatus {
            logged_in: false,
            username: None,
        });

        assert!(!app_state.logged_in);
        assert_eq!(app_state.tab, Tab::Generate);
        assert!(app_state.generated_tests.is_empty());
        assert!(app_state.visible.is_empty());
    }
}

mod generate {
    use super::*;

    #[test]
    fn it_generates_with_the_selected_type() {
        let mut app_state = logged_in();
        type_text(&mut app_state, "src/a.py, src/b.py");
        app_state.handle_event(Event::KeyboardCTRL('t'));
        assert_eq!(app_state.test_type, TestType::Integration);

        let actions = app_state.handle_event(Event::KeyboardEnter());

        assert_eq!(
            actions,
            vec![Action::GenerateTests {
                files: vec!["src/a.py".to_string(), "src/b.py".to_string()],
                test_dir: "tests".to_string(),
                test_type: TestType::Integration,
            }]
        );
    }

    #[test]
    fn it_requires_a_test_directory() {
        let mut app_state = logged_in();
        app_state.generate_form.set_value(FILES_FIELD, "src/a.py");
        app_state.generate_form.set_value(TEST_DIR_FIELD, "  ");

        let actions = app_state.handle_event(Event::KeyboardEnter());

        assert!(actions.is_empty());
        assert_eq!(
            app_state.status(Panel::Generate).map(|e| return e.message.as_str()),
            Some("Test directory is required")
        );
    }

    #[test]
    fn it_selects_and_previews_generated_tests() {
        let mut app_state = logged_in();
        app_state.handle_event(Event::UpdateTestResults(vec![
            generated_test("tests/test_a.py"),
            generated_test("tests/test_b.py"),
        ]));
        assert!(app_state.visible.contains(&Panel::Generate));

        app_state.handle_event(Event::UIScrollDown());
        app_state.handle_event(Event::UIScrollDown());
        assert_eq!(app_state.selected_test, 1);

        let actions = app_state.handle_event(Event::KeyboardCTRL('e'));
        assert_eq!(actions, vec![Action::PreviewTest(1)]);

        app_state.handle_event(Event::ShowPreview(generated_test("tests/test_b.py")));
        assert!(app_state.preview.is_some());
        let actions = app_state.handle_event(Event::KeyboardEnter());
        assert!(actions.is_empty());

        app_state.handle_event(Event::KeyboardEsc());
        assert!(app_state.preview.is_none());
    }

    #[test]
    fn it_applies_and_discards() {
        let mut app_state = logged_in();
        assert_eq!(
            app_state.handle_event(Event::KeyboardCTRL('a')),
            vec![Action::ApplyTests()]
        );
        assert_eq!(
            app_state.handle_event(Event::KeyboardCTRL('x')),
            vec![Action::CancelTests()]
        );
    }
}

mod coverage {
    use super::*;

    #[test]
    fn it_sends_selections_before_analyzing() {
        let mut app_state = logged_in();
        app_state.handle_event(Event::KeyboardCTRL('n'));
        assert_eq!(app_state.tab, Tab::Coverage);

        app_state.coverage_form.set_value(SOURCE_FILES_FIELD, "src/calc.py");
        app_state
            .coverage_form
            .set_value(TEST_FILES_FIELD, "tests/test_calc.py");

        let actions = app_state.handle_event(Event::KeyboardEnter());
        assert_eq!(
            actions,
            vec![
                Action::SelectSourceFiles(vec!["src/calc.py".to_string()]),
                Action::SelectTestFiles(vec!["tests/test_calc.py".to_string()]),
                Action::UpdateCriticalityContext("".to_string()),
                Action::AnalyzeCoverage(),
            ]
        );

        let actions = app_state.handle_event(Event::KeyboardCTRL('r'));
        assert_eq!(actions.last(), Some(&Action::AnalyzeTestPriority()));
    }

    #[test]
    fn it_shows_and_closes_results() -> Result<()> {
        let mut app_state = logged_in();
        app_state.handle_event(Event::KeyboardCTRL('n'));
        assert!(app_state.results_lines().is_empty());

        let res = serde_json::from_str::<CoverageAnalysisResponse>(coverage_fixture())?;
        app_state.handle_event(Event::UpdateCoverageResults(Box::new(res)));
        assert!(app_state
            .results_lines()
            .iter()
            .any(|line| return line.contains("File: src/calc.py")));

        let actions = app_state.handle_event(Event::KeyboardEsc());
        assert_eq!(actions, vec![Action::Close(Panel::Coverage)]);

        app_state.handle_event(Event::HideResults(Panel::Coverage));
        assert!(app_state.results_lines().is_empty());

        return Ok(());
    }

    #[test]
    fn it_echoes_selected_files() {
        let mut app_state = logged_in();
        app_state.handle_event(Event::UpdateSourceFiles(vec![
            "src/a.py".to_string(),
            "src/b.py".to_string(),
        ]));

        assert_eq!(
            app_state.coverage_form.value(SOURCE_FILES_FIELD),
            "src/a.py src/b.py"
        );
    }
}

mod status {
    use super::*;

    #[test]
    fn it_clears_progress_on_terminal_status() {
        let mut app_state = logged_in();
        app_state.handle_event(Event::UpdateStatus(StatusUpdate::new(
            Panel::Coverage,
            Status::Loading,
            "Analyzing test coverage...",
        )));
        app_state.handle_event(Event::UpdateProgress {
            panel: Panel::Coverage,
            message: "Analyzing code coverage...".to_string(),
        });
        assert!(app_state.is_loading(Panel::Coverage));
        assert_eq!(
            app_state.progress.get(&Panel::Coverage).map(|e| return e.as_str()),
            Some("Analyzing code coverage...")
        );

        app_state.handle_event(Event::UpdateStatus(StatusUpdate::new(
            Panel::Coverage,
            Status::Success,
            "Coverage analysis completed.",
        )));

        assert!(!app_state.is_loading(Panel::Coverage));
        assert!(app_state.progress.get(&Panel::Coverage).is_none());
    }
}

mod confirm {
    use super::*;

    fn request() -> (ConfirmRequest, oneshot::Receiver<bool>) {
        let (reply, rx) = oneshot::channel();
        return (
            ConfirmRequest {
                prompt: ConfirmPrompt::overwrite("tests/test_a.py"),
                reply,
            },
            rx,
        );
    }

    #[tokio::test]
    async fn it_answers_yes() -> Result<()> {
        let mut app_state = logged_in();
        let (req, rx) = request();
        app_state.handle_event(Event::Confirm(req));

        let actions = app_state.handle_event(Event::KeyboardEnter());

        assert!(actions.is_empty());
        assert!(app_state.confirm.is_empty());
        assert!(rx.await?);

        return Ok(());
    }

    #[tokio::test]
    async fn it_swallows_input_until_answered() -> Result<()> {
        let mut app_state = logged_in();
        let (req, rx) = request();
        app_state.handle_event(Event::Confirm(req));

        type_text(&mut app_state, "src");
        assert!(!app_state.confirm.is_empty());
        assert_eq!(app_state.generate_form.value(FILES_FIELD), "");

        type_text(&mut app_state, "n");
        assert!(!rx.await?);

        return Ok(());
    }

    #[tokio::test]
    async fn it_queues_prompts_from_concurrent_operations() -> Result<()> {
        let mut app_state = logged_in();
        let (first, mut first_rx) = request();
        let (second, second_rx) = request();
        app_state.handle_event(Event::Confirm(first));
        app_state.handle_event(Event::Confirm(second));

        assert_eq!(app_state.confirm.len(), 2);
        assert!(first_rx.try_recv().is_err());

        type_text(&mut app_state, "n");
        assert!(!first_rx.await?);
        assert_eq!(app_state.confirm.len(), 1);

        app_state.handle_event(Event::KeyboardEnter());
        assert!(second_rx.await?);
        assert!(app_state.confirm.is_empty());

        return Ok(());
    }

    #[tokio::test]
    async fn it_declines_on_quit() -> Result<()> {
        let mut app_state = logged_in();
        let (first, first_rx) = request();
        let (second, second_rx) = request();
        app_state.handle_event(Event::Confirm(first));
        app_state.handle_event(Event::Confirm(second));

        app_state.handle_event(Event::KeyboardCTRLC());

        assert!(app_state.should_quit);
        assert!(!first_rx.await?);
        assert!(!second_rx.await?);

        return Ok(());
    }
}
