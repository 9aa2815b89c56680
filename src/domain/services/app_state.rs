#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

use ratatui::prelude::Rect;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tui_textarea::Input;
use tui_textarea::Key;

use super::coverage_lines;
use super::generated_tests_lines;
use super::priority_lines;
use super::requirements_analysis_lines;
use super::requirements_optimization_lines;
use super::split_paths;
use super::Field;
use super::Form;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::ConfirmRequest;
use crate::domain::models::CoverageAnalysisResponse;
use crate::domain::models::Event;
use crate::domain::models::GeneratedTest;
use crate::domain::models::Panel;
use crate::domain::models::RequirementsAnalysisResponse;
use crate::domain::models::RequirementsOptimizationResponse;
use crate::domain::models::Status;
use crate::domain::models::StatusUpdate;
use crate::domain::models::TestPriorityAnalysisResponse;
use crate::domain::models::TestType;

pub const USERNAME_FIELD: &str = "Username";
pub const PASSWORD_FIELD: &str = "Password";
pub const FILES_FIELD: &str = "Files";
pub const TEST_DIR_FIELD: &str = "Test directory";
pub const SOURCE_FILES_FIELD: &str = "Source files";
pub const TEST_FILES_FIELD: &str = "Test files";
pub const CRITICALITY_FIELD: &str = "Code criticality context";
pub const REQUIREMENTS_FILE_FIELD: &str = "Requirements file";
pub const DESCRIPTION_FIELD: &str = "Description";
pub const GOALS_FIELD: &str = "Optimization goals";
pub const KEEP_FIELD: &str = "Keep dependencies";

pub const DEFAULT_TEST_DIR: &str = "tests";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, strum::Display)]
pub enum Tab {
    #[default]
    Generate,
    Coverage,
    Requirements,
}

impl Tab {
    /// Panels whose status and results show on this tab.
    pub fn panels(&self) -> &'static [Panel] {
        match self {
            Tab::Generate => return &[Panel::Generate],
            Tab::Coverage => return &[Panel::Coverage, Panel::Priority],
            Tab::Requirements => {
                return &[
                    Panel::RequirementsAnalysis,
                    Panel::RequirementsOptimization,
                ]
            }
        }
    }

    fn shift(&self, forward: bool) -> Tab {
        let tabs = Tab::iter().collect::<Vec<_>>();
        let idx = tabs.iter().position(|tab| return tab == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % tabs.len()
        } else {
            (idx + tabs.len() - 1) % tabs.len()
        };

        return tabs[next];
    }
}

fn comma_list(text: &str) -> Vec<String> {
    return text
        .split(',')
        .map(|e| return e.trim().to_string())
        .filter(|e| return !e.is_empty())
        .collect();
}

fn login_form<'a>() -> Form<'a> {
    return Form::new(vec![
        Field::new(USERNAME_FIELD),
        Field::masked(PASSWORD_FIELD),
    ]);
}

fn generate_form<'a>() -> Form<'a> {
    return Form::new(vec![
        Field::new(FILES_FIELD),
        Field::new(TEST_DIR_FIELD).with_value(DEFAULT_TEST_DIR),
    ]);
}

fn coverage_form<'a>() -> Form<'a> {
    return Form::new(vec![
        Field::new(SOURCE_FILES_FIELD),
        Field::new(TEST_FILES_FIELD),
        Field::new(CRITICALITY_FIELD),
    ]);
}

fn requirements_form<'a>() -> Form<'a> {
    return Form::new(vec![
        Field::new(REQUIREMENTS_FILE_FIELD),
        Field::new(SOURCE_FILES_FIELD),
        Field::new(DESCRIPTION_FIELD),
        Field::new(GOALS_FIELD).with_value("memory, performance, security"),
        Field::new(KEEP_FIELD),
    ]);
}

/// Everything the sidebar renders. Events from the controller and the
/// terminal are folded in here, user intent comes back out as actions.
pub struct AppState<'a> {
    pub logged_in: bool,
    pub username: Option<String>,
    pub tab: Tab,
    pub login_form: Form<'a>,
    pub generate_form: Form<'a>,
    pub coverage_form: Form<'a>,
    pub requirements_form: Form<'a>,
    pub test_type: TestType,
    pub statuses: HashMap<Panel, StatusUpdate>,
    pub progress: HashMap<Panel, String>,
    pub generated_tests: Vec<GeneratedTest>,
    pub selected_test: usize,
    pub coverage: Option<Box<CoverageAnalysisResponse>>,
    pub priority: Option<Box<TestPriorityAnalysisResponse>>,
    pub requirements_analysis: Option<Box<RequirementsAnalysisResponse>>,
    pub requirements_optimization: Option<Box<RequirementsOptimizationResponse>>,
    pub visible: HashSet<Panel>,
    pub preview: Option<GeneratedTest>,
    /// Pending confirmations, answered in arrival order.
    pub confirm: VecDeque<ConfirmRequest>,
    pub scroll: Scroll,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub should_quit: bool,
}

impl<'a> Default for AppState<'a> {
    fn default() -> AppState<'a> {
        return AppState {
            logged_in: false,
            username: None,
            tab: Tab::default(),
            login_form: login_form(),
            generate_form: generate_form(),
            coverage_form: coverage_form(),
            requirements_form: requirements_form(),
            test_type: TestType::default(),
            statuses: HashMap::new(),
            progress: HashMap::new(),
            generated_tests: vec![],
            selected_test: 0,
            coverage: None,
            priority: None,
            requirements_analysis: None,
            requirements_optimization: None,
            visible: HashSet::new(),
            preview: None,
            confirm: VecDeque::new(),
            scroll: Scroll::default(),
            last_known_height: 0,
            last_known_width: 0,
            should_quit: false,
        };
    }
}

impl<'a> AppState<'a> {
    pub fn status(&self, panel: Panel) -> Option<&StatusUpdate> {
        return self.statuses.get(&panel);
    }

    pub fn is_loading(&self, panel: Panel) -> bool {
        return self
            .statuses
            .get(&panel)
            .map(|update| return update.status == Status::Loading)
            .unwrap_or(false);
    }

    pub fn form(&self) -> &Form<'a> {
        if !self.logged_in {
            return &self.login_form;
        }

        match self.tab {
            Tab::Generate => return &self.generate_form,
            Tab::Coverage => return &self.coverage_form,
            Tab::Requirements => return &self.requirements_form,
        }
    }

    fn form_mut(&mut self) -> &mut Form<'a> {
        if !self.logged_in {
            return &mut self.login_form;
        }

        match self.tab {
            Tab::Generate => return &mut self.generate_form,
            Tab::Coverage => return &mut self.coverage_form,
            Tab::Requirements => return &mut self.requirements_form,
        }
    }

    /// Result lines for the active tab, in the order they render.
    pub fn results_lines(&self) -> Vec<String> {
        let mut lines = vec![];
        if !self.logged_in {
            return lines;
        }

        match self.tab {
            Tab::Generate => {
                if self.visible.contains(&Panel::Generate) {
                    lines.extend(generated_tests_lines(
                        &self.generated_tests,
                        self.selected_test,
                    ));
                }
            }
            Tab::Coverage => {
                if let (true, Some(res)) = (self.visible.contains(&Panel::Coverage), &self.coverage)
                {
                    lines.extend(coverage_lines(res));
                }
                if let (true, Some(res)) = (self.visible.contains(&Panel::Priority), &self.priority)
                {
                    if !lines.is_empty() {
                        lines.push("".to_string());
                    }
                    lines.extend(priority_lines(res));
                }
            }
            Tab::Requirements => {
                if let (true, Some(res)) = (
                    self.visible.contains(&Panel::RequirementsAnalysis),
                    &self.requirements_analysis,
                ) {
                    lines.extend(requirements_analysis_lines(res));
                }
                if let (true, Some(res)) = (
                    self.visible.contains(&Panel::RequirementsOptimization),
                    &self.requirements_optimization,
                ) {
                    if !lines.is_empty() {
                        lines.push("".to_string());
                    }
                    lines.extend(requirements_optimization_lines(res));
                }
            }
        }

        return lines;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_scroll();
    }

    fn sync_scroll(&mut self) {
        let length = match &self.preview {
            Some(test) => test.content.lines().count(),
            None => self.results_lines().len(),
        };
        self.scroll.set_state(
            u16::try_from(length).unwrap_or(u16::MAX),
            self.last_known_height,
        );
    }

    fn set_status(&mut self, panel: Panel, status: Status, message: &str) {
        self.statuses
            .insert(panel, StatusUpdate::new(panel, status, message));
    }

    fn reset_session(&mut self) {
        let login_status = self.statuses.remove(&Panel::Login);
        *self = AppState {
            last_known_height: self.last_known_height,
            last_known_width: self.last_known_width,
            ..AppState::default()
        };
        if let Some(update) = login_status {
            self.statuses.insert(Panel::Login, update);
        }
    }

    /// Folds one event into the state and returns the actions it triggers.
    pub fn handle_event(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::LoginStatus {
                logged_in,
                username,
            } => {
                if logged_in {
                    self.login_form.set_value(PASSWORD_FIELD, "");
                } else if self.logged_in {
                    self.reset_session();
                }
                self.logged_in = logged_in;
                self.username = username;
            }
            Event::UpdateStatus(update) => {
                self.progress.remove(&update.panel);
                self.statuses.insert(update.panel, update);
            }
            Event::UpdateProgress { panel, message } => {
                self.progress.insert(panel, message);
            }
            Event::UpdateTestResults(tests) => {
                if tests.is_empty() {
                    self.visible.remove(&Panel::Generate);
                } else {
                    self.visible.insert(Panel::Generate);
                }
                self.generated_tests = tests;
                self.selected_test = 0;
                self.scroll.reset();
            }
            Event::UpdateSourceFiles(files) => {
                self.coverage_form
                    .set_value(SOURCE_FILES_FIELD, &files.join(" "));
            }
            Event::UpdateTestFiles(files) => {
                self.coverage_form
                    .set_value(TEST_FILES_FIELD, &files.join(" "));
            }
            Event::UpdateRequirementsFile(file) => {
                self.requirements_form
                    .set_value(REQUIREMENTS_FILE_FIELD, &file);
            }
            Event::UpdateSourceFilesForRequirements(files) => {
                self.requirements_form
                    .set_value(SOURCE_FILES_FIELD, &files.join(" "));
            }
            Event::UpdateCoverageResults(res) => {
                self.coverage = Some(res);
                self.visible.insert(Panel::Coverage);
            }
            Event::UpdatePriorityResults(res) => {
                self.priority = Some(res);
                self.visible.insert(Panel::Priority);
            }
            Event::RequirementsAnalysisResults(res) => {
                self.requirements_analysis = Some(res);
                self.visible.insert(Panel::RequirementsAnalysis);
            }
            Event::RequirementsOptimizationResults(res) => {
                self.requirements_optimization = Some(res);
                self.visible.insert(Panel::RequirementsOptimization);
            }
            Event::HideResults(panel) => {
                self.visible.remove(&panel);
                self.scroll.reset();
            }
            Event::ShowPreview(test) => {
                self.preview = Some(test);
                self.scroll.reset();
            }
            Event::Confirm(request) => {
                self.confirm.push_back(request);
            }
            Event::KeyboardCTRLC() => {
                for request in self.confirm.drain(..) {
                    answer(request, false);
                }
                self.should_quit = true;
            }
            Event::UIScrollDown() => {
                if self.scrolls_selection() {
                    self.select_test(true);
                } else {
                    self.scroll.down();
                }
            }
            Event::UIScrollUp() => {
                if self.scrolls_selection() {
                    self.select_test(false);
                } else {
                    self.scroll.up();
                }
            }
            Event::UIScrollPageDown() => {
                self.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                self.scroll.up_page();
            }
            Event::UITick() => (),
            event => {
                let actions = self.handle_key(event);
                self.sync_scroll();
                return actions;
            }
        }

        self.sync_scroll();
        return vec![];
    }

    fn scrolls_selection(&self) -> bool {
        return self.logged_in
            && self.preview.is_none()
            && self.tab == Tab::Generate
            && !self.generated_tests.is_empty();
    }

    fn select_test(&mut self, forward: bool) {
        let last = self.generated_tests.len().saturating_sub(1);
        self.selected_test = if forward {
            (self.selected_test + 1).min(last)
        } else {
            self.selected_test.saturating_sub(1)
        };
    }

    fn handle_key(&mut self, event: Event) -> Vec<Action> {
        if !self.confirm.is_empty() {
            self.handle_confirm_key(event);
            return vec![];
        }

        if self.preview.is_some() {
            if let Event::KeyboardEsc() = event {
                self.preview = None;
                self.scroll.reset();
            }
            return vec![];
        }

        match event {
            Event::KeyboardTab() => self.form_mut().focus_next(),
            Event::KeyboardBackTab() => self.form_mut().focus_prev(),
            Event::KeyboardCharInput(input) => {
                self.form_mut().input(input);
            }
            Event::KeyboardPaste(text) => self.form_mut().paste(&text),
            Event::KeyboardEnter() => return self.submit(),
            Event::KeyboardEsc() => return self.close_results(),
            Event::KeyboardCTRL(c) => return self.handle_ctrl(c),
            _ => (),
        }

        return vec![];
    }

    fn handle_confirm_key(&mut self, event: Event) {
        let accepted = match event {
            Event::KeyboardEnter() => true,
            Event::KeyboardEsc() => false,
            Event::KeyboardCharInput(Input {
                key: Key::Char(c), ..
            }) => match c.to_ascii_lowercase() {
                'y' => true,
                'n' => false,
                _ => return,
            },
            _ => return,
        };

        if let Some(request) = self.confirm.pop_front() {
            answer(request, accepted);
        }
    }

    fn handle_ctrl(&mut self, c: char) -> Vec<Action> {
        if !self.logged_in {
            self.login_form.input(ctrl_input(c));
            return vec![];
        }

        match (c, self.tab) {
            ('n', _) => {
                self.tab = self.tab.shift(true);
                self.scroll.reset();
            }
            ('b', _) => {
                self.tab = self.tab.shift(false);
                self.scroll.reset();
            }
            ('l', _) => return vec![Action::Logout()],
            ('t', Tab::Generate) => {
                let types = TestType::iter().collect::<Vec<_>>();
                let idx = types
                    .iter()
                    .position(|e| return *e == self.test_type)
                    .unwrap_or(0);
                self.test_type = types[(idx + 1) % types.len()];
            }
            ('a', Tab::Generate) => return vec![Action::ApplyTests()],
            ('x', Tab::Generate) => return vec![Action::CancelTests()],
            ('e', Tab::Generate) => {
                if !self.generated_tests.is_empty() {
                    return vec![Action::PreviewTest(self.selected_test)];
                }
            }
            ('r', Tab::Coverage) => {
                let mut actions = self.coverage_selection();
                actions.push(Action::AnalyzeTestPriority());
                return actions;
            }
            ('s', Tab::Coverage) => return vec![Action::DownloadCoverageReport()],
            ('r', Tab::Requirements) => {
                let mut actions = self.requirements_selection();
                actions.push(Action::OptimizeRequirements {
                    goals: comma_list(&self.requirements_form.value(GOALS_FIELD)),
                    keep_dependencies: comma_list(&self.requirements_form.value(KEEP_FIELD)),
                    description: self.requirements_form.value(DESCRIPTION_FIELD),
                });
                return actions;
            }
            ('y', Tab::Requirements) => {
                if let Some(res) = &self.requirements_optimization {
                    return vec![Action::CopyToClipboard(res.optimized_content.to_string())];
                }
            }
            ('s', Tab::Requirements) => {
                let filepath = self.requirements_form.value(REQUIREMENTS_FILE_FIELD);
                if let Some(res) = &self.requirements_optimization {
                    if filepath.trim().is_empty() {
                        self.set_status(
                            Panel::RequirementsOptimization,
                            Status::Error,
                            "Please select a requirements file first",
                        );
                        return vec![];
                    }
                    return vec![Action::SaveOptimizedRequirements {
                        filepath: filepath.trim().to_string(),
                        content: res.optimized_content.to_string(),
                    }];
                }
            }
            _ => {
                self.form_mut().input(ctrl_input(c));
            }
        }

        return vec![];
    }

    fn coverage_selection(&self) -> Vec<Action> {
        return vec![
            Action::SelectSourceFiles(split_paths(
                &self.coverage_form.value(SOURCE_FILES_FIELD),
            )),
            Action::SelectTestFiles(split_paths(&self.coverage_form.value(TEST_FILES_FIELD))),
            Action::UpdateCriticalityContext(self.coverage_form.value(CRITICALITY_FIELD)),
        ];
    }

    fn requirements_selection(&self) -> Vec<Action> {
        return vec![
            Action::SelectRequirementsFile(self.requirements_form.value(REQUIREMENTS_FILE_FIELD)),
            Action::SelectSourceFilesForRequirements(split_paths(
                &self.requirements_form.value(SOURCE_FILES_FIELD),
            )),
        ];
    }

    fn submit(&mut self) -> Vec<Action> {
        if !self.logged_in {
            let username = self.login_form.value(USERNAME_FIELD);
            let password = self.login_form.value(PASSWORD_FIELD);
            if username.trim().is_empty() {
                self.set_status(Panel::Login, Status::Error, "Username is required");
                return vec![];
            }
            if password.is_empty() {
                self.set_status(Panel::Login, Status::Error, "Password is required");
                return vec![];
            }

            return vec![Action::Login {
                username: username.trim().to_string(),
                password,
            }];
        }

        match self.tab {
            Tab::Generate => {
                let test_dir = self.generate_form.value(TEST_DIR_FIELD);
                if test_dir.trim().is_empty() {
                    self.set_status(Panel::Generate, Status::Error, "Test directory is required");
                    return vec![];
                }

                return vec![Action::GenerateTests {
                    files: split_paths(&self.generate_form.value(FILES_FIELD)),
                    test_dir: test_dir.trim().to_string(),
                    test_type: self.test_type,
                }];
            }
            Tab::Coverage => {
                let mut actions = self.coverage_selection();
                actions.push(Action::AnalyzeCoverage());
                return actions;
            }
            Tab::Requirements => {
                let mut actions = self.requirements_selection();
                actions.push(Action::AnalyzeRequirements {
                    description: self.requirements_form.value(DESCRIPTION_FIELD),
                });
                return actions;
            }
        }
    }

    fn close_results(&mut self) -> Vec<Action> {
        if !self.logged_in {
            return vec![];
        }

        return self
            .tab
            .panels()
            .iter()
            .filter(|panel| return **panel != Panel::Generate && self.visible.contains(*panel))
            .map(|panel| return Action::Close(*panel))
            .collect();
    }
}

fn ctrl_input(c: char) -> Input {
    return Input {
        key: Key::Char(c),
        ctrl: true,
        alt: false,
    };
}

fn answer(request: ConfirmRequest, accepted: bool) {
    if request.reply.send(accepted).is_err() {
        tracing::debug!("confirmation no longer awaited");
    }
}
