#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::sync::PoisonError;

use anyhow::Result;
use dashmap::DashSet;
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

use super::clipboard::ClipboardService;
use super::coverage_report;
use super::display_path;
use super::select_files;
use super::CredentialStore;
use super::ProgressSink;
use super::WorkspaceApplier;
use super::WriteOutcome;
use crate::domain::models::Action;
use crate::domain::models::CoverageAnalysisResponse;
use crate::domain::models::DevexyError;
use crate::domain::models::Event;
use crate::domain::models::GeneratedTest;
use crate::domain::models::Operation;
use crate::domain::models::Panel;
use crate::domain::models::Status;
use crate::domain::models::StatusUpdate;
use crate::domain::models::TestType;
use crate::infrastructure::backend::DevexyClient;
use crate::infrastructure::backend::RequirementsInput;

/// Selections and results of the current session. Files are stored as
/// absolute paths and re-read on every request.
#[derive(Default)]
pub struct SessionState {
    pub source_files: Vec<PathBuf>,
    pub test_files: Vec<PathBuf>,
    pub criticality_context: String,
    pub requirements_file: Option<PathBuf>,
    pub requirements_source_files: Vec<PathBuf>,
    /// Set when the latest selection of that kind failed and its error is
    /// already on screen.
    pub source_files_failed: bool,
    pub test_files_failed: bool,
    pub requirements_file_failed: bool,
    pub generated_tests: Vec<GeneratedTest>,
    pub coverage: Option<CoverageAnalysisResponse>,
}

/// Marks a panel busy until dropped. A second trigger for a busy panel is
/// ignored.
struct InFlight {
    panel: Panel,
    panels: Arc<DashSet<Panel>>,
}

impl InFlight {
    fn acquire(panels: &Arc<DashSet<Panel>>, panel: Panel) -> Option<InFlight> {
        if !panels.insert(panel) {
            return None;
        }

        return Some(InFlight {
            panel,
            panels: panels.clone(),
        });
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.panels.remove(&self.panel);
    }
}

/// Event sender bound to the login session it was created in. Once that
/// session is logged out, its events are dropped.
#[derive(Clone)]
struct SessionEvents {
    tx: mpsc::UnboundedSender<Event>,
    epoch: Arc<StdMutex<u64>>,
    seen: u64,
}

impl SessionEvents {
    fn new(tx: mpsc::UnboundedSender<Event>) -> SessionEvents {
        return SessionEvents {
            tx,
            epoch: Arc::new(StdMutex::new(0)),
            seen: 0,
        };
    }

    fn send_unchecked(&self, event: Event) {
        if self.tx.send(event).is_err() {
            tracing::debug!("UI is gone, dropping event");
        }
    }

    fn send(&self, event: Event) {
        let epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        if *epoch != self.seen {
            tracing::debug!("dropping event from a logged out session");
            return;
        }

        self.send_unchecked(event);
    }

    fn is_current(&self) -> bool {
        let epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        return *epoch == self.seen;
    }

    /// Ends the current session, sending `event` as its last word.
    fn renew(&self, event: Event) -> SessionEvents {
        let mut epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        *epoch += 1;
        self.send_unchecked(event);

        return SessionEvents {
            tx: self.tx.clone(),
            epoch: self.epoch.clone(),
            seen: *epoch,
        };
    }
}

fn emit(events: &SessionEvents, event: Event) {
    events.send(event);
}

fn status(events: &SessionEvents, panel: Panel, status: Status, message: &str) {
    emit(
        events,
        Event::UpdateStatus(StatusUpdate::new(panel, status, message)),
    );
}

fn progress_sink(events: &SessionEvents, panel: Panel) -> ProgressSink {
    let events = events.clone();
    return Arc::new(move |message: &str| {
        emit(
            &events,
            Event::UpdateProgress {
                panel,
                message: message.to_string(),
            },
        );
    });
}

/// Typed failures already read well on their own, anything else gets the
/// operation as context.
pub fn failure_message(label: &str, err: &anyhow::Error) -> String {
    if err.downcast_ref::<DevexyError>().is_some() {
        return err.to_string();
    }

    return format!("{label} failed: {err}");
}

fn report_failure(tx: &SessionEvents, panel: Panel, label: &str, err: anyhow::Error) {
    if DevexyError::is_cancelled(&err) {
        tracing::info!(panel = %panel, "operation cancelled");
        status(tx, panel, Status::Idle, "Cancelled.");
        return;
    }

    tracing::error!(panel = %panel, error = ?err, "operation failed");
    status(tx, panel, Status::Error, &failure_message(label, &err));
}

async fn broadcast_login_status(credentials: &CredentialStore, tx: &SessionEvents) {
    let event = match credentials.credential().await {
        Ok(Some(credential)) => Event::LoginStatus {
            logged_in: true,
            username: credential.username,
        },
        Ok(None) => Event::LoginStatus {
            logged_in: false,
            username: None,
        },
        Err(err) => {
            tracing::warn!(error = ?err, "failed to read credentials");
            Event::LoginStatus {
                logged_in: false,
                username: None,
            }
        }
    };

    emit(tx, event);
}

/// Owns the session and turns UI actions into backend calls. Long running
/// work runs on workers so the UI keeps receiving progress.
pub struct SidebarController {
    client: Arc<DevexyClient>,
    credentials: Arc<CredentialStore>,
    applier: Arc<WorkspaceApplier>,
    clipboard: Option<ClipboardService>,
    tx: SessionEvents,
    session: Arc<Mutex<SessionState>>,
    in_flight: Arc<DashSet<Panel>>,
    workers: JoinSet<()>,
}

impl SidebarController {
    pub fn new(
        client: Arc<DevexyClient>,
        credentials: Arc<CredentialStore>,
        applier: Arc<WorkspaceApplier>,
        clipboard: Option<ClipboardService>,
        tx: mpsc::UnboundedSender<Event>,
    ) -> SidebarController {
        return SidebarController {
            client,
            credentials,
            applier,
            clipboard,
            tx: SessionEvents::new(tx),
            session: Arc::new(Mutex::new(SessionState::default())),
            in_flight: Arc::new(DashSet::new()),
            workers: JoinSet::new(),
        };
    }

    pub async fn start(mut self, rx: &mut mpsc::UnboundedReceiver<Action>) -> Result<()> {
        broadcast_login_status(&self.credentials, &self.tx).await;

        loop {
            tokio::select! {
                action = rx.recv() => match action {
                    Some(action) => self.handle(action).await,
                    None => break,
                },
                Some(res) = self.workers.join_next(), if !self.workers.is_empty() => {
                    if let Err(err) = res {
                        tracing::error!(error = ?err, "worker failed");
                    }
                }
            }
        }

        self.workers.shutdown().await;
        return Ok(());
    }

    fn acquire(&self, panel: Panel) -> Option<InFlight> {
        let guard = InFlight::acquire(&self.in_flight, panel);
        if guard.is_none() {
            tracing::debug!(panel = %panel, "ignoring action, panel is busy");
        }

        return guard;
    }

    fn spawn<F>(&mut self, guard: InFlight, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.workers.spawn(async move {
            task.await;
            drop(guard);
        });
    }

    async fn require_login(&self, panel: Panel) -> bool {
        match self.credentials.is_logged_in().await {
            Ok(true) => return true,
            Ok(false) => {
                status(&self.tx, panel, Status::Error, "Please log in to DevExy first.");
                return false;
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to read credentials");
                status(
                    &self.tx,
                    panel,
                    Status::Error,
                    &format!("Failed to read credentials: {err}"),
                );
                return false;
            }
        }
    }

    fn select(&self, panel: Panel, entries: &[String]) -> Option<Vec<PathBuf>> {
        match select_files(self.applier.workspace(), entries) {
            Ok(paths) => return Some(paths),
            Err(err) => {
                status(&self.tx, panel, Status::Error, &err.to_string());
                return None;
            }
        }
    }

    fn display(&self, paths: &[PathBuf]) -> Vec<String> {
        return paths
            .iter()
            .map(|path| return display_path(self.applier.workspace(), path))
            .collect();
    }

    pub async fn handle(&mut self, action: Action) {
        tracing::debug!(action = action_name(&action), "handling action");

        match action {
            Action::Login { username, password } => self.login(username, password),
            Action::CheckLoginStatus() => {
                broadcast_login_status(&self.credentials, &self.tx).await;
            }
            Action::Logout() => self.logout().await,
            Action::GenerateTests {
                files,
                test_dir,
                test_type,
            } => self.generate_tests(files, test_dir, test_type).await,
            Action::ApplyTests() => self.apply_tests().await,
            Action::CancelTests() => {
                self.session.lock().await.generated_tests.clear();
                emit(&self.tx, Event::UpdateTestResults(vec![]));
                status(
                    &self.tx,
                    Panel::Generate,
                    Status::Idle,
                    "Generated tests discarded.",
                );
            }
            Action::PreviewTest(idx) => {
                let test = self.session.lock().await.generated_tests.get(idx).cloned();
                match test {
                    Some(test) => emit(&self.tx, Event::ShowPreview(test)),
                    None => status(
                        &self.tx,
                        Panel::Generate,
                        Status::Error,
                        &format!("No generated test at position {}", idx + 1),
                    ),
                }
            }
            Action::SelectSourceFiles(entries) => {
                let paths = self.select(Panel::Coverage, &entries);
                if let Some(paths) = &paths {
                    emit(&self.tx, Event::UpdateSourceFiles(self.display(paths)));
                }
                let mut session = self.session.lock().await;
                session.source_files_failed = paths.is_none();
                session.source_files = paths.unwrap_or_default();
            }
            Action::SelectTestFiles(entries) => {
                let paths = self.select(Panel::Coverage, &entries);
                if let Some(paths) = &paths {
                    emit(&self.tx, Event::UpdateTestFiles(self.display(paths)));
                }
                let mut session = self.session.lock().await;
                session.test_files_failed = paths.is_none();
                session.test_files = paths.unwrap_or_default();
            }
            Action::UpdateCriticalityContext(text) => {
                self.session.lock().await.criticality_context = text;
            }
            Action::AnalyzeCoverage() => self.analyze_coverage().await,
            Action::AnalyzeTestPriority() => self.analyze_test_priority().await,
            Action::DownloadCoverageReport() => self.download_coverage_report().await,
            Action::SelectRequirementsFile(entry) => {
                let entries = if entry.trim().is_empty() {
                    vec![]
                } else {
                    vec![entry.trim().to_string()]
                };
                let selected = self.select(Panel::RequirementsAnalysis, &entries);
                let failed = selected.is_none();
                let file = selected.and_then(|paths| return paths.into_iter().next());
                if let Some(file) = &file {
                    let display = display_path(self.applier.workspace(), file);
                    emit(&self.tx, Event::UpdateRequirementsFile(display));
                }
                let mut session = self.session.lock().await;
                session.requirements_file_failed = failed;
                session.requirements_file = file;
            }
            Action::SelectSourceFilesForRequirements(entries) => {
                let paths = self.select(Panel::RequirementsAnalysis, &entries);
                if let Some(paths) = &paths {
                    emit(
                        &self.tx,
                        Event::UpdateSourceFilesForRequirements(self.display(paths)),
                    );
                }
                self.session.lock().await.requirements_source_files = paths.unwrap_or_default();
            }
            Action::AnalyzeRequirements { description } => {
                self.analyze_requirements(description).await;
            }
            Action::OptimizeRequirements {
                goals,
                keep_dependencies,
                description,
            } => {
                self.optimize_requirements(goals, keep_dependencies, description)
                    .await;
            }
            Action::CopyToClipboard(text) => self.copy_to_clipboard(text).await,
            Action::SaveOptimizedRequirements { filepath, content } => {
                self.save_optimized_requirements(filepath, content);
            }
            Action::Close(panel) => emit(&self.tx, Event::HideResults(panel)),
        }
    }

    fn login(&mut self, username: String, password: String) {
        let panel = Panel::Login;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };

        status(&self.tx, panel, Status::Loading, "Logging in...");
        let client = self.client.clone();
        let credentials = self.credentials.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            match client.login(&username, &password).await {
                Ok(()) => {
                    status(&tx, panel, Status::Success, "Successfully logged in to DevExy");
                    broadcast_login_status(&credentials, &tx).await;
                }
                Err(err) => {
                    tracing::error!(error = ?err, "login failed");
                    status(&tx, panel, Status::Error, &format!("Login failed: {err}"));
                }
            }
        });
    }

    async fn logout(&mut self) {
        if let Err(err) = self.credentials.clear().await {
            tracing::error!(error = ?err, "logout failed");
            status(
                &self.tx,
                Panel::Login,
                Status::Error,
                &format!("Logout failed: {err}"),
            );
            return;
        }

        let mut session = self.session.lock().await;
        *session = SessionState::default();
        self.tx = self.tx.renew(Event::LoginStatus {
            logged_in: false,
            username: None,
        });
        drop(session);

        status(
            &self.tx,
            Panel::Login,
            Status::Idle,
            "Successfully logged out from DevExy",
        );
    }

    async fn generate_tests(&mut self, files: Vec<String>, test_dir: String, test_type: TestType) {
        let panel = Panel::Generate;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };
        if !self.require_login(panel).await {
            return;
        }

        let paths = match self.select(panel, &files) {
            Some(paths) => paths,
            None => return,
        };
        if paths.is_empty() {
            status(
                &self.tx,
                panel,
                Status::Error,
                "No files selected for test generation",
            );
            return;
        }

        status(
            &self.tx,
            panel,
            Status::Loading,
            &format!(
                "Generating {test_type} tests for {} file(s)...",
                paths.len()
            ),
        );

        let client = self.client.clone();
        let session = self.session.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            let progress = progress_sink(&tx, panel);
            match client
                .generate_tests(test_type, &paths, &test_dir, &progress)
                .await
            {
                Ok(tests) => {
                    let count = tests.len();
                    let mut session = session.lock().await;
                    if !tx.is_current() {
                        tracing::debug!("discarding generated tests of a logged out session");
                        return;
                    }
                    session.generated_tests = tests.clone();
                    emit(&tx, Event::UpdateTestResults(tests));
                    status(
                        &tx,
                        panel,
                        Status::Success,
                        &format!("Generated {count} {test_type} test files"),
                    );
                }
                Err(err) => report_failure(&tx, panel, test_type.operation().label(), err),
            }
        });
    }

    async fn apply_tests(&mut self) {
        let panel = Panel::Generate;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };

        let tests = self.session.lock().await.generated_tests.clone();
        if tests.is_empty() {
            status(&self.tx, panel, Status::Error, "No generated tests to apply.");
            return;
        }

        status(&self.tx, panel, Status::Loading, "Creating test files...");
        let applier = self.applier.clone();
        let session = self.session.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            match applier.apply(&tests).await {
                Ok(report) => {
                    let mut session = session.lock().await;
                    if tx.is_current() {
                        session.generated_tests.clear();
                    }
                    emit(&tx, Event::UpdateTestResults(vec![]));
                    let outcome = if report.failed.is_empty() {
                        Status::Success
                    } else {
                        Status::Error
                    };
                    status(&tx, panel, outcome, &report.summary());
                }
                Err(err) => report_failure(&tx, panel, "Applying tests", err),
            }
        });
    }

    async fn analyze_coverage(&mut self) {
        let panel = Panel::Coverage;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };
        if !self.require_login(panel).await {
            return;
        }

        let (source_files, test_files, reported) = {
            let session = self.session.lock().await;
            (
                session.source_files.clone(),
                session.test_files.clone(),
                session.source_files_failed || session.test_files_failed,
            )
        };
        if !self.require_selection(
            panel,
            "coverage analysis",
            &source_files,
            &test_files,
            reported,
        ) {
            return;
        }

        status(&self.tx, panel, Status::Loading, "Analyzing test coverage...");
        let client = self.client.clone();
        let session = self.session.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            let progress = progress_sink(&tx, panel);
            match client
                .analyze_coverage(&source_files, &test_files, &progress)
                .await
            {
                Ok(res) => {
                    let mut session = session.lock().await;
                    if !tx.is_current() {
                        tracing::debug!("discarding coverage of a logged out session");
                        return;
                    }
                    session.coverage = Some(res.clone());
                    emit(&tx, Event::UpdateCoverageResults(Box::new(res)));
                    status(&tx, panel, Status::Success, "Coverage analysis completed.");
                }
                Err(err) => report_failure(&tx, panel, Operation::Coverage.label(), err),
            }
        });
    }

    async fn analyze_test_priority(&mut self) {
        let panel = Panel::Priority;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };
        if !self.require_login(panel).await {
            return;
        }

        let (source_files, test_files, criticality_context) = {
            let session = self.session.lock().await;
            (
                session.source_files.clone(),
                session.test_files.clone(),
                session.criticality_context.clone(),
            )
        };
        if !self.require_selection(
            panel,
            "test priority analysis",
            &source_files,
            &test_files,
            false,
        ) {
            return;
        }

        status(
            &self.tx,
            panel,
            Status::Loading,
            "Analyzing test priorities...",
        );
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            let progress = progress_sink(&tx, panel);
            match client
                .analyze_test_priority(&source_files, &test_files, &criticality_context, &progress)
                .await
            {
                Ok(res) => {
                    emit(&tx, Event::UpdatePriorityResults(Box::new(res)));
                    status(
                        &tx,
                        panel,
                        Status::Success,
                        "Test priority analysis completed.",
                    );
                }
                Err(err) => report_failure(&tx, panel, Operation::TestPriority.label(), err),
            }
        });
    }

    fn require_selection(
        &self,
        panel: Panel,
        purpose: &str,
        source_files: &[PathBuf],
        test_files: &[PathBuf],
        reported: bool,
    ) -> bool {
        if reported && (source_files.is_empty() || test_files.is_empty()) {
            tracing::debug!(panel = %panel, "selection failed, its error is already shown");
            return false;
        }
        if source_files.is_empty() {
            status(
                &self.tx,
                panel,
                Status::Error,
                &format!("Please select source files for {purpose}"),
            );
            return false;
        }
        if test_files.is_empty() {
            status(
                &self.tx,
                panel,
                Status::Error,
                &format!("Please select test files for {purpose}"),
            );
            return false;
        }

        return true;
    }

    async fn download_coverage_report(&mut self) {
        let panel = Panel::Coverage;
        let coverage = self.session.lock().await.coverage.clone();
        let coverage = match coverage {
            Some(coverage) => coverage,
            None => {
                status(
                    &self.tx,
                    panel,
                    Status::Error,
                    "Run a coverage analysis before downloading the report.",
                );
                return;
            }
        };

        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };

        let now = chrono::Local::now();
        let filename = format!("coverage-report-{}.txt", now.format("%Y-%m-%d"));
        let content = coverage_report(&coverage, &now.format("%Y-%m-%d %H:%M:%S").to_string());

        let applier = self.applier.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            match applier.write_file(&filename, &content).await {
                Ok(WriteOutcome::Written(path)) => {
                    tracing::info!(path = ?path, "saved coverage report");
                    status(
                        &tx,
                        panel,
                        Status::Success,
                        &format!("Coverage report saved to {filename}"),
                    );
                }
                Ok(WriteOutcome::Skipped(_)) => {
                    status(&tx, panel, Status::Idle, "Coverage report not saved.");
                }
                Err(err) => report_failure(&tx, panel, "Saving the coverage report", err),
            }
        });
    }

    async fn requirements_input(&self, panel: Panel, description: String) -> Option<RequirementsInput> {
        let session = self.session.lock().await;
        let requirements_file = match &session.requirements_file {
            Some(file) => file.clone(),
            None if session.requirements_file_failed && panel == Panel::RequirementsAnalysis => {
                tracing::debug!("requirements file selection failed, its error is already shown");
                return None;
            }
            None => {
                status(
                    &self.tx,
                    panel,
                    Status::Error,
                    "Please select a requirements file first",
                );
                return None;
            }
        };

        return Some(RequirementsInput {
            requirements_file,
            source_files: session.requirements_source_files.clone(),
            description,
        });
    }

    async fn analyze_requirements(&mut self, description: String) {
        let panel = Panel::RequirementsAnalysis;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };
        if !self.require_login(panel).await {
            return;
        }
        let input = match self.requirements_input(panel, description).await {
            Some(input) => input,
            None => return,
        };

        status(&self.tx, panel, Status::Loading, "Analyzing requirements...");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            let progress = progress_sink(&tx, panel);
            match client.analyze_requirements(&input, &progress).await {
                Ok(res) => {
                    emit(&tx, Event::RequirementsAnalysisResults(Box::new(res)));
                    status(
                        &tx,
                        panel,
                        Status::Success,
                        "Requirements analysis completed.",
                    );
                }
                Err(err) => {
                    report_failure(&tx, panel, Operation::RequirementsAnalysis.label(), err)
                }
            }
        });
    }

    async fn optimize_requirements(
        &mut self,
        goals: Vec<String>,
        keep_dependencies: Vec<String>,
        description: String,
    ) {
        let panel = Panel::RequirementsOptimization;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };
        if !self.require_login(panel).await {
            return;
        }
        let input = match self.requirements_input(panel, description).await {
            Some(input) => input,
            None => return,
        };

        status(&self.tx, panel, Status::Loading, "Optimizing requirements...");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            let progress = progress_sink(&tx, panel);
            match client
                .optimize_requirements(&input, &goals, &keep_dependencies, &progress)
                .await
            {
                Ok(res) => {
                    emit(&tx, Event::RequirementsOptimizationResults(Box::new(res)));
                    status(
                        &tx,
                        panel,
                        Status::Success,
                        "Requirements optimization completed.",
                    );
                }
                Err(err) => report_failure(
                    &tx,
                    panel,
                    Operation::RequirementsOptimization.label(),
                    err,
                ),
            }
        });
    }

    async fn copy_to_clipboard(&self, text: String) {
        let panel = Panel::RequirementsOptimization;
        let res = match &self.clipboard {
            Some(clipboard) => clipboard.set(text).await,
            None => Err(anyhow::anyhow!("Clipboard is not available.")),
        };

        match res {
            Ok(()) => status(&self.tx, panel, Status::Success, "Copied to clipboard."),
            Err(err) => status(
                &self.tx,
                panel,
                Status::Error,
                &format!("Failed to copy to clipboard: {err}"),
            ),
        }
    }

    fn save_optimized_requirements(&mut self, filepath: String, content: String) {
        let panel = Panel::RequirementsOptimization;
        let guard = match self.acquire(panel) {
            Some(guard) => guard,
            None => return,
        };

        let applier = self.applier.clone();
        let tx = self.tx.clone();
        self.spawn(guard, async move {
            match applier.write_file(&filepath, &content).await {
                Ok(WriteOutcome::Written(_)) => status(
                    &tx,
                    panel,
                    Status::Success,
                    &format!("Saved optimized requirements to {filepath}"),
                ),
                Ok(WriteOutcome::Skipped(_)) => {
                    status(&tx, panel, Status::Idle, "Optimized requirements not saved.")
                }
                Err(err) => report_failure(&tx, panel, "Saving requirements", err),
            }
        });
    }
}

/// Action name for logs, keeping passwords and file contents out of them.
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Login { .. } => return "login",
        Action::CheckLoginStatus() => return "check-login-status",
        Action::Logout() => return "logout",
        Action::GenerateTests { .. } => return "generate-tests",
        Action::ApplyTests() => return "apply-tests",
        Action::CancelTests() => return "cancel-tests",
        Action::PreviewTest(_) => return "preview-test",
        Action::SelectSourceFiles(_) => return "select-source-files",
        Action::SelectTestFiles(_) => return "select-test-files",
        Action::UpdateCriticalityContext(_) => return "update-criticality-context",
        Action::AnalyzeCoverage() => return "analyze-coverage",
        Action::AnalyzeTestPriority() => return "analyze-test-priority",
        Action::DownloadCoverageReport() => return "download-coverage-report",
        Action::SelectRequirementsFile(_) => return "select-requirements-file",
        Action::SelectSourceFilesForRequirements(_) => {
            return "select-source-files-for-requirements"
        }
        Action::AnalyzeRequirements { .. } => return "analyze-requirements",
        Action::OptimizeRequirements { .. } => return "optimize-requirements",
        Action::CopyToClipboard(_) => return "copy-to-clipboard",
        Action::SaveOptimizedRequirements { .. } => return "save-optimized-requirements",
        Action::Close(_) => return "close",
    }
}
