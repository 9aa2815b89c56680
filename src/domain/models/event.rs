use tui_textarea::Input;

use super::ConfirmRequest;
use super::CoverageAnalysisResponse;
use super::GeneratedTest;
use super::Panel;
use super::RequirementsAnalysisResponse;
use super::RequirementsOptimizationResponse;
use super::StatusUpdate;
use super::TestPriorityAnalysisResponse;

pub enum Event {
    LoginStatus {
        logged_in: bool,
        username: Option<String>,
    },
    UpdateStatus(StatusUpdate),
    UpdateProgress {
        panel: Panel,
        message: String,
    },
    UpdateTestResults(Vec<GeneratedTest>),
    UpdateSourceFiles(Vec<String>),
    UpdateTestFiles(Vec<String>),
    UpdateRequirementsFile(String),
    UpdateSourceFilesForRequirements(Vec<String>),
    UpdateCoverageResults(Box<CoverageAnalysisResponse>),
    UpdatePriorityResults(Box<TestPriorityAnalysisResponse>),
    RequirementsAnalysisResults(Box<RequirementsAnalysisResponse>),
    RequirementsOptimizationResults(Box<RequirementsOptimizationResponse>),
    HideResults(Panel),
    ShowPreview(GeneratedTest),
    Confirm(ConfirmRequest),
    KeyboardCharInput(Input),
    KeyboardPaste(String),
    KeyboardCTRL(char),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardTab(),
    KeyboardBackTab(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
