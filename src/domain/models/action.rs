use super::Panel;
use super::TestType;

/// User intent sent from the UI to the sidebar controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Login { username: String, password: String },
    CheckLoginStatus(),
    Logout(),
    GenerateTests {
        files: Vec<String>,
        test_dir: String,
        test_type: TestType,
    },
    ApplyTests(),
    CancelTests(),
    PreviewTest(usize),
    SelectSourceFiles(Vec<String>),
    SelectTestFiles(Vec<String>),
    UpdateCriticalityContext(String),
    AnalyzeCoverage(),
    AnalyzeTestPriority(),
    DownloadCoverageReport(),
    SelectRequirementsFile(String),
    SelectSourceFilesForRequirements(Vec<String>),
    AnalyzeRequirements {
        description: String,
    },
    OptimizeRequirements {
        goals: Vec<String>,
        keep_dependencies: Vec<String>,
        description: String,
    },
    CopyToClipboard(String),
    SaveOptimizedRequirements {
        filepath: String,
        content: String,
    },
    Close(Panel),
}
