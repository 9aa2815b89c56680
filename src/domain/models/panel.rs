use strum::EnumIter;

/// Independent areas of the sidebar. Several may show results at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum Panel {
    Login,
    Generate,
    Coverage,
    Priority,
    #[strum(serialize = "Requirements")]
    RequirementsAnalysis,
    #[strum(serialize = "Optimization")]
    RequirementsOptimization,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusUpdate {
    pub panel: Panel,
    pub status: Status,
    pub message: String,
}

impl StatusUpdate {
    pub fn new(panel: Panel, status: Status, message: &str) -> StatusUpdate {
        return StatusUpdate {
            panel,
            status,
            message: message.to_string(),
        };
    }
}
