use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use strum::IntoEnumIterator;

use super::Config;
use super::ConfigKey;
use crate::domain::models::EditorName;
use crate::domain::models::Operation;

/// Everything a component needs from configuration, resolved once at startup
/// and handed to constructors.
#[derive(Clone, Debug)]
pub struct Settings {
    pub backend_url: String,
    pub workspace: Option<PathBuf>,
    pub credentials_file: PathBuf,
    pub editor: EditorName,
    timeouts: HashMap<Operation, Duration>,
}

impl Settings {
    pub fn new(backend_url: &str, workspace: Option<PathBuf>, credentials_file: PathBuf) -> Settings {
        return Settings {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            workspace,
            credentials_file,
            editor: EditorName::External,
            timeouts: HashMap::new(),
        };
    }

    pub fn from_config() -> Settings {
        let workspace = PathBuf::from(Config::get(ConfigKey::Workspace));
        let workspace = if workspace.as_os_str().is_empty() || !workspace.is_dir() {
            None
        } else {
            Some(workspace)
        };

        let mut settings = Settings::new(
            &Config::get(ConfigKey::BackendURL),
            workspace,
            PathBuf::from(Config::get(ConfigKey::CredentialsFile)),
        );

        if let Some(editor) = EditorName::parse(&Config::get(ConfigKey::Editor)) {
            settings.editor = editor;
        }

        for operation in Operation::iter() {
            if let Ok(secs) = Config::get(ConfigKey::timeout_for(operation)).parse::<u64>() {
                settings = settings.with_timeout(operation, Duration::from_secs(secs));
            }
        }

        return settings;
    }

    pub fn with_timeout(mut self, operation: Operation, timeout: Duration) -> Settings {
        self.timeouts.insert(operation, timeout);
        return self;
    }

    pub fn timeout(&self, operation: Operation) -> Duration {
        return self
            .timeouts
            .get(&operation)
            .copied()
            .unwrap_or_else(|| return operation.default_timeout());
    }
}
