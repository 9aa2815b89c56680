#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::EditorName;
use crate::domain::models::Operation;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    #[strum(serialize = "backend-url")]
    BackendURL,
    ConfigFile,
    CredentialsFile,
    Editor,
    Workspace,
    UnitTestsTimeout,
    IntegrationTestsTimeout,
    StressTestsTimeout,
    CoverageTimeout,
    PriorityTimeout,
    RequirementsTimeout,
}

impl ConfigKey {
    /// The timeout key that governs a call site.
    pub fn timeout_for(operation: Operation) -> ConfigKey {
        match operation {
            Operation::UnitTests => return ConfigKey::UnitTestsTimeout,
            Operation::IntegrationTests => return ConfigKey::IntegrationTestsTimeout,
            Operation::StressTests => return ConfigKey::StressTestsTimeout,
            Operation::Coverage => return ConfigKey::CoverageTimeout,
            Operation::TestPriority => return ConfigKey::PriorityTimeout,
            Operation::RequirementsAnalysis | Operation::RequirementsOptimization => {
                return ConfigKey::RequirementsTimeout
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        return self.to_string().ends_with("-timeout");
    }
}

fn config_dir() -> path::PathBuf {
    #[cfg(not(target_os = "macos"))]
    let dir = dirs::config_dir().unwrap_or_else(|| return path::PathBuf::from("."));
    #[cfg(target_os = "macos")]
    let dir = env::var("HOME")
        .map(|home| return path::PathBuf::from(home).join(".config"))
        .unwrap_or_else(|_| return path::PathBuf::from("."));

    return dir.join("devexy");
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = config_dir().join("config.toml");
        let credentials_path = config_dir().join("credentials.json");
        let workspace = env::current_dir()
            .map(|dir| return dir.to_string_lossy().to_string())
            .unwrap_or_default();

        let res = match key {
            ConfigKey::BackendURL => "https://devexy-backend.azurewebsites.net".to_string(),
            ConfigKey::Editor => EditorName::External.to_string(),
            ConfigKey::Workspace => workspace,
            ConfigKey::UnitTestsTimeout => Operation::UnitTests.default_timeout().as_secs().to_string(),
            ConfigKey::IntegrationTestsTimeout => Operation::IntegrationTests
                .default_timeout()
                .as_secs()
                .to_string(),
            ConfigKey::StressTestsTimeout => Operation::StressTests.default_timeout().as_secs().to_string(),
            ConfigKey::CoverageTimeout => Operation::Coverage.default_timeout().as_secs().to_string(),
            ConfigKey::PriorityTimeout => Operation::TestPriority.default_timeout().as_secs().to_string(),
            ConfigKey::RequirementsTimeout => Operation::RequirementsAnalysis
                .default_timeout()
                .as_secs()
                .to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::CredentialsFile => credentials_path.to_string_lossy().to_string(),
        };

        return res;
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        if val_int <= 0 {
                            bail!(format!("config.toml has an invalid value for key '{key}': {val_int}\nTimeouts must be a positive number of seconds"));
                        }
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if key.is_timeout() && val_str.parse::<u64>().is_err() {
                            bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nTimeouts must be a positive number of seconds"));
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        // Only flags known to the command are consulted; subcommands that don't
        // carry a flag fall through to file and default values.
        let known = cmd
            .get_arguments()
            .filter_map(|arg| return arg.get_long().map(|long| return long.to_string()))
            .collect::<Vec<String>>();

        for key in ConfigKey::iter() {
            if !known.contains(&key.to_string()) {
                continue;
            }
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            backend_url = Config::get(ConfigKey::BackendURL),
            workspace = Config::get(ConfigKey::Workspace),
            credentials_file = Config::get(ConfigKey::CredentialsFile),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg.get_help()?.to_string();
                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if key == ConfigKey::Workspace {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<u64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
