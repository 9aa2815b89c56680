#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use owo_colors::OwoColorize;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::configuration::Settings;
use crate::domain::models::ConfirmPrompt;
use crate::domain::models::EditorName;
use crate::domain::models::GeneratedTest;
use crate::domain::models::PrompterRef;
use crate::domain::services::CredentialStore;
use crate::domain::services::Themes;
use crate::domain::services::Workspace;
use crate::domain::services::WorkspaceApplier;
use crate::infrastructure::editors::EditorManager;
use crate::infrastructure::prompters::FixedPrompter;
use crate::infrastructure::prompters::TerminalPrompter;
use crate::infrastructure::secrets::file::FileSecretStore;

/// Written test files offered for opening after an apply.
pub const MAX_FILES_TO_OPEN: usize = 5;

pub const KEYS_HELP: &str = "KEYS:
- Tab / Shift+Tab: Move between fields.
- Enter: Log in, generate tests, analyze coverage or analyze requirements.
- Ctrl+N / Ctrl+B: Next or previous tab.
- Ctrl+T: Cycle the test type (unit, integration, stress).
- Up / Down: Select a generated test, or scroll results.
- Ctrl+E: Preview the selected generated test.
- Ctrl+A: Write generated tests into the workspace.
- Ctrl+X: Discard generated tests.
- Ctrl+R: Analyze test priority, or optimize requirements.
- Ctrl+S: Save the coverage report, or the optimized requirements.
- Ctrl+Y: Copy optimized requirements to the clipboard.
- Esc: Close results or the preview.
- Ctrl+L: Log out.
- Ctrl+C: Quit.";

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!(
        "Created default config file at {}",
        config_file_path.display()
    );
    return Ok(());
}

pub fn log_path() -> PathBuf {
    if let Ok(dir) = std::env::var("DEVEXY_LOG_DIR") {
        return PathBuf::from(dir).join("debug.log");
    }

    return dirs::cache_dir()
        .unwrap_or_else(|| return PathBuf::from("."))
        .join("devexy/debug.log");
}

/// Non-blocking writer for the debug log. Lines buffered in the writer only
/// reach the file once the guard is dropped.
pub fn log_writer(log_path: &Path) -> (NonBlocking, WorkerGuard) {
    let dir = log_path
        .parent()
        .map(|dir| return dir.to_path_buf())
        .unwrap_or_default();
    let file_name = log_path
        .file_name()
        .map(|name| return name.to_os_string())
        .unwrap_or_else(|| return "debug.log".into());

    return tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
}

async fn logout() -> Result<()> {
    let settings = Settings::from_config();
    let credentials = CredentialStore::new(Box::new(FileSecretStore::new(
        settings.credentials_file,
    )));
    credentials.clear().await?;

    println!("Successfully logged out from DevExy");
    return Ok(());
}

/// Writes a JSON array of generated tests into the workspace, then offers to
/// open the first few written files.
async fn apply_tests_file(file: &str, assume_yes: bool) -> Result<()> {
    let payload = fs::read_to_string(file)
        .await
        .with_context(|| return format!("Failed to read {file}"))?;
    let tests: Vec<GeneratedTest> = serde_json::from_str(&payload)
        .with_context(|| return format!("{file} is not a list of generated tests"))?;

    let settings = Settings::from_config();
    let prompter: PrompterRef = if assume_yes {
        Arc::new(FixedPrompter { answer: true })
    } else {
        Arc::new(TerminalPrompter {})
    };
    let workspace = Workspace::open(settings.workspace.clone());
    let applier = WorkspaceApplier::new(workspace, prompter.clone());

    let report = applier.apply(&tests).await?;
    if report.failed.is_empty() {
        println!("{}", report.summary().green());
    } else {
        println!("{}", report.summary().red());
    }

    if report.succeeded.is_empty() {
        return Ok(());
    }

    let open = prompter
        .confirm(ConfirmPrompt::open_files(report.succeeded.len()))
        .await?;
    if !open {
        return Ok(());
    }

    let paths = match applier.workspace() {
        Some(workspace) => report
            .succeeded
            .iter()
            .take(MAX_FILES_TO_OPEN)
            .map(|filepath| return workspace.resolve(filepath))
            .collect::<Vec<PathBuf>>(),
        None => vec![],
    };
    EditorManager::get(settings.editor).open(&paths).await?;

    return Ok(());
}

fn subcommand_apply() -> Command {
    return Command::new("apply")
        .about("Writes generated tests from a JSON file into the workspace.")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("JSON array of generated tests, each with a filepath and content.")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Overwrite existing files and open written files without asking.")
                .action(ArgAction::SetTrue),
        );
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd.about("Debug helpers for DevExy")
        .hide(true)
        .subcommand(
            Command::new("themes").about("List all supported code highlighting themes.")
        )
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running DevExy with environment variable RUST_LOG=devexy")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );

    return cmd;
}

fn arg_timeout(key: ConfigKey, env: &'static str, call_site: &str) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .help(format!(
            "Seconds to wait for {call_site} before timing out. [default: {}]",
            Config::default(key)
        ))
        .value_parser(|val: &str| -> Result<String, String> {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => return Ok(val.to_string()),
                _ => return Err("timeouts must be a positive number of seconds".to_string()),
            }
        })
        .global(true);
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let keys_help = KEYS_HELP
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            return line.bold().underline().to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    return Command::new("devexy")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(keys_help)
        .arg_required_else_help(false)
        .subcommand(subcommand_apply())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("logout").about("Removes the stored DevExy credentials."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("DEVEXY_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::BackendURL.to_string())
                .short('u')
                .long(ConfigKey::BackendURL.to_string())
                .env("DEVEXY_BACKEND_URL")
                .num_args(1)
                .help(format!("DevExy backend API URL. [default: {}]", Config::default(ConfigKey::BackendURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Workspace.to_string())
                .short('w')
                .long(ConfigKey::Workspace.to_string())
                .env("DEVEXY_WORKSPACE")
                .num_args(1)
                .help("Workspace folder that file paths resolve against. [default: current directory]")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::CredentialsFile.to_string())
                .long(ConfigKey::CredentialsFile.to_string())
                .env("DEVEXY_CREDENTIALS_FILE")
                .num_args(1)
                .help(format!("File the login token and username are stored in. [default: {}]", Config::default(ConfigKey::CredentialsFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Editor.to_string())
                .short('e')
                .long(ConfigKey::Editor.to_string())
                .env("DEVEXY_EDITOR")
                .num_args(1)
                .help(format!("How written test files are opened. 'external' uses $VISUAL or $EDITOR. [default: {}]", Config::default(ConfigKey::Editor)))
                .value_parser(PossibleValuesParser::new(EditorName::VARIANTS))
                .global(true),
        )
        .arg(arg_timeout(ConfigKey::UnitTestsTimeout, "DEVEXY_UNIT_TESTS_TIMEOUT", "unit test generation"))
        .arg(arg_timeout(ConfigKey::IntegrationTestsTimeout, "DEVEXY_INTEGRATION_TESTS_TIMEOUT", "integration test generation"))
        .arg(arg_timeout(ConfigKey::StressTestsTimeout, "DEVEXY_STRESS_TESTS_TIMEOUT", "stress test generation"))
        .arg(arg_timeout(ConfigKey::CoverageTimeout, "DEVEXY_COVERAGE_TIMEOUT", "coverage analysis"))
        .arg(arg_timeout(ConfigKey::PriorityTimeout, "DEVEXY_PRIORITY_TIMEOUT", "test priority analysis"))
        .arg(arg_timeout(ConfigKey::RequirementsTimeout, "DEVEXY_REQUIREMENTS_TIMEOUT", "requirements analysis and optimization"));
}

async fn load(matches: &ArgMatches, subcmd_matches: Option<&ArgMatches>) -> Result<()> {
    let mut all = vec![matches];
    if let Some(subcmd_matches) = subcmd_matches {
        all.push(subcmd_matches);
    }

    return Config::load(build(), all).await;
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("themes", _)) => {
                    println!("{}", Themes::list().join("\n"));
                }
                Some(("log-path", _)) => {
                    println!("{}", log_path().display());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("apply", subcmd_matches)) => {
            load(&matches, Some(subcmd_matches)).await?;
            let file = subcmd_matches
                .get_one::<String>("file")
                .map(|e| return e.to_string())
                .unwrap_or_default();
            apply_tests_file(&file, subcmd_matches.get_flag("yes")).await?;
            return Ok(false);
        }
        Some(("logout", subcmd_matches)) => {
            load(&matches, Some(subcmd_matches)).await?;
            logout().await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            load(&matches, None).await?;
        }
    }

    return Ok(true);
}
