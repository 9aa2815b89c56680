#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::Error;
use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::sync::mpsc;
use tokio::task;

use crate::application::cli;
use crate::application::ui;
use crate::configuration::Settings;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::clipboard::ClipboardService;
use crate::domain::services::CredentialStore;
use crate::domain::services::SidebarController;
use crate::domain::services::Workspace;
use crate::domain::services::WorkspaceApplier;
use crate::infrastructure::backend::DevexyClient;
use crate::infrastructure::prompters::TuiPrompter;
use crate::infrastructure::secrets::file::FileSecretStore;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        format!(
            "Oh no! DevExy has failed with the following app version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        )
        .red()
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_config();
    tracing::info!(
        backend_url = %settings.backend_url,
        workspace = ?settings.workspace,
        "starting sidebar"
    );

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let credentials = Arc::new(CredentialStore::new(Box::new(FileSecretStore::new(
        settings.credentials_file.clone(),
    ))));
    let prompter = Arc::new(TuiPrompter::new(event_tx.clone()));
    let applier = Arc::new(WorkspaceApplier::new(
        Workspace::open(settings.workspace.clone()),
        prompter.clone(),
    ));
    let client = Arc::new(DevexyClient::new(settings, credentials.clone(), prompter));

    let mut background_futures = task::JoinSet::new();

    let clipboard = match ClipboardService::healthcheck() {
        Ok(()) => {
            let (clipboard, clipboard_rx) = ClipboardService::new();
            background_futures.spawn(async move {
                return ClipboardService::start(clipboard_rx).await;
            });
            Some(clipboard)
        }
        Err(clipboard_err) => {
            tracing::warn!(err = ?clipboard_err, "Clipboard service is unable to start");
            None
        }
    };

    let controller = SidebarController::new(client, credentials, applier, clipboard, event_tx);
    background_futures.spawn(async move {
        return controller.start(&mut action_rx).await;
    });

    let ui_future = ui::start(action_tx, event_rx);

    let res = tokio::select!(
        Some(res) = background_futures.join_next() => res?,
        res = ui_future => res,
    );

    return res;
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let (writer, log_guard) = cli::log_writer(&cli::log_path());
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("devexy")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let code = match cli::parse().await {
        Ok(true) => match run().await {
            Ok(()) => 0,
            Err(err) => {
                ui::destruct_terminal_for_panic();
                handle_error(err);
                1
            }
        },
        Ok(false) => 0,
        Err(err) => {
            handle_error(err);
            1
        }
    };

    // Flushes buffered log lines, exit skips destructors.
    drop(log_guard);
    process::exit(code);
}
