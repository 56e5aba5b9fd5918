//! chatdesk CLI entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::debug;

use chatdesk::cli::{
    app::{
        cli_overrides, clipboard_service, config_store, init_logging, load_merged_config,
        speech_controller, EXIT_ERROR, EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    clip_cmd::handle_clip_command,
    config_cmd::handle_config_command,
    presenter::Presenter,
    snapshot_cmd::handle_snapshot_command,
    speak_cmd::{handle_speak_command, handle_voices_command},
};
use chatdesk::domain::config::ClipboardBackend;
use chatdesk::domain::error::ConfigError;
use chatdesk::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut presenter = Presenter::new();

    if let Some(backend) = cli.clipboard_backend.as_deref() {
        if let Err(e) = backend.parse::<ClipboardBackend>() {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    let result = match cli.command {
        Commands::Config { action } => {
            // Config commands edit the file itself, never the merged view
            let store = XdgConfigStore::new();
            return match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    match e {
                        ConfigError::ValidationError { .. } => ExitCode::from(EXIT_USAGE_ERROR),
                        _ => ExitCode::from(EXIT_ERROR),
                    }
                }
            };
        }
        Commands::Clip { action } => {
            let store = config_store(cli_overrides(None, cli.clipboard_backend));
            let config = load_merged_config(&store).await;
            let service = clipboard_service(&config);
            handle_clip_command(action, &service, &presenter).await
        }
        Commands::Speak {
            text,
            from_clipboard,
            voice,
        } => {
            let store = config_store(cli_overrides(voice, cli.clipboard_backend));
            let config = load_merged_config(&store).await;

            let text = match text {
                Some(text) if !from_clipboard => Some(text),
                _ => {
                    presenter.info("Reading text from clipboard");
                    clipboard_service(&config).get_text().await
                }
            };

            match text {
                Some(text) => {
                    let mut controller = speech_controller(&config, store).await;
                    handle_speak_command(&mut controller, &text, &mut presenter).await
                }
                None => Err("Clipboard holds no text".to_string()),
            }
        }
        Commands::Voices { select } => {
            let store = config_store(cli_overrides(None, cli.clipboard_backend));
            let config = load_merged_config(&store).await;
            let controller = speech_controller(&config, store).await;
            handle_voices_command(&controller, select, &XdgConfigStore::new(), &presenter).await
        }
        Commands::Snapshot {
            out,
            scale,
            moving,
            after_ms,
        } => {
            handle_snapshot_command(
                &out,
                scale,
                moving,
                Duration::from_millis(after_ms),
                &presenter,
            )
            .await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "Command failed");
            presenter.error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
