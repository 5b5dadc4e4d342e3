//! # Marquee - Vitrine Page Engine
//!
//! The behavior layer of the Vitrine landing page, run headless: a particle
//! field background, an arithmetic verification challenge, a contact
//! submission relay, and a responsive navigation toggle.
//!
//! ## Architecture
//! ```text
//! stdin driver → PageEvent channel → Page loop → Console surface
//!                                       ↓
//!                               Intake endpoint (HTTPS)
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod challenge;
mod config;
mod nav;
mod page;
mod particles;
mod state;
mod submission;
mod ui;

use config::AppConfig;
use page::{Page, PageEvent};
use ui::ConsoleUi;
use vitrine_common::{ContactForm, VitrineError};

/// Vitrine Marquee - landing page behavior engine
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/marquee.toml")]
    config: String,

    /// Intake endpoint URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Intake access key (overrides config)
    #[arg(long, env = "MARQUEE_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, default_value = "false")]
    json_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log_level, args.json_logs)?;

    info!("✨ Starting Vitrine Marquee v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(&args.config, &args)?;
    info!("📋 Configuration loaded from {}", args.config);

    if config.intake.access_key.is_empty() {
        tracing::warn!("No intake access key configured; the endpoint will refuse submissions");
    }

    let (events_tx, events_rx) = mpsc::channel::<PageEvent>(32);

    // stdin driver, one command per line
    let stdin_tx = events_tx.clone();
    tokio::spawn(async move {
        read_commands(stdin_tx).await;
    });

    // ctrl-c closes the session
    let shutdown_tx = events_tx;
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 Shutdown signal received");
            let _ = shutdown_tx.send(PageEvent::Shutdown).await;
        }
    });

    let ui = ConsoleUi::new(&config.intake.submit_label);
    let page = Page::new(config, ui).context("Failed to initialize page session")?;
    info!("🚀 Page session ready (resize | toggle | link | submit | quit)");

    page.run(events_rx).await;

    info!("👋 Marquee shutdown complete");
    Ok(())
}

/// Initialize structured logging with tracing
fn init_logging(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    Ok(())
}

/// Read line commands from stdin and translate them into page events.
async fn read_commands(tx: mpsc::Sender<PageEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match parse_command(&line) {
            Ok(Some(event)) => {
                let quit = matches!(event, PageEvent::Shutdown);
                if tx.send(event).await.is_err() || quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "Unrecognized command"),
        }
    }
}

/// Parse one driver command.
///
/// Commands: `resize <w> <h>`, `toggle`, `link`,
/// `submit <name> <email> <answer> <message...>`, `quit`.
fn parse_command(line: &str) -> Result<Option<PageEvent>, VitrineError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };

    match command {
        "toggle" => Ok(Some(PageEvent::NavToggle)),
        "link" => Ok(Some(PageEvent::NavLink)),
        "quit" | "exit" => Ok(Some(PageEvent::Shutdown)),
        "resize" => {
            let (w, h) = parts
                .next()
                .zip(parts.next())
                .ok_or_else(|| VitrineError::InvalidInput("resize takes <width> <height>".into()))?;
            let width = w
                .parse()
                .map_err(|_| VitrineError::InvalidInput(format!("Bad width: {w}")))?;
            let height = h
                .parse()
                .map_err(|_| VitrineError::InvalidInput(format!("Bad height: {h}")))?;
            Ok(Some(PageEvent::Resize { width, height }))
        }
        "submit" => {
            let missing =
                || VitrineError::InvalidInput("submit takes <name> <email> <answer> <message>".into());
            let name = parts.next().ok_or_else(missing)?;
            let email = parts.next().ok_or_else(missing)?;
            let answer = parts.next().ok_or_else(missing)?;
            let message = parts.collect::<Vec<_>>().join(" ");

            Ok(Some(PageEvent::Submit {
                form: ContactForm {
                    name: name.to_string(),
                    email: email.to_string(),
                    message,
                },
                answer: answer.to_string(),
            }))
        }
        other => Err(VitrineError::InvalidInput(format!(
            "Unknown command: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(
            parse_command("toggle").unwrap(),
            Some(PageEvent::NavToggle)
        ));
        assert!(matches!(
            parse_command("link").unwrap(),
            Some(PageEvent::NavLink)
        ));
        assert!(matches!(
            parse_command("quit").unwrap(),
            Some(PageEvent::Shutdown)
        ));
        assert!(parse_command("").unwrap().is_none());
    }

    #[test]
    fn test_parse_resize() {
        match parse_command("resize 800 600").unwrap() {
            Some(PageEvent::Resize { width, height }) => {
                assert_eq!(width, 800.0);
                assert_eq!(height, 600.0);
            }
            other => panic!("unexpected parse: {other:?}"),
        }

        assert!(parse_command("resize 800").is_err());
        assert!(parse_command("resize eight hundred").is_err());
    }

    #[test]
    fn test_parse_submit_joins_message() {
        match parse_command("submit Ada ada@example.com 7 hello from the console").unwrap() {
            Some(PageEvent::Submit { form, answer }) => {
                assert_eq!(form.name, "Ada");
                assert_eq!(form.email, "ada@example.com");
                assert_eq!(answer, "7");
                assert_eq!(form.message, "hello from the console");
            }
            other => panic!("unexpected parse: {other:?}"),
        }

        assert!(parse_command("submit Ada").is_err());
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(parse_command("explode").is_err());
    }
}
