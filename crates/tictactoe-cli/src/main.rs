//! Terminal frontend for the tic-tac-toe engine.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod protocol;
mod render;
mod session;

use config::{Config, OutputMode};
use protocol::Output;
use session::Session;

/// Write one output message in the configured format
async fn emit(stdout: &mut Stdout, mode: OutputMode, output: &Output) -> anyhow::Result<()> {
    let text = match mode {
        OutputMode::Text => format!("{}\n\n", render::render(output)),
        OutputMode::Json => format!("{}\n", serde_json::to_string(output)?),
    };
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so they never mix with the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    info!(output = ?config.output, "Starting tic-tac-toe...");

    let mut session = Session::new();
    let mut stdout = tokio::io::stdout();
    emit(&mut stdout, config.output, &session.start()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let output = match protocol::parse(&line, config.output) {
            Ok(command) => session.handle(command),
            Err(error) => session.reject_input(error),
        };
        emit(&mut stdout, config.output, &output).await?;

        if output == Output::Goodbye {
            break;
        }
    }

    info!(moves = session.engine().move_count(), "Session ended");
    Ok(())
}
