//! Query handler demo - query states rendered in the terminal.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop and dispatch fetches and theme saves.
//!
//! Does NOT handle:
//! - Resolution of query states (see `query_handler_core`).
//! - Configuration parsing (see `query_handler_config`).
//!
//! Invariants:
//! - The demo enters raw mode and alternate screen on startup.
//! - Logs go to a daily rolling file, never to the terminal.
//! - Configuration precedence: CLI args > env vars > config file > defaults.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use query_handler_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use query_handler_tui::{
    action::Action,
    app::App,
    cli::Cli,
    runtime::{
        config::{load_config, save_theme},
        fetch::spawn_fetch,
        terminal::TerminalGuard,
    },
    ui::render,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "query-handler-demo.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // _guard must live for the whole of main() so buffered logs are flushed.

    let loaded = load_config(&cli)?;
    let delay = Duration::from_millis(cli.delay_ms);
    let mut app = App::new(loaded.config, cli.outcome);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            match event_result {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_input.send(Action::Input(key)).await.is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "terminal event stream failed");
                    break;
                }
            }
        }
    });

    app.update(Action::Refetch);
    spawn_fetch(tx.clone(), app.generation(), app.outcome, delay);

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| render(f, &app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(action) => action,
                        None => continue,
                    },
                    other => other,
                };
                tracing::debug!(?action, "handling action");

                match action {
                    Action::Quit => break,
                    Action::Refetch => {
                        app.update(Action::Refetch);
                        spawn_fetch(tx.clone(), app.generation(), app.outcome, delay);
                    }
                    Action::CycleTheme => {
                        app.update(Action::CycleTheme);
                        if let Err(e) = save_theme(&loaded.path, app.color_theme()) {
                            tracing::error!(error = %e, "failed to save theme");
                        }
                    }
                    other => app.update(other),
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
