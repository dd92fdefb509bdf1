//! gateway-tui: terminal console for an industrial IoT gateway.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Page state or key mapping (see `gateway_tui::app`).
//! - Configuration persistence (see `crates/config`).
//! - Timers (see `runtime::side_effects`).
//!
//! Invariants:
//! - The console enters raw mode and the alternate screen on startup.
//! - `load_dotenv()` runs before configuration is read.
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - Mouse capture is never enabled; input is keyboard only.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use gateway_config::PersistedState;
use gateway_config::constants::{
    AUTO_SAVE_INTERVAL_SECS, CLOCK_TICK_MS, DEFAULT_CHANNEL_CAPACITY,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{Mutex, mpsc::channel};
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gateway_tui::action::{Action, try_send_action};
use gateway_tui::app::App;
use gateway_tui::cli::Cli;
use gateway_tui::runtime::{
    config::{load_config, open_config_manager, save_and_quit, startup_route},
    side_effects::{handle_side_effects, spawn_connection_probe},
    terminal::TerminalGuard,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "gateway-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = load_config(&cli)?;
    let config_manager = open_config_manager(&cli)?;
    let persisted_state = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        config_manager.load()
    };
    let config_manager = Arc::new(Mutex::new(config_manager));
    tracing::info!(
        gateway = %config.gateway_name,
        config_path = %config_manager.lock().await.config_path().display(),
        "Starting gateway console"
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let shutdown = CancellationToken::new();

    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };
            if action.is_critical() {
                if tx_input.send(action).await.is_err() {
                    break;
                }
            } else if !try_send_action(&tx_input, action) {
                break;
            }
        }
    });

    spawn_connection_probe(config.connect_delay, tx.clone(), shutdown.child_token());

    let size = terminal.size()?;
    let mut app = App::new(&config, persisted_state, startup_route(&cli));
    app.update(Action::Resize(size.width, size.height));

    let mut tick_interval = tokio::time::interval(config.ui_tick);
    let mut clock_interval = tokio::time::interval(Duration::from_millis(CLOCK_TICK_MS));
    let mut auto_save_interval =
        tokio::time::interval(Duration::from_secs(AUTO_SAVE_INTERVAL_SECS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "Handling action");

                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(action) => action,
                        None => continue,
                    },
                    other => other,
                };

                match action {
                    Action::Quit => {
                        save_and_quit(&app, &config_manager).await;
                        break;
                    }
                    Action::PersistState => {
                        let state = app.get_persisted_state();
                        let manager = config_manager.clone();
                        tokio::spawn(async move {
                            if let Err(e) = manager.lock().await.save(&state) {
                                tracing::warn!(error = %e, "Failed to persist state");
                            }
                        });
                    }
                    action => {
                        app.update(action.clone());
                        handle_side_effects(action, tx.clone(), app.scan_duration);
                        if let Some(followup) = app.take_followup() {
                            handle_side_effects(followup, tx.clone(), app.scan_duration);
                        }
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
            _ = clock_interval.tick() => {
                app.update(Action::ClockTick);
            }
            _ = auto_save_interval.tick() => {
                let state = app.get_persisted_state();
                let manager = config_manager.clone();
                tokio::spawn(async move {
                    if let Err(e) = manager.lock().await.save(&state) {
                        tracing::warn!(error = %e, "Auto-save failed");
                    }
                });
            }
        }
    }

    shutdown.cancel();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
