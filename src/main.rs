// ABOUTME: Main entry point for sos2a with TUI and CLI support
//
// Binary: sos2a
// Usage: sos2a [COMMAND]
// - No command: launches the assessment wizard
// - assess: preliminary report from a JSON answers file
// - list: show stored assessments
// - show: one stored assessment
// - early-access: request early access

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    sync::Arc,
    time::{Duration, Instant},
};

use sos2a::app::{App, EventHandler};
use sos2a::cli;
use sos2a::components::LayoutComponent;
use sos2a::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    setup_logging(&config.logging.filter);
    setup_panic_handler();

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {:#}", e);
    }

    let args = cli::Cli::parse();

    let result = match args.command {
        // CLI commands
        Some(cli::Commands::Assess(assess_args)) => {
            cli::assess::execute(assess_args, args.format, &config).await
        }
        Some(cli::Commands::List(list_args)) => cli::list::execute(list_args, args.format, &config).await,
        Some(cli::Commands::Show(show_args)) => cli::list::show(show_args, args.format, &config).await,
        Some(cli::Commands::EarlyAccess(early_access_args)) => {
            cli::early_access::execute(early_access_args, args.format, &config).await
        }

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui) | None => {
            let store = cli::util::open_store(&config)?;
            let mut app = App::with_config(Arc::new(store), &config);
            let mut layout = LayoutComponent::new();

            // Flush any pending terminal events so stray keypresses don't land in the first field
            while crossterm::event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = crossterm::event::read();
            }

            run_tui(&mut app, &mut layout, &config).await
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, config: &AppConfig) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. The assessment wizard requires a terminal.\n\
             Use 'sos2a assess --answers <file>' for non-interactive runs."
        ));
    }

    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, layout, &mut terminal, config).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));
    let mut last_tick = Instant::now();

    // Ignore key events for the first 100ms; buffered keys would otherwise be typed into the form
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    tracing::info!("Assessment wizard started");

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                    tracing::debug!(
                        "Ignoring key event {:?} during startup guard period",
                        key_event.code
                    );
                    continue;
                }

                if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
        }

        // Storage work queued by the last event runs between frames
        if app.state.pending_async_action.is_some() {
            terminal.draw(|frame| {
                layout.render(frame, &app.state);
            })?;
            app.process_async_action().await;
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            tracing::info!(
                "Assessment wizard closed on step {}",
                app.state.wizard.current_step()
            );
            break;
        }
    }

    Ok(())
}

fn setup_logging(default_filter: &str) {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "sos2a-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Without a log file there is nowhere safe to write while the TUI owns the terminal
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
