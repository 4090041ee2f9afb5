use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use realdesk_core::{config, describe, seed, AppConfig};
use realdesk_tui::app::AppState;
use realdesk_tui::worker;
use realdesk_tui::{input, logging, persistence, ui};

/// Terminal back-office for listings and the sales pipeline.
#[derive(Debug, Parser)]
#[command(name = "realdesk-tui", version)]
struct Args {
    /// Config file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file; overrides `[logging] file`.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);
    let cfg = AppConfig::load(&config_path)?;
    let log_path = logging::init(&cfg.logging, args.log_file.as_deref())?;
    tracing::info!(config = %config_path.display(), log = %log_path.display(), "starting realdesk-tui");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = persistence::default_path();
    let persisted = persistence::load(&state_path);

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let generator = describe::from_config(&cfg.describe);
    tracing::info!(generator = generator.name(), "description generator ready");
    let busy = Arc::new(AtomicBool::new(false));
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, generator, busy.clone())
        .context("spawning worker thread")?;

    // Build app state
    let mut app = AppState::new(
        seed::leads(),
        seed::properties(),
        cmd_tx.clone(),
        resp_rx,
        state_path.clone(),
    );
    persistence::apply(&mut app, persisted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let tick = Duration::from_millis(cfg.ui.tick_ms.max(1));
    let result = run_app(&mut terminal, &mut app, tick);

    // Save state before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        tracing::warn!(error = %e, "could not save view state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Shutdown worker
    worker::shutdown(&cmd_tx, worker_handle, &busy);

    tracing::info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            app.handle_worker_response(resp);
        }

        // 3. Poll for input events
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    input::handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
