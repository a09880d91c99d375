//! PriceRange — dual-handle price range slider in the terminal.
//!
//! Layout:
//! 1. Track — two handles over three fill bands, driven by mouse or keys
//! 2. Fields — "From" / "To" price inputs
//! 3. Status bar — last committed range and key hints

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::{info, warn};

use pricerange_tui::app::AppState;
use pricerange_tui::cli::Cli;
use pricerange_tui::config::AppConfig;
use pricerange_tui::{input, logging, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = match cli.config_path() {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    let config = cli.apply(file_config);

    // Held until exit so the non-blocking writer flushes.
    let logging_guard = logging::init();
    if logging_guard.is_none() {
        eprintln!("pricerange: file logging unavailable, continuing without it");
    }

    let mut app = AppState::new(&config).context("invalid configuration")?;
    info!(max_price = config.max_price, step = config.step, "starting");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stderr(),
            DisableBracketedPaste,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        default_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);
    if let Err(err) = &result {
        warn!(error = %err, "event loop failed");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(min = app.reported.min(), max = app.reported.max(), "final range");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render, remembering the area for mouse hit-testing
        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain change notifications (non-blocking)
        app.drain_changes();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            input::handle_event(app, event::read()?);
        }

        // 4. Check quit
        if !app.running {
            app.end_drag();
            app.commit_edit();
            app.drain_changes();
            break;
        }
    }
    Ok(())
}
