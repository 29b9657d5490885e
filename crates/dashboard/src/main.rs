//! Predictive Maintenance Dashboard - terminal entry point

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use dashboard::event::{handle_key_event, poll_event};
use dashboard::ui::draw_ui;
use dashboard::App;
use inference_engine::InferenceEngine;
use runtime::{init_logging, AppConfig, LogTarget};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(
        &config.log_level,
        LogTarget::File(config.dashboard_log_path.clone()),
    )?;
    info!("=== Maintenance Dashboard v{} ===", env!("CARGO_PKG_VERSION"));

    // Load before touching the terminal so a bad model fails with a plain error
    let engine = InferenceEngine::load(&config.model_path)
        .with_context(|| format!("loading model from {}", config.model_path.display()))?;
    let mut app = App::new(engine);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Dashboard closed");
    result
}

/// Raw mode plus alternate screen. Undone again if any step fails.
fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    let init = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    };

    init().or_else(|e| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        Err(anyhow::Error::new(e).context("setting up terminal"))
    })
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        if let Some(Event::Key(key)) = poll_event(tick_rate)? {
            handle_key_event(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
