//! Terminal frontend
//!
//! Raw-mode alternate-screen UI. Crossterm reads block, so a dedicated
//! thread forwards input events into the async loop; a 50 ms tick drives the
//! autocomplete debounce; every loop iteration redraws from controller
//! state.

mod charts;
mod draw;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::api::HttpCatalogApi;
use crate::app::AppCore;
use crate::config::Config;

/// How often the loop wakes to poll the debounce timer
const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run(config: Config) -> anyhow::Result<()> {
    let api = Arc::new(HttpCatalogApi::from_config(&config)?);
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut core = AppCore::new(api, events_tx);

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_loop(&mut terminal, &mut core, events_rx).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    core: &mut AppCore,
    mut events_rx: mpsc::UnboundedReceiver<crate::app::AppEvent>,
) -> anyhow::Result<()> {
    core.load_visualizations();

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if input_tx.send(event).is_err() {
                break;
            }
        }
    });

    let mut tick = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|frame| draw::draw(frame, core))?;

        tokio::select! {
            Some(event) = input_rx.recv() => {
                if let Event::Key(key) = event {
                    if handle_key(core, key) {
                        return Ok(());
                    }
                }
            }
            Some(event) = events_rx.recv() => core.apply(event),
            _ = tick.tick() => core.tick(Instant::now()),
        }
    }
}

/// Returns true when the user asked to quit
fn handle_key(core: &mut AppCore, key: KeyEvent) -> bool {
    // Terminals emit repeat/release events too; act on presses only
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Enter => {
            if !core.choose_suggestion() {
                core.submit();
            }
        }
        KeyCode::Down => core.search.select_next(),
        KeyCode::Up => core.search.select_prev(),
        KeyCode::Backspace => core.search.backspace(Instant::now()),
        KeyCode::Char(c) => core.search.insert(c, Instant::now()),
        _ => {}
    }

    false
}
