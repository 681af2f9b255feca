use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod views;

use actions::{Action, GlobalAction};
use middleware::{KeyboardMiddleware, LoggingMiddleware, StorageMiddleware};
use playground_config::{AppConfig, LocalStorage};
use state::AppState;
use store::Store;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting hooks-playground, logging to {}", log_file.display());

    let app_config = AppConfig::load();

    // Storage is optional: without it the search term just isn't remembered
    let storage = match LocalStorage::open_default() {
        Ok(storage) => Some(storage),
        Err(e) => {
            log::warn!("Local storage unavailable: {:#}", e);
            None
        }
    };
    let search_term = storage
        .as_ref()
        .and_then(|s| s.get_item(&app_config.search_key))
        .map(str::to_string)
        .unwrap_or_else(|| app_config.default_search_term.clone());

    let stories = playground_core::load_stories()?;
    let people = playground_core::load_people()?;
    let search_key = app_config.search_key.clone();

    let mut store = Store::new(AppState::new(app_config, search_term, stories, people));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(StorageMiddleware::new(storage, search_key)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("Event loop failed")?;

    log::info!("Exiting hooks-playground");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
