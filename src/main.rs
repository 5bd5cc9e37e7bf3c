mod app;
mod auth;
mod config;
mod dashboard;
mod logging;
mod notifications;
mod session;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::auth::{AuthBackend, SimulatedBackend, Submission};
use crate::session::{FileStore, MemoryStore, Session, SessionStore, StoreError};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config, writing the defaults on first run
    let path = config::config_path();
    let cfg = config::load_config_from(&path)?;
    if !path.exists() {
        config::save_config(&cfg, &path)?;
    }

    if let Some(log_path) = logging::init(&cfg.logging)? {
        info!(log = %log_path.display(), config = %path.display(), "gameadconnect starting");
    }

    let (store, store_error) = open_store(&cfg.session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, store, store_error).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Pick the session store. A damaged session file is never fatal: the app
/// starts logged out and the error is reported once the UI is up.
fn open_store(cfg: &config::SessionConfig) -> (Box<dyn SessionStore>, Option<StoreError>) {
    if !cfg.persist {
        info!("session kept in memory");
        return (Box::new(MemoryStore::new()), None);
    }
    let path = cfg.path.clone().unwrap_or_else(FileStore::default_path);
    let (store, error) = FileStore::open_or_empty(path);
    info!(path = %store.path().display(), "session store opened");
    (Box::new(store), error)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    mut store: Box<dyn SessionStore>,
    store_error: Option<StoreError>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let session = Session::load(store.as_ref());
    info!(logged_in = session.logged_in, role = ?session.role, "session loaded");

    let backend: Arc<dyn AuthBackend> = Arc::new(SimulatedBackend::from_config(&cfg.auth));
    let submit_timeout = Duration::from_millis(cfg.auth.submit_timeout_ms);
    let tick_rate = cfg.ui.tick_rate();
    let mut state = AppState::new(cfg, session);
    if let Some(e) = store_error {
        state.error_toast("Error", format!("Session file ignored: {}", e));
    }

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Submit { id, request } => {
                    let submission = Submission::spawn(
                        id,
                        request,
                        Arc::clone(&backend),
                        submit_timeout,
                        event_tx.clone(),
                    );
                    match state.auth_mut() {
                        Some(auth) => auth.attach(submission),
                        None => warn!(id, "no auth screen to attach submission to"),
                    }
                }
                Action::PersistLogin { role } => {
                    if let Err(e) = Session::persist_login(store.as_mut(), role) {
                        error!(error = %e, "failed to persist login");
                        state.error_toast("Error", format!("Could not save session: {}", e));
                    }
                }
                Action::Logout => {
                    if let Err(e) = Session::logout(store.as_mut()) {
                        error!(error = %e, "failed to clear session");
                        state.error_toast("Error", format!("Could not clear session: {}", e));
                    }
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            info!("quitting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
