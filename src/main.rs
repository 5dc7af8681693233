mod config;
mod controller;
mod logging;
mod model;
mod share;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::AppConfig;
use controller::AppController;
use model::{AppModel, FeedViewModel, GiphyClient};
use share::UrlShortener;
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== giphy-viewer starting ===");

    let config = AppConfig::from_env()?;
    tracing::debug!(api_base = %config.api_base, rating = %config.rating, "Configuration loaded");

    let giphy = GiphyClient::new(&config)?;
    let shortener = UrlShortener::new(config.shortener_endpoint.clone())?;

    let feed = FeedViewModel::new(Arc::new(giphy));
    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), feed.clone(), shortener);

    controller.start_feed_event_listener();
    controller.show_trending().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, feed, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("giphy-viewer shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    feed: FeedViewModel,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (ui_state, should_quit) = {
            let model_guard = model.lock().await;
            model_guard.auto_clear_old_notifications().await;
            (model_guard.get_ui_state().await, model_guard.should_quit().await)
        };
        let snapshot = feed.snapshot().await;

        terminal.draw(|f| {
            AppView::render(f, &snapshot, &ui_state);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
