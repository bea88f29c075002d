use crate::api::KanjiClient;
use crate::config::Config;
use crate::router::Route;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::run_fetch_worker;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Queued fetch commands before the UI reports the worker as unavailable.
const FETCH_QUEUE_DEPTH: usize = 16;

pub fn run(config: Config, initial: Route) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = KanjiClient::new(config.api.clone()).context("failed to build HTTP client")?;

    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let (fetch_tx, fetch_rx) = mpsc::channel(FETCH_QUEUE_DEPTH);
    runtime.spawn(run_fetch_worker(Arc::new(client), fetch_rx, events.sender()));

    let mut app = App::new(&config);
    app.set_fetch_sender(fetch_tx);

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    tracing::info!(route = %initial, "Starting UI");
    app.navigate(initial);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::ListFetched { request, result }) => app.on_list_fetched(request, result),
            Ok(AppEvent::DetailFetched { request, result }) => {
                app.on_detail_fetched(request, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    drop(app);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("UI stopped");
    Ok(())
}
