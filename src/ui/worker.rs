//! Fetch worker: runs API calls off the UI thread.
//!
//! The UI sends [`FetchCommand`]s over a tokio channel; each command runs in
//! its own task and the outcome comes back as an [`AppEvent`]. Overlapping
//! fetches are allowed; the reducers drop outcomes whose token is stale.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::KanjiSource;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    List { request: u64 },
    Detail { id: String, request: u64 },
}

pub type FetchSender = mpsc::Sender<FetchCommand>;

/// Serve commands until every sender is dropped.
pub async fn run_fetch_worker<S: KanjiSource>(
    source: Arc<S>,
    mut commands: mpsc::Receiver<FetchCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let source = Arc::clone(&source);
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(source.as_ref(), command).await;
            if events.send(event).is_err() {
                tracing::trace!("Fetch result dropped (UI gone)");
            }
        });
    }
    tracing::debug!("Fetch worker stopped");
}

/// Run one command and turn its outcome into an event.
pub async fn execute<S: KanjiSource>(source: &S, command: FetchCommand) -> AppEvent {
    match command {
        FetchCommand::List { request } => {
            let result = source.fetch_all().await.map_err(|err| {
                tracing::warn!(request, kind = err.error_type(), error = %err, "Kanji list fetch failed");
                err.to_string()
            });
            AppEvent::ListFetched { request, result }
        }
        FetchCommand::Detail { id, request } => {
            let result = source.fetch_one(&id).await.map_err(|err| {
                tracing::warn!(request, id = %id, kind = err.error_type(), error = %err, "Kanji detail fetch failed");
                err.to_string()
            });
            AppEvent::DetailFetched { request, result }
        }
    }
}
