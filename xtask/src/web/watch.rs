use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use super::bundle::Bundler;
use super::error::WebError;

/// Quiet period that closes a burst of file events.
pub const DEBOUNCE: Duration = Duration::from_millis(200);

pub type WatchEvents = UnboundedReceiver<notify::Result<Event>>;

/// Watch `paths` recursively. Events arrive on the returned channel for as
/// long as the watcher is kept alive.
pub fn watch(paths: &[PathBuf]) -> Result<(RecommendedWatcher, WatchEvents), WebError> {
    let (tx, rx) = unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |event: notify::Result<Event>| {
        // Receiver gone means the dev loop is shutting down.
        let _ = tx.send(event);
    })?;
    for path in paths {
        watcher.watch(path, RecursiveMode::Recursive)?;
        tracing::info!(path = %path.display(), "watching");
    }
    Ok((watcher, rx))
}

/// Rebuild once per burst of changes until the watcher goes away.
pub async fn rebuild_on_change(mut events: WatchEvents, bundler: Arc<Bundler>) {
    while let Some(changed) = next_burst(&mut events, DEBOUNCE).await {
        if changed.is_empty() {
            continue;
        }
        tracing::info!(files = changed.len(), first = %changed[0].display(), "change detected");
        rebuild(bundler.clone()).await;
    }
    tracing::warn!("file watcher closed");
}

/// Bundle on a blocking thread. Failures, including a panicked build task,
/// are logged and never stop the caller.
pub async fn rebuild(bundler: Arc<Bundler>) {
    match tokio::task::spawn_blocking(move || bundler.bundle()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("build failed: {e}"),
        Err(e) => tracing::error!("build task failed: {e}"),
    }
}

/// Wait for the next event, then keep draining until `quiet` passes with no
/// new event. Returns the relevant paths touched in the burst, or `None` once
/// the channel is closed.
pub async fn next_burst(events: &mut WatchEvents, quiet: Duration) -> Option<Vec<PathBuf>> {
    let mut changed = Vec::new();
    collect(events.recv().await?, &mut changed);

    while let Ok(Some(event)) = tokio::time::timeout(quiet, events.recv()).await {
        collect(event, &mut changed);
    }
    changed.sort();
    changed.dedup();
    Some(changed)
}

fn collect(event: notify::Result<Event>, changed: &mut Vec<PathBuf>) {
    match event {
        Ok(event) if is_relevant(&event) => {
            changed.extend(event.paths.into_iter().filter(|p| !is_editor_noise(p)));
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("watch error: {e}"),
    }
}

fn is_relevant(event: &Event) -> bool {
    !matches!(event.kind, EventKind::Access(_))
}

// Swap and backup files written by editors next to the real file.
fn is_editor_noise(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with('~') || name.ends_with(".swp") || name.starts_with(".#")
}
