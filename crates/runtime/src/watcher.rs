//! # Config Hot-Reloading
//!
//! Watches the game configuration file and reports edits over a channel. The
//! control loop drains the channel between episodes, so a reloaded config
//! never changes the rules in the middle of an episode.

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as _};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use tracing::{error, info};

/// Keeps the underlying watcher alive for as long as edits should be seen.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<PathBuf>,
}

impl ConfigWatcher {
    /// True if the watched file changed since the last call.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while let Ok(path) = self.changes.try_recv() {
            info!("Config file modified: {:?}", path.file_name().unwrap_or_default());
            changed = true;
        }
        changed
    }
}

/// Start watching `path` for modifications.
pub fn start(path: &Path) -> Result<ConfigWatcher> {
    info!("Initializing config watcher for {}...", path.display());
    let (tx, changes) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if event.kind.is_modify() || event.kind.is_create() {
                for path in event.paths {
                    // The receiver is gone once the loop has finished.
                    let _ = tx.send(path);
                }
            }
        }
        Err(e) => error!("Error watching config file: {e:?}"),
    })?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", path.display()))?;

    Ok(ConfigWatcher { _watcher: watcher, changes })
}
