//! Plan icon loading
//!
//! Icons are resolved off the UI thread. A loader thread walks the catalog,
//! asks an [`IconResolver`] for each icon handle, and reports back over a
//! channel. The UI keeps an [`IconTracker`] keyed by offering name and shows
//! a placeholder until an icon is loaded. A failed icon keeps its
//! placeholder for good; nothing retries it.
//!
//! Icon state never affects selection or pricing.

use crate::catalog::Catalog;
use crate::error::{QuoteError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Load progress of a single icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconLoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl IconLoadState {
    /// Loaded and Failed are final
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A resolved icon, reduced to what a terminal can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Short text badge drawn in place of the picture
    pub badge: String,
    /// Size of the resolved asset in bytes
    pub bytes: usize,
}

/// Turns an icon handle into something displayable.
pub trait IconResolver: Send + Sync {
    fn resolve(&self, name: &str, icon: &str) -> Result<IconImage>;
}

/// Two-letter badge for an offering name, e.g. `Aetna` -> `AE`
pub fn badge_for(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Resolves icon handles as files under an assets directory.
#[derive(Debug, Clone)]
pub struct AssetDirResolver {
    root: PathBuf,
}

impl AssetDirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IconResolver for AssetDirResolver {
    fn resolve(&self, name: &str, icon: &str) -> Result<IconImage> {
        let path = self.root.join(icon.trim_start_matches('/'));
        let data = std::fs::read(&path)
            .map_err(|e| QuoteError::icon(format!("{}: {}", path.display(), e)))?;
        if data.is_empty() {
            return Err(QuoteError::icon(format!("{} is empty", path.display())));
        }
        Ok(IconImage {
            badge: badge_for(name),
            bytes: data.len(),
        })
    }
}

/// Resolver used when no assets directory is configured: every icon is a
/// text badge and loads immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeResolver;

impl IconResolver for BadgeResolver {
    fn resolve(&self, name: &str, _icon: &str) -> Result<IconImage> {
        Ok(IconImage {
            badge: badge_for(name),
            bytes: 0,
        })
    }
}

/// Messages sent from the loader thread to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconMessage {
    Loaded { name: String, image: IconImage },
    Failed { name: String, reason: String },
}

/// Load state for every offering, keyed by offering name.
#[derive(Debug, Clone, Default)]
pub struct IconTracker {
    states: HashMap<String, IconLoadState>,
    images: HashMap<String, IconImage>,
}

impl IconTracker {
    /// Start every offering in the catalog as Pending
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            states: catalog
                .iter()
                .map(|o| (o.name.clone(), IconLoadState::Pending))
                .collect(),
            images: HashMap::new(),
        }
    }

    /// Current state; names never seen are Pending
    pub fn state(&self, name: &str) -> IconLoadState {
        self.states.get(name).copied().unwrap_or_default()
    }

    /// The resolved image, once Loaded
    pub fn image(&self, name: &str) -> Option<&IconImage> {
        self.images.get(name)
    }

    /// Record a successful load. Ignored once the icon has settled.
    pub fn mark_loaded(&mut self, name: &str, image: IconImage) -> bool {
        if self.state(name).is_settled() {
            return false;
        }
        self.states.insert(name.to_string(), IconLoadState::Loaded);
        self.images.insert(name.to_string(), image);
        true
    }

    /// Record a failed load. Ignored once the icon has settled.
    pub fn mark_failed(&mut self, name: &str) -> bool {
        if self.state(name).is_settled() {
            return false;
        }
        self.states.insert(name.to_string(), IconLoadState::Failed);
        true
    }

    /// Apply a loader message, returning whether anything changed
    pub fn apply(&mut self, msg: IconMessage) -> bool {
        match msg {
            IconMessage::Loaded { name, image } => self.mark_loaded(&name, image),
            IconMessage::Failed { name, reason } => {
                warn!(offering = %name, %reason, "icon failed to load, keeping placeholder");
                self.mark_failed(&name)
            }
        }
    }

    /// Number of icons still loading
    pub fn pending(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == IconLoadState::Pending)
            .count()
    }
}

/// Spawn a background thread that resolves every icon in `catalog`.
///
/// The thread ends after the last icon or as soon as the receiver is gone.
pub fn spawn_icon_loader(
    catalog: &Catalog,
    resolver: Arc<dyn IconResolver>,
    tx: Sender<IconMessage>,
) -> std::thread::JoinHandle<()> {
    let jobs: Vec<(String, String)> = catalog
        .iter()
        .map(|o| (o.name.clone(), o.icon.clone()))
        .collect();

    std::thread::spawn(move || {
        debug!(count = jobs.len(), "icon loader started");
        for (name, icon) in jobs {
            let msg = match resolver.resolve(&name, &icon) {
                Ok(image) => IconMessage::Loaded { name, image },
                Err(e) => IconMessage::Failed {
                    name,
                    reason: e.to_string(),
                },
            };
            if tx.send(msg).is_err() {
                debug!("icon receiver dropped, stopping loader");
                return;
            }
        }
        debug!("icon loader finished");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_badge() {
        assert_eq!(badge_for("Aetna"), "AE");
        assert_eq!(badge_for("x"), "X");
        assert_eq!(badge_for("  "), "");
    }

    #[test]
    fn test_tracker_starts_pending() {
        let tracker = IconTracker::new(&Catalog::builtin());
        assert_eq!(tracker.pending(), 4);
        assert_eq!(tracker.state("Aetna"), IconLoadState::Pending);
        assert_eq!(tracker.state("Unknown"), IconLoadState::Pending);
    }

    #[test]
    fn test_failed_is_permanent() {
        let mut tracker = IconTracker::new(&Catalog::builtin());
        assert!(tracker.mark_failed("Cigna"));
        let image = IconImage {
            badge: "CI".to_string(),
            bytes: 10,
        };
        assert!(!tracker.mark_loaded("Cigna", image));
        assert_eq!(tracker.state("Cigna"), IconLoadState::Failed);
        assert!(tracker.image("Cigna").is_none());
    }

    #[test]
    fn test_loaded_is_permanent() {
        let mut tracker = IconTracker::new(&Catalog::builtin());
        let image = IconImage {
            badge: "AE".to_string(),
            bytes: 3,
        };
        assert!(tracker.mark_loaded("Aetna", image.clone()));
        assert!(!tracker.mark_failed("Aetna"));
        assert_eq!(tracker.image("Aetna"), Some(&image));
    }

    #[test]
    fn test_asset_dir_resolver_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = AssetDirResolver::new(dir.path());
        assert!(matches!(
            resolver.resolve("Aetna", "aetna.png"),
            Err(QuoteError::Icon(_))
        ));
    }

    #[test]
    fn test_asset_dir_resolver_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("aetna.png"), [1u8, 2, 3]).unwrap();
        let resolver = AssetDirResolver::new(dir.path());
        let image = resolver.resolve("Aetna", "/aetna.png").unwrap();
        assert_eq!(image.bytes, 3);
        assert_eq!(image.badge, "AE");
    }

    #[test]
    fn test_loader_reports_every_icon() {
        let catalog = Catalog::builtin();
        let (tx, rx) = mpsc::channel();
        let handle = spawn_icon_loader(&catalog, Arc::new(BadgeResolver), tx);
        handle.join().unwrap();

        let mut tracker = IconTracker::new(&catalog);
        for msg in rx.try_iter() {
            tracker.apply(msg);
        }
        assert_eq!(tracker.pending(), 0);
        assert_eq!(tracker.state("Medicare"), IconLoadState::Loaded);
    }
}
