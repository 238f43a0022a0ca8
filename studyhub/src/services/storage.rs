use crate::models::{Language, QuizQuestion, RoadmapItem};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::fs;

/// The single document mirrored to disk: everything the app remembers
/// between runs lives in these three fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedState {
    #[serde(default)]
    pub roadmap: Vec<RoadmapItem>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub lang: Language,
}

/// Persistence port for the content store. The store never touches the
/// filesystem directly; it is handed an implementation of this trait once at
/// startup.
#[async_trait]
pub trait StatePersistence: Send + Sync {
    /// Returns the saved state, or None when nothing usable is stored.
    async fn load(&self) -> Result<Option<PersistedState>>;
    async fn save(&self, state: &PersistedState) -> Result<()>;
}

/// JSON document on disk.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StatePersistence for FileStorage {
    async fn load(&self) -> Result<Option<PersistedState>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No saved state at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e).context("Failed to read saved state"),
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                tracing::warn!(
                    "Saved state at {} is malformed ({}), falling back to defaults",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .context("Failed to create state directory")?;
            }
        }

        let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
        fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write saved state to {}", self.path.display()))?;

        Ok(())
    }
}

/// In-process storage. Clones share the same underlying slot, so tests can
/// keep a handle and observe what the store wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<PersistedState>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(state))),
        }
    }

    pub fn snapshot(&self) -> Option<PersistedState> {
        self.slot.lock().expect("storage slot poisoned").clone()
    }
}

#[async_trait]
impl StatePersistence for MemoryStorage {
    async fn load(&self) -> Result<Option<PersistedState>> {
        Ok(self.snapshot())
    }

    async fn save(&self, state: &PersistedState) -> Result<()> {
        *self.slot.lock().expect("storage slot poisoned") = Some(state.clone());
        Ok(())
    }
}
