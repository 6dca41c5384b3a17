//! Service status registry.
//!
//! Maps each simulated microservice key to its current [`ServiceStatus`].
//! Writes are unconditional: the registry is advisory and display-only, so
//! no transition is ever rejected and concurrent writers are last-write-wins.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::{ServiceEntry, ServiceStatus};

#[derive(Debug, Default)]
struct RegistryState {
    /// Entries in registration order
    entries: Vec<ServiceEntry>,
    /// Key to position in `entries`
    index: HashMap<String, usize>,
}

/// Shared registry of simulated service statuses.
///
/// Cloning yields a handle onto the same registry.
#[derive(Debug, Clone, Default)]
pub struct StatusRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry pre-populated with `entries`, in order.
    ///
    /// Duplicate keys keep their first position and their last status.
    pub fn from_entries<K>(entries: impl IntoIterator<Item = (K, ServiceStatus)>) -> Self
    where
        K: Into<String>,
    {
        let mut state = RegistryState::default();
        for (key, status) in entries {
            let key = key.into();
            if let Some(&position) = state.index.get(&key) {
                state.entries[position].status = status;
            } else {
                state.index.insert(key.clone(), state.entries.len());
                state.entries.push(ServiceEntry::new(key, status));
            }
        }

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Register a key with its initial status.
    ///
    /// Re-registering an existing key overwrites its status and keeps its position.
    pub async fn register(&self, key: impl Into<String>, status: ServiceStatus) {
        let key = key.into();
        let mut state = self.state.write().await;

        if let Some(&position) = state.index.get(&key) {
            state.entries[position].status = status;
            return;
        }

        let position = state.entries.len();
        state.entries.push(ServiceEntry::new(key.clone(), status));
        state.index.insert(key.clone(), position);
        debug!(service = %key, status = %status, "service registered");
    }

    /// Current status of a registered key.
    pub async fn get(&self, key: &str) -> ServiceResult<ServiceStatus> {
        let state = self.state.read().await;
        state
            .index
            .get(key)
            .map(|&position| state.entries[position].status)
            .ok_or_else(|| ServiceError::UnknownServiceKey(key.to_string()))
    }

    /// Overwrite the status of a registered key.
    pub async fn set(&self, key: &str, status: ServiceStatus) -> ServiceResult<()> {
        let mut state = self.state.write().await;
        let position = *state
            .index
            .get(key)
            .ok_or_else(|| ServiceError::UnknownServiceKey(key.to_string()))?;

        let previous = std::mem::replace(&mut state.entries[position].status, status);
        trace!(service = key, from = %previous, to = %status, "service status updated");
        Ok(())
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.state.read().await.index.contains_key(key)
    }

    /// Every entry in registration order.
    pub async fn snapshot_all(&self) -> Vec<ServiceEntry> {
        self.state.read().await.entries.clone()
    }

    /// Number of entries whose status is not idle.
    pub async fn active_count(&self) -> usize {
        self.state
            .read()
            .await
            .entries
            .iter()
            .filter(|entry| entry.status.is_active())
            .count()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}
