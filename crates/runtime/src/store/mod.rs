//! The state container.
//!
//! A [`Store`] owns a background worker task holding the authoritative
//! [`AppState`]. All mutation arrives as a [`StoreAction`] on the worker's
//! command channel and runs through the reducer on that single task; readers
//! get cloned snapshots through [`crate::StoreHandle`]. Each applied action
//! publishes one event on the bus.

mod actions;
mod reducer;
mod state;

pub use actions::StoreAction;
pub use state::AppState;

pub(crate) use reducer::reduce;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Result, RuntimeError, StoreHandle};
use crate::events::EventBus;
use crate::worker::StoreWorker;

/// Store configuration shared across the worker and the bus.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            event_buffer_size: 100,
        }
    }
}

/// Owns the store worker and hands out cloneable handles.
pub struct Store {
    handle: StoreHandle,
    worker_handle: JoinHandle<()>,
}

impl Store {
    /// Create a new store builder
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Get a cloneable handle to this store
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> StoreHandle {
        self.handle.clone()
    }

    /// Shutdown the store gracefully
    ///
    /// Drops the owned handle and waits for the worker to drain its
    /// command queue. Other live handles keep the worker running.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Store`] with flexible configuration.
pub struct StoreBuilder {
    config: StoreConfig,
    initial: AppState,
}

impl StoreBuilder {
    fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            initial: AppState::default(),
        }
    }

    /// Override store configuration
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial application state
    pub fn initial_state(mut self, state: AppState) -> Self {
        self.initial = state;
        self
    }

    /// Spawns the worker task and returns the store.
    ///
    /// Must run inside a tokio runtime.
    pub fn build(self) -> Store {
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let worker = StoreWorker::new(self.initial, command_rx, event_bus.clone());
        let worker_handle = tokio::spawn(worker.run());

        Store {
            handle: StoreHandle::new(command_tx, event_bus),
            worker_handle,
        }
    }
}
