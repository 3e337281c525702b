//! Cloneable façade for issuing commands to the store.
//!
//! [`StoreHandle`] hides channel plumbing and offers async helpers for
//! dispatching actions, reading snapshots, and streaming events from
//! specific topics.

use tokio::sync::{broadcast, mpsc, oneshot};

use closet_core::Closet;

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::store::{AppState, StoreAction};
use crate::worker::Command;

/// Client-facing handle to interact with the store
#[derive(Clone)]
pub struct StoreHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl StoreHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Apply an action through the store's reducer.
    ///
    /// Resolves once the action has been applied and its event published.
    pub async fn dispatch(&self, action: StoreAction) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Dispatch {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the full application state (read-only snapshot)
    pub async fn query_state(&self) -> Result<AppState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Snapshot of the viewer's own closet.
    pub async fn query_closet(&self) -> Result<Closet> {
        Ok(self.query_state().await?.closet)
    }

    /// Snapshot of the closet currently on screen, respecting an active
    /// public-closet view.
    pub async fn query_active_closet(&self) -> Result<Closet> {
        let state = self.query_state().await?;
        Ok(state.active_closet().clone())
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Closet` - Closet loads, piece updates, public view swaps
    /// - `Topic::Fit` - Fit and collection saves and archives
    /// - `Topic::Session` - Backend request failures
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
