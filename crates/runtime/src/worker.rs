//! Store worker that owns the authoritative [`AppState`].
//!
//! Receives commands from [`crate::StoreHandle`], runs actions through the
//! reducer, and publishes the resulting events to the EventBus. Because the
//! worker is the only task holding the state, no action ever observes a
//! half-applied peer.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::events::EventBus;
use crate::store::{AppState, StoreAction, reduce};

/// Commands that can be sent to the store worker
pub(crate) enum Command {
    /// Apply an action through the reducer.
    Dispatch {
        action: StoreAction,
        reply: oneshot::Sender<()>,
    },
    /// Query the current application state (read-only snapshot).
    QueryState { reply: oneshot::Sender<AppState> },
}

/// Background task that processes store commands.
pub(crate) struct StoreWorker {
    state: AppState,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl StoreWorker {
    pub(crate) fn new(
        state: AppState,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        tracing::info!(
            pieces = state.closet.pieces.len(),
            fits = state.closet.fits.len(),
            "StoreWorker initialized"
        );

        Self {
            state,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Exits when every command sender is dropped.
    pub(crate) async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!("store worker shutting down");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Dispatch { action, reply } => {
                debug!(action = action.kind(), "applying store action");
                let event = reduce(&mut self.state, action);
                self.event_bus.publish(event);
                if reply.send(()).is_err() {
                    debug!("Dispatch reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }
}
