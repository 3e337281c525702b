//! The channel abstraction the services send through.

use async_trait::async_trait;
use thiserror::Error;

use super::types::{Envelope, Request};

/// Failures below the protocol level.
///
/// A rejected request is NOT a channel error; it comes back as a normal
/// [`Envelope`] with a non-OK code. These variants cover the cases where no
/// envelope arrived at all.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("session channel closed")]
    Closed,

    #[error("network failure: {0}")]
    Network(String),

    #[error("payload encoding failed")]
    Encode(#[from] serde_json::Error),
}

/// Request/response messaging with the backend.
///
/// Implementations own transport and auth. The runtime only requires that
/// every sent request eventually yields one envelope or one channel error.
#[async_trait]
pub trait SessionChannel: Send + Sync {
    async fn send(&self, request: Request) -> Result<Envelope, ChannelError>;
}
