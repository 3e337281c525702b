//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the session channel, and
//! response decoding so clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

use closet_core::{FitId, PieceId};

use crate::session::{ChannelError, MessageKind};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("store worker command channel closed")]
    CommandChannelClosed,

    #[error("store worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("store worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("{kind} rejected by the backend (code {code}): {description}")]
    Rejected {
        kind: MessageKind,
        code: u16,
        description: String,
    },

    #[error("failed to decode {kind} response")]
    Decode {
        kind: MessageKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} response is malformed: {reason}")]
    MalformedResponse {
        kind: MessageKind,
        reason: &'static str,
    },

    #[error("piece {0} is not in the active closet")]
    PieceNotFound(PieceId),

    #[error("fit {0} is not in the active closet")]
    FitNotFound(FitId),
}
