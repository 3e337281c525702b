//! Mock session channel for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::traits::{ChannelError, SessionChannel};
use super::types::{Envelope, Request};

/// Mock session channel for testing without a backend.
///
/// Replies are scripted in FIFO order; every request sent through the
/// channel is recorded so tests can assert on the outbound traffic.
#[derive(Clone)]
pub struct MockSessionChannel {
    script: Arc<Mutex<VecDeque<Result<Envelope, ChannelError>>>>,
    sent: Arc<Mutex<Vec<Request>>>,
}

impl MockSessionChannel {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Scripts a successful reply carrying `payload`.
    pub fn push_ok(&self, payload: Value) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(Envelope::ok(payload)));
    }

    /// Scripts a rejection envelope.
    pub fn push_failure(&self, code: u16, description: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(Envelope::failure(code, description)));
    }

    /// Scripts a channel-level error.
    pub fn push_channel_error(&self, error: ChannelError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// All requests sent so far, in order.
    pub fn sent_requests(&self) -> Vec<Request> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockSessionChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionChannel for MockSessionChannel {
    async fn send(&self, request: Request) -> Result<Envelope, ChannelError> {
        self.sent.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ChannelError::Closed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MessageKind;

    #[tokio::test]
    async fn replies_follow_the_script_and_requests_are_recorded() {
        let channel = MockSessionChannel::new();
        channel.push_ok(serde_json::json!({ "pieces": [] }));
        channel.push_failure(404, "unknown fit");

        let first = channel
            .send(Request::new(MessageKind::FetchCloset))
            .await
            .unwrap();
        assert!(first.is_ok());

        let second = channel
            .send(Request::new(MessageKind::ArchiveFit))
            .await
            .unwrap();
        assert_eq!(second.code, 404);

        // Exhausted script behaves like a dead channel.
        let third = channel.send(Request::new(MessageKind::FetchCloset)).await;
        assert!(matches!(third, Err(ChannelError::Closed)));

        let sent = channel.sent_requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].kind, MessageKind::FetchCloset);
        assert_eq!(sent[1].kind, MessageKind::ArchiveFit);
    }
}
