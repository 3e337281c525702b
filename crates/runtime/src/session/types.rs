//! Wire-level request and reply shapes.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Every request kind the backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    FetchCloset,
    FetchPublicCloset,
    SaveFit,
    ArchiveFit,
    SaveFitColl,
    ArchiveFitColl,
    UpdatePiece,
    ArchivePiece,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::FetchCloset => "fetch_closet",
            MessageKind::FetchPublicCloset => "fetch_public_closet",
            MessageKind::SaveFit => "save_fit",
            MessageKind::ArchiveFit => "archive_fit",
            MessageKind::SaveFitColl => "save_fit_coll",
            MessageKind::ArchiveFitColl => "archive_fit_coll",
            MessageKind::UpdatePiece => "update_piece",
            MessageKind::ArchivePiece => "archive_piece",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request: a kind plus its JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub kind: MessageKind,
    pub payload: Value,
}

impl Request {
    /// A request with no payload.
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            payload: Value::Null,
        }
    }

    /// A request carrying a serialized payload.
    pub fn with_payload<T: Serialize>(
        kind: MessageKind,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            kind,
            payload: serde_json::to_value(payload)?,
        })
    }
}

/// Uniform backend reply.
///
/// `code` follows HTTP conventions; anything other than [`Envelope::OK`]
/// means the request was rejected and `description` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: u16,
    pub description: String,
    pub payload: Value,
}

impl Envelope {
    pub const OK: u16 = 200;

    /// A successful reply carrying `payload`.
    pub fn ok(payload: Value) -> Self {
        Self {
            code: Self::OK,
            description: String::new(),
            payload,
        }
    }

    /// A rejection with no payload.
    pub fn failure(code: u16, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            payload: Value::Null,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == Self::OK
    }

    /// Decodes the payload into a typed response.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_snake_case() {
        let json = serde_json::to_string(&MessageKind::SaveFitColl).unwrap();
        assert_eq!(json, "\"save_fit_coll\"");
        let back: MessageKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MessageKind::SaveFitColl);
    }

    #[test]
    fn envelope_decode_reads_the_payload() {
        let envelope = Envelope::ok(serde_json::json!({ "fit_id": 7 }));
        #[derive(serde::Deserialize)]
        struct Reply {
            fit_id: u64,
        }
        let reply: Reply = envelope.decode().unwrap();
        assert_eq!(reply.fit_id, 7);
        assert!(envelope.is_ok());
        assert!(!Envelope::failure(500, "boom").is_ok());
    }
}
