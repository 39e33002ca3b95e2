use serde::{Deserialize, Serialize};

/// A bare peer reference as it appears inside dialogs, updates and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Peer {
    User { user_id: i64 },
    Chat { chat_id: i64 },
    Channel { channel_id: i64 },
}

/// Channel reference used by migration pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputChannel {
    Channel { channel_id: i64, access_hash: i64 },
    Empty,
}

/// Profile photo of a user or chat. The empty variant means the peer has no
/// photo set; only the populated variant carries a photo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfilePhoto {
    Photo { photo_id: i64, has_video: bool },
    Empty,
}

/// A peer the current user may send messages as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendAsPeer {
    pub peer: Peer,
    pub premium_required: bool,
}
