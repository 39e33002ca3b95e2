use crate::peer::Peer;
use serde::{Deserialize, Serialize};

/// One conversation row as delivered by the dialog list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialog {
    pub peer: Peer,
    pub folder_id: Option<i32>,
    pub unread_mark: bool,
    pub unread_count: i32,
    pub unread_mentions_count: i32,
    pub unread_reactions_count: i32,
    pub notify_settings: PeerNotifySettings,
    pub read_inbox_max_id: i32,
    pub read_outbox_max_id: i32,
    pub pinned: bool,
    pub draft: Option<DraftMessage>,
}

/// Notification settings attached to a dialog. All fields are server-optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerNotifySettings {
    pub silent: Option<bool>,
    /// Server-clock unix timestamp until which the peer is muted.
    pub mute_until: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftMessage {
    Message { date: i32, message: String },
    Empty,
}
