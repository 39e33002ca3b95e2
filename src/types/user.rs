use crate::types::chat::FakeType;
use crate::types::peer::ChatId;
use serde::{Deserialize, Serialize};

/// Flat user record mirroring the chat record's extraction rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_hash: Option<String>,
    pub has_video_avatar: bool,
    pub is_min: bool,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fake_type: Option<FakeType>,
    pub status: UserStatus,
}

/// Presence bucket as exposed to the UI. Coarse buckets come from privacy
/// settings hiding the exact timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Empty,
    Online { expires: i32 },
    Offline { was_online: i32 },
    Recently,
    LastWeek,
    LastMonth,
}
