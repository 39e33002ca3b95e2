use crate::peer::Peer;
use crate::rights::{ChatAdminRights, ChatBannedRights};
use serde::{Deserialize, Serialize};

/// Membership records across both chat families. Small-group variants carry
/// plain user ids; channel variants may reference arbitrary peers (a banned
/// participant can be a channel acting as a user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    Group {
        user_id: i64,
        inviter_id: i64,
        date: i32,
    },
    GroupCreator {
        user_id: i64,
    },
    GroupAdmin {
        user_id: i64,
        inviter_id: i64,
        date: i32,
    },
    Channel {
        user_id: i64,
        date: i32,
    },
    ChannelSelf {
        user_id: i64,
        inviter_id: i64,
        date: i32,
    },
    ChannelCreator {
        user_id: i64,
        admin_rights: ChatAdminRights,
        rank: Option<String>,
    },
    ChannelAdmin {
        user_id: i64,
        promoted_by: i64,
        inviter_id: Option<i64>,
        date: i32,
        admin_rights: ChatAdminRights,
        rank: Option<String>,
    },
    ChannelBanned {
        peer: Peer,
        kicked_by: i64,
        date: i32,
        banned_rights: ChatBannedRights,
        left: bool,
    },
    ChannelLeft {
        peer: Peer,
    },
}

/// Participant list of a small group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupParticipants {
    Participants {
        chat_id: i64,
        participants: Vec<Participant>,
    },
    /// The server refused to disclose the member list.
    Forbidden {
        chat_id: i64,
    },
}

/// Paged participant response of a channel or supergroup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelParticipants {
    Participants {
        count: i32,
        participants: Vec<Participant>,
    },
    NotModified,
}
