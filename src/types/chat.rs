use crate::types::peer::ChatId;
use serde::{Deserialize, Serialize};
use tgproto::{ChatAdminRights, ChatBannedRights};

/// View-model category of a chat, derived once from the wire variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatKind {
    Private,
    BasicGroup,
    Supergroup,
    Channel,
}

/// Scam/fake labeling. Scam wins when both wire flags are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FakeType {
    Scam,
    Fake,
}

/// Restriction metadata for the platform this client runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionReason {
    pub reason: String,
    pub text: String,
}

/// Where a basic group migrated to when it was upgraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigratedTo {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_hash: Option<String>,
}

/// The flat chat record handed to the store. Fields the source wire variant
/// does not carry stay `None`; consumers presence-test instead of comparing
/// against sentinel values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub kind: ChatKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_mentions_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_reactions_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_inbox_message_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_outbox_message_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_muted: Option<bool>,
    pub has_unread_mark: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_date: Option<i32>,
    pub is_min: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_hash: Option<String>,
    pub has_video_avatar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_call_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_call_not_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protected: Option<bool>,
    pub is_support: bool,
    pub is_signatures_shown: bool,
    pub has_private_link: bool,
    pub is_join_to_send: bool,
    pub is_join_request: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_creator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_rights: Option<ChatAdminRights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_banned_rights: Option<ChatBannedRights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_banned_rights: Option<ChatBannedRights>,
    pub is_forbidden: bool,
    pub is_restricted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction_reason: Option<RestrictionReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_joined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrated_to: Option<MigratedTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fake_type: Option<FakeType>,
}

impl Chat {
    /// A record with identity and category set and everything else absent.
    pub fn new(id: ChatId, kind: ChatKind) -> Self {
        Self {
            id,
            kind,
            title: None,
            folder_id: None,
            unread_count: None,
            unread_mentions_count: None,
            unread_reactions_count: None,
            last_read_inbox_message_id: None,
            last_read_outbox_message_id: None,
            is_muted: None,
            has_unread_mark: false,
            draft_date: None,
            is_min: false,
            access_hash: None,
            avatar_hash: None,
            has_video_avatar: false,
            username: None,
            is_verified: None,
            is_call_active: None,
            is_call_not_empty: None,
            join_date: None,
            members_count: None,
            is_protected: None,
            is_support: false,
            is_signatures_shown: false,
            has_private_link: false,
            is_join_to_send: false,
            is_join_request: false,
            is_creator: None,
            admin_rights: None,
            current_user_banned_rights: None,
            default_banned_rights: None,
            is_forbidden: false,
            is_restricted: false,
            restriction_reason: None,
            is_not_joined: None,
            migrated_to: None,
            fake_type: None,
        }
    }
}

/// Per-chat capability flags, all independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub is_auto_archived: bool,
    pub can_report_spam: bool,
    pub can_add_contact: bool,
    pub can_block_contact: bool,
}

/// An identity the current user can post as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendAsPeerId {
    pub id: ChatId,
    pub is_premium: bool,
}

/// A slash command exposed by a bot, flattened with its owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub bot_id: ChatId,
    pub command: String,
    pub description: String,
}
