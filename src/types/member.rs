use crate::types::peer::ChatId;
use serde::{Deserialize, Serialize};
use tgproto::{ChatAdminRights, ChatBannedRights};

/// One membership row. At most one of `is_owner`/`is_admin` is set; owners
/// carry admin semantics upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
    pub user_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter_id: Option<ChatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kicked_by_user_id: Option<ChatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted_by_user_id: Option<ChatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_rights: Option<ChatAdminRights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_rights: Option<ChatBannedRights>,
    pub is_admin: bool,
    pub is_owner: bool,
}
