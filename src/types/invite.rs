use crate::types::peer::ChatId;
use serde::{Deserialize, Serialize};

/// An exported invite link with its usage and validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedInvite {
    pub link: String,
    pub is_revoked: bool,
    pub is_permanent: bool,
    pub is_request_needed: bool,
    pub date: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub admin_id: ChatId,
}

/// A user who came in (or is waiting) through an invite link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteImporter {
    pub user_id: ChatId,
    pub date: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    pub is_requested: bool,
}
