use serde::{Deserialize, Serialize};

/// An exported chat invite link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatInviteExported {
    pub link: String,
    pub revoked: bool,
    pub permanent: bool,
    pub request_needed: bool,
    pub date: i32,
    pub start_date: Option<i32>,
    pub expire_date: Option<i32>,
    pub usage: Option<i32>,
    pub usage_limit: Option<i32>,
    pub requested: Option<i32>,
    pub title: Option<String>,
    pub admin_id: i64,
}

/// A user who joined (or asked to join) through an invite link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatInviteImporter {
    pub user_id: i64,
    pub date: i32,
    pub about: Option<String>,
    pub requested: bool,
}
