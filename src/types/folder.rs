use crate::types::peer::ChatId;
use serde::{Deserialize, Serialize};

/// A chat folder (dialog filter). Pinned ids keep their order; the include
/// and exclude sets are order-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatFolder {
    pub id: i32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoticon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub contacts: bool,
    pub non_contacts: bool,
    pub groups: bool,
    pub channels: bool,
    pub bots: bool,
    pub exclude_muted: bool,
    pub exclude_read: bool,
    pub exclude_archived: bool,
    pub pinned_chat_ids: Vec<ChatId>,
    pub included_chat_ids: Vec<ChatId>,
    pub excluded_chat_ids: Vec<ChatId>,
}
