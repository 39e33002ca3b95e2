use serde::{Deserialize, Serialize};

/// Bot metadata attached to a full-chat payload. `user_id` is server-optional
/// on newer layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotInfo {
    pub user_id: Option<i64>,
    pub description: Option<String>,
    pub commands: Option<Vec<BotCommand>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}
