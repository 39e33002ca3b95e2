use serde::{Deserialize, Serialize};

/// Which reactions a chat allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatReactions {
    All,
    Some { reactions: Vec<Reaction> },
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Emoji { emoticon: String },
    CustomEmoji { document_id: i64 },
    Empty,
}
