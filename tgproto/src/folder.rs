use crate::peer::Peer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogFilter {
    Filter(Box<DialogFilterData>),
    /// The built-in "all chats" tab; carries nothing.
    Default,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogFilterData {
    pub id: i32,
    pub title: String,
    pub emoticon: Option<String>,
    pub contacts: bool,
    pub non_contacts: bool,
    pub groups: bool,
    pub broadcasts: bool,
    pub bots: bool,
    pub exclude_muted: bool,
    pub exclude_read: bool,
    pub exclude_archived: bool,
    #[serde(default)]
    pub pinned_peers: Vec<Peer>,
    #[serde(default)]
    pub include_peers: Vec<Peer>,
    #[serde(default)]
    pub exclude_peers: Vec<Peer>,
}
