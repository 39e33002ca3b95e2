use crate::peer::{InputChannel, ProfilePhoto};
use crate::rights::{ChatAdminRights, ChatBannedRights};
use crate::user::User;
use serde::{Deserialize, Serialize};

/// The chat-side protocol family: small groups and broadcast containers,
/// including their forbidden and placeholder shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chat {
    Group(Box<GroupData>),
    GroupForbidden {
        id: i64,
        title: String,
    },
    /// Placeholder the server sends when only the id survived.
    GroupEmpty {
        id: i64,
    },
    Channel(Box<ChannelData>),
    ChannelForbidden {
        id: i64,
        access_hash: i64,
        title: String,
        megagroup: bool,
        until_date: Option<i32>,
    },
}

impl Chat {
    pub fn id(&self) -> i64 {
        match self {
            Chat::Group(data) => data.id,
            Chat::GroupForbidden { id, .. } => *id,
            Chat::GroupEmpty { id } => *id,
            Chat::Channel(data) => data.id,
            Chat::ChannelForbidden { id, .. } => *id,
        }
    }
}

/// A small (basic) group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    pub id: i64,
    pub title: String,
    pub photo: Option<ProfilePhoto>,
    pub participants_count: i32,
    pub date: i32,
    pub left: bool,
    pub creator: bool,
    pub call_active: bool,
    pub call_not_empty: bool,
    pub noforwards: bool,
    pub migrated_to: Option<InputChannel>,
    pub admin_rights: Option<ChatAdminRights>,
    pub default_banned_rights: Option<ChatBannedRights>,
}

/// A broadcast container: a channel, or a supergroup when `megagroup` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelData {
    pub id: i64,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub photo: Option<ProfilePhoto>,
    pub date: i32,
    pub megagroup: bool,
    pub verified: bool,
    pub min: bool,
    pub scam: bool,
    pub fake: bool,
    pub signatures: bool,
    pub has_link: bool,
    pub join_to_send: bool,
    pub join_request: bool,
    pub left: bool,
    pub creator: bool,
    pub call_active: bool,
    pub call_not_empty: bool,
    pub noforwards: bool,
    pub restricted: bool,
    #[serde(default)]
    pub restriction_reason: Vec<RestrictionReason>,
    pub participants_count: Option<i32>,
    pub admin_rights: Option<ChatAdminRights>,
    pub banned_rights: Option<ChatBannedRights>,
    pub default_banned_rights: Option<ChatBannedRights>,
}

/// Why (and where) a peer is content-restricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionReason {
    pub platform: String,
    pub reason: String,
    pub text: String,
}

/// Either side of the peer-entity union the chat builders consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    User(User),
    Chat(Chat),
}

impl Entity {
    pub fn id(&self) -> i64 {
        match self {
            Entity::User(user) => user.id(),
            Entity::Chat(chat) => chat.id(),
        }
    }
}

impl From<User> for Entity {
    fn from(user: User) -> Self {
        Entity::User(user)
    }
}

impl From<Chat> for Entity {
    fn from(chat: Chat) -> Self {
        Entity::Chat(chat)
    }
}
