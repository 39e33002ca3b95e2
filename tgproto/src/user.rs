use crate::chat::RestrictionReason;
use crate::peer::ProfilePhoto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum User {
    User(Box<UserData>),
    /// Placeholder the server sends when only the id survived.
    Empty { id: i64 },
}

impl User {
    pub fn id(&self) -> i64 {
        match self {
            User::User(data) => data.id,
            User::Empty { id } => *id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: i64,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub photo: Option<ProfilePhoto>,
    pub status: Option<UserStatus>,
    pub verified: bool,
    pub min: bool,
    pub scam: bool,
    pub fake: bool,
    pub restricted: bool,
    #[serde(default)]
    pub restriction_reason: Vec<RestrictionReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Empty,
    Online { expires: i32 },
    Offline { was_online: i32 },
    Recently,
    LastWeek,
    LastMonth,
}
