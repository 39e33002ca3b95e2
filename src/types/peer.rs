use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which side of the protocol an id came from. Users keep their bare numeric
/// form; groups and channels share the negative namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerOrigin {
    User,
    Group,
}

/// Opaque, stable identity of a chat or user in the view-model layer.
///
/// Renders as a decimal string; group/channel ids carry a leading `-` so the
/// two namespaces never collide. The string form is what gets stored and
/// compared everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ChatId {
    origin: PeerOrigin,
    raw: i64,
}

#[derive(Debug, Error)]
pub enum ChatIdError {
    #[error("empty chat id")]
    Empty,
    #[error("invalid chat id component: {0}")]
    Parse(#[from] std::num::ParseIntError),
}

impl ChatId {
    pub fn user(raw: i64) -> Self {
        Self {
            origin: PeerOrigin::User,
            raw,
        }
    }

    pub fn group(raw: i64) -> Self {
        Self {
            origin: PeerOrigin::Group,
            raw,
        }
    }

    pub fn origin(&self) -> PeerOrigin {
        self.origin
    }

    /// The numeric component without the origin encoding.
    pub fn raw(&self) -> i64 {
        self.raw
    }

    pub fn is_user(&self) -> bool {
        self.origin == PeerOrigin::User
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            PeerOrigin::User => write!(f, "{}", self.raw),
            PeerOrigin::Group => write!(f, "-{}", self.raw),
        }
    }
}

impl FromStr for ChatId {
    type Err = ChatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ChatIdError::Empty);
        }
        match s.strip_prefix('-') {
            Some(rest) => Ok(ChatId::group(rest.parse()?)),
            None => Ok(ChatId::user(s.parse()?)),
        }
    }
}

impl From<ChatId> for String {
    fn from(id: ChatId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ChatId {
    type Error = ChatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
