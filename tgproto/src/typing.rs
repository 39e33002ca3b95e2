use crate::peer::Peer;
use serde::{Deserialize, Serialize};

/// What a peer is currently doing in a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendMessageAction {
    Typing,
    Cancel,
    RecordVideo,
    UploadVideo { progress: i32 },
    RecordAudio,
    UploadAudio { progress: i32 },
    UploadPhoto { progress: i32 },
    UploadDocument { progress: i32 },
    GeoLocation,
    ChooseContact,
    GamePlay,
    RecordRound,
    UploadRound { progress: i32 },
    ChooseSticker,
    SpeakingInGroupCall,
    EmojiInteraction { emoticon: String, msg_id: i32 },
    EmojiInteractionSeen { emoticon: String },
}

/// Typing updates for the three chat scopes. Private chats identify the
/// actor implicitly; group and channel updates carry the originating peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypingUpdate {
    User {
        user_id: i64,
        action: SendMessageAction,
    },
    Chat {
        chat_id: i64,
        from_id: Peer,
        action: SendMessageAction,
    },
    Channel {
        channel_id: i64,
        from_id: Peer,
        action: SendMessageAction,
    },
}

impl TypingUpdate {
    pub fn action(&self) -> &SendMessageAction {
        match self {
            TypingUpdate::User { action, .. } => action,
            TypingUpdate::Chat { action, .. } => action,
            TypingUpdate::Channel { action, .. } => action,
        }
    }
}
