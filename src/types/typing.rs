use crate::types::peer::ChatId;
use serde::{Deserialize, Serialize};

/// What kind of activity a typing status represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypingActionKind {
    Typing,
    RecordingVideo,
    UploadingVideo,
    RecordingVoice,
    UploadingVoice,
    UploadingPhoto,
    UploadingDocument,
    ChoosingLocation,
    ChoosingContact,
    PlayingGame,
    RecordingRound,
    UploadingRound,
    ChoosingSticker,
    WatchingAnimations,
}

/// A live typing indicator. `user_id` is absent for private chats where the
/// actor is the chat itself; `timestamp` is skew-adjusted local milliseconds
/// so indicators age out consistently across one rendering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingStatus {
    pub action: TypingActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ChatId>,
    pub timestamp: i64,
}
