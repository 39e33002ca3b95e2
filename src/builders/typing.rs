//! Typing-status normalization.

use crate::builders::peers::peer_id;
use crate::server_time::ServerTime;
use crate::types::{TypingActionKind, TypingStatus};
use log::debug;
use tgproto::{SendMessageAction, TypingUpdate};

/// Map a typing update to its view-model status. Cancellations, group-call
/// speech and unseen emoji pings carry no renderable state and are
/// suppressed entirely rather than mapped to a placeholder.
pub fn typing_status(update: &TypingUpdate, time: ServerTime) -> Option<TypingStatus> {
    let (action, emoji) = match update.action() {
        SendMessageAction::Cancel
        | SendMessageAction::SpeakingInGroupCall
        | SendMessageAction::EmojiInteraction { .. } => {
            debug!(target: "Typing", "suppressed action: {:?}", update.action());
            return None;
        }
        SendMessageAction::Typing => (TypingActionKind::Typing, None),
        SendMessageAction::RecordVideo => (TypingActionKind::RecordingVideo, None),
        SendMessageAction::UploadVideo { .. } => (TypingActionKind::UploadingVideo, None),
        SendMessageAction::RecordAudio => (TypingActionKind::RecordingVoice, None),
        SendMessageAction::UploadAudio { .. } => (TypingActionKind::UploadingVoice, None),
        SendMessageAction::UploadPhoto { .. } => (TypingActionKind::UploadingPhoto, None),
        SendMessageAction::UploadDocument { .. } => (TypingActionKind::UploadingDocument, None),
        SendMessageAction::GeoLocation => (TypingActionKind::ChoosingLocation, None),
        SendMessageAction::ChooseContact => (TypingActionKind::ChoosingContact, None),
        SendMessageAction::GamePlay => (TypingActionKind::PlayingGame, None),
        SendMessageAction::RecordRound => (TypingActionKind::RecordingRound, None),
        SendMessageAction::UploadRound { .. } => (TypingActionKind::UploadingRound, None),
        SendMessageAction::ChooseSticker => (TypingActionKind::ChoosingSticker, None),
        SendMessageAction::EmojiInteractionSeen { emoticon } => (
            TypingActionKind::WatchingAnimations,
            Some(emoticon.clone()),
        ),
    };

    let user_id = match update {
        TypingUpdate::User { .. } => None,
        TypingUpdate::Chat { from_id, .. } | TypingUpdate::Channel { from_id, .. } => {
            Some(peer_id(from_id))
        }
    };

    Some(TypingStatus {
        action,
        emoji,
        user_id,
        timestamp: time.skewed_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatId;
    use chrono::{TimeZone, Utc};
    use tgproto::Peer;

    fn fixed_time(offset_secs: i64) -> ServerTime {
        ServerTime::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap(), offset_secs)
    }

    #[test]
    fn test_cancel_and_unseen_interaction_are_suppressed() {
        let cancel = TypingUpdate::User {
            user_id: 1,
            action: SendMessageAction::Cancel,
        };
        assert!(typing_status(&cancel, fixed_time(0)).is_none());

        let ping = TypingUpdate::Chat {
            chat_id: 2,
            from_id: Peer::User { user_id: 1 },
            action: SendMessageAction::EmojiInteraction {
                emoticon: "\u{1F525}".into(),
                msg_id: 10,
            },
        };
        assert!(typing_status(&ping, fixed_time(0)).is_none());

        let speaking = TypingUpdate::Channel {
            channel_id: 3,
            from_id: Peer::User { user_id: 1 },
            action: SendMessageAction::SpeakingInGroupCall,
        };
        assert!(typing_status(&speaking, fixed_time(0)).is_none());
    }

    #[test]
    fn test_seen_interaction_carries_emoji() {
        let seen = TypingUpdate::Chat {
            chat_id: 2,
            from_id: Peer::User { user_id: 7 },
            action: SendMessageAction::EmojiInteractionSeen {
                emoticon: "\u{1F525}".into(),
            },
        };
        let status = typing_status(&seen, fixed_time(0)).unwrap();
        assert_eq!(status.action, TypingActionKind::WatchingAnimations);
        assert_eq!(status.emoji.as_deref(), Some("\u{1F525}"));
        assert_eq!(status.user_id, Some(ChatId::user(7)));
    }

    #[test]
    fn test_private_typing_has_no_user_id() {
        let update = TypingUpdate::User {
            user_id: 1,
            action: SendMessageAction::Typing,
        };
        let status = typing_status(&update, fixed_time(0)).unwrap();
        assert_eq!(status.action, TypingActionKind::Typing);
        assert_eq!(status.user_id, None);
        assert_eq!(status.emoji, None);
    }

    #[test]
    fn test_timestamp_applies_skew() {
        let update = TypingUpdate::User {
            user_id: 1,
            action: SendMessageAction::Typing,
        };
        let status = typing_status(&update, fixed_time(5)).unwrap();
        assert_eq!(status.timestamp, 1_700_000_005_000_i64);
    }
}
