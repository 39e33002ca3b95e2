// End-to-end checks of the dialog -> view-model path, including the
// serialized shape consumers actually see.

use chrono::{TimeZone, Utc};
use tgproto::{
    ChannelData, Chat as WireChat, ChatReactions, Dialog, DraftMessage, Entity, Peer,
    PeerNotifySettings, ProfilePhoto, User as WireUser, UserData,
};
use tgview::builders::{chats, reactions};
use tgview::types::{ChatId, ChatKind};
use tgview::ServerTime;

fn fixed_time(offset_secs: i64) -> ServerTime {
    ServerTime::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap(), offset_secs)
}

fn channel_dialog() -> (Dialog, Entity) {
    let dialog = Dialog {
        peer: Peer::Channel { channel_id: 4321 },
        folder_id: Some(1),
        unread_mark: true,
        unread_count: 7,
        unread_mentions_count: 2,
        unread_reactions_count: 1,
        notify_settings: PeerNotifySettings {
            silent: Some(false),
            mute_until: Some(1_700_000_500),
        },
        read_inbox_max_id: 1500,
        read_outbox_max_id: 1499,
        pinned: false,
        draft: Some(DraftMessage::Message {
            date: 1_699_999_000,
            message: "wip".into(),
        }),
    };
    let entity = Entity::Chat(WireChat::Channel(Box::new(ChannelData {
        id: 4321,
        access_hash: Some(8_525_655_153_334_726_350),
        title: "Release Notes".into(),
        username: Some("releases".into()),
        photo: Some(ProfilePhoto::Photo {
            photo_id: 555_777,
            has_video: false,
        }),
        date: 1_600_000_000,
        megagroup: false,
        verified: true,
        signatures: true,
        participants_count: Some(1_024),
        ..Default::default()
    })));
    (dialog, entity)
}

#[test]
fn test_channel_dialog_builds_complete_record() {
    let (dialog, entity) = channel_dialog();
    let chat = chats::chat_from_dialog(&dialog, &entity, fixed_time(0));

    assert_eq!(chat.id, ChatId::group(4321));
    assert_eq!(chat.kind, ChatKind::Channel);
    assert_eq!(chat.title.as_deref(), Some("Release Notes"));
    assert_eq!(chat.folder_id, Some(1));
    assert_eq!(chat.unread_count, Some(7));
    assert_eq!(chat.last_read_inbox_message_id, Some(1500));
    assert_eq!(chat.last_read_outbox_message_id, Some(1499));
    assert!(chat.has_unread_mark);
    assert_eq!(chat.draft_date, Some(1_699_999_000));
    assert_eq!(chat.is_muted, Some(true));
    assert_eq!(chat.access_hash.as_deref(), Some("8525655153334726350"));
    assert_eq!(chat.avatar_hash.as_deref(), Some("555777"));
    assert_eq!(chat.username.as_deref(), Some("releases"));
    assert_eq!(chat.is_verified, Some(true));
    assert!(chat.is_signatures_shown);
    assert_eq!(chat.members_count, Some(1024));
}

#[test]
fn test_mute_flips_once_server_clock_passes_until() {
    let (dialog, entity) = channel_dialog();
    let muted = chats::chat_from_dialog(&dialog, &entity, fixed_time(400));
    assert_eq!(muted.is_muted, Some(true));
    let unmuted = chats::chat_from_dialog(&dialog, &entity, fixed_time(500));
    assert_eq!(unmuted.is_muted, Some(false));
}

#[test]
fn test_absent_fields_are_omitted_from_serialized_form() {
    let entity = Entity::User(WireUser::User(Box::new(UserData {
        id: 17,
        first_name: Some("Ada".into()),
        ..Default::default()
    })));
    let chat = chats::chat_from_preview(&entity, false).unwrap();
    let json = serde_json::to_value(&chat).unwrap();
    let object = json.as_object().unwrap();

    // No access hash on the wire variant: the key must not exist at all.
    assert!(!object.contains_key("access_hash"));
    assert!(!object.contains_key("unread_count"));
    assert!(!object.contains_key("is_muted"));
    assert_eq!(object["id"], "17");
    assert_eq!(object["kind"], "private");
    assert_eq!(object["title"], "Ada");
}

#[test]
fn test_chat_record_round_trips_through_json() {
    let (dialog, entity) = channel_dialog();
    let chat = chats::chat_from_dialog(&dialog, &entity, fixed_time(0));
    let json = serde_json::to_string(&chat).unwrap();
    let back: tgview::types::Chat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chat);
}

#[test]
fn test_all_reactions_expansion_is_stable() {
    let first = reactions::chat_reactions(Some(&ChatReactions::All)).unwrap();
    for _ in 0..3 {
        assert_eq!(
            reactions::chat_reactions(Some(&ChatReactions::All)).unwrap(),
            first
        );
    }
    assert_eq!(first.len(), 40);
}
