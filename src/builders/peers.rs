//! Peer-id derivation and field extraction over the wire entity union.
//!
//! Extractors return `Option`/`bool` absence markers; a field the concrete
//! wire variant does not define is a normal absence, never an error.

use crate::types::{ChatId, FakeType};
use tgproto as wire;
use tgproto::{Entity, Peer, ProfilePhoto};

/// Map a bare wire peer to its view-model id.
pub fn peer_id(peer: &Peer) -> ChatId {
    match peer {
        Peer::User { user_id } => ChatId::user(*user_id),
        Peer::Chat { chat_id } => ChatId::group(*chat_id),
        Peer::Channel { channel_id } => ChatId::group(*channel_id),
    }
}

/// Avatar identity in its string form; only the populated photo variant
/// carries one.
pub fn avatar_hash(photo: &ProfilePhoto) -> Option<String> {
    match photo {
        ProfilePhoto::Photo { photo_id, .. } => Some(photo_id.to_string()),
        ProfilePhoto::Empty => None,
    }
}

/// Field extractors over the peer-entity union. Presence of each field is
/// fixed by the wire variant, so every accessor is a total function.
pub trait EntityExt {
    fn as_user_data(&self) -> Option<&wire::UserData>;
    fn as_group(&self) -> Option<&wire::GroupData>;
    fn as_channel(&self) -> Option<&wire::ChannelData>;

    fn is_min(&self) -> bool;
    /// Access hashes are stringified on extraction so large values survive
    /// serialization boundaries without precision loss.
    fn access_hash(&self) -> Option<String>;
    fn photo(&self) -> Option<&ProfilePhoto>;
    fn avatar_hash(&self) -> Option<String>;
    fn has_video_avatar(&self) -> bool;
    fn username(&self) -> Option<&str>;
    fn verified(&self) -> Option<bool>;
    /// Scam wins over fake when both are set; absent when neither is.
    fn fake_type(&self) -> Option<FakeType>;
    fn signatures_shown(&self) -> bool;
    fn has_private_link(&self) -> bool;
    fn join_to_send(&self) -> bool;
    fn join_request(&self) -> bool;
    fn call_active(&self) -> Option<bool>;
    fn call_not_empty(&self) -> Option<bool>;
    fn join_date(&self) -> Option<i32>;
    fn members_count(&self) -> Option<i32>;
    fn protected(&self) -> Option<bool>;
    fn creator(&self) -> Option<bool>;
    fn left(&self) -> Option<bool>;
    fn title(&self) -> Option<&str>;
}

impl EntityExt for Entity {
    fn as_user_data(&self) -> Option<&wire::UserData> {
        match self {
            Entity::User(wire::User::User(data)) => Some(data),
            _ => None,
        }
    }

    fn as_group(&self) -> Option<&wire::GroupData> {
        match self {
            Entity::Chat(wire::Chat::Group(data)) => Some(data),
            _ => None,
        }
    }

    fn as_channel(&self) -> Option<&wire::ChannelData> {
        match self {
            Entity::Chat(wire::Chat::Channel(data)) => Some(data),
            _ => None,
        }
    }

    fn is_min(&self) -> bool {
        self.as_user_data().map(|u| u.min).unwrap_or(false)
            || self.as_channel().map(|c| c.min).unwrap_or(false)
    }

    fn access_hash(&self) -> Option<String> {
        let hash = match self {
            Entity::User(wire::User::User(user)) => user.access_hash,
            Entity::Chat(wire::Chat::Channel(channel)) => channel.access_hash,
            Entity::Chat(wire::Chat::ChannelForbidden { access_hash, .. }) => Some(*access_hash),
            _ => None,
        };
        hash.map(|h| h.to_string())
    }

    fn photo(&self) -> Option<&ProfilePhoto> {
        match self {
            Entity::User(wire::User::User(user)) => user.photo.as_ref(),
            Entity::Chat(wire::Chat::Group(group)) => group.photo.as_ref(),
            Entity::Chat(wire::Chat::Channel(channel)) => channel.photo.as_ref(),
            _ => None,
        }
    }

    fn avatar_hash(&self) -> Option<String> {
        self.photo().and_then(avatar_hash)
    }

    fn has_video_avatar(&self) -> bool {
        matches!(
            self.photo(),
            Some(ProfilePhoto::Photo {
                has_video: true,
                ..
            })
        )
    }

    fn username(&self) -> Option<&str> {
        match self {
            Entity::User(wire::User::User(user)) => user.username.as_deref(),
            Entity::Chat(wire::Chat::Channel(channel)) => channel.username.as_deref(),
            _ => None,
        }
    }

    fn verified(&self) -> Option<bool> {
        match self {
            Entity::User(wire::User::User(user)) => Some(user.verified),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(channel.verified),
            _ => None,
        }
    }

    fn fake_type(&self) -> Option<FakeType> {
        let (scam, fake) = match self {
            Entity::User(wire::User::User(user)) => (user.scam, user.fake),
            Entity::Chat(wire::Chat::Channel(channel)) => (channel.scam, channel.fake),
            _ => (false, false),
        };
        if scam {
            Some(FakeType::Scam)
        } else if fake {
            Some(FakeType::Fake)
        } else {
            None
        }
    }

    fn signatures_shown(&self) -> bool {
        self.as_channel().map(|c| c.signatures).unwrap_or(false)
    }

    fn has_private_link(&self) -> bool {
        self.as_channel().map(|c| c.has_link).unwrap_or(false)
    }

    fn join_to_send(&self) -> bool {
        self.as_channel().map(|c| c.join_to_send).unwrap_or(false)
    }

    fn join_request(&self) -> bool {
        self.as_channel().map(|c| c.join_request).unwrap_or(false)
    }

    fn call_active(&self) -> Option<bool> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(group.call_active),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(channel.call_active),
            _ => None,
        }
    }

    fn call_not_empty(&self) -> Option<bool> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(group.call_not_empty),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(channel.call_not_empty),
            _ => None,
        }
    }

    fn join_date(&self) -> Option<i32> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(group.date),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(channel.date),
            _ => None,
        }
    }

    fn members_count(&self) -> Option<i32> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(group.participants_count),
            Entity::Chat(wire::Chat::Channel(channel)) => channel.participants_count,
            _ => None,
        }
    }

    fn protected(&self) -> Option<bool> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(group.noforwards),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(channel.noforwards),
            _ => None,
        }
    }

    fn creator(&self) -> Option<bool> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(group.creator),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(channel.creator),
            _ => None,
        }
    }

    fn left(&self) -> Option<bool> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(group.left),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(channel.left),
            _ => None,
        }
    }

    fn title(&self) -> Option<&str> {
        match self {
            Entity::Chat(wire::Chat::Group(group)) => Some(&group.title),
            Entity::Chat(wire::Chat::GroupForbidden { title, .. }) => Some(title),
            Entity::Chat(wire::Chat::Channel(channel)) => Some(&channel.title),
            Entity::Chat(wire::Chat::ChannelForbidden { title, .. }) => Some(title),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgproto::{Chat, User, UserData};

    #[test]
    fn test_peer_id_origins() {
        assert_eq!(peer_id(&Peer::User { user_id: 42 }), ChatId::user(42));
        assert_eq!(peer_id(&Peer::Chat { chat_id: 42 }), ChatId::group(42));
        assert_eq!(
            peer_id(&Peer::Channel { channel_id: 42 }),
            ChatId::group(42)
        );
    }

    #[test]
    fn test_access_hash_is_stringified() {
        let entity = Entity::User(User::User(Box::new(UserData {
            id: 1,
            access_hash: Some(8_525_655_153_334_726_350),
            ..Default::default()
        })));
        assert_eq!(
            entity.access_hash().as_deref(),
            Some("8525655153334726350")
        );
    }

    #[test]
    fn test_access_hash_absent_when_variant_lacks_it() {
        let entity = Entity::Chat(Chat::GroupEmpty { id: 5 });
        assert_eq!(entity.access_hash(), None);
        let entity = Entity::Chat(Chat::Group(Box::new(Default::default())));
        assert_eq!(entity.access_hash(), None);
    }

    #[test]
    fn test_avatar_hash_requires_photo_id() {
        assert_eq!(
            avatar_hash(&ProfilePhoto::Photo {
                photo_id: 991,
                has_video: false
            })
            .as_deref(),
            Some("991")
        );
        assert_eq!(avatar_hash(&ProfilePhoto::Empty), None);
    }

    #[test]
    fn test_scam_beats_fake() {
        let entity = Entity::User(User::User(Box::new(UserData {
            id: 1,
            scam: true,
            fake: true,
            ..Default::default()
        })));
        assert_eq!(entity.fake_type(), Some(FakeType::Scam));

        let entity = Entity::User(User::User(Box::new(UserData {
            id: 1,
            fake: true,
            ..Default::default()
        })));
        assert_eq!(entity.fake_type(), Some(FakeType::Fake));

        let entity = Entity::User(User::User(Box::new(UserData {
            id: 1,
            ..Default::default()
        })));
        assert_eq!(entity.fake_type(), None);
    }
}
