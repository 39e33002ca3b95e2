//! User record normalization, companion to the chat builders.

use crate::builders::peers::avatar_hash;
use crate::types::{ChatId, FakeType, User, UserStatus};
use tgproto as wire;

/// Build a user record; the empty placeholder yields no entity.
pub fn user_from_wire(user: &wire::User) -> Option<User> {
    let data = match user {
        wire::User::User(data) => data,
        wire::User::Empty { .. } => return None,
    };

    let fake_type = if data.scam {
        Some(FakeType::Scam)
    } else if data.fake {
        Some(FakeType::Fake)
    } else {
        None
    };

    Some(User {
        id: ChatId::user(data.id),
        first_name: data.first_name.clone().filter(|name| !name.is_empty()),
        last_name: data.last_name.clone().filter(|name| !name.is_empty()),
        username: data.username.clone(),
        access_hash: data.access_hash.map(|hash| hash.to_string()),
        avatar_hash: data.photo.as_ref().and_then(avatar_hash),
        has_video_avatar: matches!(
            data.photo,
            Some(wire::ProfilePhoto::Photo {
                has_video: true,
                ..
            })
        ),
        is_min: data.min,
        is_verified: data.verified,
        fake_type,
        status: user_status(data.status.as_ref()),
    })
}

/// Presence bucket; a missing wire status reads as the empty bucket.
pub fn user_status(status: Option<&wire::UserStatus>) -> UserStatus {
    match status {
        None | Some(wire::UserStatus::Empty) => UserStatus::Empty,
        Some(wire::UserStatus::Online { expires }) => UserStatus::Online { expires: *expires },
        Some(wire::UserStatus::Offline { was_online }) => UserStatus::Offline {
            was_online: *was_online,
        },
        Some(wire::UserStatus::Recently) => UserStatus::Recently,
        Some(wire::UserStatus::LastWeek) => UserStatus::LastWeek,
        Some(wire::UserStatus::LastMonth) => UserStatus::LastMonth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgproto::UserData;

    #[test]
    fn test_empty_user_yields_no_entity() {
        assert!(user_from_wire(&wire::User::Empty { id: 5 }).is_none());
    }

    #[test]
    fn test_user_fields_extracted() {
        let user = user_from_wire(&wire::User::User(Box::new(UserData {
            id: 7,
            access_hash: Some(99),
            first_name: Some("Grace".into()),
            photo: Some(wire::ProfilePhoto::Photo {
                photo_id: 1234,
                has_video: true,
            }),
            status: Some(wire::UserStatus::Recently),
            verified: true,
            ..Default::default()
        })))
        .unwrap();

        assert_eq!(user.id, ChatId::user(7));
        assert_eq!(user.access_hash.as_deref(), Some("99"));
        assert_eq!(user.avatar_hash.as_deref(), Some("1234"));
        assert!(user.has_video_avatar);
        assert!(user.is_verified);
        assert_eq!(user.status, UserStatus::Recently);
        assert_eq!(user.last_name, None);
    }

    #[test]
    fn test_missing_status_reads_as_empty() {
        assert_eq!(user_status(None), UserStatus::Empty);
        assert_eq!(
            user_status(Some(&wire::UserStatus::Offline { was_online: 10 })),
            UserStatus::Offline { was_online: 10 }
        );
    }
}
