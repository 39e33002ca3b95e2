//! Membership record builders for both chat families.

use crate::builders::peers::peer_id;
use crate::types::{ChatId, ChatMember};
use tgproto::{ChannelParticipants, GroupParticipants, Participant};

/// Normalize one membership record. Banned and left rows identify the
/// subject by peer (it may not be a plain user); everything else carries a
/// user id directly.
pub fn chat_member(participant: &Participant) -> ChatMember {
    let user_id = match participant {
        Participant::ChannelBanned { peer, .. } | Participant::ChannelLeft { peer } => {
            peer_id(peer)
        }
        Participant::Group { user_id, .. }
        | Participant::GroupCreator { user_id }
        | Participant::GroupAdmin { user_id, .. }
        | Participant::Channel { user_id, .. }
        | Participant::ChannelSelf { user_id, .. }
        | Participant::ChannelCreator { user_id, .. }
        | Participant::ChannelAdmin { user_id, .. } => ChatId::user(*user_id),
    };

    let inviter_id = match participant {
        Participant::Group { inviter_id, .. }
        | Participant::GroupAdmin { inviter_id, .. }
        | Participant::ChannelSelf { inviter_id, .. } => Some(ChatId::user(*inviter_id)),
        Participant::ChannelAdmin { inviter_id, .. } => inviter_id.map(ChatId::user),
        _ => None,
    };

    let joined_date = match participant {
        Participant::Group { date, .. }
        | Participant::GroupAdmin { date, .. }
        | Participant::Channel { date, .. }
        | Participant::ChannelSelf { date, .. }
        | Participant::ChannelAdmin { date, .. }
        | Participant::ChannelBanned { date, .. } => Some(*date),
        _ => None,
    };

    let kicked_by_user_id = match participant {
        Participant::ChannelBanned { kicked_by, .. } => Some(ChatId::user(*kicked_by)),
        _ => None,
    };

    let promoted_by_user_id = match participant {
        Participant::ChannelAdmin { promoted_by, .. } => Some(ChatId::user(*promoted_by)),
        _ => None,
    };

    let admin_rights = match participant {
        Participant::ChannelCreator { admin_rights, .. }
        | Participant::ChannelAdmin { admin_rights, .. } => Some(*admin_rights),
        _ => None,
    };

    let banned_rights = match participant {
        Participant::ChannelBanned { banned_rights, .. } => Some(*banned_rights),
        _ => None,
    };

    let custom_title = match participant {
        Participant::ChannelCreator { rank, .. } | Participant::ChannelAdmin { rank, .. } => {
            rank.clone()
        }
        _ => None,
    };

    ChatMember {
        user_id,
        inviter_id,
        joined_date,
        kicked_by_user_id,
        promoted_by_user_id,
        custom_title,
        admin_rights,
        banned_rights,
        is_admin: matches!(
            participant,
            Participant::GroupAdmin { .. } | Participant::ChannelAdmin { .. }
        ),
        is_owner: matches!(
            participant,
            Participant::GroupCreator { .. } | Participant::ChannelCreator { .. }
        ),
    }
}

/// Member list of a small group; `None` when the server withheld it.
pub fn group_members(participants: &GroupParticipants) -> Option<Vec<ChatMember>> {
    match participants {
        GroupParticipants::Participants { participants, .. } => {
            Some(participants.iter().map(chat_member).collect())
        }
        GroupParticipants::Forbidden { .. } => None,
    }
}

/// Member page of a channel; `None` for the not-modified response.
pub fn channel_members(participants: &ChannelParticipants) -> Option<Vec<ChatMember>> {
    match participants {
        ChannelParticipants::Participants { participants, .. } => {
            Some(participants.iter().map(chat_member).collect())
        }
        ChannelParticipants::NotModified => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgproto::{ChatAdminRights, ChatBannedRights, Peer};

    #[test]
    fn test_plain_member_has_no_role_flags() {
        let member = chat_member(&Participant::Group {
            user_id: 5,
            inviter_id: 9,
            date: 1000,
        });
        assert_eq!(member.user_id, ChatId::user(5));
        assert_eq!(member.inviter_id, Some(ChatId::user(9)));
        assert_eq!(member.joined_date, Some(1000));
        assert!(!member.is_admin);
        assert!(!member.is_owner);
    }

    #[test]
    fn test_creator_has_no_join_date() {
        let member = chat_member(&Participant::GroupCreator { user_id: 5 });
        assert!(member.is_owner);
        assert!(!member.is_admin);
        assert_eq!(member.joined_date, None);
    }

    #[test]
    fn test_channel_admin_carries_rank_and_promoter() {
        let member = chat_member(&Participant::ChannelAdmin {
            user_id: 5,
            promoted_by: 1,
            inviter_id: None,
            date: 2000,
            admin_rights: ChatAdminRights {
                ban_users: true,
                ..Default::default()
            },
            rank: Some("moderator".into()),
        });
        assert!(member.is_admin);
        assert_eq!(member.promoted_by_user_id, Some(ChatId::user(1)));
        assert_eq!(member.custom_title.as_deref(), Some("moderator"));
        assert!(member.admin_rights.unwrap().ban_users);
        assert_eq!(member.inviter_id, None);
    }

    #[test]
    fn test_banned_member_resolves_peer_subject() {
        let member = chat_member(&Participant::ChannelBanned {
            peer: Peer::Channel { channel_id: 70 },
            kicked_by: 2,
            date: 3000,
            banned_rights: ChatBannedRights {
                send_messages: true,
                ..Default::default()
            },
            left: true,
        });
        assert_eq!(member.user_id, ChatId::group(70));
        assert_eq!(member.kicked_by_user_id, Some(ChatId::user(2)));
        assert!(member.banned_rights.unwrap().send_messages);
    }

    #[test]
    fn test_forbidden_lists_are_absent() {
        assert!(group_members(&GroupParticipants::Forbidden { chat_id: 1 }).is_none());
        assert!(channel_members(&ChannelParticipants::NotModified).is_none());

        let listed = GroupParticipants::Participants {
            chat_id: 1,
            participants: vec![Participant::GroupCreator { user_id: 3 }],
        };
        assert_eq!(group_members(&listed).unwrap().len(), 1);
    }
}
