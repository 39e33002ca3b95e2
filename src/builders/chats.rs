//! Chat record builders: dialog rows, previews, classifiers and the small
//! chat-scoped records (settings, send-as identities, bot commands).

use crate::builders::peers::{EntityExt, peer_id};
use crate::server_time::ServerTime;
use crate::types::{
    BotCommand, Chat, ChatId, ChatKind, ChatSettings, MigratedTo, RestrictionReason, SendAsPeerId,
};
use tgproto as wire;
use tgproto::{Dialog, DraftMessage, Entity, InputChannel, Peer, SendAsPeer};

/// Classify a wire entity into its view-model category. Total over the whole
/// union; the category never changes for the lifetime of the entity.
pub fn chat_kind(entity: &Entity) -> ChatKind {
    match entity {
        Entity::User(_) => ChatKind::Private,
        Entity::Chat(wire::Chat::Group(_))
        | Entity::Chat(wire::Chat::GroupForbidden { .. })
        | Entity::Chat(wire::Chat::GroupEmpty { .. }) => ChatKind::BasicGroup,
        Entity::Chat(wire::Chat::Channel(channel)) => {
            if channel.megagroup {
                ChatKind::Supergroup
            } else {
                ChatKind::Channel
            }
        }
        Entity::Chat(wire::Chat::ChannelForbidden { megagroup, .. }) => {
            if *megagroup {
                ChatKind::Supergroup
            } else {
                ChatKind::Channel
            }
        }
    }
}

/// Build a full chat record from a dialog row and its resolved entity.
pub fn chat_from_dialog(dialog: &Dialog, entity: &Entity, time: ServerTime) -> Chat {
    let notify = &dialog.notify_settings;
    let is_muted = notify.silent.unwrap_or(false)
        || notify
            .mute_until
            .is_some_and(|until| time.server_secs() < until as i64);

    let mut chat = Chat::new(peer_id(&dialog.peer), chat_kind(entity));
    chat.title = title_from_peer(&dialog.peer, entity);
    chat.folder_id = dialog.folder_id.filter(|&id| id != 0);
    chat.unread_count = Some(dialog.unread_count);
    chat.unread_mentions_count = Some(dialog.unread_mentions_count);
    chat.unread_reactions_count = Some(dialog.unread_reactions_count);
    chat.last_read_inbox_message_id = Some(dialog.read_inbox_max_id);
    chat.last_read_outbox_message_id = Some(dialog.read_outbox_max_id);
    chat.is_muted = Some(is_muted);
    chat.has_unread_mark = dialog.unread_mark;
    chat.draft_date = match &dialog.draft {
        Some(DraftMessage::Message { date, .. }) => Some(*date),
        _ => None,
    };
    fill_entity_fields(&mut chat, entity, false);
    chat
}

/// Build a chat record from a bare entity, without dialog state. Empty
/// placeholder variants signal "no entity": the result is `None`, never a
/// partially-populated record.
pub fn chat_from_preview(entity: &Entity, is_support: bool) -> Option<Chat> {
    if matches!(
        entity,
        Entity::User(wire::User::Empty { .. }) | Entity::Chat(wire::Chat::GroupEmpty { .. })
    ) {
        return None;
    }

    let id = match entity {
        Entity::User(user) => ChatId::user(user.id()),
        Entity::Chat(chat) => ChatId::group(chat.id()),
    };
    let mut chat = Chat::new(id, chat_kind(entity));
    chat.title = match entity {
        Entity::User(_) => entity.as_user_data().and_then(display_name),
        Entity::Chat(_) => entity.title().map(str::to_string),
    };
    fill_entity_fields(&mut chat, entity, is_support);
    Some(chat)
}

/// The counterpart's display name: first name, "first last", last name
/// alone, or nothing. Empty strings count as absent.
pub(crate) fn display_name(user: &wire::UserData) -> Option<String> {
    let first = user.first_name.as_deref().filter(|name| !name.is_empty());
    let last = user.last_name.as_deref().filter(|name| !name.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(first), None) => Some(first.to_string()),
        (None, Some(last)) => Some(last.to_string()),
        (None, None) => None,
    }
}

fn title_from_peer(peer: &Peer, entity: &Entity) -> Option<String> {
    match peer {
        Peer::User { .. } => entity.as_user_data().and_then(display_name),
        _ => entity.title().map(str::to_string),
    }
}

/// Everything derivable from the entity alone, shared by the dialog and
/// preview paths.
fn fill_entity_fields(chat: &mut Chat, entity: &Entity, is_support: bool) {
    chat.is_min = entity.is_min();
    chat.access_hash = entity.access_hash();
    chat.avatar_hash = entity.avatar_hash();
    chat.has_video_avatar = entity.has_video_avatar();
    chat.username = entity.username().map(str::to_string);
    chat.is_verified = entity.verified();
    chat.is_call_active = entity.call_active();
    chat.is_call_not_empty = entity.call_not_empty();
    chat.join_date = entity.join_date();
    chat.members_count = entity.members_count();
    chat.is_protected = entity.protected();
    chat.is_support = is_support;
    chat.is_signatures_shown = entity.signatures_shown();
    chat.has_private_link = entity.has_private_link();
    chat.is_join_to_send = entity.join_to_send();
    chat.is_join_request = entity.join_request();
    chat.is_creator = entity.creator();
    chat.fake_type = entity.fake_type();
    fill_permissions(chat, entity);
    fill_restrictions(chat, entity);
    chat.migrated_to = migration_info(entity);
}

fn fill_permissions(chat: &mut Chat, entity: &Entity) {
    match entity {
        Entity::Chat(wire::Chat::Group(group)) => {
            chat.admin_rights = group.admin_rights;
            chat.default_banned_rights = group.default_banned_rights;
        }
        Entity::Chat(wire::Chat::Channel(channel)) => {
            chat.admin_rights = channel.admin_rights;
            chat.current_user_banned_rights = channel.banned_rights;
            chat.default_banned_rights = channel.default_banned_rights;
        }
        _ => {}
    }
}

fn fill_restrictions(chat: &mut Chat, entity: &Entity) {
    match entity {
        Entity::Chat(wire::Chat::GroupForbidden { .. }) => {
            chat.is_forbidden = true;
        }
        Entity::Chat(wire::Chat::ChannelForbidden { .. }) => {
            chat.is_restricted = true;
        }
        Entity::User(wire::User::User(user)) => {
            if user.restricted {
                if let Some(reason) = restriction_reason(&user.restriction_reason) {
                    chat.is_restricted = true;
                    chat.restriction_reason = Some(reason);
                }
            }
        }
        Entity::Chat(wire::Chat::Group(group)) => {
            chat.is_not_joined = Some(group.left);
        }
        Entity::Chat(wire::Chat::Channel(channel)) => {
            if channel.restricted {
                if let Some(reason) = restriction_reason(&channel.restriction_reason) {
                    chat.is_restricted = true;
                    chat.restriction_reason = Some(reason);
                }
            }
            // `left` is weirdly set to `true` on all channels never joined before
            chat.is_not_joined = Some(channel.left);
        }
        _ => {}
    }
}

/// Pick the reason targeting every platform; a flag with no matching entry
/// reports no restriction at all.
fn restriction_reason(reasons: &[wire::RestrictionReason]) -> Option<RestrictionReason> {
    reasons
        .iter()
        .find(|reason| reason.platform == "all")
        .map(|reason| RestrictionReason {
            reason: reason.reason.clone(),
            text: reason.text.clone(),
        })
}

fn migration_info(entity: &Entity) -> Option<MigratedTo> {
    match entity.as_group()?.migrated_to? {
        InputChannel::Channel {
            channel_id,
            access_hash,
        } => Some(MigratedTo {
            chat_id: ChatId::group(channel_id),
            access_hash: Some(access_hash.to_string()),
        }),
        InputChannel::Empty => None,
    }
}

/// Four independent capability flags; nothing else survives from the wire
/// settings object.
pub fn chat_settings(settings: &wire::PeerSettings) -> ChatSettings {
    ChatSettings {
        is_auto_archived: settings.autoarchived,
        can_report_spam: settings.report_spam,
        can_add_contact: settings.add_contact,
        can_block_contact: settings.block_contact,
    }
}

pub fn send_as_peer(send_as: &SendAsPeer) -> SendAsPeerId {
    SendAsPeerId {
        id: peer_id(&send_as.peer),
        is_premium: send_as.premium_required,
    }
}

/// Flatten every bot's command list, tagging commands with their owner.
/// Infos without a user id or command list contribute nothing.
pub fn bot_commands(bot_infos: &[wire::BotInfo]) -> Vec<BotCommand> {
    bot_infos
        .iter()
        .filter_map(|info| {
            let bot_id = ChatId::user(info.user_id?);
            let commands = info.commands.as_ref()?;
            Some(commands.iter().map(move |command| BotCommand {
                bot_id,
                command: command.command.clone(),
                description: command.description.clone(),
            }))
        })
        .flatten()
        .collect()
}
