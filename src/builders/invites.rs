//! Invite-link normalization.

use crate::types::{ChatId, ExportedInvite, InviteImporter};
use tgproto::{ChatInviteExported, ChatInviteImporter};

pub fn exported_invite(invite: &ChatInviteExported) -> ExportedInvite {
    ExportedInvite {
        link: invite.link.clone(),
        is_revoked: invite.revoked,
        is_permanent: invite.permanent,
        is_request_needed: invite.request_needed,
        date: invite.date,
        start_date: invite.start_date,
        expire_date: invite.expire_date,
        usage: invite.usage,
        usage_limit: invite.usage_limit,
        requested: invite.requested,
        title: invite.title.clone(),
        admin_id: ChatId::user(invite.admin_id),
    }
}

pub fn invite_importer(importer: &ChatInviteImporter) -> InviteImporter {
    InviteImporter {
        user_id: ChatId::user(importer.user_id),
        date: importer.date,
        about: importer.about.clone(),
        is_requested: importer.requested,
    }
}
