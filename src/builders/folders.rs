//! Chat-folder normalization.

use crate::lookup::PeerLookup;
use crate::types::{ChatFolder, ChatId};
use log::debug;
use tgproto::{DialogFilter, DialogFilterData, Peer};

/// Build a folder record. Scalar and boolean fields are copied verbatim;
/// the three peer sequences run through the injected lookup, and ids the
/// lookup refuses are dropped rather than failing the whole folder.
pub fn chat_folder(filter: &DialogFilterData, lookup: &impl PeerLookup) -> ChatFolder {
    ChatFolder {
        id: filter.id,
        title: filter.title.clone(),
        emoticon: filter.emoticon.clone().filter(|emoticon| !emoticon.is_empty()),
        description: None,
        contacts: filter.contacts,
        non_contacts: filter.non_contacts,
        groups: filter.groups,
        channels: filter.broadcasts,
        bots: filter.bots,
        exclude_muted: filter.exclude_muted,
        exclude_read: filter.exclude_read,
        exclude_archived: filter.exclude_archived,
        pinned_chat_ids: resolve_ids(&filter.pinned_peers, lookup),
        included_chat_ids: resolve_ids(&filter.include_peers, lookup),
        excluded_chat_ids: resolve_ids(&filter.exclude_peers, lookup),
    }
}

/// Suggested folders wrap a filter with a server-provided description; the
/// default-tab variant produces nothing.
pub fn chat_folder_from_suggested(
    filter: &DialogFilter,
    description: &str,
    lookup: &impl PeerLookup,
) -> Option<ChatFolder> {
    match filter {
        DialogFilter::Filter(data) => {
            let mut folder = chat_folder(data, lookup);
            folder.description = Some(description.to_string());
            Some(folder)
        }
        DialogFilter::Default => None,
    }
}

fn resolve_ids(peers: &[Peer], lookup: &impl PeerLookup) -> Vec<ChatId> {
    peers
        .iter()
        .filter_map(|peer| {
            let id = lookup.resolve(peer);
            if id.is_none() {
                debug!(target: "Folders", "dropping unresolvable peer: {peer:?}");
            }
            id
        })
        .collect()
}
