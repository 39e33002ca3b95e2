use crate::builders::peers::peer_id;
use crate::types::ChatId;
use tgproto::Peer;

/// Read-only id resolution injected into builders that dereference peer
/// sequences. Store-backed implementations may refuse peers they have never
/// seen; builders drop those entries instead of failing.
pub trait PeerLookup {
    fn resolve(&self, peer: &Peer) -> Option<ChatId>;
}

/// Resolves every peer by arithmetic alone, without consulting any state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLookup;

impl PeerLookup for DirectLookup {
    fn resolve(&self, peer: &Peer) -> Option<ChatId> {
        Some(peer_id(peer))
    }
}
