use serde::{Deserialize, Serialize};

/// Per-peer capability flags shown on first contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerSettings {
    pub autoarchived: bool,
    pub report_spam: bool,
    pub add_contact: bool,
    pub block_contact: bool,
}
