//! Wire-schema types for the Telegram-style RPC protocol.
//!
//! Every polymorphic protocol family is rendered as a closed Rust enum whose
//! variants carry exactly the fields that concrete wire shape defines, so
//! field presence is a property of the chosen variant rather than a runtime
//! probe. This crate is pure data: no codec, no I/O.

pub mod bot;
pub mod chat;
pub mod dialog;
pub mod folder;
pub mod invite;
pub mod participant;
pub mod peer;
pub mod reactions;
pub mod rights;
pub mod settings;
pub mod typing;
pub mod user;

pub use bot::{BotCommand, BotInfo};
pub use chat::{ChannelData, Chat, Entity, GroupData, RestrictionReason};
pub use dialog::{Dialog, DraftMessage, PeerNotifySettings};
pub use folder::{DialogFilter, DialogFilterData};
pub use invite::{ChatInviteExported, ChatInviteImporter};
pub use participant::{ChannelParticipants, GroupParticipants, Participant};
pub use peer::{InputChannel, Peer, ProfilePhoto, SendAsPeer};
pub use reactions::{ChatReactions, Reaction};
pub use rights::{ChatAdminRights, ChatBannedRights};
pub use settings::PeerSettings;
pub use typing::{SendMessageAction, TypingUpdate};
pub use user::{User, UserData, UserStatus};
