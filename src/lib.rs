//! View-model binding layer for a Telegram-style messaging protocol.
//!
//! Translates the wire schema (`tgproto`) into the flat, immutable records a
//! client UI stores and renders: chats, members, folders, invites, typing
//! indicators. All builders are pure and total; see [`builders`].

pub use tgproto as wire;

pub mod builders;
pub mod lookup;
pub mod server_time;
pub mod types;

pub use lookup::{DirectLookup, PeerLookup};
pub use server_time::ServerTime;
