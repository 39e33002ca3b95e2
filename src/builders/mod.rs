//! Pure wire-to-view-model builders.
//!
//! Every function here is total and synchronous: partial wire input produces
//! partial records (absent fields), never errors. Time-sensitive builders
//! take an explicit [`crate::server_time::ServerTime`] snapshot.

pub mod chats;
pub mod folders;
pub mod invites;
pub mod members;
pub mod peers;
pub mod reactions;
pub mod typing;
pub mod users;
