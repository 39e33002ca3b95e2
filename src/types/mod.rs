pub mod chat;
pub mod folder;
pub mod invite;
pub mod member;
pub mod peer;
pub mod typing;
pub mod user;

pub use chat::{
    BotCommand, Chat, ChatKind, ChatSettings, FakeType, MigratedTo, RestrictionReason,
    SendAsPeerId,
};
pub use folder::ChatFolder;
pub use invite::{ExportedInvite, InviteImporter};
pub use member::ChatMember;
pub use peer::{ChatId, ChatIdError, PeerOrigin};
pub use typing::{TypingActionKind, TypingStatus};
pub use user::{User, UserStatus};
