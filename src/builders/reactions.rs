//! Reaction-set normalization.

use tgproto::{ChatReactions, Reaction};

/// The expansion of the "all reactions allowed" marker. Order is part of the
/// contract: pickers render this list as-is.
pub const ALL_REACTIONS: [&str; 40] = [
    "👍", "👎", "❤", "🔥", "🥰", "👏", "😁", "🤔", "🤯", "😱", "🤬", "😢", "🎉", "🤩", "🤮",
    "💩", "🙏", "👌", "🕊", "🤡", "🥱", "🥴", "😍", "🐳", "❤‍🔥", "🌚", "🌭", "💯", "🤣", "⚡",
    "🍌", "🏆", "💔", "🤨", "😐", "🍓", "🍾", "💋", "🖕", "😈",
];

/// Resolve a chat's allowed reactions. `None` means "no restriction info"
/// (unknown or explicitly none set), which callers must keep distinct from
/// an explicitly empty allow-list.
pub fn chat_reactions(available: Option<&ChatReactions>) -> Option<Vec<String>> {
    match available? {
        ChatReactions::All => Some(ALL_REACTIONS.iter().map(|glyph| glyph.to_string()).collect()),
        ChatReactions::Some { reactions } => {
            Some(reactions.iter().filter_map(reaction_glyph).collect())
        }
        ChatReactions::None => None,
    }
}

/// Decode one reaction. Custom-emoji reactions have no inline glyph at this
/// layer (the document must be fetched separately) and decode to nothing.
fn reaction_glyph(reaction: &Reaction) -> Option<String> {
    match reaction {
        Reaction::Emoji { emoticon } => Some(emoticon.clone()),
        Reaction::CustomEmoji { .. } | Reaction::Empty => None,
    }
}
