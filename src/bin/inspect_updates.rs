// Feed captured wire updates through the builders and dump the view models.
// Run with: cargo run --bin inspect_updates -- captured.json

use clap::Parser;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tgproto::{
    ChatInviteExported, ChatInviteImporter, ChatReactions, Dialog, DialogFilter, Entity,
    PeerSettings, TypingUpdate, User,
};
use tgview::builders::{chats, folders, invites, reactions, typing, users};
use tgview::types;
use tgview::{DirectLookup, ServerTime};

#[derive(Parser)]
#[command(name = "inspect_updates")]
#[command(about = "Normalization inspection tool")]
#[command(
    long_about = "Reads a JSON capture of wire updates (dialogs, previews, typing, folders, invites) and prints the view-model records the builders produce for them"
)]
struct Cli {
    /// JSON file containing an array of captured updates.
    input: PathBuf,

    /// Clock-skew offset in seconds to apply to time-sensitive builders.
    #[arg(long, default_value_t = 0)]
    offset_secs: i64,

    /// Pretty-print each record.
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Update {
    Dialog {
        dialog: Dialog,
        entity: Entity,
    },
    Preview {
        entity: Entity,
        #[serde(default)]
        is_support: bool,
    },
    Typing {
        update: TypingUpdate,
    },
    Folder {
        filter: DialogFilter,
        #[serde(default)]
        description: Option<String>,
    },
    Invite {
        invite: ChatInviteExported,
    },
    Importer {
        importer: ChatInviteImporter,
    },
    Settings {
        settings: PeerSettings,
    },
    Reactions {
        reactions: Option<ChatReactions>,
    },
    User {
        user: User,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Record {
    Chat(types::Chat),
    TypingStatus(types::TypingStatus),
    Folder(types::ChatFolder),
    Invite(types::ExportedInvite),
    Importer(types::InviteImporter),
    Settings(types::ChatSettings),
    Reactions(Vec<String>),
    User(types::User),
    /// The input mapped to no entity (placeholder, suppressed action, ...).
    Suppressed,
}

fn build_record(update: &Update, time: ServerTime) -> Record {
    match update {
        Update::Dialog { dialog, entity } => {
            Record::Chat(chats::chat_from_dialog(dialog, entity, time))
        }
        Update::Preview { entity, is_support } => chats::chat_from_preview(entity, *is_support)
            .map(Record::Chat)
            .unwrap_or(Record::Suppressed),
        Update::Typing { update } => typing::typing_status(update, time)
            .map(Record::TypingStatus)
            .unwrap_or(Record::Suppressed),
        Update::Folder {
            filter,
            description,
        } => {
            let folder = match (filter, description) {
                (DialogFilter::Filter(data), None) => {
                    Some(folders::chat_folder(data, &DirectLookup))
                }
                (filter, Some(description)) => {
                    folders::chat_folder_from_suggested(filter, description, &DirectLookup)
                }
                (DialogFilter::Default, None) => None,
            };
            folder.map(Record::Folder).unwrap_or(Record::Suppressed)
        }
        Update::Invite { invite } => Record::Invite(invites::exported_invite(invite)),
        Update::Importer { importer } => Record::Importer(invites::invite_importer(importer)),
        Update::Settings { settings } => Record::Settings(chats::chat_settings(settings)),
        Update::Reactions { reactions } => reactions::chat_reactions(reactions.as_ref())
            .map(Record::Reactions)
            .unwrap_or(Record::Suppressed),
        Update::User { user } => users::user_from_wire(user)
            .map(Record::User)
            .unwrap_or(Record::Suppressed),
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let raw = std::fs::read_to_string(&cli.input)?;
    let updates: Vec<Update> = serde_json::from_str(&raw)?;
    info!(
        "loaded {} updates from {} (offset {}s)",
        updates.len(),
        cli.input.display(),
        cli.offset_secs
    );

    let time = ServerTime::now(cli.offset_secs);
    for update in &updates {
        let record = build_record(update, time);
        let line = if cli.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        println!("{line}");
    }

    Ok(())
}
