#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::views::DATE_FORMAT;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Note;
use crate::domain::services::LocalStorage;
use crate::domain::services::NoteStore;
use crate::domain::services::STORAGE_KEY;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn log_dir() -> path::PathBuf {
    if let Ok(dir) = std::env::var("MINDSCAPE_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mindscape");
}

pub fn log_file_path() -> path::PathBuf {
    return log_dir().join("debug.log");
}

fn format_note(note: &Note) -> String {
    let mut res = format!(
        "- (ID: {}) {}, {}",
        note.id,
        note.created_date(DATE_FORMAT),
        note.title
    );

    if !note.tags.is_empty() {
        res = format!("{res} [{}]", note.tags.join(", "));
    }

    return res;
}

fn format_note_detail(note: &Note) -> String {
    let mut lines = vec![
        note.title.bold().to_string(),
        note.created_date(DATE_FORMAT).dimmed().to_string(),
    ];

    if !note.tags.is_empty() {
        lines.push(format!("Tags: {}", note.tags.join(", ")));
    }
    if let Some(summary) = note.summary.as_ref().filter(|summary| return !summary.is_empty()) {
        lines.push("".to_string());
        lines.push(format!("{} {}", "AI Summary:".cyan(), summary.italic()));
    }

    lines.push("".to_string());
    lines.push(note.content.to_string());

    return lines.join("\n");
}

async fn load_store(matches: Vec<&ArgMatches>) -> Result<NoteStore> {
    Config::load(matches).await?;
    return NoteStore::load(LocalStorage::default()).await;
}

fn print_notes_list(store: &NoteStore, query: &str) {
    let notes = store
        .search(query)
        .iter()
        .map(|note| return format_note(note))
        .collect::<Vec<String>>();

    if notes.is_empty() {
        if query.is_empty() {
            println!("There are no notes yet. Launch mindscape to write your first one!");
        } else {
            println!("No notes match \"{query}\".");
        }
    } else {
        println!("{}", notes.join("\n"));
    }
}

async fn delete_note(store: &mut NoteStore, id: &str, skip_confirm: bool) -> Result<()> {
    let title = match store.get(id) {
        Some(note) => note.title.to_string(),
        None => bail!(format!("No note found with ID {id}")),
    };

    if !skip_confirm {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete \"{title}\"?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Kept \"{title}\"");
            return Ok(());
        }
    }

    store.delete(id).await?;
    println!("Deleted \"{title}\"");

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for MindScape")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running MindScape with environment variable RUST_LOG=mindscape")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn arg_note_id() -> Arg {
    return Arg::new("note-id")
        .short('i')
        .long("id")
        .help("Note ID")
        .num_args(1)
        .required(true);
}

fn subcommand_notes() -> Command {
    return Command::new("notes")
        .about("Manage saved notes without opening the interface.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List all notes, newest first.")
                .arg(
                    Arg::new("search")
                        .short('s')
                        .long("search")
                        .help("Only list notes whose title, content, or tags contain this text.")
                        .num_args(1),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print a single note.")
                .arg(arg_note_id()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a note.")
                .arg(arg_note_id())
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("path").about("Print the path of the notes file."));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("mindscape")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(subcommand_notes())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("MINDSCAPE_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::DataDir.to_string())
                .short('d')
                .long(ConfigKey::DataDir.to_string())
                .env("MINDSCAPE_DATA_DIR")
                .num_args(1)
                .help(format!("Directory where notes are stored. [default: {}]", Config::default(ConfigKey::DataDir)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::GeminiToken.to_string())
                .long(ConfigKey::GeminiToken.to_string())
                .env("MINDSCAPE_GEMINI_TOKEN")
                .num_args(1)
                .help("Google Gemini API token. AI features are disabled without it.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiURL.to_string())
                .long(ConfigKey::GeminiURL.to_string())
                .env("MINDSCAPE_GEMINI_URL")
                .num_args(1)
                .help(format!("Google Gemini API URL. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::GeminiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Model.to_string())
                .short('m')
                .long(ConfigKey::Model.to_string())
                .env("MINDSCAPE_MODEL")
                .num_args(1)
                .help(format!("Gemini model used for summaries, polishing, and brainstorming. [default: {}]", Config::default(ConfigKey::Model)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SummaryMinLength.to_string())
                .long(ConfigKey::SummaryMinLength.to_string())
                .env("MINDSCAPE_SUMMARY_MIN_LENGTH")
                .num_args(1)
                .help(format!("Notes longer than this many characters get a generated summary on save. [default: {}]", Config::default(ConfigKey::SummaryMinLength)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SummaryExcerptLength.to_string())
                .long(ConfigKey::SummaryExcerptLength.to_string())
                .env("MINDSCAPE_SUMMARY_EXCERPT_LENGTH")
                .num_args(1)
                .help(format!("Characters kept in the excerpt used when no summary is generated. [default: {}]", Config::default(ConfigKey::SummaryExcerptLength)))
                .global(true),
        );
}

async fn parse_notes(matches: &ArgMatches, notes_matches: &ArgMatches) -> Result<()> {
    match notes_matches.subcommand() {
        Some(("list", list_matches)) => {
            let store = load_store(vec![matches, notes_matches, list_matches]).await?;
            let query = list_matches
                .get_one::<String>("search")
                .map(|query| return query.to_string())
                .unwrap_or_default();
            print_notes_list(&store, &query);
        }
        Some(("show", show_matches)) => {
            let store = load_store(vec![matches, notes_matches, show_matches]).await?;
            let id = show_matches
                .get_one::<String>("note-id")
                .map(|id| return id.to_string())
                .unwrap_or_default();
            match store.get(&id) {
                Some(note) => println!("{}", format_note_detail(note)),
                None => bail!(format!("No note found with ID {id}")),
            }
        }
        Some(("delete", delete_matches)) => {
            let mut store = load_store(vec![matches, notes_matches, delete_matches]).await?;
            let id = delete_matches
                .get_one::<String>("note-id")
                .map(|id| return id.to_string())
                .unwrap_or_default();
            let skip_confirm = delete_matches.get_flag("yes");
            delete_note(&mut store, &id, skip_confirm).await?;
        }
        Some(("path", path_matches)) => {
            Config::load(vec![matches, notes_matches, path_matches]).await?;
            let path = LocalStorage::default().get_file_path(STORAGE_KEY);
            println!("{}", path.to_string_lossy());
        }
        _ => {
            subcommand_notes().print_long_help()?;
        }
    }

    return Ok(());
}

/// Handles one-shot subcommands. Returns true when the interface should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    println!("{}", log_file_path().to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("notes", notes_matches)) => {
            parse_notes(&matches, notes_matches).await?;
            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
