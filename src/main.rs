// src/main.rs
//
// mediashelf command line front-end

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use std::path::PathBuf;

use mediashelf::application::commands::*;
use mediashelf::application::dto::{BrowseEntriesDto, CreateEntryDto, UpdateEntryDto};
use mediashelf::application::{AppState, ErrorResponse};
use mediashelf::config::{log_level_for, AppConfig};
use mediashelf::AppError;

#[derive(Parser, Debug)]
#[clap(
    name = "mediashelf",
    about = "Catalog the books, films, music and shows you care about",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Catalog database file
    #[clap(long, global = true, env = "MEDIASHELF_DB")]
    database: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an entry to the catalog
    Add {
        title: String,

        /// book, movie, album, blog, video, podcast or other
        #[clap(long, short)]
        kind: String,

        #[clap(long)]
        creator: Option<String>,

        /// Release date, YYYY-MM-DD
        #[clap(long)]
        released: Option<String>,

        /// 0-5, out of range values are clamped
        #[clap(long, allow_negative_numbers = true)]
        rating: Option<i64>,

        /// backlog, in_progress, completed or archived
        #[clap(long)]
        status: Option<String>,

        /// Repeat for several tags
        #[clap(long = "tag")]
        tags: Vec<String>,

        #[clap(long)]
        favorite: bool,

        /// Image file to store as cover art
        #[clap(long)]
        cover: Option<String>,
    },

    /// Change fields of an existing entry
    Edit {
        id: String,

        #[clap(long)]
        title: Option<String>,

        #[clap(long)]
        creator: Option<String>,

        #[clap(long, short)]
        kind: Option<String>,

        /// Release date, YYYY-MM-DD; an empty value clears it
        #[clap(long)]
        released: Option<String>,

        #[clap(long, allow_negative_numbers = true)]
        rating: Option<i64>,

        #[clap(long)]
        status: Option<String>,

        /// Replaces all tags; repeat for several
        #[clap(long = "tag")]
        tags: Vec<String>,

        /// Remove every tag
        #[clap(long, conflicts_with = "tags")]
        clear_tags: bool,

        #[clap(long, conflicts_with = "unfavorite")]
        favorite: bool,

        #[clap(long)]
        unfavorite: bool,

        /// Image file to store as cover art; an empty value removes it
        #[clap(long)]
        cover: Option<String>,
    },

    /// Delete an entry
    Remove { id: String },

    /// Print one entry
    Show { id: String },

    /// List entries, optionally filtered
    List {
        #[clap(long, short)]
        kind: Option<String>,

        #[clap(long)]
        status: Option<String>,

        #[clap(long)]
        favorites: bool,

        #[clap(long)]
        tag: Option<String>,

        /// Case-insensitive match on title, creator and tags
        #[clap(long, short)]
        search: Option<String>,

        /// updated, title, rating, created or release
        #[clap(long)]
        sort: Option<String>,
    },

    /// Tags with usage counts
    Tags {
        /// Print a wrapped tag cloud this many columns wide instead of JSON
        #[clap(long)]
        width: Option<usize>,
    },

    /// Years that have entries, newest first
    Years,

    /// Check the database and print its size and row counts
    Info,

    /// Yearly "in review" report
    Report {
        /// Defaults to the current year
        #[clap(long, short, allow_negative_numbers = true)]
        year: Option<i32>,

        /// markdown or json
        #[clap(long, short, default_value = "markdown")]
        format: String,

        /// File or directory to write instead of printing
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Command, state: &AppState) -> Result<()> {
    match command {
        Command::Add {
            title,
            kind,
            creator,
            released,
            rating,
            status,
            tags,
            favorite,
            cover,
        } => {
            let entry = create_entry(
                state,
                CreateEntryDto {
                    title,
                    creator,
                    kind,
                    release_date: released,
                    rating,
                    status,
                    tags,
                    is_favorite: favorite,
                    cover_path: cover,
                },
            )?;
            print_json(&entry)
        }

        Command::Edit {
            id,
            title,
            creator,
            kind,
            released,
            rating,
            status,
            tags,
            clear_tags,
            favorite,
            unfavorite,
            cover,
        } => {
            let tags = if clear_tags {
                Some(Vec::new())
            } else if tags.is_empty() {
                None
            } else {
                Some(tags)
            };
            let is_favorite = match (favorite, unfavorite) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };

            let entry = update_entry(
                state,
                UpdateEntryDto {
                    entry_id: id,
                    title,
                    creator,
                    kind,
                    release_date: released,
                    rating,
                    status,
                    tags,
                    is_favorite,
                    cover_path: cover,
                },
            )?;
            print_json(&entry)
        }

        Command::Remove { id } => {
            delete_entry(state, &id)?;
            println!("Removed {}", id);
            Ok(())
        }

        Command::Show { id } => print_json(&get_entry(state, &id)?),

        Command::List {
            kind,
            status,
            favorites,
            tag,
            search,
            sort,
        } => {
            let entries = list_entries(
                state,
                BrowseEntriesDto {
                    kind,
                    status,
                    favorites_only: favorites,
                    tag,
                    search,
                    sort,
                },
            )?;
            print_json(&entries)
        }

        Command::Tags { width: Some(width) } => {
            for line in tag_cloud(state, width)? {
                println!("{}", line);
            }
            Ok(())
        }

        Command::Tags { width: None } => print_json(&list_tags(state)?),

        Command::Years => print_json(&list_years(state)?),

        Command::Info => print_json(&database_info(state)?),

        Command::Report {
            year,
            format,
            output: Some(output),
        } => {
            let written = export_report(state, year, &format, &output.display().to_string())?;
            println!("{}", written);
            Ok(())
        }

        Command::Report {
            year,
            format,
            output: None,
        } => {
            print!("{}", render_report(state, year, &format)?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level_for(cli.verbose))
        .parse_default_env()
        .init();

    let result = AppConfig::resolve(cli.database)
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            debug!("Using database {}", config.database_path().display());
            AppState::bootstrap(&config).with_context(|| {
                format!("Failed to open catalog at {}", config.database_path().display())
            })
        })
        .and_then(|state| run(cli.command, &state));

    if let Err(err) = result {
        let code = match err.downcast::<AppError>() {
            Ok(app_error) => {
                let response = ErrorResponse::from_app_error(app_error);
                eprintln!("{}", response.to_json());
                response.error_type.exit_code()
            }
            Err(other) => {
                eprintln!("error: {:#}", other);
                1
            }
        };
        std::process::exit(code);
    }
}
