//! Command-line definitions
//!
//! The same `Commands` tree is used for one-shot invocations and for lines
//! typed into the interactive shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "info-cli")]
#[command(about = "InfoCLI - Personal assistant for contacts and notes")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One line of input inside the interactive shell
#[derive(Parser)]
#[command(name = "info-cli", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Manage contacts
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
    /// Show upcoming birthdays
    Birthdays {
        /// Number of days to look ahead, today included
        #[arg(short, long)]
        days: Option<u32>,
        /// Only contacts celebrating today
        #[arg(long, conflicts_with = "days")]
        today: bool,
    },
    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// List all note tags
    Tags,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show storage location and counts
    Status,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ContactCommands {
    /// Add a contact, or a phone to an existing contact
    Add {
        name: String,
        /// 10-digit phone number
        phone: Option<String>,
    },
    /// Show one contact
    Show { name: String },
    /// List all contacts
    #[command(alias = "ls", alias = "all")]
    List,
    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },
    /// Search every field of every contact
    Search { query: String },
    /// Show a contact's phones
    Phones { name: String },
    /// Replace a phone number
    #[command(alias = "change")]
    ChangePhone {
        name: String,
        old: String,
        new: String,
    },
    /// Remove a phone number
    RemovePhone { name: String, phone: String },
    /// Add an email address
    AddEmail { name: String, email: String },
    /// Replace an email address
    ChangeEmail {
        name: String,
        old: String,
        new: String,
    },
    /// Remove an email address
    RemoveEmail { name: String, email: String },
    /// Set the birthday (DD.MM.YYYY)
    #[command(alias = "add-birthday")]
    SetBirthday { name: String, birthday: String },
    /// Show the birthday
    ShowBirthday { name: String },
    /// Set the address
    SetAddress {
        name: String,
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteCommands {
    /// Create a note
    #[command(alias = "create")]
    Add {
        title: String,
        /// Note description
        #[arg(short, long)]
        description: Option<String>,
        /// Tags to add
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// Show one note
    Show { title: String },
    /// List all notes
    #[command(alias = "ls")]
    List {
        /// Put notes with any of these tags first
        #[arg(long)]
        sort_by_tag: Vec<String>,
    },
    /// Change a note's title, description or tags
    Edit {
        title: String,
        /// New title
        #[arg(long = "title", id = "new_title")]
        new_title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Replace all tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete { title: String },
    /// Find notes carrying any of the given tags
    Find {
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },
    /// Add tags to a note
    Tag {
        title: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },
    /// Remove tags from a note
    Untag {
        title: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file, birthday_window_days)
        key: String,
        /// Configuration value
        value: String,
    },
}

impl Commands {
    /// True if the command changes contacts or notes
    pub fn is_write(&self) -> bool {
        match self {
            Commands::Contact { command } => !matches!(
                command,
                ContactCommands::Show { .. }
                    | ContactCommands::List
                    | ContactCommands::Search { .. }
                    | ContactCommands::Phones { .. }
                    | ContactCommands::ShowBirthday { .. }
            ),
            Commands::Note { command } => matches!(
                command,
                NoteCommands::Add { .. }
                    | NoteCommands::Edit { .. }
                    | NoteCommands::Delete { .. }
                    | NoteCommands::Tag { .. }
                    | NoteCommands::Untag { .. }
            ),
            _ => false,
        }
    }
}
