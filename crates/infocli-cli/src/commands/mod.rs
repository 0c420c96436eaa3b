//! Command handlers
//!
//! Each handler takes the store plus the parsed arguments and reports through
//! `Output`. Saving is left to the caller so the shell can batch writes.

pub mod birthday;
pub mod config;
pub mod contact;
pub mod note;
pub mod status;
pub mod tag;

use std::path::PathBuf;

use anyhow::Result;

use infocli_core::{Config, Store, SystemClock};

use crate::cli::{Commands, ConfigCommands, ContactCommands, NoteCommands};
use crate::output::Output;

/// Settings shared by every command in one run
pub struct Context<'a> {
    pub config: &'a Config,
    pub config_path: Option<&'a PathBuf>,
    pub output: &'a Output,
}

/// Run one parsed command against the store
pub fn run(command: Commands, store: &mut Store, ctx: &Context<'_>) -> Result<()> {
    let output = ctx.output;

    match command {
        Commands::Shell => {
            output.message("Already in the shell.");
            Ok(())
        }
        Commands::Contact { command } => match command {
            ContactCommands::Add { name, phone } => {
                contact::add(store, &name, phone.as_deref(), output)
            }
            ContactCommands::Show { name } => contact::show(store, &name, output),
            ContactCommands::List => contact::list(store, output),
            ContactCommands::Delete { name } => contact::delete(store, &name, output),
            ContactCommands::Search { query } => contact::search(store, &query, output),
            ContactCommands::Phones { name } => contact::phones(store, &name, output),
            ContactCommands::ChangePhone { name, old, new } => {
                contact::change_phone(store, &name, &old, &new, output)
            }
            ContactCommands::RemovePhone { name, phone } => {
                contact::remove_phone(store, &name, &phone, output)
            }
            ContactCommands::AddEmail { name, email } => {
                contact::add_email(store, &name, &email, output)
            }
            ContactCommands::ChangeEmail { name, old, new } => {
                contact::change_email(store, &name, &old, &new, output)
            }
            ContactCommands::RemoveEmail { name, email } => {
                contact::remove_email(store, &name, &email, output)
            }
            ContactCommands::SetBirthday { name, birthday } => {
                contact::set_birthday(store, &name, &birthday, output)
            }
            ContactCommands::ShowBirthday { name } => contact::show_birthday(store, &name, output),
            ContactCommands::SetAddress { name, address } => {
                contact::set_address(store, &name, &address.join(" "), output)
            }
        },
        Commands::Birthdays { days, today } => {
            if today {
                birthday::today(store, &SystemClock, output)
            } else {
                let days = days.unwrap_or(ctx.config.birthday_window_days);
                birthday::upcoming(store, days, &SystemClock, output)
            }
        }
        Commands::Note { command } => match command {
            NoteCommands::Add {
                title,
                description,
                tag,
            } => note::add(store, title, description, tag, output),
            NoteCommands::Show { title } => note::show(store, &title, output),
            NoteCommands::List { sort_by_tag } => note::list(store, &sort_by_tag, output),
            NoteCommands::Edit {
                title,
                new_title,
                description,
                tags,
            } => note::edit(store, &title, new_title, description, tags, output),
            NoteCommands::Delete { title } => note::delete(store, &title, output),
            NoteCommands::Find { tags } => note::find(store, &tags, output),
            NoteCommands::Tag { title, tags } => note::tag(store, &title, &tags, output),
            NoteCommands::Untag { title, tags } => note::untag(store, &title, &tags, output),
        },
        Commands::Tags => tag::list(store, output),
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => config::show(ctx.config_path, output),
            Some(ConfigCommands::Set { key, value }) => {
                config::set(key, value, ctx.config_path, output)
            }
        },
        Commands::Status => status::show(store, ctx.config, ctx.config_path, output),
    }
}
