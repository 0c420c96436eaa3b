//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use chrono::NaiveDate;
use serde::Serialize;

use infocli_core::{BirthdayWindow, Note, Phone, Record, StorageError};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a single contact
    pub fn print_contact(&self, record: &Record) {
        match self.format {
            OutputFormat::Human => println!("{}", record),
            OutputFormat::Json => print_json(record),
            OutputFormat::Quiet => println!("{}", record.name()),
        }
    }

    /// Print a list of contacts
    pub fn print_contacts(&self, records: &[&Record]) {
        match self.format {
            OutputFormat::Human => {
                if records.is_empty() {
                    println!("No contacts found.");
                    return;
                }
                for record in records {
                    println!("{}", record);
                }
                println!("\n{} contact(s)", records.len());
            }
            OutputFormat::Json => print_json(&records),
            OutputFormat::Quiet => {
                for record in records {
                    println!("{}", record.name());
                }
            }
        }
    }

    /// Print a contact's phone numbers
    pub fn print_phones(&self, record: &Record) {
        let phones: Vec<&str> = record.phones.iter().map(Phone::as_str).collect();
        match self.format {
            OutputFormat::Human => {
                if phones.is_empty() {
                    println!("{} has no phones.", record.name());
                } else {
                    println!("{}: {}", record.name(), phones.join(", "));
                }
            }
            OutputFormat::Json => print_json(&phones),
            OutputFormat::Quiet => {
                for phone in phones {
                    println!("{}", phone);
                }
            }
        }
    }

    /// Print a contact's birthday
    pub fn print_birthday(&self, record: &Record) {
        match (self.format, record.birthday) {
            (OutputFormat::Json, birthday) => print_json(&serde_json::json!({
                "name": record.name(),
                "birthday": birthday.map(|b| b.to_string()),
            })),
            (OutputFormat::Human, Some(birthday)) => {
                println!("{}'s birthday: {}", record.name(), birthday)
            }
            (OutputFormat::Human, None) => println!("{} has no birthday set.", record.name()),
            (OutputFormat::Quiet, Some(birthday)) => println!("{}", birthday),
            (OutputFormat::Quiet, None) => {}
        }
    }

    /// Print birthdays grouped by date
    pub fn print_birthday_window(&self, window: &BirthdayWindow, days: u32) {
        match self.format {
            OutputFormat::Human => {
                if window.is_empty() {
                    println!("No birthdays in the next {} day(s).", days);
                } else {
                    println!("{}", window);
                }
            }
            OutputFormat::Json => {
                let entries: Vec<_> = window
                    .iter()
                    .map(|(date, names)| birthday_entry(*date, names))
                    .collect();
                print_json(&entries);
            }
            OutputFormat::Quiet => {
                for (_, names) in window.iter() {
                    for name in names {
                        println!("{}", name);
                    }
                }
            }
        }
    }

    /// Print contacts celebrating today
    pub fn print_today_birthdays(&self, names: &[&str]) {
        match self.format {
            OutputFormat::Human => {
                if names.is_empty() {
                    println!("No birthdays today.");
                } else {
                    println!("Birthdays today: {}", names.join(", "));
                }
            }
            OutputFormat::Json => print_json(&names),
            OutputFormat::Quiet => {
                for name in names {
                    println!("{}", name);
                }
            }
        }
    }

    /// Print a single note
    pub fn print_note(&self, note: &Note) {
        match self.format {
            OutputFormat::Human => println!("{}", note),
            OutputFormat::Json => print_json(note),
            OutputFormat::Quiet => println!("{}", note.title()),
        }
    }

    /// Print a list of notes
    pub fn print_notes(&self, notes: &[&Note]) {
        match self.format {
            OutputFormat::Human => {
                if notes.is_empty() {
                    println!("No notes found.");
                    return;
                }
                for note in notes {
                    let tags: Vec<&str> = note.tags().iter().map(String::as_str).collect();
                    let tags = if tags.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", tags.join(", "))
                    };
                    println!(
                        "{}{} | {}",
                        truncate(note.title(), 30),
                        tags,
                        truncate_line(note.description.as_deref().unwrap_or(""), 45)
                    );
                }
                println!("\n{} note(s)", notes.len());
            }
            OutputFormat::Json => print_json(&notes),
            OutputFormat::Quiet => {
                for note in notes {
                    println!("{}", note.title());
                }
            }
        }
    }

    /// Print a list of tags
    pub fn print_tags(&self, tags: &[(String, usize)]) {
        match self.format {
            OutputFormat::Human => {
                if tags.is_empty() {
                    println!("No tags found.");
                    return;
                }
                for (name, count) in tags {
                    println!("{} ({})", name, count);
                }
                println!("\n{} tag(s)", tags.len());
            }
            OutputFormat::Json => {
                let json_tags: Vec<_> = tags
                    .iter()
                    .map(|(name, count)| serde_json::json!({"name": name, "count": count}))
                    .collect();
                print_json(&json_tags);
            }
            OutputFormat::Quiet => {
                for (name, _) in tags {
                    println!("{}", name);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Print an error, plus a hint when a storage failure has one
pub fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {:#}", err);
    if let Some(hint) = storage_hint(err) {
        eprintln!("Hint: {}", hint);
    }
}

fn storage_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<StorageError>())
        .and_then(StorageError::recovery_suggestion)
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: could not encode output as JSON: {}", e),
    }
}

fn birthday_entry(date: NaiveDate, names: &[String]) -> serde_json::Value {
    serde_json::json!({
        "date": date.format("%Y-%m-%d").to_string(),
        "weekday": date.format("%A").to_string(),
        "names": names,
    })
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Truncate to first line and max length
fn truncate_line(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    truncate(first_line, max_len)
}
