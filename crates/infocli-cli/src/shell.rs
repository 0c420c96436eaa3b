//! Interactive shell
//!
//! Reads one command per line and runs it through the same command tree as
//! the one-shot CLI. Everything is saved once, when the shell exits.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};

use infocli_core::Store;

use crate::cli::ShellLine;
use crate::commands::{self, Context};
use crate::output::report_error;

/// Run the read-eval loop until `exit`, `close` or end of input
pub fn run(store: &mut Store, ctx: &Context<'_>) -> Result<()> {
    let stdin = io::stdin();
    run_with(store, ctx, stdin.lock(), io::stdout())
}

fn run_with<R: BufRead, W: Write>(
    store: &mut Store,
    ctx: &Context<'_>,
    mut input: R,
    mut prompt: W,
) -> Result<()> {
    info!("Shell started");
    writeln!(prompt, "Welcome to the assistant bot!")?;

    loop {
        write!(prompt, "Enter a command: ")?;
        prompt.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(prompt)?;
            break;
        }

        let tokens = match tokenize(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };
        let Some(first) = tokens.first() else {
            continue;
        };

        match first.to_lowercase().as_str() {
            "exit" | "close" => break,
            "hello" => {
                writeln!(prompt, "How can I help you?")?;
                continue;
            }
            _ => {}
        }

        match ShellLine::try_parse_from(&tokens) {
            Ok(ShellLine { command }) => {
                if let Err(e) = commands::run(command, store, ctx) {
                    warn!("Command failed: {:#}", e);
                    report_error(&e);
                }
            }
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    store.save()?;
    info!("Shell finished");
    writeln!(prompt, "Good bye!")?;
    Ok(())
}

/// Split a line on whitespace, keeping quoted runs together
///
/// Both `"` and `'` quote; the quote characters themselves are dropped.
/// An empty quoted string (`""`) yields an empty argument.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("Unterminated {} quote", q);
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}
