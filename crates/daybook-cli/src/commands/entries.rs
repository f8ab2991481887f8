use std::io::{self, IsTerminal, Read};

use chrono::NaiveDate;
use dialoguer::{Confirm, Input};

use crate::app::open_journal;
use crate::cli::{AddArgs, Cli, DeleteArgs, ListArgs, RandomArgs, SearchArgs};
use crate::config::DaybookConfig;
use crate::errors::CliError;
use crate::output::{entries_json, entry_detail, entry_json, entry_list};
use crate::ui::render::{hint, truncate};
use crate::ui::UiContext;

/// Entry text from arguments, then piped stdin, then an interactive prompt.
fn read_entry_text(args: &AddArgs) -> anyhow::Result<String> {
    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read entry from stdin: {}", e))?;
        return Ok(strip_final_newline(&buffer).to_string());
    }

    Input::<String>::new()
        .with_prompt("Enter an entry")
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read entry: {}", e))
}

/// Drop the single line terminator a pipe or heredoc appends.
fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CliError::InvalidInput(format!("Invalid date (expected YYYY-MM-DD): {}", value))
    })
}

pub fn handle_add(cli: &Cli, config: &DaybookConfig, args: &AddArgs) -> anyhow::Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let text = read_entry_text(args)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Entry text is empty".to_string()).into());
    }

    let mut journal = open_journal(cli, config)?;
    let entry = match date {
        Some(date) => journal.new_entry_on(text, date)?,
        None => journal.new_entry(text)?,
    };

    if !cli.quiet {
        println!("Added entry {}", entry.id());
    }
    Ok(())
}

pub fn handle_list(cli: &Cli, config: &DaybookConfig, args: &ListArgs) -> anyhow::Result<()> {
    let journal = open_journal(cli, config)?;
    let ctx = UiContext::from_env(args.json, cli.quiet);

    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(journal.entries()))?);
        return Ok(());
    }
    if journal.is_empty() {
        if !ctx.quiet {
            println!("No entries yet.");
            println!("{}", hint(&ctx, "daybook add \"your first entry\""));
        }
        return Ok(());
    }

    let entries: Vec<_> = journal.entries().iter().collect();
    println!("{}", entry_list(&ctx, &entries));
    Ok(())
}

pub fn handle_search(cli: &Cli, config: &DaybookConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let journal = open_journal(cli, config)?;
    let ctx = UiContext::from_env(args.json, cli.quiet);
    let found = journal.search(&args.query);

    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(found))?);
        return Ok(());
    }
    if found.is_empty() {
        if !ctx.quiet {
            println!("Nothing found.");
        }
        return Ok(());
    }

    println!("{}", entry_list(&ctx, &found));
    Ok(())
}

pub fn handle_random(cli: &Cli, config: &DaybookConfig, args: &RandomArgs) -> anyhow::Result<()> {
    let journal = open_journal(cli, config)?;
    let ctx = UiContext::from_env(args.json, cli.quiet);
    let entry = journal.random_entry()?;

    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entry_json(entry))?);
    } else {
        println!("{}", entry_detail(entry));
    }
    Ok(())
}

pub fn handle_delete(cli: &Cli, config: &DaybookConfig, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut journal = open_journal(cli, config)?;
    let entry = journal.find(&args.id)?.clone();

    if !args.yes {
        if !UiContext::is_interactive() {
            return Err(CliError::InvalidInput(
                "Refusing to delete without confirmation; pass --yes".to_string(),
            )
            .into());
        }
        let prompt = format!(
            "Delete entry from {}: \"{}\"?",
            entry.created_on(),
            truncate(entry.text(), 40)
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?;
        if !confirmed {
            if !cli.quiet {
                println!("Cancelled.");
            }
            return Ok(());
        }
    }

    journal.delete_entry(&entry)?;
    if !cli.quiet {
        println!("Deleted entry {}", entry.id());
    }
    Ok(())
}
