use crate::app::open_journal;
use crate::cli::{Cli, StatsCommand};
use crate::config::DaybookConfig;
use crate::output::{
    letters, letters_json, longest_words, longest_words_json, word_combos, word_combos_json,
    word_counts, word_counts_json,
};
use crate::ui::UiContext;

fn print_or_empty(ctx: &UiContext, rendered: String, is_empty: bool) {
    if is_empty {
        if !ctx.quiet {
            println!("No words in the journal yet.");
        }
    } else {
        println!("{}", rendered);
    }
}

pub fn handle_stats(
    cli: &Cli,
    config: &DaybookConfig,
    command: &StatsCommand,
) -> anyhow::Result<()> {
    let journal = open_journal(cli, config)?;
    let stats = journal.stats();

    match command {
        StatsCommand::Words(args) => {
            let ctx = UiContext::from_env(args.json, cli.quiet);
            let counts = stats.most_common_words(args.limit.unwrap_or(config.stats.words));
            if ctx.mode.is_json() {
                println!("{}", serde_json::to_string_pretty(&word_counts_json(&counts))?);
            } else {
                print_or_empty(&ctx, word_counts(&ctx, &counts), counts.is_empty());
            }
        }
        StatsCommand::Longest(args) => {
            let ctx = UiContext::from_env(args.json, cli.quiet);
            let words = stats.longest_words(args.limit.unwrap_or(config.stats.longest));
            if ctx.mode.is_json() {
                println!("{}", serde_json::to_string_pretty(&longest_words_json(&words))?);
            } else {
                print_or_empty(&ctx, longest_words(&ctx, &words), words.is_empty());
            }
        }
        StatsCommand::Letters(args) => {
            let ctx = UiContext::from_env(args.json, cli.quiet);
            let frequency = stats.most_common_letters();
            if ctx.mode.is_json() {
                println!("{}", serde_json::to_string_pretty(&letters_json(&frequency))?);
            } else {
                println!("{}", letters(&ctx, &frequency));
                if ctx.mode.is_pretty() && !ctx.quiet {
                    println!("Total letters: {}", frequency.total);
                }
            }
        }
        StatsCommand::Combos(args) => {
            let ctx = UiContext::from_env(args.json, cli.quiet);
            let combos = stats.most_common_word_combos(args.limit.unwrap_or(config.stats.combos));
            if ctx.mode.is_json() {
                println!("{}", serde_json::to_string_pretty(&word_combos_json(&combos))?);
            } else {
                print_or_empty(&ctx, word_combos(&ctx, &combos), combos.is_empty());
            }
        }
    }
    Ok(())
}
