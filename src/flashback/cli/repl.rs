use super::print::{print_card, print_cards, print_error, print_help, print_messages};
use super::AppContext;
use colored::Colorize;
use flashback::commands::CmdResult;
use flashback::error::{FlashbackError, Result};
use flashback::index::Index;
use flashback::model::Flashcard;
use flashback::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const PROMPT: &str = "flashback> ";

/// Reads commands until `exit` or end of input.
pub(super) fn run<R: BufRead>(
    ctx: &mut AppContext,
    input: &mut R,
    interactive: bool,
) -> Result<()> {
    while let Some(line) = read_line(input, interactive.then_some(PROMPT))? {
        if line.trim().is_empty() {
            continue;
        }

        let before = history_position(ctx);
        let aliases_before = ctx.session.aliases().clone();

        let result = match ctx.session.execute(&line) {
            Ok(result) => result,
            Err(e) => {
                print_error(&e);
                continue;
            }
        };

        print_messages(&result.messages);
        render(ctx, &result)?;

        if history_position(ctx) != before {
            save_deck(ctx)?;
        }
        if ctx.session.aliases() != &aliases_before {
            ctx.config.set_aliases(ctx.session.aliases());
            ctx.config.save(&ctx.data_dir)?;
            debug!("Saved aliases to config");
        }

        if result.review_mode {
            review(ctx, &result.listed, input, interactive)?;
        }
        if result.exit {
            break;
        }
    }
    info!("Session ended");
    Ok(())
}

fn render(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if result.show_help {
        print_help();
    }
    if let Some(index) = result.view_index {
        let card = ctx.session.card_at(index)?;
        print_card(index, &card);
    }
    if !result.listed.is_empty() && !result.review_mode {
        print_cards(&result.listed);
    }
    Ok(())
}

/// Walks through `cards`: question, wait, answer, then a y/n verdict that is
/// recorded on the card. `q` at the verdict prompt, or end of input, stops
/// the review early.
fn review<R: BufRead>(
    ctx: &mut AppContext,
    cards: &[Flashcard],
    input: &mut R,
    interactive: bool,
) -> Result<()> {
    let total = cards.len();
    let mut reviewed = 0;
    let mut correct = 0;

    for (i, card) in cards.iter().enumerate() {
        println!(
            "{} {}",
            format!("[{}/{}]", i + 1, total).yellow(),
            card.question.as_str().bold()
        );
        let reveal = interactive.then_some("Press Enter to show the answer ");
        if read_line(input, reveal)?.is_none() {
            break;
        }
        println!("{} {}", "Answer:".dimmed(), card.answer);

        let verdict = match ask_verdict(input, interactive)? {
            Some(verdict) => verdict,
            None => break,
        };
        ctx.session.record_review(Index::from_zero_based(i), verdict)?;
        save_deck(ctx)?;

        reviewed += 1;
        if verdict {
            correct += 1;
        }
    }

    println!(
        "{}",
        format!("Review finished: {}/{} correct", correct, reviewed).green()
    );
    Ok(())
}

fn ask_verdict<R: BufRead>(input: &mut R, interactive: bool) -> Result<Option<bool>> {
    let prompt = interactive.then_some("Did you get it right? (y/n/q) ");
    loop {
        let line = match read_line(input, prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            "q" | "quit" => return Ok(None),
            _ => println!("{}", "Please answer y, n or q.".yellow()),
        }
    }
}

fn read_line<R: BufRead>(input: &mut R, prompt: Option<&str>) -> Result<Option<String>> {
    if let Some(prompt) = prompt {
        print!("{}", prompt);
        io::stdout().flush().map_err(FlashbackError::Io)?;
    }
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(FlashbackError::Io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn history_position(ctx: &AppContext) -> (usize, usize) {
    let history = ctx.session.history();
    (history.cursor(), history.len())
}

fn save_deck(ctx: &AppContext) -> Result<()> {
    ctx.deck_file.save(&ctx.session.store().snapshot())
}
