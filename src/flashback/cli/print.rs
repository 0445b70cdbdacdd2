use colored::Colorize;
use flashback::commands::{CmdMessage, CommandWord, MessageLevel};
use flashback::error::{ErrorKind, FlashbackError};
use flashback::fields::Priority;
use flashback::index::Index;
use flashback::model::Flashcard;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const PRIORITY_WIDTH: usize = 6;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_error(err: &FlashbackError) {
    match err.kind() {
        ErrorKind::Format | ErrorKind::UnknownCommand => println!("{}", err.to_string().yellow()),
        _ => println!("{}", err.to_string().red()),
    }
}

pub(super) fn print_help() {
    println!("{}", "Commands".bold());
    for word in CommandWord::ALL {
        println!();
        println!("{}", word.usage());
    }
}

pub(super) fn print_cards(cards: &[Flashcard]) {
    for (i, card) in cards.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let mut summary = format!("{} ({})", card.question, card.category);
        for tag in &card.tags {
            summary.push(' ');
            summary.push_str(&tag.to_string());
        }

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + PRIORITY_WIDTH + 1);
        let summary_display = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary_display.width());

        println!(
            "{}{}{} {}",
            idx_str.yellow(),
            summary_display,
            " ".repeat(padding),
            colored_priority(card.priority)
        );
    }
}

pub(super) fn print_card(index: Index, card: &Flashcard) {
    println!("{} {}", index.to_string().yellow(), card.question.as_str().bold());
    println!("--------------------------------");
    println!("Answer:   {}", card.answer);
    println!("Category: {}", card.category);
    println!("Priority: {}", colored_priority(card.priority));
    if !card.tags.is_empty() {
        let tags: Vec<String> = card.tags.iter().map(ToString::to_string).collect();
        println!("Tags:     {}", tags.join(" "));
    }
    println!("{}", card.stats.to_string().dimmed());
}

fn colored_priority(priority: Priority) -> colored::ColoredString {
    let label = format!("{:>width$}", priority.to_string(), width = PRIORITY_WIDTH);
    match priority {
        Priority::High => label.red(),
        Priority::Mid => label.yellow(),
        Priority::Low => label.green(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("What is 2+2?", 20), "What is 2+2?");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate_to_width("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert_eq!(out.width(), 5);
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        let out = truncate_to_width("日本語の質問です", 7);
        assert!(out.width() <= 7);
        assert!(out.ends_with('…'));
    }
}
