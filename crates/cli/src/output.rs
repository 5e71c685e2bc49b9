//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Score band used to pick a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 90 and above
    Strong,
    /// 70 to 89
    Good,
    /// Below 70
    Weak,
}

impl ScoreBand {
    /// Band for a 0-100 score
    pub fn of(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Strong,
            70..=89 => ScoreBand::Good,
            _ => ScoreBand::Weak,
        }
    }
}

/// Format a match score, colored by band
pub fn format_score(score: u8) -> String {
    let text = format!("{:>3}", score);
    match ScoreBand::of(score) {
        ScoreBand::Strong => text.green().bold().to_string(),
        ScoreBand::Good => text.yellow().to_string(),
        ScoreBand::Weak => text.dimmed().to_string(),
    }
}

/// Join values for display, or a dimmed dash when there are none
pub fn format_list<T: std::fmt::Display>(values: &[T]) -> String {
    if values.is_empty() {
        return "—".dimmed().to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
