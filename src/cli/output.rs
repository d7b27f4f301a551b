//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use itertools::Itertools;

use crate::config::OutputStyle;
use crate::domain::DigitList;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Render levels: one line per level, or nested brackets.
pub fn format_levels(levels: &[Vec<i64>], style: OutputStyle) -> Vec<String> {
    match style {
        OutputStyle::Plain => levels.iter().map(|level| level.iter().join(" ")).collect(),
        OutputStyle::Bracketed => vec![format!(
            "[{}]",
            levels
                .iter()
                .map(|level| format!("[{}]", level.iter().join(",")))
                .join(",")
        )],
    }
}

/// Render a digit chain, `null` when absent.
pub fn format_digits(list: Option<&DigitList>, style: OutputStyle) -> String {
    match (list, style) {
        (None, _) => "null".to_string(),
        (Some(list), OutputStyle::Plain) => list.iter().join(" "),
        (Some(list), OutputStyle::Bracketed) => list.to_string(),
    }
}
