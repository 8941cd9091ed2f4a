use std::{env, fmt};

use colored::Colorize;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

/// Enables or disables ANSI styling for the rest of the process.
///
/// Styling is always off when `NO_COLOR` is set.
pub fn configure_colors(enabled: bool) {
    let no_color = env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    colored::control::set_override(enabled && !no_color);
}

fn style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Info => text,
        MessageKind::Success => format!("[ok] {text}").bright_green().to_string(),
        MessageKind::Warning => format!("[!] {text}").bright_yellow().to_string(),
        MessageKind::Error => format!("[x] {text}").bright_red().to_string(),
        MessageKind::Hint => format!("    {text}").dimmed().to_string(),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = style(kind, message);
    if kind == MessageKind::Section {
        println!("\n{formatted}");
    } else {
        println!("{formatted}");
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints `label  value` rows with labels padded to a common width.
pub fn two_column(rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        let padded = format!("{label:<width$}");
        println!("  {}  {}", padded.bold(), value);
    }
}

/// Renders a left-aligned table; the last column is right-aligned for amounts.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().take(columns).enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                if idx + 1 == columns {
                    format!("{:>width$}", cell, width = widths[idx])
                } else {
                    format!("{:<width$}", cell, width = widths[idx])
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_line = render(headers.iter().map(|header| header.to_string()).collect());
    println!("  {}", header_line.bold());
    for row in rows {
        println!("  {}", render(row.iter().take(columns).cloned().collect()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styles_keep_message_text() {
        colored::control::set_override(false);
        assert_eq!(style(MessageKind::Success, "Saved"), "[ok] Saved");
        assert_eq!(style(MessageKind::Section, " Wallet "), "=== Wallet ===");
        assert_eq!(style(MessageKind::Info, "plain"), "plain");
    }
}
