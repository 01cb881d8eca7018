//! Styled terminal lines. Colors are dropped when `NO_COLOR` is set.

use console::style;

/// Kind of decorated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Header,
    Warning,
    Error,
}

/// Whether the user asked for plain output.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Decorate `text` for its tone, with or without ANSI colors.
#[must_use]
pub fn decorate(tone: Tone, text: &str, color: bool) -> String {
    match (tone, color) {
        (Tone::Header, false) => format!("=== {text} ==="),
        (Tone::Header, true) => style(format!("=== {text} ===")).bold().cyan().to_string(),
        (Tone::Warning, false) => format!("[WARN] {text}"),
        (Tone::Warning, true) => format!("{} {text}", style("[WARN]").yellow().bold()),
        (Tone::Error, false) => format!("[ERROR] {text}"),
        (Tone::Error, true) => format!("{} {text}", style("[ERROR]").red().bold()),
    }
}

/// Section header on stdout.
pub fn print_header(text: &str) {
    println!("{}", decorate(Tone::Header, text, !is_color_disabled()));
}

/// Warning on stderr.
pub fn print_warning(text: &str) {
    eprintln!("{}", decorate(Tone::Warning, text, !is_color_disabled()));
}

/// Error on stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", decorate(Tone::Error, text, !is_color_disabled()));
}
