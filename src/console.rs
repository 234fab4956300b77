//! Styled diagnostics on stderr
//!
//! Stdout carries payloads only, so every human-facing message goes here.

use colored::*;

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error followed by its chain of causes
pub fn print_error_chain(err: &anyhow::Error) {
    print_error(&format!("{}", err));

    for cause in err.chain().skip(1) {
        print_error(&format!("  Caused by: {}", cause));
    }
}
