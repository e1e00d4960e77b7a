//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, creates
//! - Red: errors, deletes
//! - Yellow: warnings, dry-run markers
//! - Cyan: keys, hints
//! - Bold: headers
//! - Dimmed: record names, secondary info

use console::{style, StyledObject};
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn styled<D: Display>(value: D) -> StyledObject<D> {
    let s = style(value);
    if colors_enabled() {
        s
    } else {
        s.force_styling(false)
    }
}

/// Print a success message with checkmark.
///
/// Example: `✓ 3 applied`
pub fn success(msg: &str) {
    println!("{} {}", styled("✓").green(), msg);
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", styled("✗").red(), msg);
}

/// Print a warning message to stderr.
pub fn warn(msg: &str) {
    eprintln!("{} {}", styled("⚠").yellow(), msg);
}

/// Print a hint message to stderr.
///
/// Example: `→ run: gh auth login`
pub fn hint(msg: &str) {
    eprintln!("{} {}", styled("→").cyan(), styled(msg).cyan());
}

pub fn header(title: &str) {
    println!("{}", styled(title).bold());
}

/// Print a key-value pair (label dimmed).
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", styled(label).dim(), value);
}

pub fn rule() {
    println!("{}", styled("─".repeat(RULE_WIDTH)).dim());
}

pub fn blank() {
    println!();
}

pub fn dimmed(msg: &str) {
    println!("{}", styled(msg).dim());
}

/// Print machine-readable data as-is.
pub fn data(payload: &str) {
    println!("{}", payload);
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    styled(k).cyan().to_string()
}

/// Format a count in bold.
pub fn count(n: usize) -> String {
    styled(n).bold().to_string()
}

/// One planned or applied change.
///
/// Example: `  + API_TOKEN  ci-gh-secret-api_token-1a2b3c4d`
pub fn change(symbol: char, key_name: &str, record: &str) {
    let symbol = match symbol {
        '+' => styled(symbol).green(),
        '-' => styled(symbol).red(),
        _ => styled(symbol).yellow(),
    };
    println!("  {} {}  {}", symbol, key(key_name), styled(record).dim());
}
