//! Line-level terminal output.
//!
//! Every line goes out as a tracing event under [`PRINT_TARGET`] and is
//! rendered verbatim by the subscriber.

use appraisr_common::config::Config;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const RULE_WIDTH: usize = 64;

/// Target of events that carry terminal output rather than log records.
pub const PRINT_TARGET: &str = "appraisr::print";

pub fn line(text: impl AsRef<str>) {
    info!(target: PRINT_TARGET, raw_msg = text.as_ref());
}

pub fn blank() {
    line("");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }
    let title = format!(" appraisr {} ", env!("CARGO_PKG_VERSION"));
    line(ruled(&title, "═", Color::BrightGreen));
}

/// A rule with `title` centered in it. Hidden when quiet.
pub fn section(title: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    line(ruled(&format!(" {} ", title.to_uppercase()), "─", colors::ACCENT));
}

pub fn closing_rule(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    line(format!("{}", "═".repeat(RULE_WIDTH).color(colors::SEPARATOR)));
}

/// Aligned `key....: value` lines. The column follows the longest key given.
pub fn key_values(pairs: &[(String, ColoredString)]) {
    let width = key_width(pairs);
    for (key, value) in pairs {
        line(format!(
            "{} {} {}",
            "•".color(colors::SEPARATOR),
            padded(key.color(colors::PRIMARY), key, width),
            value
        ));
    }
}

/// Same alignment as [`key_values`], drawn as branches under `root`.
pub fn tree(root: &str, pairs: &[(String, ColoredString)]) {
    line(format!("{}", format!("[{}]", root.color(colors::SECONDARY)).color(colors::SEPARATOR)));

    let width = key_width(pairs);
    for (i, (key, value)) in pairs.iter().enumerate() {
        let branch = if i + 1 == pairs.len() { "└─" } else { "├─" };
        line(format!(
            " {} {} {}",
            branch.color(colors::SEPARATOR),
            padded(key.color(colors::TEXT_DEFAULT), key, width),
            value
        ));
    }
}

pub fn notice(msg: &str) {
    line(format!("{}", msg.color(colors::FAILURE).bold()));
}

fn ruled(title: &str, fill: &str, color: Color) -> String {
    let room = RULE_WIDTH.saturating_sub(UnicodeWidthStr::width(title));
    let left = room / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        title.color(color).bold(),
        fill.repeat(room - left).color(colors::SEPARATOR)
    )
}

fn key_width(pairs: &[(String, ColoredString)]) -> usize {
    pairs
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0)
}

/// `styled` followed by dots up to `width` and a colon. `raw` is measured.
fn padded(styled: ColoredString, raw: &str, width: usize) -> String {
    let dots = width + 1 - UnicodeWidthStr::width(raw).min(width);
    format!(
        "{}{}",
        styled,
        format!("{}:", ".".repeat(dots)).color(colors::SEPARATOR)
    )
}
