use colored::{ColoredString, Colorize};

use crate::domain::value_objects::log_level::LogLevel;

const HIGH_USAGE: f64 = 90.0;
const ELEVATED_USAGE: f64 = 70.0;
const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Horizontal gauge of `width` cells for a 0-100 percentage.
#[must_use]
pub fn usage_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let gauge = "█".repeat(filled);
    let painted = if percent >= HIGH_USAGE {
        gauge.red().bold()
    } else if percent >= ELEVATED_USAGE {
        gauge.yellow()
    } else {
        gauge.green()
    };

    format!("{painted}{}", "░".repeat(empty))
}

#[must_use]
pub fn colorize_percent(percent: f64) -> ColoredString {
    let text = format!("{percent:.1}%");
    if percent >= HIGH_USAGE {
        text.red().bold()
    } else if percent >= ELEVATED_USAGE {
        text.yellow()
    } else {
        text.green()
    }
}

#[must_use]
pub fn level_badge(level: LogLevel) -> ColoredString {
    let label = format!("{:<7}", level.as_str().to_uppercase());
    match level {
        LogLevel::Error => label.red().bold(),
        LogLevel::Warning => label.yellow(),
    }
}

#[must_use]
pub fn bytes_as_gb(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let gb = bytes as f64 / BYTES_PER_GB;
    format!("{gb:.2} GB")
}

/// Title line followed by an underline of the same width.
#[must_use]
pub fn section_header(title: &str) -> String {
    let underline = "─".repeat(title.chars().count());
    format!("{}\n{}", title.bold().cyan(), underline.cyan())
}
