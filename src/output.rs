//! User-facing status messages.
//!
//! All messages go to stderr so stdout stays free for machine-readable output.
//! Each helper adds the emoji and color for its message kind; callers pass
//! plain text (which may itself contain color-print markup already rendered).

use color_print::cformat;

use crate::styling::{
    ERROR_EMOJI, HINT, INFO_EMOJI, PROGRESS_EMOJI, SUCCESS_EMOJI, WARNING_EMOJI, eprintln,
    format_with_gutter,
};

pub fn progress(message: impl std::fmt::Display) {
    eprintln!("{}", cformat!("{} <cyan>{}</>", PROGRESS_EMOJI, message));
}

pub fn success(message: impl std::fmt::Display) {
    eprintln!("{}", cformat!("{} <green>{}</>", SUCCESS_EMOJI, message));
}

pub fn info(message: impl std::fmt::Display) {
    eprintln!("{} {HINT}{}{HINT:#}", INFO_EMOJI, message);
}

pub fn warning(message: impl std::fmt::Display) {
    eprintln!("{}", cformat!("{} <yellow>{}</>", WARNING_EMOJI, message));
}

pub fn error(message: impl std::fmt::Display) {
    eprintln!("{}", cformat!("{} <red>{}</>", ERROR_EMOJI, message));
}

/// Print quoted detail (typically a subprocess's stderr) below the previous message.
pub fn gutter(content: &str) {
    let block = format_with_gutter(content);
    if !block.is_empty() {
        anstream::eprint!("{block}");
    }
}
