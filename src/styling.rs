//! Styling for terminal output.
//!
//! Uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//! - color-print for the `<tag>` markup used in user-facing messages

use anstyle::{AnsiColor, Color, Style};

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Style Constants
// ============================================================================

/// Gutter style for quoted content (svn stderr, failing commands)
pub const GUTTER: Style = Style::new().bg_color(Some(Color::Ansi(AnsiColor::BrightWhite)));

/// Dimmed style for secondary details
pub const HINT: Style = Style::new().dimmed();

// ============================================================================
// Message Emojis
// ============================================================================

/// Progress emoji: `cformat!("{} <cyan>message</>", PROGRESS_EMOJI)`
pub const PROGRESS_EMOJI: &str = "🔄";

/// Success emoji: `cformat!("{} <green>message</>", SUCCESS_EMOJI)`
pub const SUCCESS_EMOJI: &str = "✅";

/// Error emoji: `cformat!("{} <red>message</>", ERROR_EMOJI)`
pub const ERROR_EMOJI: &str = "❌";

/// Warning emoji: `cformat!("{} <yellow>message</>", WARNING_EMOJI)`
pub const WARNING_EMOJI: &str = "🟡";

/// Info emoji for neutral status lines
pub const INFO_EMOJI: &str = "⚪";

/// Indent every line of `content` behind a one-column gutter.
///
/// Blank input produces an empty string so callers can skip the block entirely.
pub fn format_with_gutter(content: &str) -> String {
    let mut output = String::new();
    for line in content.trim_end().lines() {
        output.push_str(&format!("{GUTTER} {GUTTER:#}  {line}\n"));
    }
    output
}
