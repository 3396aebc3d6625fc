//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection
//! via `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // supports-color reads NO_COLOR on every call
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

// Accent: #7CB4C8
const ACCENT: (u8, u8, u8) = (124, 180, 200);

// Success: #6B8F5E
const SUCCESS: (u8, u8, u8) = (107, 143, 94);

// Warning: #C49A5C
const WARNING: (u8, u8, u8) = (196, 154, 92);

// Error: #B87060
const ERROR: (u8, u8, u8) = (184, 112, 96);

// Muted: #5C6370
const MUTED: (u8, u8, u8) = (92, 99, 112);

/// Layout names and other identifiers.
pub fn accent(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(ACCENT.0, ACCENT.1, ACCENT.2))
        .to_string()
}

pub fn success(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(SUCCESS.0, SUCCESS.1, SUCCESS.2))
        .to_string()
}

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

pub fn muted(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    text.if_supports_color(owo_colors::Stream::Stderr, |t| {
        t.truecolor(ERROR.0, ERROR.1, ERROR.2)
    })
    .to_string()
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    text.if_supports_color(owo_colors::Stream::Stderr, |t| {
        t.truecolor(WARNING.0, WARNING.1, WARNING.2)
    })
    .to_string()
}

/// Restored count, colored by how much of the layout came back.
pub fn restore_count(restored: usize, attempted: usize) -> String {
    let text = format!("{}/{}", restored, attempted);
    if restored == 0 {
        error(&text)
    } else if restored < attempted {
        warning(&text)
    } else {
        success(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_functions_contain_original_text() {
        // Regardless of color support, the original text must be present
        assert!(accent("Work").contains("Work"));
        assert!(success("saved").contains("saved"));
        assert!(bold("Header").contains("Header"));
        assert!(muted("hint").contains("hint"));
        assert!(error("error msg").contains("error msg"));
        assert!(warning("careful").contains("careful"));
    }

    #[test]
    fn test_restore_count_text() {
        assert!(restore_count(2, 3).contains("2/3"));
        assert!(restore_count(0, 3).contains("0/3"));
        assert!(restore_count(3, 3).contains("3/3"));
    }
}
