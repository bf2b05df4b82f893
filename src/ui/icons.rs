//! Verdict glyphs.
//!
//! Terminals that can show emoji get check and cross marks; everything
//! else (pipes, CI logs, Windows consoles) gets bracketed text.

use console::Term;

use super::theme::DoctorTheme;
use crate::checks::Verdict;

/// Glyphs used in the Result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub pass: &'static str,
    pub fail: &'static str,
}

impl GlyphSet {
    /// Unicode marks for terminals.
    pub fn unicode() -> Self {
        Self {
            pass: "✔",
            fail: "✖",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed() -> Self {
        Self {
            pass: "[ok]",
            fail: "[FAIL]",
        }
    }

    /// Pick glyphs for stdout.
    pub fn detect() -> Self {
        if Term::stdout().features().wants_emoji() {
            Self::unicode()
        } else {
            Self::bracketed()
        }
    }

    pub fn glyph(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Pass => self.pass,
            Verdict::Fail => self.fail,
        }
    }

    /// Styled glyph using the given theme.
    pub fn styled(&self, verdict: Verdict, theme: &DoctorTheme) -> String {
        theme.verdict(verdict).apply_to(self.glyph(verdict)).to_string()
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::unicode()
    }
}
