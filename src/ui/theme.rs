//! Visual theme and styling.

use console::Style;

use crate::checks::Verdict;

/// devdoctor's visual theme.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for the table title and headers (cyan).
    pub primary: Style,
    /// Style for passing rows (green).
    pub success: Style,
    /// Style for the summary when something failed (yellow).
    pub warning: Style,
    /// Style for failing rows and errors (red).
    pub error: Style,
    /// Style for running checks (blue).
    pub info: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            primary: Style::new().cyan(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().blue(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            primary: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            border: Style::new(),
        }
    }

    /// Theme for the given color preference.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style matching a verdict.
    pub fn verdict(&self, verdict: Verdict) -> &Style {
        match verdict {
            Verdict::Pass => &self.success,
            Verdict::Fail => &self.error,
        }
    }

    /// Style each line of `text` on its own.
    ///
    /// Table cells are laid out line by line, so escape sequences must not
    /// span a newline.
    pub fn paint_lines(&self, style: &Style, text: &str) -> String {
        text.lines()
            .map(|line| style.apply_to(line).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("error: {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = DoctorTheme::plain();
        assert_eq!(theme.paint_lines(&theme.error, "a\nb"), "a\nb");
        assert_eq!(theme.format_error("boom"), "error: boom");
    }

    #[test]
    fn paint_lines_styles_each_line() {
        let theme = DoctorTheme::new();
        let style = theme.success.clone().force_styling(true);
        let painted = theme.paint_lines(&style, "one\ntwo");

        let lines: Vec<&str> = painted.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.starts_with('\u{1b}'));
            assert!(line.ends_with("\u{1b}[0m"));
        }
    }

    #[test]
    fn paint_lines_empty_is_empty() {
        let theme = DoctorTheme::new();
        assert_eq!(theme.paint_lines(&theme.success, ""), "");
    }

    #[test]
    fn verdict_styles() {
        let theme = DoctorTheme::new();
        let pass = theme.verdict(Verdict::Pass).clone().force_styling(true);
        let fail = theme.verdict(Verdict::Fail).clone().force_styling(true);
        assert_ne!(pass.apply_to("x").to_string(), fail.apply_to("x").to_string());
    }

    #[test]
    fn for_colors_selects_theme() {
        let plain = DoctorTheme::for_colors(false);
        assert_eq!(plain.success.apply_to("ok").to_string(), "ok");
    }
}
