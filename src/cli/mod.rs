//! Commands for the `scopetheme` inspection binary.

use std::path::Path;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

use crate::core::{Color, Style};
use crate::theme::{Theme, ThemeError};

/// Load the theme at `path`, falling back to the builtin theme on failure.
///
/// `None` means the per-user theme path. Load errors are logged rather than
/// returned so the caller always ends up with a usable theme.
pub fn load_theme_or_builtin(path: Option<&Path>) -> Result<Theme, ThemeError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match Theme::user_theme_path() {
            Some(p) => p,
            None => return Theme::builtin(),
        },
    };

    match Theme::load(&path) {
        Ok(theme) => Ok(theme),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "theme failed to load, using builtin");
            Theme::builtin()
        }
    }
}

/// One-line human readable description of a style.
pub fn describe_style(style: &Style) -> String {
    let color = |c: Option<Color>| c.map_or_else(|| "default".to_string(), |c| c.to_string());

    let mut out = format!("fg={} bg={}", color(style.fg), color(style.bg));
    for (set, name) in [(style.b, "bold"), (style.i, "italic"), (style.u, "underline")] {
        if set {
            out.push(' ');
            out.push_str(name);
        }
    }
    out
}

/// `text` wrapped in the escape sequences for `style`.
pub fn preview(style: &Style, text: &str) -> String {
    let to_term = |c: Color| TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    };

    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.map(to_term);
    content.background_color = style.bg.map(to_term);
    if style.b {
        content.attributes.set(Attribute::Bold);
    }
    if style.i {
        content.attributes.set(Attribute::Italic);
    }
    if style.u {
        content.attributes.set(Attribute::Underlined);
    }

    content.apply(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_set_attributes() {
        let style = Style {
            fg: Some(Color::new(0x88, 0x88, 0x88)),
            bg: None,
            b: true,
            i: false,
            u: true,
        };
        assert_eq!(describe_style(&style), "fg=#888888 bg=default bold underline");
        assert_eq!(describe_style(&Style::blank()), "fg=default bg=default");
    }

    #[test]
    fn preview_of_blank_style_is_plain_text() {
        assert_eq!(preview(&Style::blank(), "x"), "x");
    }

    #[test]
    fn preview_contains_text() {
        let style = Style {
            fg: Some(Color::new(255, 0, 0)),
            ..Style::blank()
        };
        let out = preview(&style, "hello");
        assert!(out.contains("hello"));
        assert!(out.starts_with('\u{1b}'));
    }

    #[test]
    fn missing_theme_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let theme = load_theme_or_builtin(Some(&dir.path().join("missing.json"))).unwrap();
        assert_eq!(
            theme.default_style(),
            Theme::builtin().unwrap().default_style()
        );
    }

    #[test]
    fn broken_theme_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let theme = load_theme_or_builtin(Some(&path)).unwrap();
        assert_eq!(
            theme.default_style(),
            Theme::builtin().unwrap().default_style()
        );
    }
}
