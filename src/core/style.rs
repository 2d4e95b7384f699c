//! Partial and fully-resolved text styles.

use serde::{Deserialize, Serialize};

use super::color::{Color, ParseColorError};

/// A fully resolved, renderer-ready style.
///
/// Colors may be `None` (terminal default); attributes are always concrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Bold.
    pub b: bool,
    /// Italic.
    pub i: bool,
    /// Underline.
    pub u: bool,
}

impl Style {
    /// No colors, no attributes.
    pub const fn blank() -> Self {
        Self {
            fg: None,
            bg: None,
            b: false,
            i: false,
            u: false,
        }
    }
}

/// Raw `settings` record of a theme rule, before color parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSettings {
    /// Foreground color string.
    #[serde(default)]
    pub foreground: Option<String>,
    /// Background color string.
    #[serde(default)]
    pub background: Option<String>,
    /// Single font style keyword (`bold`, `italic` or `underline`).
    #[serde(default)]
    pub font_style: Option<String>,
}

impl RuleSettings {
    /// Overwrite fields of `self` with the fields `other` sets.
    pub fn merge_from(&mut self, other: &RuleSettings) {
        if other.foreground.is_some() {
            self.foreground.clone_from(&other.foreground);
        }
        if other.background.is_some() {
            self.background.clone_from(&other.background);
        }
        if other.font_style.is_some() {
            self.font_style.clone_from(&other.font_style);
        }
    }
}

/// A style fragment where every field may be left unset.
///
/// Unset is distinct from `false`: overlaying `i: None` keeps an inherited
/// italic, while `i: Some(false)` would clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PartialStyle {
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Bold.
    pub b: Option<bool>,
    /// Italic.
    pub i: Option<bool>,
    /// Underline.
    pub u: Option<bool>,
}

impl PartialStyle {
    /// Parse a rule's settings record.
    ///
    /// `fontStyle` carries a single keyword, so at most one of bold, italic
    /// and underline is set. Combined values like `"bold italic"` set nothing.
    pub fn from_settings(settings: &RuleSettings) -> Result<Self, ParseColorError> {
        let mut style = Self::default();
        if let Some(fg) = &settings.foreground {
            style.fg = Some(Color::parse(fg)?);
        }
        if let Some(bg) = &settings.background {
            style.bg = Some(Color::parse(bg)?);
        }
        match settings.font_style.as_deref() {
            Some("bold") => style.b = Some(true),
            Some("italic") => style.i = Some(true),
            Some("underline") => style.u = Some(true),
            _ => {}
        }
        Ok(style)
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every set field onto `style`, leaving the rest untouched.
    #[inline]
    pub fn overlay_on(&self, style: &mut Style) {
        if let Some(fg) = self.fg {
            style.fg = Some(fg);
        }
        if let Some(bg) = self.bg {
            style.bg = Some(bg);
        }
        if let Some(b) = self.b {
            style.b = b;
        }
        if let Some(i) = self.i {
            style.i = i;
        }
        if let Some(u) = self.u {
            style.u = u;
        }
    }
}
