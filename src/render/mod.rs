//! Projection of resolved styles onto renderer attributes.

mod pairs;

pub use pairs::*;

use ratatui::style::{Color as TuiColor, Modifier};

use crate::core::{Color, Style};

/// Bold attribute bit (curses `A_BOLD`).
pub const A_BOLD: u32 = 0x0020_0000;
/// Underline attribute bit (curses `A_UNDERLINE`).
pub const A_UNDERLINE: u32 = 0x0002_0000;
/// Italic attribute bit (curses `A_ITALIC`).
pub const A_ITALIC: u32 = 0x8000_0000;
/// Bits holding the color pair number.
pub const A_COLOR: u32 = 0x0000_ff00;

/// Attribute bits selecting color pair `pair` (curses `COLOR_PAIR`).
#[inline]
pub const fn color_pair(pair: u16) -> u32 {
    ((pair as u32) << 8) & A_COLOR
}

/// Allocates renderer color pairs for `(fg, bg)` combinations.
pub trait ColorManager {
    /// Pair number for the given colors. `None` is the terminal default.
    fn color_pair(&mut self, fg: Option<Color>, bg: Option<Color>) -> u16;
}

impl Style {
    /// Renderer attribute bits: the color pair plus bold/italic/underline.
    pub fn attr<M: ColorManager + ?Sized>(&self, colors: &mut M) -> u32 {
        let pair = colors.color_pair(self.fg, self.bg);
        let mut attr = color_pair(pair);
        if self.b {
            attr |= A_BOLD;
        }
        if self.i {
            attr |= A_ITALIC;
        }
        if self.u {
            attr |= A_UNDERLINE;
        }
        attr
    }
}

impl From<Color> for TuiColor {
    fn from(c: Color) -> Self {
        TuiColor::Rgb(c.r, c.g, c.b)
    }
}

impl From<Style> for ratatui::style::Style {
    fn from(style: Style) -> Self {
        let mut out = ratatui::style::Style::default();
        if let Some(fg) = style.fg {
            out = out.fg(fg.into());
        }
        if let Some(bg) = style.bg {
            out = out.bg(bg.into());
        }

        let mut modifiers = Modifier::empty();
        if style.b {
            modifiers |= Modifier::BOLD;
        }
        if style.i {
            modifiers |= Modifier::ITALIC;
        }
        if style.u {
            modifiers |= Modifier::UNDERLINED;
        }
        out.add_modifier(modifiers)
    }
}
