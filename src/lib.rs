//! scopetheme - style resolution for TextMate-style editor themes.
//!
//! A grammar tags text with scope chains such as
//! `["source.python", "keyword.control"]`; a [`Theme`](theme::Theme) turns
//! each chain into a concrete [`Style`](core::Style) by cascading its scope
//! rules from the outermost scope inward.
//!
//! # Quick Start
//!
//! ```rust
//! use scopetheme::prelude::*;
//!
//! let theme = Theme::from_json_str(r##"{
//!     "colors": {"foreground": "#ffffff"},
//!     "tokenColors": [{"scope": "comment", "settings": {"foreground": "#888888", "fontStyle": "italic"}}]
//! }"##)?;
//!
//! let style = theme.resolve_strs(&["source.python", "comment.line"]);
//! assert_eq!(style.fg, Some(Color::new(0x88, 0x88, 0x88)));
//! assert!(style.i);
//! # Ok::<(), ThemeError>(())
//! ```

#![deny(missing_docs)]

pub mod cli;
pub mod core;
pub mod metrics;
pub mod prelude;
pub mod render;
pub mod theme;
