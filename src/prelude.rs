//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use scopetheme::prelude::*;
//! ```

pub use crate::core::{Color, ParseColorError, PartialStyle, Style};
pub use crate::render::{ColorManager, ColorMode, PairTable};
pub use crate::theme::{ScopeTrie, Theme, ThemeError, ThemeSlot};
