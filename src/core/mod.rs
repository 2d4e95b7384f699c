//! Core primitives for scopetheme (no renderer dependencies).

mod color;
mod scope;
mod style;

pub use color::*;
pub use scope::*;
pub use style::*;
