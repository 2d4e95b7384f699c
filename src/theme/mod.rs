//! Theme loading and scope-chain style resolution.

mod document;
mod trie;

pub use document::*;
pub use trie::ScopeTrie;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::{is_descendant_selector, Color, PartialStyle, Style};
use crate::metrics::{Phase, Timer};
use trie::TrieBuilder;

/// Theme compiled into the binary, used when no theme file exists.
const BUILTIN_THEME: &str = include_str!("default-theme.json");

/// A loaded theme: a default style plus scope rules.
///
/// Immutable once built, apart from the resolution cache. Switching themes
/// means building a new `Theme` (see [`ThemeSlot`]).
#[derive(Debug)]
pub struct Theme {
    default: Style,
    rules: ScopeTrie,
    /// Resolved styles keyed by scope chain, including every prefix.
    cache: RwLock<HashMap<Vec<String>, Style>>,
}

impl Theme {
    /// Create a theme from an already built default style and rule trie.
    pub fn new(default: Style, rules: ScopeTrie) -> Self {
        Self {
            default,
            rules,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load a theme file, or the builtin theme if `path` does not exist.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let _timer = Timer::start(Phase::Load);

        if !path.exists() {
            tracing::info!(path = %path.display(), "no theme file, using builtin theme");
            return Self::builtin();
        }

        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            nodes = theme.rules.node_count(),
            "loaded theme"
        );
        Ok(theme)
    }

    /// The builtin default theme.
    pub fn builtin() -> Result<Self, ThemeError> {
        Self::from_json_str(BUILTIN_THEME)
    }

    /// Per-user theme location (`~/.config/scopetheme/theme.json`).
    pub fn user_theme_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scopetheme").join("theme.json"))
    }

    /// Build a theme from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, ThemeError> {
        Self::from_document(&ThemeDocument::from_json_str(s)?)
    }

    /// Build a theme from a parsed document.
    ///
    /// Fails on the first malformed color; a theme is never half built.
    /// Descendant selectors (`"meta.tag string"`) are skipped.
    pub fn from_document(doc: &ThemeDocument) -> Result<Self, ThemeError> {
        let _timer = Timer::start(Phase::Build);

        let mut default = Style::blank();
        if let Some(fg) = doc.color_role(&["foreground", "editor.foreground"])? {
            default.fg = Some(Color::parse(fg)?);
        }
        if let Some(bg) = doc.color_role(&["background", "editor.background"])? {
            default.bg = Some(Color::parse(bg)?);
        }

        let mut builder = TrieBuilder::new();
        for rule in doc.rules() {
            // Parsed up front so colors a later rule overrides are still validated.
            let style = PartialStyle::from_settings(&rule.settings)?;
            let scopes = match &rule.scope {
                Some(spec) => spec.scopes(),
                None => vec![""],
            };

            for scope in scopes {
                if is_descendant_selector(scope) {
                    tracing::debug!(scope, "skipping descendant selector");
                } else if scope.is_empty() {
                    style.overlay_on(&mut default);
                } else {
                    builder.insert(scope, &rule.settings);
                }
            }
        }

        Ok(Self::new(default, builder.freeze()?))
    }

    /// Style for text outside any scope.
    pub fn default_style(&self) -> Style {
        self.default
    }

    /// Root of the rule trie.
    pub fn rules(&self) -> &ScopeTrie {
        &self.rules
    }

    /// Number of memoized scope chains.
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Resolve the style for a scope chain, outermost scope first.
    ///
    /// Each scope cascades onto the style of the chain before it, so every
    /// prefix is resolved (and cached) on the way. Never fails: unknown
    /// scopes fall back to whatever their enclosing scopes produced.
    pub fn resolve(&self, chain: &[String]) -> Style {
        let Some((last, parent)) = chain.split_last() else {
            return self.default;
        };

        let cached = self.cache.read().get(chain).copied();
        if let Some(style) = cached {
            return style;
        }

        let style = self.rules.cascade(self.resolve(parent), last);
        // A racing resolver may have inserted first; both computed the same value.
        *self.cache.write().entry(chain.to_vec()).or_insert(style)
    }

    /// [`resolve`](Self::resolve) for borrowed scope names.
    ///
    /// Copies the chain into owned strings on every call, cache hit or not.
    /// Renderers resolving per token should keep a `Vec<String>` scope stack
    /// and call [`resolve`](Self::resolve), which does not allocate on a hit.
    pub fn resolve_strs(&self, chain: &[&str]) -> Style {
        let owned: Vec<String> = chain.iter().map(|s| s.to_string()).collect();
        self.resolve(&owned)
    }
}

/// Shared handle to the active theme.
///
/// Replacing the theme swaps the `Arc`; callers holding the previous theme
/// keep resolving against it undisturbed.
#[derive(Debug)]
pub struct ThemeSlot {
    current: RwLock<Arc<Theme>>,
}

impl ThemeSlot {
    /// Create a slot holding `theme`.
    pub fn new(theme: Theme) -> Self {
        Self {
            current: RwLock::new(Arc::new(theme)),
        }
    }

    /// The active theme.
    pub fn current(&self) -> Arc<Theme> {
        self.current.read().clone()
    }

    /// Install a new theme, returning the previous one.
    pub fn replace(&self, theme: Theme) -> Arc<Theme> {
        std::mem::replace(&mut *self.current.write(), Arc::new(theme))
    }
}
