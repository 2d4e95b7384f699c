//! Prefix trie over dotted scope names.

use std::collections::HashMap;

use crate::core::{segments, ParseColorError, PartialStyle, RuleSettings, Style};

/// An immutable trie node keyed by scope segments.
///
/// The node reached by `keyword` -> `control` holds the style for
/// `keyword.control`. Nodes created only as intermediate steps carry an
/// empty style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeTrie {
    style: PartialStyle,
    children: HashMap<Box<str>, ScopeTrie>,
}

impl ScopeTrie {
    /// Style stored at this node.
    pub fn style(&self) -> &PartialStyle {
        &self.style
    }

    /// Child node for a single segment.
    pub fn child(&self, segment: &str) -> Option<&ScopeTrie> {
        self.children.get(segment)
    }

    /// Node for an exact dotted scope path.
    pub fn get(&self, scope: &str) -> Option<&ScopeTrie> {
        segments(scope).try_fold(self, |node, part| node.child(part))
    }

    /// Total number of nodes, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(ScopeTrie::node_count).sum::<usize>()
    }

    /// Cascade `scope` onto `base`.
    ///
    /// Walks the longest matching segment prefix, overlaying each reached
    /// node so deeper rules override shallower ones field by field.
    /// Unmatched trailing segments are ignored.
    pub fn cascade(&self, mut base: Style, scope: &str) -> Style {
        let mut node = self;
        for part in segments(scope) {
            match node.child(part) {
                Some(next) => {
                    next.style.overlay_on(&mut base);
                    node = next;
                }
                None => break,
            }
        }
        base
    }
}

/// Mutable trie used while reading theme rules.
///
/// Raw settings are merged per node and only parsed on [`freeze`], so a
/// later rule for the same scope replaces `fontStyle` wholesale rather than
/// accumulating attributes.
///
/// [`freeze`]: TrieBuilder::freeze
#[derive(Debug, Default)]
pub(crate) struct TrieBuilder {
    settings: Option<RuleSettings>,
    children: HashMap<String, TrieBuilder>,
}

impl TrieBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Merge `settings` into the node for `scope`, creating the path.
    pub(crate) fn insert(&mut self, scope: &str, settings: &RuleSettings) {
        let node = segments(scope).fold(self, |node, part| {
            node.children.entry(part.to_string()).or_default()
        });
        node.settings
            .get_or_insert_with(RuleSettings::default)
            .merge_from(settings);
    }

    /// Parse every node's settings and produce the read-only trie.
    pub(crate) fn freeze(self) -> Result<ScopeTrie, ParseColorError> {
        let style = match &self.settings {
            Some(settings) => PartialStyle::from_settings(settings)?,
            None => PartialStyle::default(),
        };
        let children = self
            .children
            .into_iter()
            .map(|(k, v)| Ok((k.into_boxed_str(), v.freeze()?)))
            .collect::<Result<_, ParseColorError>>()?;
        Ok(ScopeTrie { style, children })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn fg(hex: &str) -> RuleSettings {
        RuleSettings {
            foreground: Some(hex.into()),
            ..RuleSettings::default()
        }
    }

    fn font(style: &str) -> RuleSettings {
        RuleSettings {
            font_style: Some(style.into()),
            ..RuleSettings::default()
        }
    }

    #[test]
    fn insert_creates_intermediate_nodes() {
        let mut builder = TrieBuilder::new();
        builder.insert("keyword.control.flow", &fg("#ff0000"));
        let trie = builder.freeze().unwrap();

        assert_eq!(trie.node_count(), 4);
        assert!(trie.get("keyword").unwrap().style().is_empty());
        assert!(trie.get("keyword.control").unwrap().style().is_empty());
        assert_eq!(
            trie.get("keyword.control.flow").unwrap().style().fg,
            Some(Color::new(0xFF, 0, 0))
        );
        assert!(trie.get("keyword.other").is_none());
    }

    #[test]
    fn later_rules_win_per_field() {
        let mut builder = TrieBuilder::new();
        builder.insert("string", &fg("#111111"));
        builder.insert("string", &font("bold"));
        builder.insert("string", &font("italic"));
        let trie = builder.freeze().unwrap();

        let style = trie.get("string").unwrap().style();
        assert_eq!(style.fg, Some(Color::new(0x11, 0x11, 0x11)));
        assert_eq!(style.b, None);
        assert_eq!(style.i, Some(true));
    }

    #[test]
    fn cascade_uses_longest_prefix() {
        let mut builder = TrieBuilder::new();
        builder.insert("keyword", &fg("#ff0000"));
        builder.insert("keyword.control", &font("bold"));
        let trie = builder.freeze().unwrap();

        let style = trie.cascade(Style::blank(), "keyword.control.flow.python");
        assert_eq!(style.fg, Some(Color::new(0xFF, 0, 0)));
        assert!(style.b);

        let style = trie.cascade(Style::blank(), "keyword.operator");
        assert_eq!(style.fg, Some(Color::new(0xFF, 0, 0)));
        assert!(!style.b);
    }

    #[test]
    fn cascade_unknown_scope_keeps_base() {
        let trie = TrieBuilder::new().freeze().unwrap();
        let base = Style {
            b: true,
            ..Style::blank()
        };
        assert_eq!(trie.cascade(base, "nothing.here"), base);
    }

    #[test]
    fn freeze_reports_bad_colors() {
        let mut builder = TrieBuilder::new();
        builder.insert("a.b", &fg("#zz0000"));
        assert_eq!(
            builder.freeze(),
            Err(ParseColorError("#zz0000".into()))
        );
    }
}
