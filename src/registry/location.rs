//! Hierarchy of entry locations for presentation
//!
//! Derived from the visible descriptors on demand and never persisted.

use super::types::EntryDescriptor;
use crate::i18n::Labels;

/// One node of the location tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationNode {
    /// Raw segment key, empty for the root
    pub key: String,
    /// Display label (translated segment)
    pub label: String,
    /// Dot-separated raw path from the root, empty for the root
    pub path: String,
    pub children: Vec<LocationNode>,
}

impl LocationNode {
    fn new(key: &str, label: String, path: String) -> Self {
        Self {
            key: key.to_string(),
            label,
            path,
            children: Vec::new(),
        }
    }

    /// Find the child whose label matches case-insensitively
    pub fn child(&self, label: &str) -> Option<&LocationNode> {
        self.children
            .iter()
            .find(|c| c.label.to_lowercase() == label.to_lowercase())
    }

    /// Walk a dot-separated path of raw keys
    pub fn find(&self, path: &str) -> Option<&LocationNode> {
        path.split('.')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, key| {
                node.children.iter().find(|c| c.key.eq_ignore_ascii_case(key))
            })
    }

    /// Depth-first iteration, parents before children
    pub fn walk(&self) -> Vec<(usize, &LocationNode)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}

/// Build the location tree over the visible descriptors
///
/// Siblings keep the order in which they were first discovered.
pub fn build<'a>(
    descriptors: impl IntoIterator<Item = &'a EntryDescriptor>,
    labels: &Labels<'_>,
) -> LocationNode {
    let mut root = LocationNode::new("", labels.root(), String::new());

    for descriptor in descriptors.into_iter().filter(|d| d.visible) {
        let mut current = &mut root;
        for segment in descriptor.location_segments() {
            let label = labels.location_segment(segment);
            let existing = current
                .children
                .iter()
                .position(|c| c.label.to_lowercase() == label.to_lowercase());
            let idx = match existing {
                Some(idx) => idx,
                None => {
                    let path = if current.path.is_empty() {
                        segment.to_string()
                    } else {
                        format!("{}.{}", current.path, segment)
                    };
                    current.children.push(LocationNode::new(segment, label, path));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[idx];
        }
    }

    root
}

/// Whether a descriptor sits exactly at `path` (case-insensitive)
pub fn is_at(descriptor: &EntryDescriptor, path: &str) -> bool {
    let mut wanted = path.split('.').filter(|s| !s.is_empty());
    let mut actual = descriptor.location_segments();
    loop {
        match (wanted.next(), actual.next()) {
            (None, None) => return true,
            (Some(w), Some(a)) if w.eq_ignore_ascii_case(a) => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{MapTranslator, NoTranslation};
    use crate::registry::EntryDescriptorBuilder;

    fn entry(name: &str, location: &str, visible: bool) -> EntryDescriptor {
        EntryDescriptorBuilder::new(name)
            .location(location)
            .flag_type(false)
            .visible(visible)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builds_nested_tree() {
        let entries = vec![
            entry("a", "display", true),
            entry("b", "display.advanced", true),
            entry("c", "audio", true),
            entry("d", "display.advanced", true),
        ];
        let tree = build(&entries, &Labels::new(&NoTranslation));

        assert_eq!(tree.label, "Settings");
        let labels: Vec<_> = tree.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["display", "audio"]);

        let advanced = tree.find("display.advanced").unwrap();
        assert_eq!(advanced.path, "display.advanced");
        assert!(advanced.children.is_empty());
    }

    #[test]
    fn test_hidden_entries_do_not_create_nodes() {
        let entries = vec![entry("a", "internal.window", false), entry("b", "audio", true)];
        let tree = build(&entries, &Labels::new(&NoTranslation));

        assert!(tree.find("internal").is_none());
        assert!(tree.find("audio").is_some());
    }

    #[test]
    fn test_siblings_merge_case_insensitively_by_label() {
        let entries = vec![entry("a", "Display", true), entry("b", "display.fonts", true)];
        let tree = build(&entries, &Labels::new(&NoTranslation));

        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].key, "Display");
        assert!(tree.find("display.fonts").is_some());
    }

    #[test]
    fn test_translated_labels() {
        let mut translator = MapTranslator::default();
        translator.insert("config.location.config", "Einstellungen");
        translator.insert("config.location.audio", "Ton");

        let entries = vec![entry("volume", "audio", true)];
        let tree = build(&entries, &Labels::new(&translator));

        assert_eq!(tree.label, "Einstellungen");
        assert_eq!(tree.children[0].label, "Ton");
        assert_eq!(tree.children[0].key, "audio");
        assert!(tree.child("TON").is_some());
    }

    #[test]
    fn test_walk_order() {
        let entries = vec![entry("a", "x.y", true), entry("b", "z", true)];
        let tree = build(&entries, &Labels::new(&NoTranslation));

        let walked: Vec<_> = tree
            .walk()
            .into_iter()
            .map(|(depth, n)| (depth, n.key.as_str()))
            .collect();
        assert_eq!(walked, vec![(0, ""), (1, "x"), (2, "y"), (1, "z")]);
    }

    #[test]
    fn test_is_at() {
        let e = entry("a", "display.advanced", true);
        assert!(is_at(&e, "display.advanced"));
        assert!(is_at(&e, "Display.Advanced"));
        assert!(!is_at(&e, "display"));
        assert!(!is_at(&e, "display.advanced.more"));
    }
}
