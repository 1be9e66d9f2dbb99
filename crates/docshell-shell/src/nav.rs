//! Sidebar navigation tree.

use docshell_config::SidebarEntry;
use serde::{Deserialize, Serialize};

/// A sidebar navigation item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Target path, absent for pure group headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Nested items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// Build navigation from configured sidebar entries.
    #[must_use]
    pub fn from_config(entries: &[SidebarEntry]) -> Vec<Self> {
        entries.iter().map(Self::from).collect()
    }

    /// Whether this item links to `slug`.
    ///
    /// Leading and trailing slashes are ignored on both sides.
    pub(crate) fn is_active(&self, slug: Option<&str>) -> bool {
        match (self.link.as_deref(), slug) {
            (Some(link), Some(slug)) => normalize(link) == normalize(slug),
            _ => false,
        }
    }
}

impl From<&SidebarEntry> for NavItem {
    fn from(entry: &SidebarEntry) -> Self {
        Self {
            label: entry.label.clone(),
            link: entry.link.clone(),
            items: NavItem::from_config(&entry.items),
        }
    }
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, link: &str) -> NavItem {
        NavItem {
            label: label.to_owned(),
            link: Some(link.to_owned()),
            items: vec![],
        }
    }

    #[test]
    fn test_from_config_keeps_tree() {
        let entries = vec![SidebarEntry {
            label: "Guides".to_owned(),
            link: None,
            items: vec![SidebarEntry {
                label: "Intro".to_owned(),
                link: Some("/guide/intro".to_owned()),
                items: vec![],
            }],
        }];
        let nav = NavItem::from_config(&entries);
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].link, None);
        assert_eq!(nav[0].items[0], link("Intro", "/guide/intro"));
    }

    #[test]
    fn test_is_active_ignores_slashes() {
        let item = link("Intro", "/guide/intro/");
        assert!(item.is_active(Some("guide/intro")));
        assert!(!item.is_active(Some("guide")));
        assert!(!item.is_active(None));
    }

    #[test]
    fn test_group_never_active() {
        let group = NavItem {
            label: "Guides".to_owned(),
            ..Default::default()
        };
        assert!(!group.is_active(Some("")));
    }
}
