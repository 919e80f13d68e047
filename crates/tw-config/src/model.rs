//! Site configuration model.
//!
//! The serialized field names are the contract with the site engine and must
//! stay stable: `basePath`, `iconReference`, `sidebarMap` and so on.

use serde::{Deserialize, Serialize};

use crate::builder::SiteConfigBuilder;
use crate::route::join_base;
use crate::sidebar::SidebarMap;

/// Root configuration aggregate handed to the site engine.
///
/// Built once per process and never mutated afterwards. A reload builds a new
/// value (see [`ConfigHandle`](crate::ConfigHandle)).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Prefix for all routes and asset URLs. Empty means domain root.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_path: String,
    /// Site title.
    #[serde(default)]
    pub title: String,
    /// Site description.
    #[serde(default)]
    pub description: String,
    /// Favicon path, resolved relative to `base_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_reference: Option<String>,
    /// Logo shown in the navigation bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Show last-updated timestamps on pages.
    #[serde(default)]
    pub last_updated: bool,
    /// Search provider the engine should enable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchProvider>,
    /// Heading levels included in the on-page outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_depth_range: Option<OutlineRange>,
    /// Top-level navigation bar entries, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavigationEntry>,
    /// Section-scoped sidebars keyed by route prefix.
    #[serde(default, skip_serializing_if = "SidebarMap::is_empty")]
    pub sidebar_map: SidebarMap,
    /// Footer/social icon links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_links: Vec<ExternalLink>,
}

impl SiteConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder(title: impl Into<String>, description: impl Into<String>) -> SiteConfigBuilder {
        SiteConfigBuilder::new(title, description)
    }

    /// Resolve an asset path against the base path.
    #[must_use]
    pub fn resolve_asset(&self, path: &str) -> String {
        join_base(&self.base_path, path)
    }

    /// Resolved favicon URL, if an icon is configured.
    #[must_use]
    pub fn icon_href(&self) -> Option<String> {
        self.icon_reference
            .as_deref()
            .map(|icon| self.resolve_asset(icon))
    }

    /// Sidebar items to display for a route.
    ///
    /// Shorthand for [`SidebarMap::sidebar_for`].
    #[must_use]
    pub fn sidebar_for(&self, route: &str) -> &[SidebarItem] {
        self.sidebar_map.sidebar_for(route)
    }
}

/// Search provider declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Engine-built local (in-browser) index.
    Local,
}

/// Inclusive heading level range for the on-page outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRange(pub u8, pub u8);

impl OutlineRange {
    /// Lowest heading level shown.
    #[must_use]
    pub fn min(self) -> u8 {
        self.0
    }

    /// Deepest heading level shown.
    #[must_use]
    pub fn max(self) -> u8 {
        self.1
    }
}

impl Default for OutlineRange {
    fn default() -> Self {
        Self(2, 3)
    }
}

/// Entry in the top navigation bar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display text.
    #[serde(default)]
    pub label: String,
    /// Absolute site path or external URL.
    #[serde(default)]
    pub target: String,
}

impl NavigationEntry {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Icon link shown in the footer/social area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Icon name understood by the theme (e.g. `github`).
    #[serde(default)]
    pub icon: String,
    /// Link URL.
    #[serde(default)]
    pub url: String,
}

impl ExternalLink {
    /// Create an external link.
    #[must_use]
    pub fn new(icon: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            url: url.into(),
        }
    }
}

/// Sidebar node: a nested group or a page link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Nested section.
    Group(SidebarGroup),
    /// Page link.
    Leaf(SidebarLeaf),
}

impl SidebarItem {
    /// Display label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.label.as_deref(),
            Self::Leaf(leaf) => Some(&leaf.label),
        }
    }

    /// Link the item navigates to: the leaf target or the group landing page.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.root_link.as_deref(),
            Self::Leaf(leaf) => Some(&leaf.target),
        }
    }
}

impl From<SidebarGroup> for SidebarItem {
    fn from(group: SidebarGroup) -> Self {
        Self::Group(group)
    }
}

impl From<SidebarLeaf> for SidebarItem {
    fn from(leaf: SidebarLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

/// Sidebar section containing further items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarGroup {
    /// Section heading. Required for collapsible groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Landing page of the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_link: Option<String>,
    /// Whether the group can be toggled.
    #[serde(default)]
    pub collapsible: bool,
    /// Initial state; only meaningful for collapsible groups.
    #[serde(default)]
    pub collapsed_by_default: bool,
    /// Child items in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
}

impl SidebarGroup {
    /// Create a labelled group.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Set the landing page.
    #[must_use]
    pub fn root_link(mut self, link: impl Into<String>) -> Self {
        self.root_link = Some(link.into());
        self
    }

    /// Make the group collapsible and start it collapsed.
    #[must_use]
    pub fn collapsed(mut self) -> Self {
        self.collapsible = true;
        self.collapsed_by_default = true;
        self
    }

    /// Make the group collapsible and start it expanded.
    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.collapsible = true;
        self.collapsed_by_default = false;
        self
    }

    /// Append a child item.
    #[must_use]
    pub fn item(mut self, item: impl Into<SidebarItem>) -> Self {
        self.children.push(item.into());
        self
    }

    /// Append a page link.
    #[must_use]
    pub fn page(self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.item(SidebarLeaf::new(label, target))
    }
}

/// Terminal sidebar link to a content document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLeaf {
    /// Display text.
    #[serde(default)]
    pub label: String,
    /// Document path.
    #[serde(default)]
    pub target: String,
}

impl SidebarLeaf {
    /// Create a page link.
    #[must_use]
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(SiteConfig: Send, Sync);

    #[test]
    fn test_icon_href_with_base_path() {
        let config = SiteConfig {
            base_path: "/TimegeekerWiki/".to_owned(),
            icon_reference: Some("/favicon.ico".to_owned()),
            ..SiteConfig::default()
        };

        assert_eq!(
            config.icon_href().as_deref(),
            Some("/TimegeekerWiki/favicon.ico")
        );
    }

    #[test]
    fn test_icon_href_without_base_path() {
        let config = SiteConfig {
            icon_reference: Some("/favicon.ico".to_owned()),
            ..SiteConfig::default()
        };

        assert_eq!(config.icon_href().as_deref(), Some("/favicon.ico"));
    }

    #[test]
    fn test_icon_href_none() {
        assert!(SiteConfig::default().icon_href().is_none());
    }

    #[test]
    fn test_group_helpers() {
        let group = SidebarGroup::new("OS")
            .root_link("/back-end/os/")
            .collapsed()
            .page("Basics", "/back-end/os/basic");

        assert_eq!(group.label.as_deref(), Some("OS"));
        assert_eq!(group.root_link.as_deref(), Some("/back-end/os/"));
        assert!(group.collapsible);
        assert!(group.collapsed_by_default);
        assert_eq!(
            group.children,
            vec![SidebarItem::Leaf(SidebarLeaf::new(
                "Basics",
                "/back-end/os/basic"
            ))]
        );
    }

    #[test]
    fn test_item_label_and_link() {
        let leaf = SidebarItem::from(SidebarLeaf::new("volatile", "/back-end/concurrent/volatile"));
        assert_eq!(leaf.label(), Some("volatile"));
        assert_eq!(leaf.link(), Some("/back-end/concurrent/volatile"));

        let group = SidebarItem::from(SidebarGroup::default());
        assert_eq!(group.label(), None);
        assert_eq!(group.link(), None);
    }

    #[test]
    fn test_sidebar_item_serialization_is_tagged() {
        let item = SidebarItem::from(SidebarGroup::new("Java").root_link("/back-end/java/"));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["kind"], "group");
        assert_eq!(json["label"], "Java");
        assert_eq!(json["rootLink"], "/back-end/java/");
        assert_eq!(json["collapsible"], false);
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_sidebar_leaf_serialization_is_tagged() {
        let item = SidebarItem::from(SidebarLeaf::new("VitePress", "/front-end/vitepress"));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["kind"], "leaf");
        assert_eq!(json["label"], "VitePress");
        assert_eq!(json["target"], "/front-end/vitepress");
    }

    #[test]
    fn test_outline_range_serializes_as_pair() {
        let json = serde_json::to_value(OutlineRange(2, 4)).unwrap();
        assert_eq!(json, serde_json::json!([2, 4]));
        assert_eq!(OutlineRange::default(), OutlineRange(2, 3));
    }

    #[test]
    fn test_parse_minimal_site_config() {
        let config: SiteConfig =
            toml::from_str("title = \"Wiki\"\ndescription = \"Notes\"\n").unwrap();

        assert_eq!(config.title, "Wiki");
        assert_eq!(config.base_path, "");
        assert!(config.navigation.is_empty());
        assert!(config.sidebar_map.is_empty());
        assert!(config.outline_depth_range.is_none());
        assert!(!config.last_updated);
    }
}
