//! Site engine configuration export.
//!
//! Renders a [`SiteConfig`] into the object the engine's config module
//! exports:
//!
//! ```json
//! {
//!   "title": "TimegeekerWiki",
//!   "head": [["link", { "rel": "icon", "href": "/favicon.ico" }]],
//!   "themeConfig": {
//!     "nav": [{ "text": "Home", "link": "/" }],
//!     "sidebar": {
//!       "/back-end/": [{ "text": "Java", "link": "/back-end/java/", "collapsed": true }]
//!     }
//!   }
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tw_config::{OutlineRange, SearchProvider, SidebarItem, SiteConfig};

use crate::NavError;

/// Engine configuration borrowing from a [`SiteConfig`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    base: &'a str,
    title: &'a str,
    description: &'a str,
    last_updated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    head: Vec<HeadTag>,
    theme_config: ThemeConfig<'a>,
}

/// `["link", { rel, href }]` head entry.
#[derive(Debug, Serialize)]
struct HeadTag(&'static str, HeadAttrs);

#[derive(Debug, Serialize)]
struct HeadAttrs {
    rel: &'static str,
    href: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<Search>,
    nav: Vec<NavItem<'a>>,
    sidebar: Sidebar<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outline: Option<OutlineRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    social_links: Vec<SocialLink<'a>>,
}

#[derive(Debug, Serialize)]
struct Search {
    provider: SearchProvider,
}

#[derive(Debug, Serialize)]
struct NavItem<'a> {
    text: &'a str,
    link: &'a str,
}

/// Prefix-keyed sidebars, serialized as a map in declaration order.
#[derive(Debug)]
struct Sidebar<'a>(Vec<(&'a str, Vec<SidebarEntry<'a>>)>);

impl Serialize for Sidebar<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (prefix, items) in &self.0 {
            map.serialize_entry(prefix, items)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
struct SidebarEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<SidebarEntry<'a>>>,
}

impl<'a> From<&'a SidebarItem> for SidebarEntry<'a> {
    fn from(item: &'a SidebarItem) -> Self {
        match item {
            SidebarItem::Leaf(leaf) => Self {
                text: Some(&leaf.label),
                link: Some(&leaf.target),
                collapsed: None,
                items: None,
            },
            SidebarItem::Group(group) => Self {
                text: group.label.as_deref(),
                link: group.root_link.as_deref(),
                // The engine reads a missing `collapsed` as "not collapsible".
                collapsed: group.collapsible.then_some(group.collapsed_by_default),
                items: (!group.children.is_empty())
                    .then(|| group.children.iter().map(SidebarEntry::from).collect()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct SocialLink<'a> {
    icon: &'a str,
    link: &'a str,
}

/// Map a site configuration onto the engine's configuration shape.
#[must_use]
pub fn engine_config(config: &SiteConfig) -> EngineConfig<'_> {
    let head = config
        .icon_href()
        .map(|href| HeadTag("link", HeadAttrs { rel: "icon", href }))
        .into_iter()
        .collect();

    let sidebar = config
        .sidebar_map
        .sections()
        .iter()
        .map(|section| {
            let items = section.items.iter().map(SidebarEntry::from).collect();
            (section.prefix.as_str(), items)
        })
        .collect();

    EngineConfig {
        base: &config.base_path,
        title: &config.title,
        description: &config.description,
        last_updated: config.last_updated,
        head,
        theme_config: ThemeConfig {
            logo: config.logo.as_deref(),
            search: config.search.map(|provider| Search { provider }),
            nav: config
                .navigation
                .iter()
                .map(|entry| NavItem {
                    text: &entry.label,
                    link: &entry.target,
                })
                .collect(),
            sidebar: Sidebar(sidebar),
            outline: config.outline_depth_range,
            social_links: config
                .external_links
                .iter()
                .map(|link| SocialLink {
                    icon: &link.icon,
                    link: &link.url,
                })
                .collect(),
        },
    }
}

/// Render the engine configuration as pretty-printed JSON.
///
/// # Errors
///
/// Returns `NavError::Json` if serialization fails.
pub fn to_engine_json(config: &SiteConfig) -> Result<String, NavError> {
    Ok(serde_json::to_string_pretty(&engine_config(config))?)
}
