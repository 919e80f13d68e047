//! Section-scoped sidebars.
//!
//! A [`SidebarMap`] maps route prefixes to the sidebar shown for pages under
//! them. Entries keep declaration order, both in memory and when serialized,
//! so lookups that tie fall back to the first declared prefix.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{SidebarGroup, SidebarItem};
use crate::route::{covers, normalize_route, section_root};

/// Sidebar declared for one route prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    /// Route prefix, e.g. `/back-end/`.
    pub prefix: String,
    /// Items shown for routes under the prefix.
    pub items: Vec<SidebarItem>,
}

/// Ordered mapping from route prefix to sidebar items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarMap {
    sections: Vec<SidebarSection>,
}

impl SidebarMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    ///
    /// Prefixes are not deduplicated here; a repeated prefix is reported as a
    /// route collision when the configuration is validated.
    pub fn insert(&mut self, prefix: impl Into<String>, items: Vec<SidebarItem>) {
        self.sections.push(SidebarSection {
            prefix: prefix.into(),
            items,
        });
    }

    /// Number of declared prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no prefix is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in declaration order.
    #[must_use]
    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    /// Items declared for an exact prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarItem]> {
        self.sections
            .iter()
            .find(|section| section.prefix == prefix)
            .map(|section| section.items.as_slice())
    }

    /// Section whose prefix is the longest match for `route`.
    ///
    /// A route naming the prefix directory without its trailing `/` (`/back-end`
    /// for `/back-end/`) matches too. Equal-length matches resolve to the
    /// earliest declaration.
    #[must_use]
    pub fn entry_for(&self, route: &str) -> Option<&SidebarSection> {
        let route = normalize_route(route);
        let mut best: Option<&SidebarSection> = None;
        for section in &self.sections {
            let prefix = section.prefix.as_str();
            if !route.starts_with(prefix) && prefix.strip_suffix('/') != Some(route.as_str()) {
                continue;
            }
            if best.is_none_or(|current| section.prefix.len() > current.prefix.len()) {
                best = Some(section);
            }
        }
        best
    }

    /// Sidebar items to display for `route`.
    ///
    /// Starts from the longest-prefix section, then narrows into the deepest
    /// non-empty group whose landing page covers the route. Routes without a
    /// matching prefix get an empty sidebar.
    #[must_use]
    pub fn sidebar_for(&self, route: &str) -> &[SidebarItem] {
        let Some(section) = self.entry_for(route) else {
            return &[];
        };
        let route = normalize_route(route);
        let mut items = section.items.as_slice();
        while let Some(group) = covering_group(items, &route) {
            items = &group.children;
        }
        items
    }
}

/// Non-empty group among `items` whose landing page covers `route` most
/// specifically. Equally specific groups resolve to the earliest declaration.
fn covering_group<'a>(items: &'a [SidebarItem], route: &str) -> Option<&'a SidebarGroup> {
    let mut best: Option<(usize, &SidebarGroup)> = None;
    for item in items {
        let SidebarItem::Group(group) = item else {
            continue;
        };
        let Some(link) = group.root_link.as_deref() else {
            continue;
        };
        if group.children.is_empty() || !covers(link, route) {
            continue;
        }
        let depth = section_root(link).len();
        if best.is_none_or(|(current, _)| depth > current) {
            best = Some((depth, group));
        }
    }
    best.map(|(_, group)| group)
}

impl<P: Into<String>> FromIterator<(P, Vec<SidebarItem>)> for SidebarMap {
    fn from_iter<T: IntoIterator<Item = (P, Vec<SidebarItem>)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (prefix, items) in iter {
            map.insert(prefix, items);
        }
        map
    }
}

impl Serialize for SidebarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.prefix, &section.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SidebarMapVisitor)
    }
}

struct SidebarMapVisitor;

impl<'de> Visitor<'de> for SidebarMapVisitor {
    type Value = SidebarMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of route prefixes to sidebar items")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SidebarMap, A::Error> {
        let mut map = SidebarMap::new();
        while let Some((prefix, items)) = access.next_entry::<String, Vec<SidebarItem>>()? {
            map.insert(prefix, items);
        }
        Ok(map)
    }
}
