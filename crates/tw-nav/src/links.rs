//! Broken link detection.
//!
//! Broken links are warnings: the engine still builds, the reader gets a 404.

use std::fmt;

use tw_config::route::is_external;
use tw_config::{SidebarItem, SiteConfig};
use tw_content::{ContentIndex, LinkResolution};

/// Internal link with no document behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenLink {
    /// Where the link is declared (e.g. `sidebarMap["/back-end/"][1].children[0]`).
    pub location: String,
    /// Link target as declared.
    pub target: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} matches no document", self.location, self.target)
    }
}

/// Check every internal link in `config` against the content.
///
/// Navigation entries and sidebar leaves must point at a document. A group
/// landing link may also point at a bare directory, which the engine treats as
/// a group-only placeholder. External URLs are not checked.
///
/// Each broken link is logged at warn level and returned in declaration order.
#[must_use]
pub fn check_links(config: &SiteConfig, content: &ContentIndex) -> Vec<BrokenLink> {
    let mut checker = LinkChecker {
        content,
        broken: Vec::new(),
    };

    for (i, entry) in config.navigation.iter().enumerate() {
        checker.check(format!("navigation[{i}]"), &entry.target, false);
    }
    for section in config.sidebar_map.sections() {
        checker.check_items(&format!("sidebarMap[{:?}]", section.prefix), &section.items);
    }

    checker.broken
}

struct LinkChecker<'a> {
    content: &'a ContentIndex,
    broken: Vec<BrokenLink>,
}

impl LinkChecker<'_> {
    fn check_items(&mut self, location: &str, items: &[SidebarItem]) {
        for (i, item) in items.iter().enumerate() {
            let location = format!("{location}[{i}]");
            match item {
                SidebarItem::Leaf(leaf) => self.check(location, &leaf.target, false),
                SidebarItem::Group(group) => {
                    if let Some(root_link) = &group.root_link {
                        self.check(format!("{location}.rootLink"), root_link, true);
                    }
                    self.check_items(&format!("{location}.children"), &group.children);
                }
            }
        }
    }

    fn check(&mut self, location: String, target: &str, allow_directory: bool) {
        if is_external(target) {
            return;
        }
        let found = match self.content.resolve_link(target) {
            LinkResolution::Document(_) => true,
            LinkResolution::Directory => allow_directory,
            LinkResolution::Missing => false,
        };
        if !found {
            tracing::warn!(%location, link = target, "Broken link");
            self.broken.push(BrokenLink {
                location,
                target: target.to_owned(),
            });
        }
    }
}
