//! Fail-fast validation of a [`SiteConfig`].
//!
//! The first violation aborts with a [`ConfigError`]; nothing partial is ever
//! handed to the engine. Locations in errors use the serialized field names,
//! e.g. `sidebarMap["/back-end/"][0].children[2]`.

use crate::ConfigError;
use crate::model::{SidebarGroup, SidebarItem, SidebarLeaf, SiteConfig};
use crate::route::{is_external, is_site_path};

/// Deepest heading level the outline can show.
const MAX_HEADING_LEVEL: u8 = 6;

impl SiteConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a missing required field, a
    /// malformed base path, sidebar prefix, target or outline range, a
    /// collapsed group that cannot collapse, or colliding sidebar prefixes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_metadata()?;
        self.validate_base_path()?;
        self.validate_navigation()?;
        self.validate_sidebar_map()?;
        self.validate_outline()?;
        self.validate_external_links()?;
        Ok(())
    }

    fn validate_metadata(&self) -> Result<(), ConfigError> {
        require_field(&self.title, "site", "title")?;
        require_field(&self.description, "site", "description")?;
        if let Some(icon) = &self.icon_reference {
            require_asset(icon, "site.iconReference", "iconReference")?;
        }
        if let Some(logo) = &self.logo {
            require_asset(logo, "site.logo", "logo")?;
        }
        Ok(())
    }

    fn validate_base_path(&self) -> Result<(), ConfigError> {
        let base = &self.base_path;
        if !base.is_empty() && !(base.starts_with('/') && base.ends_with('/')) {
            return Err(ConfigError::InvalidBasePath(base.clone()));
        }
        Ok(())
    }

    fn validate_navigation(&self) -> Result<(), ConfigError> {
        for (idx, entry) in self.navigation.iter().enumerate() {
            let location = format!("navigation[{idx}]");
            require_field(&entry.label, &location, "label")?;
            require_target(&entry.target, &location, "target")?;
        }
        Ok(())
    }

    fn validate_sidebar_map(&self) -> Result<(), ConfigError> {
        let sections = self.sidebar_map.sections();
        for (idx, section) in sections.iter().enumerate() {
            if !section.prefix.starts_with('/') {
                return Err(ConfigError::InvalidSidebarPrefix(section.prefix.clone()));
            }
            let key = section.prefix.trim_end_matches('/');
            if let Some(earlier) = sections[..idx]
                .iter()
                .find(|other| other.prefix.trim_end_matches('/') == key)
            {
                return Err(ConfigError::RouteCollision {
                    first: earlier.prefix.clone(),
                    second: section.prefix.clone(),
                });
            }

            let location = format!("sidebarMap[{:?}]", section.prefix);
            validate_items(&section.items, &location)?;
        }
        Ok(())
    }

    fn validate_outline(&self) -> Result<(), ConfigError> {
        if let Some(range) = self.outline_depth_range {
            let (min, max) = (range.min(), range.max());
            if min == 0 || min > max || max > MAX_HEADING_LEVEL {
                return Err(ConfigError::InvalidOutline { min, max });
            }
        }
        Ok(())
    }

    fn validate_external_links(&self) -> Result<(), ConfigError> {
        for (idx, link) in self.external_links.iter().enumerate() {
            let location = format!("externalLinks[{idx}]");
            require_field(&link.icon, &location, "icon")?;
            require_field(&link.url, &location, "url")?;
            if !is_external(&link.url) {
                return Err(ConfigError::InvalidTarget {
                    location,
                    target: link.url.clone(),
                });
            }
        }
        Ok(())
    }
}

fn validate_items(items: &[SidebarItem], parent: &str) -> Result<(), ConfigError> {
    for (idx, item) in items.iter().enumerate() {
        let location = format!("{parent}[{idx}]");
        match item {
            SidebarItem::Group(group) => validate_group(group, &location)?,
            SidebarItem::Leaf(leaf) => validate_leaf(leaf, &location)?,
        }
    }
    Ok(())
}

fn validate_group(group: &SidebarGroup, location: &str) -> Result<(), ConfigError> {
    if group.collapsed_by_default && !group.collapsible {
        return Err(ConfigError::CollapsedWithoutCollapsible {
            location: location.to_owned(),
        });
    }
    match group.label.as_deref() {
        Some(label) => require_field(label, location, "label")?,
        None if group.collapsible => {
            return Err(ConfigError::MissingField {
                location: location.to_owned(),
                field: "label",
            });
        }
        None => {}
    }
    if let Some(root_link) = &group.root_link {
        require_target(root_link, location, "rootLink")?;
    }
    validate_items(&group.children, &format!("{location}.children"))
}

fn validate_leaf(leaf: &SidebarLeaf, location: &str) -> Result<(), ConfigError> {
    require_field(&leaf.label, location, "label")?;
    require_target(&leaf.target, location, "target")
}

/// Require a string field to be non-empty.
fn require_field(value: &str, location: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField {
            location: location.to_owned(),
            field,
        });
    }
    Ok(())
}

/// Require a link field to be an absolute site path or an http(s) URL.
fn require_target(target: &str, location: &str, field: &'static str) -> Result<(), ConfigError> {
    require_field(target, location, field)?;
    if !is_site_path(target) && !is_external(target) {
        return Err(ConfigError::InvalidTarget {
            location: location.to_owned(),
            target: target.to_owned(),
        });
    }
    Ok(())
}

/// Require an asset path: relative to the site root, absolute, or an http(s) URL.
fn require_asset(path: &str, location: &str, field: &'static str) -> Result<(), ConfigError> {
    require_field(path, location, field)?;
    let relative = !path.starts_with('/') && !path.contains("://");
    if !relative && !is_site_path(path) && !is_external(path) {
        return Err(ConfigError::InvalidTarget {
            location: location.to_owned(),
            target: path.to_owned(),
        });
    }
    Ok(())
}
