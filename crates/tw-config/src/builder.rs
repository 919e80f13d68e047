//! Fluent construction of [`SiteConfig`] values.

use crate::ConfigError;
use crate::model::{
    ExternalLink, NavigationEntry, OutlineRange, SearchProvider, SidebarItem, SiteConfig,
};

/// Builder for [`SiteConfig`].
///
/// [`build`](Self::build) validates, so a builder never yields a
/// configuration the engine would reject.
#[derive(Debug)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
}

impl SiteConfigBuilder {
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            config: SiteConfig {
                title: title.into(),
                description: description.into(),
                ..SiteConfig::default()
            },
        }
    }

    /// Serve the site from a sub-path, e.g. `/TimegeekerWiki/`.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config.base_path = base_path.into();
        self
    }

    /// Favicon path.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.config.icon_reference = Some(icon.into());
        self
    }

    /// Navigation bar logo.
    #[must_use]
    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.config.logo = Some(logo.into());
        self
    }

    /// Show last-updated timestamps.
    #[must_use]
    pub fn last_updated(mut self, enabled: bool) -> Self {
        self.config.last_updated = enabled;
        self
    }

    /// Enable the engine's local search.
    #[must_use]
    pub fn local_search(mut self) -> Self {
        self.config.search = Some(SearchProvider::Local);
        self
    }

    /// Outline heading level range.
    #[must_use]
    pub fn outline(mut self, min: u8, max: u8) -> Self {
        self.config.outline_depth_range = Some(OutlineRange(min, max));
        self
    }

    /// Append a navigation bar entry.
    #[must_use]
    pub fn nav(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.config
            .navigation
            .push(NavigationEntry::new(label, target));
        self
    }

    /// Declare the sidebar for a route prefix.
    #[must_use]
    pub fn sidebar(mut self, prefix: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        self.config.sidebar_map.insert(prefix, items);
        self
    }

    /// Append a footer/social icon link.
    #[must_use]
    pub fn social(mut self, icon: impl Into<String>, url: impl Into<String>) -> Self {
        self.config.external_links.push(ExternalLink::new(icon, url));
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error; see [`SiteConfig::validate`].
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        self.config.validate()?;
        tracing::debug!(
            title = %self.config.title,
            nav_entries = self.config.navigation.len(),
            sidebar_prefixes = self.config.sidebar_map.len(),
            "Site configuration built"
        );
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SidebarGroup, SidebarLeaf};

    #[test]
    fn test_builder_collects_fields_in_order() {
        let config = SiteConfig::builder("Wiki", "Notes")
            .base_path("/wiki/")
            .icon("/favicon.ico")
            .logo("/logo.svg")
            .last_updated(true)
            .local_search()
            .outline(2, 4)
            .nav("Home", "/")
            .nav("Guide", "/guide/")
            .sidebar("/guide/", vec![SidebarLeaf::new("Intro", "/guide/intro").into()])
            .social("github", "https://github.com/example/wiki")
            .build()
            .unwrap();

        assert_eq!(config.base_path, "/wiki/");
        assert_eq!(config.icon_href().as_deref(), Some("/wiki/favicon.ico"));
        assert_eq!(config.logo.as_deref(), Some("/logo.svg"));
        assert!(config.last_updated);
        assert_eq!(config.search, Some(SearchProvider::Local));
        assert_eq!(config.outline_depth_range, Some(OutlineRange(2, 4)));
        let labels: Vec<_> = config.navigation.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Guide"]);
        assert_eq!(config.sidebar_map.len(), 1);
        assert_eq!(config.external_links[0].icon, "github");
    }

    #[test]
    fn test_builder_fails_fast_on_invalid_sidebar() {
        let result = SiteConfig::builder("Wiki", "Notes")
            .sidebar(
                "/guide/",
                vec![SidebarGroup::new("Intro").page("Setup", "").into()],
            )
            .build();

        assert!(matches!(result, Err(ConfigError::MissingField { .. })));
    }

    #[test]
    fn test_builder_rejects_bad_base_path() {
        let result = SiteConfig::builder("Wiki", "Notes")
            .base_path("/wiki")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidBasePath(_))));
    }
}
