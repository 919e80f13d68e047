//! The wiki's own configuration.
//!
//! This is the single source of truth for TimegeekerWiki's navigation. Earlier
//! revisions of the site configuration are superseded by this one.

use crate::ConfigError;
use crate::model::{SidebarGroup, SidebarItem, SiteConfig};

/// Build the canonical TimegeekerWiki configuration.
///
/// Pure and idempotent: every call returns a structurally equal value.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the declarations below stop validating.
pub fn build_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::builder("TimegeekerWiki", "持续进化的后端知识库")
        .icon("/favicon.ico")
        .logo("/favicon.ico")
        .last_updated(true)
        .local_search()
        .nav("Home", "/")
        .nav("后端", "/back-end/index")
        .nav("前端", "/front-end/index")
        .sidebar("/back-end/", back_end_sidebar())
        .sidebar("/front-end/", front_end_sidebar())
        .social("github", "https://github.com/vuejs/vitepress")
        .build()
}

fn back_end_sidebar() -> Vec<SidebarItem> {
    vec![
        section("Java", "/back-end/java/").into(),
        section("操作系统", "/back-end/os/")
            .page("基础概念", "/back-end/os/basic")
            .page("进程管理", "/back-end/os/process")
            .page("内存管理", "/back-end/os/memory")
            .into(),
        section("并发", "/back-end/concurrent/")
            .page("volatile", "/back-end/concurrent/volatile")
            .into(),
        section("计算机网络", "/back-end/network/").into(),
        section("MySQL", "/back-end/mysql/").into(),
        section("Redis", "/back-end/redis/").into(),
    ]
}

fn front_end_sidebar() -> Vec<SidebarItem> {
    vec![
        SidebarGroup::new("前端")
            .collapsed()
            .page("VitePress", "/front-end/vitepress")
            .into(),
    ]
}

/// Collapsed topic group with a landing page.
fn section(label: &str, root_link: &str) -> SidebarGroup {
    SidebarGroup::new(label).root_link(root_link).collapsed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_config_is_valid() {
        let config = build_config().unwrap();

        assert_eq!(config.title, "TimegeekerWiki");
        assert_eq!(config.base_path, "");
        assert_eq!(config.icon_href().as_deref(), Some("/favicon.ico"));
        assert_eq!(config.search, Some(SearchProvider::Local));
        assert!(config.last_updated);
    }

    #[test]
    fn test_build_config_is_idempotent() {
        assert_eq!(build_config().unwrap(), build_config().unwrap());
    }

    #[test]
    fn test_navigation_order() {
        let config = build_config().unwrap();

        let targets: Vec<_> = config
            .navigation
            .iter()
            .map(|entry| entry.target.as_str())
            .collect();

        assert_eq!(targets, ["/", "/back-end/index", "/front-end/index"]);
    }

    #[test]
    fn test_back_end_sidebar_keeps_declaration_order() {
        let config = build_config().unwrap();

        let labels: Vec<_> = config
            .sidebar_map
            .get("/back-end/")
            .unwrap()
            .iter()
            .filter_map(SidebarItem::label)
            .collect();

        assert_eq!(
            labels,
            ["Java", "操作系统", "并发", "计算机网络", "MySQL", "Redis"]
        );
    }

    #[test]
    fn test_os_page_resolves_to_os_children() {
        let config = build_config().unwrap();

        let labels: Vec<_> = config
            .sidebar_for("/back-end/os/process")
            .iter()
            .filter_map(SidebarItem::label)
            .collect();

        assert_eq!(labels, ["基础概念", "进程管理", "内存管理"]);
    }

    #[test]
    fn test_all_groups_collapsed_by_default() {
        let config = build_config().unwrap();

        for section in config.sidebar_map.sections() {
            for item in &section.items {
                let SidebarItem::Group(group) = item else {
                    panic!("expected only groups at top level of {}", section.prefix);
                };
                assert!(group.collapsible && group.collapsed_by_default);
            }
        }
    }

    #[test]
    fn test_with_sub_path_base_resolves_icon() {
        let config = SiteConfig {
            base_path: "/TimegeekerWiki/".to_owned(),
            ..build_config().unwrap()
        };

        assert!(config.validate().is_ok());
        assert_eq!(
            config.icon_href().as_deref(),
            Some("/TimegeekerWiki/favicon.ico")
        );
    }
}
