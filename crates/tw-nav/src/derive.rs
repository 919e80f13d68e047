//! Sidebar derivation from the content directory layout.
//!
//! Pages become leaves, subdirectories become collapsible groups whose landing
//! page is their `index.md`. Order follows `meta.yaml` `order`, then name.

use tw_config::{SidebarGroup, SidebarItem, SidebarLeaf, SidebarMap};
use tw_content::{ContentDir, ContentEntry, ContentIndex};

use crate::NavError;

/// Derive the sidebar for the content directory behind `prefix`.
///
/// # Errors
///
/// Returns `NavError::UnknownSection` if no directory matches `prefix`.
pub fn derive_sidebar(content: &ContentIndex, prefix: &str) -> Result<Vec<SidebarItem>, NavError> {
    let dir = content
        .find_dir(prefix)
        .ok_or_else(|| NavError::UnknownSection(prefix.to_owned()))?;
    Ok(sidebar_items(dir))
}

/// Derive one sidebar per top-level content directory, keyed `/<dir>/`.
///
/// Directories without any document are left out.
#[must_use]
pub fn derive_sidebar_map(content: &ContentIndex) -> SidebarMap {
    content
        .root()
        .entries
        .iter()
        .filter_map(|entry| match entry {
            ContentEntry::Directory(dir) if dir.has_documents() => {
                Some((dir.route(), sidebar_items(dir)))
            }
            _ => None,
        })
        .collect()
}

fn sidebar_items(dir: &ContentDir) -> Vec<SidebarItem> {
    dir.entries
        .iter()
        .filter_map(|entry| match entry {
            ContentEntry::Document(doc) => {
                Some(SidebarLeaf::new(doc.title.clone(), doc.route.clone()).into())
            }
            ContentEntry::Directory(child) if child.has_documents() => {
                Some(derive_group(child).into())
            }
            ContentEntry::Directory(_) => None,
        })
        .collect()
}

fn derive_group(dir: &ContentDir) -> SidebarGroup {
    SidebarGroup {
        label: Some(dir.title.clone()),
        root_link: dir.index.as_ref().map(|index| index.route.clone()),
        collapsible: true,
        collapsed_by_default: dir.collapsed.unwrap_or(true),
        children: sidebar_items(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::wiki_docs;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn leaf(label: &str, target: &str) -> SidebarItem {
        SidebarLeaf::new(label, target).into()
    }

    #[test]
    fn test_derive_front_end() {
        let docs = wiki_docs();
        let content = ContentIndex::scan(docs.path(), "meta.yaml").unwrap();

        let items = derive_sidebar(&content, "/front-end/").unwrap();

        assert_eq!(items, vec![leaf("VitePress", "/front-end/vitepress")]);
    }

    #[test]
    fn test_derive_groups_with_landing_pages() {
        let docs = wiki_docs();
        let content = ContentIndex::scan(docs.path(), "meta.yaml").unwrap();

        let items = derive_sidebar(&content, "/back-end/").unwrap();

        let labels: Vec<_> = items.iter().filter_map(SidebarItem::label).collect();
        // Empty java/ is skipped; the rest sorts by directory name.
        assert_eq!(labels, ["并发", "MySQL", "计算机网络", "操作系统", "Redis"]);
        let SidebarItem::Group(os) = &items[3] else {
            panic!("expected group");
        };
        assert_eq!(os.root_link.as_deref(), Some("/back-end/os/"));
        assert!(os.collapsible);
        assert!(os.collapsed_by_default);
        assert_eq!(
            os.children,
            vec![
                leaf("基础概念", "/back-end/os/basic"),
                leaf("内存管理", "/back-end/os/memory"),
                leaf("进程管理", "/back-end/os/process"),
            ]
        );
    }

    #[test]
    fn test_derive_follows_meta_order_and_collapsed() {
        let docs = wiki_docs();
        fs::write(
            docs.path().join("back-end/os/meta.yaml"),
            "order: [basic, process]\ncollapsed: false\n",
        )
        .unwrap();
        let content = ContentIndex::scan(docs.path(), "meta.yaml").unwrap();

        let items = derive_sidebar(&content, "/back-end/").unwrap();

        let SidebarItem::Group(os) = &items[3] else {
            panic!("expected group");
        };
        assert!(!os.collapsed_by_default);
        let targets: Vec<_> = os.children.iter().filter_map(SidebarItem::link).collect();
        assert_eq!(
            targets,
            ["/back-end/os/basic", "/back-end/os/process", "/back-end/os/memory"]
        );
    }

    #[test]
    fn test_derive_group_without_index_has_no_root_link() {
        let docs = wiki_docs();
        fs::create_dir_all(docs.path().join("back-end/java/basic")).unwrap();
        fs::write(docs.path().join("back-end/java/basic/Generics.md"), "# Generics").unwrap();
        let content = ContentIndex::scan(docs.path(), "meta.yaml").unwrap();

        let items = derive_sidebar(&content, "/back-end/java/").unwrap();

        let SidebarItem::Group(basic) = &items[0] else {
            panic!("expected group");
        };
        assert_eq!(basic.label.as_deref(), Some("Basic"));
        assert_eq!(basic.root_link, None);
        assert_eq!(basic.children, vec![leaf("Generics", "/back-end/java/basic/Generics")]);
    }

    #[test]
    fn test_derive_unknown_section() {
        let docs = wiki_docs();
        let content = ContentIndex::scan(docs.path(), "meta.yaml").unwrap();

        let err = derive_sidebar(&content, "/ops/").unwrap_err();

        assert!(matches!(err, NavError::UnknownSection(prefix) if prefix == "/ops/"));
    }

    #[test]
    fn test_derive_sidebar_map_validates() {
        let docs = wiki_docs();
        let content = ContentIndex::scan(docs.path(), "meta.yaml").unwrap();

        let map = derive_sidebar_map(&content);

        let prefixes: Vec<_> = map.sections().iter().map(|s| s.prefix.as_str()).collect();
        assert_eq!(prefixes, ["/back-end/", "/front-end/"]);
        let mut config = tw_config::build_config().unwrap();
        config.sidebar_map = map;
        config.validate().unwrap();
    }
}
