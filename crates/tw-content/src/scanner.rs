//! Content discovery by filesystem walking.
//!
//! Mirrors the engine's file-based routing: every `.md` file is a page,
//! `index.md` is the landing page of its directory, hidden entries are
//! ignored.

use std::fs;
use std::path::{Path, PathBuf};

use crate::meta::{DirMeta, parse_dir_meta};
use crate::title::{extract_h1, titlecase_from_slug};
use crate::{ContentDir, ContentDocument, ContentEntry, ContentError};

/// Walks a content directory into a [`ContentDir`] tree.
pub(crate) struct Scanner {
    source_dir: PathBuf,
    meta_filename: String,
}

impl Scanner {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root directory to scan
    /// * `meta_filename` - Name of metadata files (e.g., "meta.yaml")
    pub(crate) fn new(source_dir: PathBuf, meta_filename: String) -> Self {
        Self {
            source_dir,
            meta_filename,
        }
    }

    /// Scan the whole tree.
    pub(crate) fn scan(&self) -> Result<ContentDir, ContentError> {
        self.scan_directory(&self.source_dir, "")
    }

    /// Scan one directory. `rel` is its path below the root without slashes
    /// at either end (`""` for the root, `back-end/os` below it).
    fn scan_directory(&self, dir_path: &Path, rel: &str) -> Result<ContentDir, ContentError> {
        let read_dir = fs::read_dir(dir_path).map_err(|e| ContentError::io(dir_path, e))?;

        let mut index = None;
        let mut meta = DirMeta::default();
        let mut entries = Vec::new();

        for entry in read_dir {
            let entry = entry.map_err(|e| ContentError::io(dir_path, e))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if file_name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                let child_rel = join_rel(rel, &file_name);
                entries.push(ContentEntry::Directory(
                    self.scan_directory(&path, &child_rel)?,
                ));
            } else if file_name == self.meta_filename {
                let content = fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
                meta = parse_dir_meta(&content, &path)?;
            } else if let Some(stem) = file_name.strip_suffix(".md") {
                let document = self.read_document(&path, rel, stem)?;
                if stem == "index" {
                    index = Some(document);
                } else {
                    entries.push(ContentEntry::Document(document));
                }
            }
        }

        sort_entries(&mut entries, &meta.order);

        let name = rel.rsplit('/').next().unwrap_or_default().to_owned();
        let title = meta
            .title
            .clone()
            .or_else(|| index.as_ref().map(|doc: &ContentDocument| doc.title.clone()))
            .unwrap_or_else(|| titlecase_from_slug(&name));

        tracing::debug!(dir = rel, entries = entries.len(), "Scanned content directory");

        Ok(ContentDir {
            path: rel.to_owned(),
            name,
            title,
            index,
            entries,
            collapsed: meta.collapsed,
        })
    }

    /// Build a document from a markdown file.
    fn read_document(
        &self,
        path: &Path,
        rel: &str,
        stem: &str,
    ) -> Result<ContentDocument, ContentError> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let title = extract_h1(&content).unwrap_or_else(|| {
            if stem == "index" {
                titlecase_from_slug(rel.rsplit('/').next().unwrap_or_default())
            } else {
                titlecase_from_slug(stem)
            }
        });
        let doc_stem = join_rel(rel, stem);
        let route = document_route(&doc_stem);
        let source = path
            .strip_prefix(&self.source_dir)
            .unwrap_or(path)
            .to_path_buf();

        Ok(ContentDocument {
            stem: doc_stem,
            route,
            title,
            source,
        })
    }
}

/// Join a relative directory path and a child name.
fn join_rel(rel: &str, name: &str) -> String {
    if rel.is_empty() {
        name.to_owned()
    } else {
        format!("{rel}/{name}")
    }
}

/// Route the engine serves a document under.
///
/// Examples:
/// - `index` -> `/`
/// - `back-end/index` -> `/back-end/`
/// - `back-end/os/basic` -> `/back-end/os/basic`
pub(crate) fn document_route(stem: &str) -> String {
    if stem == "index" {
        return "/".to_owned();
    }
    match stem.strip_suffix("/index") {
        Some(dir) => format!("/{dir}/"),
        None => format!("/{stem}"),
    }
}

/// Order entries: names listed in `order` first, the rest by name.
fn sort_entries(entries: &mut [ContentEntry], order: &[String]) {
    entries.sort_by(|a, b| {
        let rank = |entry: &ContentEntry| {
            order
                .iter()
                .position(|name| name == entry.name())
                .unwrap_or(usize::MAX)
        };
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.name().cmp(b.name()))
    });
}
