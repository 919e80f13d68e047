//! Markdown content index for TimegeekerWiki.
//!
//! Scans the content directory the site engine routes from, so navigation
//! targets can be checked against real documents and sidebars can be derived
//! from the directory layout.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tw_content::{ContentIndex, LinkResolution};
//!
//! let index = ContentIndex::scan(Path::new("docs"), "meta.yaml")?;
//! match index.resolve_link("/back-end/os/basic") {
//!     LinkResolution::Document(stem) => println!("found {stem}.md"),
//!     LinkResolution::Directory => println!("section placeholder"),
//!     LinkResolution::Missing => println!("broken link"),
//! }
//! # Ok::<(), tw_content::ContentError>(())
//! ```

mod meta;
mod scanner;
mod title;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use scanner::Scanner;

/// Error returned when scanning content fails.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content root does not exist.
    #[error("Content directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading a file or directory.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Malformed metadata sidecar.
    #[error("Invalid metadata in {}: {message}", path.display())]
    Meta {
        /// Metadata file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl ContentError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentDocument {
    /// Path below the content root without extension (`back-end/os/basic`).
    pub stem: String,
    /// Route the engine serves it under (`/back-end/os/basic`, `/back-end/`).
    pub route: String,
    /// Resolved title.
    pub title: String,
    /// Source file relative to the content root.
    pub source: PathBuf,
}

/// A content directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentDir {
    /// Path below the content root (`""` for the root, `back-end/os`).
    pub path: String,
    /// Directory name (`""` for the root).
    pub name: String,
    /// Resolved title.
    pub title: String,
    /// `index.md` landing page, if present.
    pub index: Option<ContentDocument>,
    /// Pages and subdirectories in display order.
    pub entries: Vec<ContentEntry>,
    /// Collapsed state requested by `meta.yaml`.
    pub collapsed: Option<bool>,
}

impl ContentDir {
    /// Route of the directory (`/`, `/back-end/os/`).
    #[must_use]
    pub fn route(&self) -> String {
        if self.path.is_empty() {
            "/".to_owned()
        } else {
            format!("/{}/", self.path)
        }
    }

    /// Whether any document exists in this directory or below.
    #[must_use]
    pub fn has_documents(&self) -> bool {
        self.index.is_some()
            || self.entries.iter().any(|entry| match entry {
                ContentEntry::Document(_) => true,
                ContentEntry::Directory(dir) => dir.has_documents(),
            })
    }
}

/// Child of a [`ContentDir`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentEntry {
    /// Page (anything but `index.md`).
    Document(ContentDocument),
    /// Subdirectory.
    Directory(ContentDir),
}

impl ContentEntry {
    /// Name used for ordering: file stem or directory name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Document(doc) => doc.stem.rsplit('/').next().unwrap_or_default(),
            Self::Directory(dir) => &dir.name,
        }
    }
}

/// What a link target points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkResolution {
    /// Existing document, identified by stem.
    Document(String),
    /// Existing directory without a landing document.
    Directory,
    /// Nothing under the content root.
    Missing,
}

/// Scanned content tree with fast link lookups.
#[derive(Clone, Debug)]
pub struct ContentIndex {
    root: ContentDir,
    documents: HashSet<String>,
    directories: HashSet<String>,
}

impl ContentIndex {
    /// Scan a content directory.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if `source_dir` does not exist, and
    /// I/O or metadata errors encountered while walking it.
    pub fn scan(source_dir: &Path, meta_filename: &str) -> Result<Self, ContentError> {
        if !source_dir.is_dir() {
            return Err(ContentError::NotFound(source_dir.to_path_buf()));
        }
        let root = Scanner::new(source_dir.to_path_buf(), meta_filename.to_owned()).scan()?;
        let index = Self::from_root(root);
        tracing::info!(
            source_dir = %source_dir.display(),
            documents = index.documents.len(),
            directories = index.directories.len(),
            "Content scanned"
        );
        Ok(index)
    }

    /// Build an index over an already scanned tree.
    #[must_use]
    pub fn from_root(root: ContentDir) -> Self {
        let mut documents = HashSet::new();
        let mut directories = HashSet::new();
        collect(&root, &mut documents, &mut directories);
        Self {
            root,
            documents,
            directories,
        }
    }

    /// Root directory of the tree.
    #[must_use]
    pub fn root(&self) -> &ContentDir {
        &self.root
    }

    /// Number of documents.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Whether a document with this stem exists.
    #[must_use]
    pub fn contains_document(&self, stem: &str) -> bool {
        self.documents.contains(stem)
    }

    /// Find a directory by route or path (`/back-end/`, `back-end`, `/`).
    #[must_use]
    pub fn find_dir(&self, path: &str) -> Option<&ContentDir> {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Some(&self.root);
        }
        let mut current = &self.root;
        for segment in path.split('/') {
            current = current.entries.iter().find_map(|entry| match entry {
                ContentEntry::Directory(dir) if dir.name == segment => Some(dir),
                _ => None,
            })?;
        }
        Some(current)
    }

    /// Resolve a site link against the content.
    ///
    /// `/back-end/` and `/back-end/index` both resolve to `back-end/index`;
    /// `.html` and `.md` suffixes, fragments and queries are ignored.
    #[must_use]
    pub fn resolve_link(&self, target: &str) -> LinkResolution {
        let path = target.split(['#', '?']).next().unwrap_or_default();
        let path = path.trim_start_matches('/');
        let path = path
            .strip_suffix(".html")
            .or_else(|| path.strip_suffix(".md"))
            .unwrap_or(path);

        let candidates = if path.is_empty() || path.ends_with('/') {
            vec![format!("{path}index")]
        } else {
            vec![path.to_owned(), format!("{path}/index")]
        };
        if let Some(stem) = candidates
            .into_iter()
            .find(|stem| self.documents.contains(stem))
        {
            return LinkResolution::Document(stem);
        }

        if self.directories.contains(path.trim_end_matches('/')) {
            LinkResolution::Directory
        } else {
            LinkResolution::Missing
        }
    }
}

fn collect(dir: &ContentDir, documents: &mut HashSet<String>, directories: &mut HashSet<String>) {
    directories.insert(dir.path.clone());
    if let Some(index) = &dir.index {
        documents.insert(index.stem.clone());
    }
    for entry in &dir.entries {
        match entry {
            ContentEntry::Document(doc) => {
                documents.insert(doc.stem.clone());
            }
            ContentEntry::Directory(child) => collect(child, documents, directories),
        }
    }
}
