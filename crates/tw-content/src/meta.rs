//! Directory metadata sidecars (`meta.yaml`).
//!
//! ```yaml
//! title: 操作系统
//! order: [basic, process, memory]
//! collapsed: false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::ContentError;

/// Parsed directory metadata. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct DirMeta {
    /// Section title override.
    pub title: Option<String>,
    /// Entry names (file stems or directory names) listed first, in order.
    pub order: Vec<String>,
    /// Whether the derived group starts collapsed.
    pub collapsed: Option<bool>,
}

/// Parse metadata YAML. Empty content yields the default.
pub(crate) fn parse_dir_meta(content: &str, path: &Path) -> Result<DirMeta, ContentError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(DirMeta::default());
    }
    serde_yaml::from_str(trimmed).map_err(|e| ContentError::Meta {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
