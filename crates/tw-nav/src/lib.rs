//! Navigation services for TimegeekerWiki.
//!
//! Ties the site configuration to the markdown content it points at:
//!
//! - [`check_links`] reports navigation and sidebar targets with no document
//! - [`derive_sidebar`] and [`derive_sidebar_map`] build sidebars from the
//!   content directory layout
//! - [`engine_config`] and [`to_engine_json`] render the configuration in the
//!   shape the site engine reads

mod derive;
mod export;
mod links;

use tw_config::ContentConfig;
use tw_content::{ContentError, ContentIndex};

pub use derive::{derive_sidebar, derive_sidebar_map};
pub use export::{EngineConfig, engine_config, to_engine_json};
pub use links::{BrokenLink, check_links};

/// Navigation error.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// No content directory backs the requested sidebar prefix.
    #[error("No content directory for sidebar prefix {0:?}")]
    UnknownSection(String),
    /// Content scan failed.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// JSON rendering failed.
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scan the content directory named by project settings.
///
/// # Errors
///
/// Returns `NavError::Content` if the directory is missing or cannot be read.
pub fn scan_content(content: &ContentConfig) -> Result<ContentIndex, NavError> {
    Ok(ContentIndex::scan(
        &content.source_dir,
        &content.meta_filename,
    )?)
}
