//! Site and navigation configuration for TimegeekerWiki.
//!
//! The configuration handed to the site engine is a [`SiteConfig`]: site
//! metadata, the navigation bar, and section-scoped sidebars keyed by route
//! prefix. [`build_config`] returns the wiki's canonical configuration;
//! [`SiteConfig::builder`] builds others (tests, fixtures).
//!
//! A project may also carry a `tw.toml` file, discovered in the current
//! directory or its parents, which can override the site declaration and says
//! where the markdown content lives:
//!
//! ```toml
//! [content]
//! source_dir = "docs"
//!
//! [site]
//! title = "TimegeekerWiki"
//! description = "Notes"
//! basePath = "${TW_BASE:-}"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.basePath`
//! - `content.source_dir`

mod builder;
mod canonical;
mod expand;
mod handle;
mod model;
pub mod route;
mod sidebar;
mod validate;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use expand::expand_env;

pub use builder::SiteConfigBuilder;
pub use canonical::build_config;
pub use handle::ConfigHandle;
pub use model::{
    ExternalLink, NavigationEntry, OutlineRange, SearchProvider, SidebarGroup, SidebarItem,
    SidebarLeaf, SiteConfig,
};
pub use sidebar::{SidebarMap, SidebarSection};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "tw.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site base path.
    pub base_path: Option<String>,
    /// Override the content source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A required field is absent or empty.
    #[error("Missing required field `{field}` in {location}")]
    MissingField {
        /// Where the field is missing (e.g. `navigation[1]`).
        location: String,
        /// Serialized field name.
        field: &'static str,
    },
    /// Base path does not start and end with `/`.
    #[error("Invalid base path {0:?}: must start and end with '/'")]
    InvalidBasePath(String),
    /// Sidebar prefix does not start with `/`.
    #[error("Invalid sidebar prefix {0:?}: must start with '/'")]
    InvalidSidebarPrefix(String),
    /// Two sidebar prefixes select the same routes.
    #[error("Route collision: sidebar prefixes {first:?} and {second:?} select the same pages")]
    RouteCollision {
        /// Earlier declared prefix.
        first: String,
        /// Later declared prefix.
        second: String,
    },
    /// Link is neither an absolute site path nor an http(s) URL.
    #[error("Invalid target {target:?} in {location}: expected a site path or http(s) URL")]
    InvalidTarget {
        /// Where the link is declared.
        location: String,
        /// Offending link.
        target: String,
    },
    /// Group starts collapsed but cannot be toggled.
    #[error("{location} is collapsed by default but not collapsible")]
    CollapsedWithoutCollapsible {
        /// Where the group is declared.
        location: String,
    },
    /// Outline heading range out of bounds.
    #[error("Invalid outline depth range ({min}, {max}): expected 1 <= min <= max <= 6")]
    InvalidOutline {
        /// Lowest heading level.
        min: u8,
        /// Deepest heading level.
        max: u8,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.basePath`").
        field: String,
        /// Error message (e.g., "${`TW_BASE`} not set").
        message: String,
    },
}

impl SiteConfig {
    /// Parse and validate a site declaration from TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and any validation
    /// error otherwise.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the value cannot be represented.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

/// Project configuration: the site declaration plus content location.
#[derive(Debug)]
pub struct ProjectConfig {
    /// Validated site configuration.
    pub site: SiteConfig,
    /// Resolved content settings.
    pub content: ContentConfig,
    /// Path to the config file, if one was loaded.
    pub config_path: Option<PathBuf>,
}

/// Resolved content settings with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Markdown content root the engine routes from.
    pub source_dir: PathBuf,
    /// Filename for directory metadata sidecars.
    pub meta_filename: String,
}

/// Raw file contents as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ProjectFileRaw {
    content: ContentConfigRaw,
    site: Option<SiteConfig>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
    meta_filename: Option<String>,
}

impl ProjectConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `tw.toml` in the current directory and parents, falling
    /// back to [`build_config`] with content in `./docs`.
    ///
    /// CLI settings are applied after loading and the site is validated last,
    /// so an override cannot smuggle in an invalid base path.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting site configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()?
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.site.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_path) = &settings.base_path {
            self.site.base_path.clone_from(base_path);
        }
        if let Some(source_dir) = &settings.source_dir {
            self.content.source_dir.clone_from(source_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            site: build_config()?,
            content: ContentConfig {
                source_dir: base.join("docs"),
                meta_filename: default_meta_filename(),
            },
            config_path: None,
        })
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let config = Self::from_toml_str(&content, config_dir)?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(Self {
            config_path: Some(path.to_path_buf()),
            ..config
        })
    }

    /// Parse a `tw.toml` document, resolving relative paths against `config_dir`.
    fn from_toml_str(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let raw: ProjectFileRaw = toml::from_str(content)?;

        let mut site = match raw.site {
            Some(site) => site,
            None => build_config()?,
        };
        site.base_path = expand_env(&site.base_path, "site.basePath")?;

        let source_dir = match raw.content.source_dir {
            Some(dir) => config_dir.join(expand_env(&dir, "content.source_dir")?),
            None => config_dir.join("docs"),
        };

        Ok(Self {
            site,
            content: ContentConfig {
                source_dir,
                meta_filename: raw
                    .content
                    .meta_filename
                    .unwrap_or_else(default_meta_filename),
            },
            config_path: None,
        })
    }
}

fn default_meta_filename() -> String {
    "meta.yaml".to_owned()
}
