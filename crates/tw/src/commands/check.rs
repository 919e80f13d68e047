//! `tw check` command implementation.

use std::path::PathBuf;

use clap::Args;
use tw_config::{CliSettings, ProjectConfig};
use tw_nav::{check_links, scan_content};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover tw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base path, e.g. `/TimegeekerWiki/` (overrides config).
    #[arg(long, env = "TW_BASE")]
    base: Option<String>,

    /// Treat broken links as errors.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output (show scan and link logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the content cannot be
    /// scanned, or links are broken in strict mode.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_path: self.base,
            source_dir: self.source_dir,
        };
        let project = ProjectConfig::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &project.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Source directory: {}",
            project.content.source_dir.display()
        ));

        let content = scan_content(&project.content)?;
        let broken = check_links(&project.site, &content);

        for link in &broken {
            output.warning(&format!("Warning: {link}"));
        }

        if self.strict && !broken.is_empty() {
            return Err(CliError::BrokenLinks(broken.len()));
        }

        output.success(&format!(
            "Configuration valid: {} nav entries, {} sidebar sections, {} documents, \
             {} broken link(s)",
            project.site.navigation.len(),
            project.site.sidebar_map.len(),
            content.document_count(),
            broken.len(),
        ));
        Ok(())
    }
}
