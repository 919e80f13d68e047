//! `tw scaffold` command implementation.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tw_config::{CliSettings, ProjectConfig, SidebarMap};
use tw_nav::{derive_sidebar, derive_sidebar_map, scan_content};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the scaffold command.
#[derive(Args)]
pub(crate) struct ScaffoldArgs {
    /// Path to configuration file (default: auto-discover tw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Derive only the sidebar for this prefix (e.g. `/back-end/`).
    #[arg(long)]
    prefix: Option<String>,
}

/// `[site.sidebarMap]` fragment of a `tw.toml` file.
#[derive(Serialize)]
struct ScaffoldFile<'a> {
    site: ScaffoldSite<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScaffoldSite<'a> {
    sidebar_map: &'a SidebarMap,
}

impl ScaffoldArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let project = ProjectConfig::load(self.config.as_deref(), Some(&cli_settings))?;
        let content = scan_content(&project.content)?;

        let sidebar_map = match &self.prefix {
            Some(prefix) => {
                let mut map = SidebarMap::new();
                map.insert(prefix.clone(), derive_sidebar(&content, prefix)?);
                map
            }
            None => derive_sidebar_map(&content),
        };

        output.info(&format!(
            "Derived {} sidebar section(s) from {}",
            sidebar_map.len(),
            project.content.source_dir.display()
        ));
        output.data(&render(&sidebar_map)?);
        Ok(())
    }
}

/// Render a sidebar map as a `tw.toml` fragment.
fn render(sidebar_map: &SidebarMap) -> Result<String, CliError> {
    let file = ScaffoldFile {
        site: ScaffoldSite { sidebar_map },
    };
    Ok(toml::to_string_pretty(&file)?)
}
