//! `tw export` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tw_config::{CliSettings, ProjectConfig, SiteConfig};
use tw_nav::to_engine_json;

use crate::error::CliError;
use crate::output::Output;

/// Export format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// Site engine configuration (JSON).
    #[default]
    Engine,
    /// `SiteConfig` as JSON.
    Json,
    /// `SiteConfig` as TOML.
    Toml,
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover tw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long, env = "TW_BASE")]
    base: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: ExportFormat,
}

impl ExportArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_path: self.base,
            ..CliSettings::default()
        };
        let project = ProjectConfig::load(self.config.as_deref(), Some(&cli_settings))?;

        Output::new().data(&render(&project.site, self.format)?);
        Ok(())
    }
}

/// Render a configuration in the requested format.
fn render(site: &SiteConfig, format: ExportFormat) -> Result<String, CliError> {
    Ok(match format {
        ExportFormat::Engine => to_engine_json(site)?,
        ExportFormat::Json => serde_json::to_string_pretty(site)?,
        ExportFormat::Toml => site.to_toml()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tw_config::build_config;

    #[test]
    fn test_render_json_round_trips() {
        let site = build_config().unwrap();

        let json = render(&site, ExportFormat::Json).unwrap();

        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, site);
    }

    #[test]
    fn test_render_toml_round_trips() {
        let site = build_config().unwrap();

        let toml = render(&site, ExportFormat::Toml).unwrap();

        assert_eq!(SiteConfig::from_toml(&toml).unwrap(), site);
    }

    #[test]
    fn test_render_engine_uses_theme_config() {
        let site = build_config().unwrap();

        let json = render(&site, ExportFormat::Engine).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["themeConfig"]["nav"][1]["link"], "/back-end/index");
    }
}
