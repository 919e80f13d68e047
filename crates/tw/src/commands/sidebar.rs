//! `tw sidebar` command implementation.

use std::path::PathBuf;

use clap::Args;
use tw_config::route::{normalize_route, strip_base};
use tw_config::{CliSettings, ProjectConfig, SidebarItem};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page route, with or without the base path (e.g. `/back-end/os/basic`).
    route: String,

    /// Path to configuration file (default: auto-discover tw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long, env = "TW_BASE")]
    base: Option<String>,
}

impl SidebarArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_path: self.base,
            ..CliSettings::default()
        };
        let project = ProjectConfig::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = &project.site;

        let route = normalize_route(strip_base(&self.route, &site.base_path));
        let Some(section) = site.sidebar_map.entry_for(&route) else {
            output.warning(&format!("No sidebar for {route}"));
            return Ok(());
        };

        output.highlight(&format!("{route} -> {}", section.prefix));
        let mut lines = Vec::new();
        render_items(site.sidebar_for(&route), 0, &mut lines);
        output.data(&lines.join("\n"));
        Ok(())
    }
}

/// Render sidebar items as an indented outline.
fn render_items(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            SidebarItem::Leaf(leaf) => {
                lines.push(format!("{indent}{} -> {}", leaf.label, leaf.target));
            }
            SidebarItem::Group(group) => {
                let mut line = format!("{indent}{}", group.label.as_deref().unwrap_or("(group)"));
                if let Some(root_link) = &group.root_link {
                    line.push_str(&format!(" -> {root_link}"));
                }
                if group.collapsible {
                    line.push_str(if group.collapsed_by_default {
                        " [collapsed]"
                    } else {
                        " [expanded]"
                    });
                }
                lines.push(line);
                render_items(&group.children, depth + 1, lines);
            }
        }
    }
}
