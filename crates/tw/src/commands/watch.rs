//! `tw watch` command implementation.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use clap::Args;
use notify::{RecursiveMode, Watcher};
use tw_config::{CliSettings, ConfigHandle, ProjectConfig, SiteConfig};
use tw_nav::{check_links, scan_content};

use crate::error::CliError;
use crate::output::Output;

/// Quiet period before a burst of file events triggers a rebuild.
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Arguments for the watch command.
#[derive(Args)]
pub(crate) struct WatchArgs {
    /// Path to configuration file (default: auto-discover tw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long, env = "TW_BASE")]
    base: Option<String>,

    /// Enable verbose output (show scan and reload logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl WatchArgs {
    /// Execute the watch command.
    ///
    /// Runs until the watcher channel closes. Invalid rebuilds are reported and
    /// the previous configuration stays published.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_path: self.base,
            source_dir: self.source_dir,
        };
        let project = ProjectConfig::load(self.config.as_deref(), Some(&cli_settings))?;
        let config_path = project.config_path.clone();
        let source_dir = project.content.source_dir.clone();

        report_links(&project, &output);
        let handle = ConfigHandle::new(project.site);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res
                && is_change(event.kind)
            {
                let _ = tx.send(event.paths);
            }
        })?;
        watcher.watch(&source_dir, RecursiveMode::Recursive)?;
        if let Some(path) = &config_path {
            watcher.watch(path, RecursiveMode::NonRecursive)?;
            output.info(&format!("Watching {}", path.display()));
        }
        output.info(&format!("Watching {}", source_dir.display()));

        while let Ok(paths) = rx.recv() {
            let mut changed = paths;
            loop {
                match rx.recv_timeout(DEBOUNCE) {
                    Ok(paths) => changed.extend(paths),
                    Err(RecvTimeoutError::Timeout) => break,
                    Err(RecvTimeoutError::Disconnected) => return Ok(()),
                }
            }
            tracing::debug!(paths = changed.len(), "Change detected");

            match rebuild(config_path.as_deref(), &cli_settings, &output) {
                Ok(site) => {
                    let previous = handle.publish(site);
                    output.success(&format!(
                        "Reloaded configuration (generation {})",
                        handle.generation()
                    ));
                    for change in describe_changes(&previous, &handle.get()) {
                        output.info(&change);
                    }
                }
                Err(err) => {
                    output.error(&format!("Reload failed: {err}"));
                    output.warning(&format!(
                        "Keeping configuration generation {}",
                        handle.generation()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Build and check a fresh configuration.
fn rebuild(
    config_path: Option<&Path>,
    cli_settings: &CliSettings,
    output: &Output,
) -> Result<SiteConfig, CliError> {
    let project = ProjectConfig::load(config_path, Some(cli_settings))?;
    report_links(&project, output);
    Ok(project.site)
}

/// Print broken link warnings. A content scan failure is reported, not fatal.
fn report_links(project: &ProjectConfig, output: &Output) {
    match scan_content(&project.content) {
        Ok(content) => {
            for link in check_links(&project.site, &content) {
                output.warning(&format!("Warning: {link}"));
            }
        }
        Err(err) => output.warning(&format!("Link check skipped: {err}")),
    }
}

/// Summarize what a reload changed in the site metadata and navigation.
fn describe_changes(previous: &SiteConfig, current: &SiteConfig) -> Vec<String> {
    let mut changes = Vec::new();
    if previous.title != current.title {
        changes.push(format!("Title: {:?} -> {:?}", previous.title, current.title));
    }
    if previous.navigation != current.navigation {
        changes.push(format!(
            "Navigation: {} -> {} entries",
            previous.navigation.len(),
            current.navigation.len()
        ));
    }

    let before = previous.sidebar_map.sections();
    for section in current.sidebar_map.sections() {
        match before.iter().find(|old| old.prefix == section.prefix) {
            None => changes.push(format!("Sidebar added: {}", section.prefix)),
            Some(old) if old.items != section.items => {
                changes.push(format!("Sidebar changed: {}", section.prefix));
            }
            Some(_) => {}
        }
    }
    for section in before {
        if current.sidebar_map.get(&section.prefix).is_none() {
            changes.push(format!("Sidebar removed: {}", section.prefix));
        }
    }

    if changes.is_empty() {
        changes.push("No navigation changes".to_owned());
    }
    changes
}

/// Whether a notify event changes files on disk.
fn is_change(kind: notify::EventKind) -> bool {
    matches!(
        kind,
        notify::EventKind::Create(_) | notify::EventKind::Modify(_) | notify::EventKind::Remove(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::sync::Arc;

    #[test]
    fn test_is_change() {
        assert!(is_change(notify::EventKind::Create(CreateKind::File)));
        assert!(is_change(notify::EventKind::Modify(ModifyKind::Any)));
        assert!(!is_change(notify::EventKind::Access(AccessKind::Any)));
    }

    #[test]
    fn test_describe_changes_lists_sidebar_and_nav_updates() {
        let previous = tw_config::build_config().unwrap();
        let mut current = previous.clone();
        current.title = "Wiki".to_owned();
        current.navigation.pop();
        current.sidebar_map = previous
            .sidebar_map
            .sections()
            .iter()
            .filter(|section| section.prefix != "/front-end/")
            .map(|section| (section.prefix.clone(), section.items.clone()))
            .chain([("/ops/".to_owned(), Vec::new())])
            .collect();

        let changes = describe_changes(&previous, &current);

        let nav = previous.navigation.len();
        assert_eq!(
            changes,
            vec![
                "Title: \"TimegeekerWiki\" -> \"Wiki\"".to_owned(),
                format!("Navigation: {nav} -> {} entries", nav - 1),
                "Sidebar added: /ops/".to_owned(),
                "Sidebar removed: /front-end/".to_owned(),
            ]
        );
    }

    #[test]
    fn test_describe_changes_reports_edited_section() {
        let previous = tw_config::build_config().unwrap();
        let mut current = previous.clone();
        current.sidebar_map = previous
            .sidebar_map
            .sections()
            .iter()
            .map(|section| {
                let mut items = section.items.clone();
                if section.prefix == "/back-end/" {
                    items.pop();
                }
                (section.prefix.clone(), items)
            })
            .collect();

        assert_eq!(
            describe_changes(&previous, &current),
            ["Sidebar changed: /back-end/"]
        );
        assert_eq!(
            describe_changes(&previous, &previous),
            ["No navigation changes"]
        );
    }

    #[test]
    fn test_rebuild_rejects_invalid_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("tw.toml");
        fs::write(
            &config_path,
            "[site]\ntitle = \"Wiki\"\ndescription = \"Notes\"\nbasePath = \"wiki\"\n",
        )
        .unwrap();

        let result = rebuild(Some(&config_path), &CliSettings::default(), &Output::new());

        assert!(matches!(
            result,
            Err(CliError::Config(tw_config::ConfigError::InvalidBasePath(_)))
        ));
    }

    #[test]
    fn test_rebuild_publishes_new_generation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("tw.toml");
        fs::write(&config_path, "[site]\ntitle = \"Wiki\"\ndescription = \"Notes\"\n").unwrap();
        let handle = ConfigHandle::new(tw_config::build_config().unwrap());

        let site = rebuild(Some(&config_path), &CliSettings::default(), &Output::new()).unwrap();
        let previous = handle.publish(site);

        assert_eq!(previous.title, "TimegeekerWiki");
        assert_eq!(handle.get().title, "Wiki");
        assert_eq!(handle.generation(), 1);
    }

    #[test]
    fn test_handle_survives_failed_rebuild() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("tw.toml");
        fs::write(&config_path, "[site]\ntitle = \"\"\n").unwrap();
        let handle = ConfigHandle::new(tw_config::build_config().unwrap());
        let before = handle.get();

        assert!(rebuild(Some(&config_path), &CliSettings::default(), &Output::new()).is_err());

        assert!(Arc::ptr_eq(&before, &handle.get()));
        assert_eq!(handle.generation(), 0);
    }
}
