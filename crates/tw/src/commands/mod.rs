//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod scaffold;
pub(crate) mod sidebar;
pub(crate) mod watch;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use scaffold::ScaffoldArgs;
pub(crate) use sidebar::SidebarArgs;
pub(crate) use watch::WatchArgs;
