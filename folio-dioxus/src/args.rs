//! Command-line argument parsing.

use std::path::PathBuf;

/// Determines what action to take based on command line arguments.
#[derive(Debug, Clone)]
pub enum StartupAction {
    /// No reading list available - start with an empty link pane.
    None,
    /// Reading list to open.
    OpenReadingList(PathBuf),
}

/// Parse command-line arguments and determine the startup action.
///
/// A single path argument names the reading list to open. With no
/// argument, the default list at `<config-dir>/folio/reading_list.toml`
/// is used when present.
#[must_use]
pub fn parse_args() -> StartupAction {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first() {
        None => default_reading_list(),
        Some(arg) => {
            let path = PathBuf::from(arg);
            if path.is_file() {
                StartupAction::OpenReadingList(path)
            } else {
                log::warn!("reading list not found: {}", path.display());
                StartupAction::None
            }
        }
    }
}

fn default_reading_list() -> StartupAction {
    let Some(path) = crate::config::config_dir().map(|dir| dir.join("reading_list.toml")) else {
        return StartupAction::None;
    };
    if path.is_file() {
        log::info!("using default reading list: {}", path.display());
        StartupAction::OpenReadingList(path)
    } else {
        StartupAction::None
    }
}
