//! Common CLI utility functions shared across commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use runapp_core::{ConsoleReporter, Reporter, default_config_path};

/// Shown when invoked with something other than a runapp:// URI.
pub const SYNTAX: &str = "Syntax:\nrunapp://<key>";

/// Reattach to the console of the launching shell, if there is one.
///
/// The binary is built for the GUI subsystem on Windows, so without this
/// `--dry-run`, `--list` and `--help` output would go nowhere.
#[cfg(target_os = "windows")]
pub fn attach_parent_console() {
    use windows::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};

    // SAFETY: AttachConsole takes no pointers; failure (no parent console,
    // or one already attached) leaves the process unchanged.
    let _ = unsafe { AttachConsole(ATTACH_PARENT_PROCESS) };
}

#[cfg(not(target_os = "windows"))]
pub fn attach_parent_console() {}

/// Message dialogs on Windows unless `console` is set; stderr elsewhere.
#[cfg(target_os = "windows")]
pub fn reporter(console: bool) -> Box<dyn Reporter> {
    if console {
        Box::new(ConsoleReporter)
    } else {
        Box::new(runapp_core::DialogReporter)
    }
}

/// Message dialogs on Windows unless `console` is set; stderr elsewhere.
#[cfg(not(target_os = "windows"))]
pub fn reporter(_console: bool) -> Box<dyn Reporter> {
    Box::new(ConsoleReporter)
}

/// The explicit config path, or the one beside the executable.
pub fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_config_path().context("Failed to locate the configuration file"),
    }
}
