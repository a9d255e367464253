//! Application list configuration.
//!
//! The list lives in `RegisteredApps.toml` beside the executable:
//!
//! ```toml
//! [[AppList]]
//! key = "notepad"
//! target = "%SystemRoot%\\notepad.exe"
//! args = "{file}"
//! ```

mod apps;

use std::path::PathBuf;

pub use apps::*;

use crate::error::Result;

/// File name of the application list.
pub const CONFIG_FILE_NAME: &str = "RegisteredApps.toml";

/// `RegisteredApps.toml` in the directory that holds the running executable.
pub fn default_config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(dir.join(CONFIG_FILE_NAME))
}
