//! The URI-to-process pipeline.
//!
//! parse URI → load config → look up key → expand template → launch.
//! Every step either succeeds or ends the invocation with an error; there
//! are no retries.

use std::path::PathBuf;

use tracing::debug;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::launcher::{ExpandedCommand, Launch, SystemLauncher};
use crate::template;
use crate::uri;

pub struct Dispatcher<L = SystemLauncher> {
    config_path: PathBuf,
    launcher: L,
}

impl Dispatcher<SystemLauncher> {
    pub fn with_system_launcher(config_path: impl Into<PathBuf>) -> Self {
        Self::new(config_path, SystemLauncher)
    }
}

impl<L: Launch> Dispatcher<L> {
    pub fn new(config_path: impl Into<PathBuf>, launcher: L) -> Self {
        Self {
            config_path: config_path.into(),
            launcher,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Resolve a raw invocation argument to the command it would launch.
    ///
    /// The scheme is checked before the config file is touched.
    pub fn resolve(&self, raw: &str) -> Result<ExpandedCommand> {
        let request = uri::parse(raw)?;
        debug!(
            "Parsed request: key={} params={:?}",
            request.key, request.query_params
        );

        let config = AppConfig::load(&self.config_path)?;
        let registration = config
            .lookup(&request.key)
            .ok_or_else(|| Error::KeyNotFound(request.key.clone()))?;

        let command = template::build_command(registration, &request.query_params);
        debug!("Resolved '{}' to {}", request.key, command);
        Ok(command)
    }

    /// Resolve and launch. Returns the launched command.
    pub fn dispatch(&self, raw: &str) -> Result<ExpandedCommand> {
        let command = self.resolve(raw)?;
        self.launcher.launch(&command)?;
        Ok(command)
    }
}
