use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A single entry of the application list: which program a key launches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppRegistration {
    /// Lookup key, matched against the URI host.
    pub key: String,
    /// Program to start. May reference environment variables.
    pub target: String,
    /// Argument template with `{name}` placeholders.
    #[serde(default)]
    pub args: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(rename = "AppList", default)]
    apps: Vec<AppRegistration>,
}

/// The loaded application list, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    apps: Vec<AppRegistration>,
}

impl AppConfig {
    /// Load the application list from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let apps = parse_apps(&content).map_err(|message| Error::ConfigMalformed {
            path: Some(path.to_path_buf()),
            message,
        })?;
        let config = Self { apps };
        debug!("Loaded {} registrations from {}", config.len(), path.display());
        Ok(config)
    }

    /// Parse the application list from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let apps = parse_apps(content)
            .map_err(|message| Error::ConfigMalformed { path: None, message })?;
        Ok(Self { apps })
    }

    /// Find the registration for `key`. Exact, case-sensitive, first match wins.
    pub fn lookup(&self, key: &str) -> Option<&AppRegistration> {
        self.apps.iter().find(|app| app.key == key)
    }

    pub fn apps(&self) -> &[AppRegistration] {
        &self.apps
    }

    /// Registered keys in file order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.apps.iter().map(|app| app.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Schema parse plus validation. Errors are plain messages; callers attach
/// the path when there is one.
fn parse_apps(content: &str) -> std::result::Result<Vec<AppRegistration>, String> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| e.message().to_string())?;

    let mut seen = HashSet::new();
    for (index, app) in file.apps.iter().enumerate() {
        if app.key.is_empty() {
            return Err(format!("AppList entry {} has an empty key", index + 1));
        }
        if app.target.is_empty() {
            return Err(format!("App '{}' has an empty target", app.key));
        }
        if !seen.insert(app.key.as_str()) {
            warn!(
                "Duplicate key '{}' in AppList entry {}; the first entry wins",
                app.key,
                index + 1
            );
        }
    }

    Ok(file.apps)
}
