use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not a runapp URI: {0}")]
    WrongScheme(String),

    #[error("Malformed URI '{uri}': {message}")]
    UriMalformed { uri: String, message: String },

    #[error("Could not find configuration file: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error(
        "Error loading the config file{}: {message}",
        .path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default()
    )]
    ConfigMalformed {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Failed to launch {}: {source}", .path.display())]
    SpawnFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scheme registration failed: {0}")]
    Registration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = Error::ConfigNotFound(PathBuf::from("/opt/runapp/RegisteredApps.toml"));
        assert!(err.to_string().contains("/opt/runapp/RegisteredApps.toml"));

        let err = Error::KeyNotFound("missingkey".to_string());
        assert_eq!(err.to_string(), "Key not found: missingkey");
    }

    #[test]
    fn test_malformed_message_with_and_without_path() {
        let err = Error::ConfigMalformed {
            path: Some(PathBuf::from("apps.toml")),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Error loading the config file apps.toml: bad");

        let err = Error::ConfigMalformed {
            path: None,
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Error loading the config file: bad");
    }

    #[test]
    fn test_spawn_failed_includes_os_error() {
        let err = Error::SpawnFailed {
            path: PathBuf::from("/no/such/tool"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "entity not found"),
        };
        let message = err.to_string();
        assert!(message.contains("/no/such/tool"));
        assert!(message.contains("entity not found"));
    }
}
