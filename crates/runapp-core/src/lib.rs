//! # runapp-core
//!
//! Resolution of `runapp://<key>?<params>` URIs to local programs.
//!
//! This crate provides:
//! - URI parsing into an app key and query parameters
//! - The `RegisteredApps.toml` application list
//! - Argument template expansion (`{name}` placeholders, then environment variables)
//! - Process launch and the [`Dispatcher`] tying the steps together
//! - Per-OS scheme registration and user reporting capabilities

pub mod config;
pub mod dispatch;
pub mod error;
pub mod launcher;
pub mod registration;
pub mod report;
pub mod template;
pub mod uri;

pub use config::{AppConfig, AppRegistration, CONFIG_FILE_NAME, default_config_path};
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use launcher::{ExpandedCommand, Launch, SystemLauncher, launch};
pub use registration::{SchemeRegistrar, platform_registrar};
pub use report::{ConsoleReporter, Reporter, Severity};
#[cfg(target_os = "windows")]
pub use report::DialogReporter;
pub use uri::{InvocationRequest, QueryParams, SCHEME, SCHEME_PREFIX, is_scheme_uri};
