//! CLI argument definitions for runapp.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "runapp")]
#[command(about = "runapp:// URL protocol handler", version)]
#[command(group(ArgGroup::new("action").args(["uri", "install", "uninstall", "list"])))]
pub struct Args {
    /// runapp:// URI to open (runapp://<key>?<param>=<value>&...)
    pub uri: Option<String>,

    /// Application list (default: RegisteredApps.toml beside the executable)
    #[arg(long, value_name = "FILE", env = "RUNAPP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Register this executable as the runapp:// handler
    #[arg(long)]
    pub install: bool,

    /// Remove the runapp:// handler registration
    #[arg(long)]
    pub uninstall: bool,

    /// List the registered applications
    #[arg(long)]
    pub list: bool,

    /// Output the list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Print the resolved command instead of launching it
    #[arg(long, requires = "uri")]
    pub dry_run: bool,

    /// Report on the console instead of message dialogs
    #[arg(long)]
    pub console: bool,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open { uri: String, dry_run: bool },
    Install,
    Uninstall,
    List { json: bool },
    /// No argument: offer to install or uninstall.
    Setup,
}

impl Args {
    pub fn action(&self) -> Action {
        if self.install {
            Action::Install
        } else if self.uninstall {
            Action::Uninstall
        } else if self.list {
            Action::List { json: self.json }
        } else if let Some(uri) = &self.uri {
            Action::Open {
                uri: uri.clone(),
                dry_run: self.dry_run,
            }
        } else {
            Action::Setup
        }
    }
}
