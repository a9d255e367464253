#![cfg_attr(windows, windows_subsystem = "windows")]

mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Action, Args};
use runapp_core::{Reporter, platform_registrar};
use tracing_subscriber::EnvFilter;

fn main() {
    cli_utils::attach_parent_console();
    let args = Args::parse();

    // Logging goes to stderr only; default to warn unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("runapp=warn,runapp_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let reporter = cli_utils::reporter(args.console);
    if let Err(error) = run(&args, reporter.as_ref()) {
        reporter.error(&format!("{error:#}"));
        std::process::exit(1);
    }
}

fn run(args: &Args, reporter: &dyn Reporter) -> Result<()> {
    match args.action() {
        Action::Open { uri, dry_run } => {
            let config_path = cli_utils::config_path(args.config.clone())?;
            commands::open::run(&uri, &config_path, dry_run, reporter)
        }
        Action::List { json } => {
            let config_path = cli_utils::config_path(args.config.clone())?;
            commands::list::run(&config_path, json)
        }
        Action::Install => commands::install::run(platform_registrar()?.as_ref(), reporter),
        Action::Uninstall => commands::uninstall::run(platform_registrar()?.as_ref(), reporter),
        Action::Setup => commands::setup::run(platform_registrar()?.as_ref(), reporter),
    }
}
