//! Register the runapp:// URI scheme handler.

use anyhow::{Context, Result};
use runapp_core::{Reporter, SCHEME_PREFIX, SchemeRegistrar};

pub fn run(registrar: &dyn SchemeRegistrar, reporter: &dyn Reporter) -> Result<()> {
    let exe_path = std::env::current_exe().context("Failed to get current executable path")?;
    registrar.install(&exe_path)?;
    reporter.info(&format!(
        "URI scheme '{SCHEME_PREFIX}' registered successfully.\nLinks will open with {}",
        exe_path.display()
    ));
    Ok(())
}
