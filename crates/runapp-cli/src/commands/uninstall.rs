//! Remove the runapp:// URI scheme handler.

use anyhow::Result;
use runapp_core::{Reporter, SCHEME_PREFIX, SchemeRegistrar};

pub fn run(registrar: &dyn SchemeRegistrar, reporter: &dyn Reporter) -> Result<()> {
    registrar.uninstall()?;
    reporter.info(&format!("URI scheme '{SCHEME_PREFIX}' unregistered."));
    Ok(())
}
