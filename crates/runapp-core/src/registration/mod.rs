//! OS association between the `runapp://` scheme and this executable.
//!
//! Each platform gets a [`SchemeRegistrar`]; the resolution pipeline never
//! touches it. Installing twice overwrites the previous association.

mod desktop;
#[cfg(target_os = "windows")]
mod registry;

use std::path::Path;

pub use desktop::DesktopEntryRegistrar;
#[cfg(target_os = "windows")]
pub use registry::RegistryRegistrar;

use crate::error::{Error, Result};

pub trait SchemeRegistrar {
    /// Whether the scheme is currently associated with a handler.
    fn is_installed(&self) -> Result<bool>;

    /// Associate the scheme with `executable`, passing the raw URI as its
    /// only argument.
    fn install(&self, executable: &Path) -> Result<()>;

    /// Remove the association. Succeeds when nothing is installed.
    fn uninstall(&self) -> Result<()>;
}

/// Fallback for platforms without a known association mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRegistrar;

impl SchemeRegistrar for UnsupportedRegistrar {
    fn is_installed(&self) -> Result<bool> {
        Ok(false)
    }

    fn install(&self, _executable: &Path) -> Result<()> {
        Err(unsupported())
    }

    fn uninstall(&self) -> Result<()> {
        Err(unsupported())
    }
}

fn unsupported() -> Error {
    Error::Registration(format!(
        "URI scheme registration is not supported on {}",
        std::env::consts::OS
    ))
}

/// The registrar for the running platform.
#[cfg(target_os = "windows")]
pub fn platform_registrar() -> Result<Box<dyn SchemeRegistrar>> {
    Ok(Box::new(RegistryRegistrar::new(crate::uri::SCHEME)))
}

/// The registrar for the running platform.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn platform_registrar() -> Result<Box<dyn SchemeRegistrar>> {
    Ok(Box::new(DesktopEntryRegistrar::for_current_user(
        crate::uri::SCHEME,
    )?))
}

/// The registrar for the running platform.
#[cfg(not(any(target_os = "windows", all(unix, not(target_os = "macos")))))]
pub fn platform_registrar() -> Result<Box<dyn SchemeRegistrar>> {
    Ok(Box::new(UnsupportedRegistrar))
}

/// Shell command stored under `shell\open\command`: `"<exe>" "%1"`.
pub fn open_command(executable: &Path) -> String {
    format!("\"{}\" \"%1\"", executable.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_command() {
        assert_eq!(
            open_command(Path::new(r"C:\Tools\runapp.exe")),
            r#""C:\Tools\runapp.exe" "%1""#
        );
    }

    #[test]
    fn test_unsupported_registrar() {
        let registrar = UnsupportedRegistrar;
        assert!(!registrar.is_installed().unwrap());
        assert!(matches!(
            registrar.install(Path::new("/usr/bin/runapp")),
            Err(Error::Registration(_))
        ));
        assert!(registrar.uninstall().is_err());
    }
}
