//! Registry-based registration under `HKCU\Software\Classes\<scheme>`.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use tracing::info;
use windows::Win32::Foundation::ERROR_FILE_NOT_FOUND;
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_READ, KEY_WRITE, REG_OPTION_NON_VOLATILE, REG_SZ, RegCloseKey,
    RegCreateKeyExW, RegDeleteTreeW, RegOpenKeyExW, RegSetValueExW,
};
use windows::core::{HSTRING, PCWSTR};

use super::{SchemeRegistrar, open_command};
use crate::error::{Error, Result};

/// Writes the per-user URL protocol keys so the shell launches
/// `"<exe>" "%1"` when a link of the scheme is activated.
#[derive(Debug, Clone)]
pub struct RegistryRegistrar {
    scheme: String,
}

impl RegistryRegistrar {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    fn root_subkey(&self) -> String {
        format!(r"Software\Classes\{}", self.scheme)
    }

    fn command_subkey(&self) -> String {
        format!(r"{}\shell\open\command", self.root_subkey())
    }
}

/// An open registry key, closed on drop.
struct RegKey(HKEY);

impl RegKey {
    fn create(subkey: &str) -> Result<Self> {
        let name = HSTRING::from(subkey);
        let mut key = HKEY::default();
        // SAFETY: RegCreateKeyExW creates or opens a registry key and writes
        // the handle into `key`.
        unsafe {
            RegCreateKeyExW(
                HKEY_CURRENT_USER,
                &name,
                0,
                None,
                REG_OPTION_NON_VOLATILE,
                KEY_WRITE,
                None,
                &mut key,
                None,
            )
            .ok()
            .map_err(|e| {
                Error::Registration(format!("Failed to create registry key '{subkey}': {e}"))
            })?;
        }
        Ok(Self(key))
    }

    fn open(subkey: &str) -> Option<Self> {
        let name = HSTRING::from(subkey);
        let mut key = HKEY::default();
        // SAFETY: RegOpenKeyExW opens an existing key and writes the handle
        // into `key` on success only.
        let status = unsafe { RegOpenKeyExW(HKEY_CURRENT_USER, &name, 0, KEY_READ, &mut key) };
        status.is_ok().then_some(Self(key))
    }

    /// Set a REG_SZ value; `None` writes the key's default value.
    fn set_string(&self, name: Option<&str>, value: &str) -> Result<()> {
        let wide: Vec<u16> = OsStr::new(value)
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();
        let name_wide: Vec<u16>;
        let name_ptr = if let Some(n) = name {
            name_wide = OsStr::new(n)
                .encode_wide()
                .chain(std::iter::once(0))
                .collect();
            PCWSTR::from_raw(name_wide.as_ptr())
        } else {
            PCWSTR::null()
        };
        // SAFETY: `wide` and `name_wide` stay alive for the duration of the
        // call, so both pointers are valid.
        unsafe {
            RegSetValueExW(
                self.0,
                name_ptr,
                0,
                REG_SZ,
                Some(std::slice::from_raw_parts(
                    wide.as_ptr().cast::<u8>(),
                    wide.len() * 2,
                )),
            )
            .ok()
            .map_err(|e| Error::Registration(format!("Failed to set registry value: {e}")))?;
        }
        Ok(())
    }
}

impl Drop for RegKey {
    fn drop(&mut self) {
        // SAFETY: the handle came from RegCreateKeyExW/RegOpenKeyExW and is
        // closed exactly once.
        unsafe {
            let _ = RegCloseKey(self.0);
        }
    }
}

impl SchemeRegistrar for RegistryRegistrar {
    fn is_installed(&self) -> Result<bool> {
        Ok(RegKey::open(&self.command_subkey()).is_some())
    }

    fn install(&self, executable: &Path) -> Result<()> {
        let root = RegKey::create(&self.root_subkey())?;
        root.set_string(None, &format!("URL:{} Protocol", self.scheme))?;
        root.set_string(Some("URL Protocol"), "")?;

        let command = RegKey::create(&self.command_subkey())?;
        command.set_string(None, &open_command(executable))?;

        info!("Registered {}:// in HKCU\\{}", self.scheme, self.root_subkey());
        Ok(())
    }

    fn uninstall(&self) -> Result<()> {
        let subkey = HSTRING::from(self.root_subkey());
        // SAFETY: RegDeleteTreeW deletes the key and all of its subkeys.
        let status = unsafe { RegDeleteTreeW(HKEY_CURRENT_USER, &subkey) };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(());
        }
        status.ok().map_err(|e| {
            Error::Registration(format!(
                "Failed to delete registry key '{}': {e}",
                self.root_subkey()
            ))
        })?;

        info!("Removed {}:// registration", self.scheme);
        Ok(())
    }
}
