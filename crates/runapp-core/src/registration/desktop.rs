//! freedesktop.org registration via a `.desktop` entry handling
//! `x-scheme-handler/<scheme>`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use super::SchemeRegistrar;
use crate::error::{Error, Result};
use crate::report::APP_TITLE;

#[derive(Debug, Clone)]
pub struct DesktopEntryRegistrar {
    applications_dir: PathBuf,
    scheme: String,
    update_mime_defaults: bool,
}

impl DesktopEntryRegistrar {
    pub fn new(applications_dir: impl Into<PathBuf>, scheme: impl Into<String>) -> Self {
        Self {
            applications_dir: applications_dir.into(),
            scheme: scheme.into(),
            update_mime_defaults: true,
        }
    }

    /// Registrar for `$XDG_DATA_HOME/applications`.
    pub fn for_current_user(scheme: impl Into<String>) -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            Error::Registration("Could not determine the user data directory".to_string())
        })?;
        Ok(Self::new(data_dir.join("applications"), scheme))
    }

    /// Skip the `xdg-mime default` call after writing the entry.
    pub fn without_mime_update(mut self) -> Self {
        self.update_mime_defaults = false;
        self
    }

    pub fn file_name(&self) -> String {
        format!("{}-handler.desktop", self.scheme)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.applications_dir.join(self.file_name())
    }

    fn mime_type(&self) -> String {
        format!("x-scheme-handler/{}", self.scheme)
    }

    fn set_mime_default(&self) {
        let status = Command::new("xdg-mime")
            .args(["default", &self.file_name(), &self.mime_type()])
            .status();
        match status {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("xdg-mime default exited with {status}"),
            Err(e) => warn!("Could not run xdg-mime: {e}"),
        }
    }
}

impl SchemeRegistrar for DesktopEntryRegistrar {
    fn is_installed(&self) -> Result<bool> {
        Ok(self.entry_path().is_file())
    }

    fn install(&self, executable: &Path) -> Result<()> {
        fs::create_dir_all(&self.applications_dir)?;
        let path = self.entry_path();
        fs::write(&path, desktop_entry(executable, &self.mime_type()))?;
        info!("Wrote {}", path.display());

        if self.update_mime_defaults {
            self.set_mime_default();
        }
        Ok(())
    }

    fn uninstall(&self) -> Result<()> {
        let path = self.entry_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Contents of the `.desktop` file. `%u` receives the activated URI.
pub fn desktop_entry(executable: &Path, mime_type: &str) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={APP_TITLE}\n\
         Exec={} %u\n\
         Terminal=false\n\
         NoDisplay=true\n\
         MimeType={mime_type};\n",
        quote_exec_arg(&executable.to_string_lossy())
    )
}

// Quoted Exec arguments escape `"`, `` ` ``, `$` and `\`; the string-value
// escape then doubles every backslash again.
fn quote_exec_arg(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' | '`' | '$' => {
                quoted.push_str("\\\\");
                quoted.push(c);
            }
            '\\' => quoted.push_str("\\\\\\\\"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registrar(temp_dir: &TempDir) -> DesktopEntryRegistrar {
        DesktopEntryRegistrar::new(temp_dir.path().join("applications"), "runapp")
            .without_mime_update()
    }

    #[test]
    fn test_desktop_entry_contents() {
        let entry = desktop_entry(Path::new("/opt/runapp/runapp"), "x-scheme-handler/runapp");
        assert!(entry.starts_with("[Desktop Entry]\n"));
        assert!(entry.contains("Exec=\"/opt/runapp/runapp\" %u\n"));
        assert!(entry.contains("MimeType=x-scheme-handler/runapp;\n"));
        assert!(entry.contains("Name=RunApp URL Protocol Handler\n"));
    }

    #[test]
    fn test_exec_arg_escaping() {
        assert_eq!(quote_exec_arg("/a b/c"), "\"/a b/c\"");
        assert_eq!(quote_exec_arg("/x$y"), "\"/x\\\\$y\"");
        assert_eq!(quote_exec_arg(r"a\b"), "\"a\\\\\\\\b\"");
    }

    #[test]
    fn test_install_uninstall_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let registrar = registrar(&temp_dir);

        assert!(!registrar.is_installed().unwrap());

        registrar.install(Path::new("/usr/local/bin/runapp")).unwrap();
        assert!(registrar.is_installed().unwrap());
        assert_eq!(
            registrar.entry_path().file_name().unwrap(),
            "runapp-handler.desktop"
        );

        registrar.uninstall().unwrap();
        assert!(!registrar.is_installed().unwrap());
    }

    #[test]
    fn test_install_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let registrar = registrar(&temp_dir);

        registrar.install(Path::new("/old/runapp")).unwrap();
        registrar.install(Path::new("/new/runapp")).unwrap();

        let content = fs::read_to_string(registrar.entry_path()).unwrap();
        assert!(content.contains("/new/runapp"));
        assert!(!content.contains("/old/runapp"));
    }

    #[test]
    fn test_uninstall_when_absent() {
        let temp_dir = TempDir::new().unwrap();
        assert!(registrar(&temp_dir).uninstall().is_ok());
    }
}
