//! Process launch for resolved commands.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{Error, Result};

/// A fully expanded command ready to be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedCommand {
    pub executable_path: PathBuf,
    pub arguments: Vec<String>,
}

impl ExpandedCommand {
    pub fn new(executable_path: impl Into<PathBuf>, arguments: Vec<String>) -> Self {
        Self {
            executable_path: executable_path.into(),
            arguments,
        }
    }

    /// Single-line rendering for logs and dry runs. Parts with whitespace or
    /// quotes are double-quoted.
    pub fn command_line(&self) -> String {
        let executable = self.executable_path.to_string_lossy();
        std::iter::once(executable.as_ref())
            .chain(self.arguments.iter().map(String::as_str))
            .map(quote_part)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ExpandedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

fn quote_part(part: &str) -> String {
    if !part.is_empty() && !part.contains(|c: char| c.is_whitespace() || c == '"') {
        return part.to_string();
    }
    format!("\"{}\"", part.replace('"', "\\\""))
}

/// Something that can start a resolved command.
///
/// Abstracted so the resolution pipeline can be exercised without spawning.
pub trait Launch {
    fn launch(&self, command: &ExpandedCommand) -> Result<()>;
}

/// Starts commands as detached child processes.
///
/// The child is not waited on and its output is not captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launch for SystemLauncher {
    fn launch(&self, command: &ExpandedCommand) -> Result<()> {
        let child = Command::new(&command.executable_path)
            .args(&command.arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::SpawnFailed {
                path: command.executable_path.clone(),
                source,
            })?;

        info!("Launched {} (PID: {})", command, child.id());
        Ok(())
    }
}

/// Start `command` with the [`SystemLauncher`].
pub fn launch(command: &ExpandedCommand) -> Result<()> {
    SystemLauncher.launch(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_quotes_when_needed() {
        let command = ExpandedCommand::new(
            r"C:\Program Files\App\app.exe",
            vec![
                "--open".to_string(),
                "my file.txt".to_string(),
                String::new(),
                "say \"hi\"".to_string(),
            ],
        );
        assert_eq!(
            command.command_line(),
            r#""C:\Program Files\App\app.exe" --open "my file.txt" "" "say \"hi\"""#
        );
    }

    #[test]
    fn test_display_matches_command_line() {
        let command = ExpandedCommand::new("notepad.exe", vec!["report.txt".to_string()]);
        assert_eq!(command.to_string(), "notepad.exe report.txt");
    }

    #[test]
    fn test_launch_missing_executable() {
        let command = ExpandedCommand::new("/definitely/not/a/real/program-runapp", Vec::new());
        match launch(&command) {
            Err(Error::SpawnFailed { path, source }) => {
                assert_eq!(path, command.executable_path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected SpawnFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_does_not_wait() {
        let command = ExpandedCommand::new(
            "/bin/sh",
            vec!["-c".to_string(), "sleep 5".to_string()],
        );
        let start = std::time::Instant::now();
        launch(&command).unwrap();
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }
}
