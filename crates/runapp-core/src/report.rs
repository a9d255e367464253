//! User-facing messages and confirmations.

use std::io::{self, BufRead, Write};

use strum::Display;

/// Title used for message dialogs.
pub const APP_TITLE: &str = "RunApp URL Protocol Handler";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// Where messages for the invoking user go.
pub trait Reporter {
    fn info(&self, text: &str);

    fn error(&self, text: &str);

    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&self, text: &str) -> bool;

    fn report(&self, severity: Severity, text: &str) {
        match severity {
            Severity::Info => self.info(text),
            Severity::Error => self.error(text),
        }
    }
}

/// Reports on stderr and reads confirmations from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, text: &str) {
        eprintln!("{text}");
    }

    fn error(&self, text: &str) {
        eprintln!("{}: {text}", Severity::Error);
    }

    fn confirm(&self, text: &str) -> bool {
        eprint!("{text} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

/// Interpret a typed answer: `y` or `yes`, any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Reports through Windows message boxes.
#[cfg(target_os = "windows")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogReporter;

#[cfg(target_os = "windows")]
impl DialogReporter {
    fn show(
        text: &str,
        style: windows::Win32::UI::WindowsAndMessaging::MESSAGEBOX_STYLE,
    ) -> windows::Win32::UI::WindowsAndMessaging::MESSAGEBOX_RESULT {
        use windows::Win32::Foundation::HWND;
        use windows::Win32::UI::WindowsAndMessaging::MessageBoxW;
        use windows::core::HSTRING;

        let text = HSTRING::from(text);
        let title = HSTRING::from(APP_TITLE);
        // SAFETY: MessageBoxW is given valid null-terminated strings that
        // outlive the call, and no owner window.
        unsafe { MessageBoxW(HWND::default(), &text, &title, style) }
    }
}

#[cfg(target_os = "windows")]
impl Reporter for DialogReporter {
    fn info(&self, text: &str) {
        use windows::Win32::UI::WindowsAndMessaging::{MB_ICONINFORMATION, MB_OK};
        Self::show(text, MB_OK | MB_ICONINFORMATION);
    }

    fn error(&self, text: &str) {
        use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK};
        Self::show(text, MB_OK | MB_ICONERROR);
    }

    fn confirm(&self, text: &str) -> bool {
        use windows::Win32::UI::WindowsAndMessaging::{IDYES, MB_ICONQUESTION, MB_YESNO};
        Self::show(text, MB_YESNO | MB_ICONQUESTION) == IDYES
    }
}
