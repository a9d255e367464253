//! Interactive setup when started without arguments.

use anyhow::Result;
use runapp_core::{Reporter, SCHEME_PREFIX, SchemeRegistrar};

use super::{install, uninstall};
use crate::cli_utils::SYNTAX;

/// Offer to uninstall an existing registration, or to install a missing one.
/// Declining shows the syntax help.
pub fn run(registrar: &dyn SchemeRegistrar, reporter: &dyn Reporter) -> Result<()> {
    if registrar.is_installed()? {
        let question = format!(
            "The '{SCHEME_PREFIX}' protocol handler is installed.\nDo you want to uninstall it?"
        );
        if reporter.confirm(&question) {
            return uninstall::run(registrar, reporter);
        }
    } else {
        let question = format!(
            "The '{SCHEME_PREFIX}' protocol handler is not installed.\nDo you want to install it?"
        );
        if reporter.confirm(&question) {
            return install::run(registrar, reporter);
        }
    }

    reporter.info(SYNTAX);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::RecordingReporter;
    use std::cell::Cell;
    use std::path::Path;

    struct FakeRegistrar {
        installed: Cell<bool>,
    }

    impl SchemeRegistrar for FakeRegistrar {
        fn is_installed(&self) -> runapp_core::Result<bool> {
            Ok(self.installed.get())
        }

        fn install(&self, _executable: &Path) -> runapp_core::Result<()> {
            self.installed.set(true);
            Ok(())
        }

        fn uninstall(&self) -> runapp_core::Result<()> {
            self.installed.set(false);
            Ok(())
        }
    }

    #[test]
    fn test_installs_when_confirmed() {
        let registrar = FakeRegistrar {
            installed: Cell::new(false),
        };
        let reporter = RecordingReporter::answering(true);

        run(&registrar, &reporter).unwrap();

        assert!(registrar.installed.get());
        assert!(reporter.infos.borrow()[0].contains("registered successfully"));
    }

    #[test]
    fn test_uninstalls_when_confirmed() {
        let registrar = FakeRegistrar {
            installed: Cell::new(true),
        };
        let reporter = RecordingReporter::answering(true);

        run(&registrar, &reporter).unwrap();

        assert!(!registrar.installed.get());
        assert!(reporter.infos.borrow()[0].contains("unregistered"));
    }

    #[test]
    fn test_declining_shows_syntax() {
        let registrar = FakeRegistrar {
            installed: Cell::new(true),
        };
        let reporter = RecordingReporter::answering(false);

        run(&registrar, &reporter).unwrap();

        assert!(registrar.installed.get());
        assert_eq!(reporter.infos.borrow().as_slice(), [SYNTAX.to_string()]);
    }
}
