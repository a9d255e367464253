//! Test doubles shared by the command tests.

use std::cell::RefCell;

use runapp_core::Reporter;

/// Records messages and answers every confirmation the same way.
pub struct RecordingReporter {
    answer: bool,
    pub infos: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            infos: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
        }
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, text: &str) {
        self.infos.borrow_mut().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.errors.borrow_mut().push(text.to_string());
    }

    fn confirm(&self, _text: &str) -> bool {
        self.answer
    }
}
