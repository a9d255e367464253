//! Splitting of argument templates into words.

/// One argument-to-be of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// The word contained a double-quoted section, so it is kept even if it
    /// ends up empty.
    pub quoted: bool,
}

/// Split a template into words.
///
/// Whitespace separates words, double quotes group text (and are removed),
/// `\"` is a literal quote. Any other backslash is kept as-is so Windows
/// paths pass through untouched. An unterminated quote runs to the end.
pub fn split_words(template: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
                in_word = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(Word {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    in_word = false;
                    quoted = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(Word {
            text: current,
            quoted,
        });
    }
    words
}
