//! Argument template expansion.
//!
//! Expansion runs in two phases: `{name}` placeholders are replaced with query
//! parameter values first, then environment references are resolved. A
//! parameter value containing `%VAR%` is therefore expanded too.
//!
//! Because placeholders are substituted first, `${VAR}` inside an argument
//! template is read as `$` followed by the placeholder `{VAR}`. Use `%VAR%` or
//! `$VAR` there; `${VAR}` is fine in targets.

mod env;
mod placeholder;
mod words;

use std::path::PathBuf;

pub use env::{expand_env, expand_env_with};
pub use placeholder::{Segment, placeholder_names, scan, substitute};
pub use words::{Word, split_words};

use crate::config::AppRegistration;
use crate::launcher::ExpandedCommand;
use crate::uri::QueryParams;

/// Expand a template into a single string.
///
/// Placeholders whose parameter is absent become empty.
pub fn expand(template: &str, params: &QueryParams) -> String {
    expand_env(&substitute(template, params))
}

/// Expand a template into an argument list, one element per word.
///
/// The template is split before substitution, so a parameter value never
/// spills into neighbouring arguments whatever spaces or quotes it holds.
/// An unquoted word that expands to nothing is dropped.
pub fn expand_args(template: &str, params: &QueryParams) -> Vec<String> {
    expand_args_with(template, params, |name| std::env::var(name).ok())
}

/// [`expand_args`] with an explicit environment lookup.
pub fn expand_args_with<F>(template: &str, params: &QueryParams, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    split_words(template)
        .into_iter()
        .filter_map(|word| {
            let arg = expand_env_with(&substitute(&word.text, params), &lookup);
            (word.quoted || !arg.is_empty()).then_some(arg)
        })
        .collect()
}

/// Build the command for a registration and the invocation's parameters.
pub fn build_command(registration: &AppRegistration, params: &QueryParams) -> ExpandedCommand {
    let executable_path = PathBuf::from(expand_env(&registration.target));
    let arguments = registration
        .args
        .as_deref()
        .map(|template| expand_args(template, params))
        .unwrap_or_default();
    ExpandedCommand::new(executable_path, arguments)
}
