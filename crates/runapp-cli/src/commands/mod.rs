//! CLI command implementations.

pub mod install;
pub mod list;
pub mod open;
pub mod setup;
pub mod uninstall;

#[cfg(test)]
mod test_support;
