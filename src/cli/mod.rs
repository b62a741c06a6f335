//! CLI command implementations

pub mod args;
pub mod catalog;

pub use args::{Cli, ListArgs, ScoreArgs, ServeArgs, ValidateArgs};

/// Expand tilde in path
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
