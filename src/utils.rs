//! Miscellaneous utility functions for fileexplorer.
//!
//! - [cli]: argument parsing for the `fx` binary.
//! - [helpers]: home directory expansion and start directory resolution.

pub mod cli;
pub mod helpers;

pub use helpers::{expand_home_path, get_home, is_directory, readable_path, resolve_start_dir};
