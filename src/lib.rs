//! fileexplorer: the backend of a directory navigation widget.
//!
//! The widget shows one directory and its immediate subdirectories. Selecting
//! a child descends into it; selecting the up sentinel moves to the parent.
//!
//! - [core]: listing and the navigation step.
//! - [component]: the widget, its host seam and the JSON codec.
//! - [host]: a line-delimited stdin/stdout host used by the `fx` binary.
//! - [config]: `fx.toml` loading.
//! - [utils]: CLI parsing and path helpers.

pub mod component;
pub mod config;
pub mod core;
pub mod host;
pub mod utils;

pub use component::FileExplorer;
pub use self::core::{ExplorerError, NavRequest, NavState, Navigator, Selection, list_dirs, step};
