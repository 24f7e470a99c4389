//! Core logic for fileexplorer.
//!
//! This module holds the filesystem side of the widget, with no host or wire concerns:
//! - [fm]: listing the subdirectories of a path (see [list_dirs]).
//! - [nav]: the navigation state and the up/down transition (see [Navigator], [NavState]).
//! - [error]: the [ExplorerError] returned by every fallible operation.

pub mod error;
pub mod fm;
pub mod nav;

pub use error::ExplorerError;
pub use fm::{list_dirs, list_dirs_with};
pub use nav::{NavRequest, NavState, Navigator, Selection, UP_SENTINEL, parent_of, step};
