//! Host-facing side of fileexplorer.
//!
//! - [explorer]: the [FileExplorer] widget, its events and the [EventHost] seam.
//! - [codec]: JSON decoding of inbound events and encoding of outbound states.

pub mod codec;
pub mod explorer;

pub use explorer::{Event, EventHost, FileExplorer, Listener};
