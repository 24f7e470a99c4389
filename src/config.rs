//! Configuration for fileexplorer.
//!
//! - [load]: reading `fx.toml` into [Config].
//! - [general]: the start directory and listing policy.
//! - [widget]: cosmetic options forwarded to the host.

pub mod general;
pub mod load;
pub mod widget;

pub use general::{General, InternalGeneral};
pub use load::{Config, RawConfig};
pub use widget::{Key, WidgetProps};
