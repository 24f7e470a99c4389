//! The FileExplorer widget as seen by its host.
//!
//! The host is passed in explicitly when the widget is built. If one is given,
//! the widget registers its change handler there; without one it is inert and
//! only converts values.

use crate::component::codec;
use crate::config::WidgetProps;
use crate::core::{ExplorerError, NavRequest, NavState, Navigator, Selection};

use serde_json::Value;
use std::path::PathBuf;

/// Events a host can deliver to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Change,
}

/// Handler run by the host for an event; its output replaces the widget value.
pub type Listener = Box<dyn Fn(&NavRequest) -> Result<NavState, ExplorerError>>;

/// The part of a host the widget needs: a place to register listeners.
pub trait EventHost {
    fn register(&mut self, event: Event, listener: Listener);
}

/// Directory navigation widget.
///
/// Holds the value it was mounted with, the cosmetic props it forwards to the
/// host, and the [Navigator] its change handler uses. Later values live in the
/// host, not here.
pub struct FileExplorer {
    value: NavState,
    props: WidgetProps,
    navigator: Navigator,
}

impl FileExplorer {
    /// Events this widget emits.
    pub const EVENTS: &'static [Event] = &[Event::Change];

    /// Builds the widget. Without a `value` the working directory is listed.
    pub fn new(
        value: Option<NavState>,
        props: WidgetProps,
        navigator: Navigator,
        host: Option<&mut dyn EventHost>,
    ) -> Result<Self, ExplorerError> {
        let value = match value {
            Some(v) => v,
            None => Self::init_value(&navigator)?,
        };

        let explorer = Self {
            value,
            props,
            navigator,
        };
        if let Some(host) = host {
            explorer.subscribe(host);
        }
        Ok(explorer)
    }

    /// Registers the change handler on `host`.
    pub fn subscribe(&self, host: &mut dyn EventHost) {
        let navigator = self.navigator;
        host.register(
            Event::Change,
            Box::new(move |request| Self::refresh_value(&navigator, request)),
        );
        tracing::debug!("subscribed to change events");
    }

    /// Value produced at mount: the listing of the working directory.
    pub fn init_value(navigator: &Navigator) -> Result<NavState, ExplorerError> {
        let cwd = std::env::current_dir().map_err(ExplorerError::CurrentDir)?;
        navigator.state_at(cwd)
    }

    /// Change handler: applies the selection and lists the new directory.
    pub fn refresh_value(
        navigator: &Navigator,
        request: &NavRequest,
    ) -> Result<NavState, ExplorerError> {
        navigator.step(request)
    }

    // Getters / Accessors

    #[inline]
    pub fn value(&self) -> &NavState {
        &self.value
    }

    #[inline]
    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    #[inline]
    pub fn navigator(&self) -> Navigator {
        self.navigator
    }

    // Host conversion hooks

    pub fn preprocess(&self, payload: Option<&str>) -> Result<Option<NavRequest>, ExplorerError> {
        codec::preprocess(payload)
    }

    pub fn postprocess(&self, value: Option<&NavState>) -> Result<Option<String>, ExplorerError> {
        codec::postprocess(value)
    }

    /// Schema the host advertises for this widget's value: an encoded string.
    pub fn api_info(&self) -> Value {
        serde_json::json!({ "type": "string" })
    }

    /// Sample inbound payload for the host's API page: going up from `/`.
    pub fn example_payload(&self) -> Result<String, ExplorerError> {
        let request = NavRequest {
            current_path: PathBuf::from("/"),
            selected_directory: Selection::Up,
        };
        serde_json::to_string(&request).map_err(ExplorerError::Encode)
    }

    /// Sample value for the host's API page.
    pub fn example_value(&self) -> NavState {
        NavState::from_parts(PathBuf::from("/"), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingHost {
        listeners: Vec<(Event, Listener)>,
    }

    impl EventHost for RecordingHost {
        fn register(&mut self, event: Event, listener: Listener) {
            self.listeners.push((event, listener));
        }
    }

    #[test]
    fn no_host_means_no_subscription() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let value = Navigator::default().state_at(dir.path().to_path_buf())?;
        let explorer = FileExplorer::new(
            Some(value),
            WidgetProps::default(),
            Navigator::default(),
            None,
        )?;
        assert_eq!(explorer.value().current_path(), dir.path());
        Ok(())
    }

    #[test]
    fn host_receives_working_listener() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("inner"))?;
        let value = Navigator::default().state_at(dir.path().to_path_buf())?;

        let mut host = RecordingHost::default();
        let explorer = FileExplorer::new(
            Some(value),
            WidgetProps::default(),
            Navigator::default(),
            Some(&mut host),
        )?;
        assert_eq!(host.listeners.len(), 1);

        let (event, listener) = &host.listeners[0];
        assert_eq!(*event, Event::Change);

        let next = listener(&explorer.value().request(Selection::Child("inner".to_string())))?;
        assert_eq!(next.current_path(), dir.path().join("inner"));
        assert!(next.available_directories().is_empty());
        Ok(())
    }

    #[test]
    fn init_value_lists_working_dir() -> Result<(), Box<dyn std::error::Error>> {
        let state = FileExplorer::init_value(&Navigator::default())?;
        assert_eq!(state.current_path(), std::env::current_dir()?);
        Ok(())
    }

    #[test]
    fn example_payload_decodes() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let value = Navigator::default().state_at(dir.path().to_path_buf())?;
        let explorer = FileExplorer::new(
            Some(value),
            WidgetProps::default(),
            Navigator::default(),
            None,
        )?;

        let req = explorer.preprocess(Some(&explorer.example_payload()?))?;
        assert_eq!(req.map(|r| r.selected_directory), Some(Selection::Up));
        assert_eq!(explorer.api_info()["type"], "string");
        Ok(())
    }
}
