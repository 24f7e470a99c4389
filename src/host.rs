//! Line-delimited JSON host for the FileExplorer widget.
//!
//! Stands in for the web host's transport: every stdin line is one change
//! event, every stdout line is the widget's next encoded value or an error
//! frame. The host owns the current value between events.

use crate::component::codec;
use crate::component::{Event, EventHost, FileExplorer, Listener};
use crate::core::{ExplorerError, NavRequest, NavState};

use std::io::{self, BufRead, Write};

/// Host that reads change events from a byte stream and writes frames back.
///
/// Listeners are registered through [EventHost] when a [FileExplorer] is built
/// with this host, then [LineHost::run] drives them until input ends.
#[derive(Default)]
pub struct LineHost {
    listeners: Vec<(Event, Listener)>,
}

impl EventHost for LineHost {
    fn register(&mut self, event: Event, listener: Listener) {
        self.listeners.push((event, listener));
    }
}

impl LineHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners registered for `event`.
    pub fn listener_count(&self, event: Event) -> usize {
        self.listeners.iter().filter(|(e, _)| *e == event).count()
    }

    /// Runs every listener for `event` in registration order; the last output wins.
    /// Returns `None` when nothing is registered.
    pub fn dispatch(
        &self,
        event: Event,
        request: &NavRequest,
    ) -> Option<Result<NavState, ExplorerError>> {
        let mut out = None;
        for (_, listener) in self.listeners.iter().filter(|(e, _)| *e == event) {
            let result = listener(request);
            let failed = result.is_err();
            out = Some(result);
            if failed {
                break;
            }
        }
        out
    }

    /// Writes the initial value, then answers each input line until EOF.
    pub fn run<R: BufRead, W: Write>(
        &self,
        explorer: &FileExplorer,
        mut input: R,
        mut output: W,
    ) -> io::Result<()> {
        tracing::info!(
            path = %explorer.value().current_path().display(),
            props = ?explorer.props(),
            "widget mounted"
        );

        let mut value = explorer.value().clone();
        emit(&mut output, &value)?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let payload = buf.trim_ascii();
            if payload.is_empty() {
                continue;
            }

            match self.handle(payload) {
                Ok(Some(next)) => {
                    value = next;
                    emit(&mut output, &value)?;
                }
                Ok(None) => emit(&mut output, &value)?,
                Err(e) => {
                    tracing::warn!("change event failed: {}", e);
                    writeln!(output, "{}", codec::error_frame(&e))?;
                    output.flush()?;
                }
            }
        }

        tracing::info!("input closed, unmounting");
        Ok(())
    }

    /// Decodes one raw event line and runs the change listeners on it.
    /// Lines are taken as bytes so a non-UTF-8 line fails as a single event.
    fn handle(&self, payload: &[u8]) -> Result<Option<NavState>, ExplorerError> {
        let request = codec::decode_bytes(payload)?;
        self.dispatch(Event::Change, &request).transpose()
    }
}

fn emit<W: Write>(output: &mut W, value: &NavState) -> io::Result<()> {
    match codec::encode(value) {
        Ok(line) => writeln!(output, "{}", line)?,
        Err(e) => {
            tracing::error!("cannot encode value: {}", e);
            writeln!(output, "{}", codec::error_frame(&e))?;
        }
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetProps;
    use crate::core::{Navigator, Selection};
    use std::path::PathBuf;

    #[test]
    fn dispatch_without_listeners_is_none() {
        let host = LineHost::new();
        let req = NavRequest {
            current_path: PathBuf::from("/"),
            selected_directory: Selection::Up,
        };
        assert!(host.dispatch(Event::Change, &req).is_none());
    }

    #[test]
    fn unsubscribed_widget_echoes_value() -> Result<(), Box<dyn std::error::Error>> {
        let value = NavState::from_parts(PathBuf::from("/does/not/matter"), vec![]);
        let explorer = FileExplorer::new(
            Some(value),
            WidgetProps::default(),
            Navigator::default(),
            None,
        )?;
        let host = LineHost::new();

        let input = b"{\"current_path\": \"/does/not/matter\", \"selected_directory\": -1}\n";
        let mut out = Vec::new();
        host.run(&explorer, &input[..], &mut out)?;

        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
        Ok(())
    }
}
