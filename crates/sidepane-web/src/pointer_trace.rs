#![forbid(unsafe_code)]

//! JSONL divider trace parsing and replay.
//!
//! One event per line, tagged by `event`:
//!
//! ```text
//! {"event":"pointer_down","pointer_id":1,"x":800}
//! {"event":"pointer_move","pointer_id":1,"x":700}
//! {"event":"container_resize","width":900}
//! {"event":"pointer_up","pointer_id":1}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. `button` defaults to
//! `primary`.

use std::fmt;

use serde::{Deserialize, Serialize};
use sidepane_layout::{PaneLayoutState, SplitPaneConfig, SplitPaneConfigError};

use crate::divider_pointer::{
    DividerPointerAdapter, DividerPointerButton, DividerPointerConfig, DividerPointerLogEntry,
};
use crate::drag_session::{DragHost, HostedSplitPane, RecordingHost};

/// One recorded host signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DividerTraceEvent {
    PointerDown {
        pointer_id: u32,
        #[serde(default)]
        button: DividerPointerButton,
        x: i32,
    },
    PointerMove {
        pointer_id: u32,
        x: i32,
    },
    PointerUp {
        pointer_id: u32,
        #[serde(default)]
        button: DividerPointerButton,
    },
    PointerCancel {
        #[serde(default)]
        pointer_id: Option<u32>,
    },
    Blur,
    VisibilityHidden,
    ToggleCollapse,
    Collapse,
    Expand,
    Nudge {
        delta: i32,
    },
    ContainerResize {
        width: u32,
    },
}

/// Trace parse and encode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DividerTraceError {
    /// Line `line` (1-based) was not a valid event.
    Json { line: usize, message: String },
    /// Event `index` (0-based) could not be serialized.
    Encode { index: usize, message: String },
    /// The input held no events.
    Empty,
}

impl fmt::Display for DividerTraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { line, message } => write!(f, "trace line {line}: {message}"),
            Self::Encode { index, message } => write!(f, "trace event {index}: {message}"),
            Self::Empty => write!(f, "trace contains no events"),
        }
    }
}

impl std::error::Error for DividerTraceError {}

/// A parsed divider trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerTrace {
    events: Vec<DividerTraceEvent>,
}

/// Final state and listener accounting after a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerReplayOutcome {
    pub final_state: PaneLayoutState,
    pub final_container_width: u32,
    pub attach_count: usize,
    pub detach_count: usize,
    pub peak_live_listeners: u32,
    pub log: Vec<DividerPointerLogEntry>,
}

impl DividerReplayOutcome {
    /// True when every attached listener was detached.
    #[must_use]
    pub const fn listeners_balanced(&self) -> bool {
        self.attach_count == self.detach_count
    }
}

impl DividerTrace {
    #[must_use]
    pub fn new(events: Vec<DividerTraceEvent>) -> Self {
        Self { events }
    }

    /// Parse a JSONL trace.
    pub fn parse_jsonl(input: &str) -> Result<Self, DividerTraceError> {
        let mut events = Vec::new();
        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let event = serde_json::from_str::<DividerTraceEvent>(line).map_err(|err| {
                DividerTraceError::Json {
                    line: index + 1,
                    message: err.to_string(),
                }
            })?;
            events.push(event);
        }
        if events.is_empty() {
            return Err(DividerTraceError::Empty);
        }
        Ok(Self { events })
    }

    #[must_use]
    pub fn events(&self) -> &[DividerTraceEvent] {
        &self.events
    }

    /// Serialize back to JSONL, one event per line.
    pub fn to_jsonl(&self) -> Result<String, DividerTraceError> {
        let mut out = String::new();
        for (index, event) in self.events.iter().enumerate() {
            let line = serde_json::to_string(event).map_err(|err| DividerTraceError::Encode {
                index,
                message: err.to_string(),
            })?;
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    /// Replay against a fresh pane mounted on a [`RecordingHost`].
    ///
    /// A drag still open at the end of the trace is released as if the pane
    /// were unmounted.
    pub fn replay(
        &self,
        config: SplitPaneConfig,
        container_width: u32,
    ) -> Result<DividerReplayOutcome, SplitPaneConfigError> {
        let adapter = DividerPointerAdapter::new(config, DividerPointerConfig::default())?;
        let mut host = RecordingHost::new(container_width);
        let mut log = Vec::with_capacity(self.events.len() + 1);

        let final_state = {
            let mut pane = HostedSplitPane::new(adapter, &mut host);
            for event in &self.events {
                let dispatch = match *event {
                    DividerTraceEvent::PointerDown {
                        pointer_id,
                        button,
                        x,
                    } => pane.pointer_down(pointer_id, button, x),
                    DividerTraceEvent::PointerMove { pointer_id, x } => {
                        pane.pointer_move(pointer_id, x)
                    }
                    DividerTraceEvent::PointerUp { pointer_id, button } => {
                        pane.pointer_up(pointer_id, button)
                    }
                    DividerTraceEvent::PointerCancel { pointer_id } => {
                        pane.pointer_cancel(pointer_id)
                    }
                    DividerTraceEvent::Blur => pane.blur(),
                    DividerTraceEvent::VisibilityHidden => pane.visibility_hidden(),
                    DividerTraceEvent::ToggleCollapse => pane.toggle_collapse(),
                    DividerTraceEvent::Collapse => pane.collapse(),
                    DividerTraceEvent::Expand => pane.expand(),
                    DividerTraceEvent::Nudge { delta } => pane.nudge(delta),
                    DividerTraceEvent::ContainerResize { width } => {
                        pane.host_mut().set_container_width(width);
                        continue;
                    }
                };
                log.push(dispatch.log);
            }
            if pane.adapter().active_pointer_id().is_some() {
                log.push(pane.release().log);
            }
            pane.state()
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            events = self.events.len(),
            attach = host.attach_count(),
            detach = host.detach_count(),
            right_width = final_state.right_width,
            "divider trace replayed"
        );

        Ok(DividerReplayOutcome {
            final_state,
            final_container_width: host.container_width(),
            attach_count: host.attach_count(),
            detach_count: host.detach_count(),
            peak_live_listeners: host.peak_live_listeners(),
            log,
        })
    }
}
