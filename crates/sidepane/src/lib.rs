#![forbid(unsafe_code)]

//! sidepane public facade crate.
//!
//! A two-pane horizontal layout whose right-hand pane can be resized by
//! dragging a divider and collapsed to a toggle. This crate re-exports the
//! layout core and the pointer host binding and offers a lightweight prelude.
//!
//! ```
//! use sidepane::prelude::*;
//!
//! let mut pane = SplitPaneController::new(SplitPaneConfig::new(400, 400, 300));
//! pane.begin_drag(800);
//! pane.update_drag(700, 1_200);
//! pane.end_drag();
//! assert_eq!(pane.right_width(), 500);
//! ```

use std::path::Path;

pub mod error;
#[cfg(feature = "tracing-json")]
pub mod logging;

pub use error::{Error, Result};

// --- Layout re-exports -----------------------------------------------------

pub use sidepane_layout::{
    CLOSE_BUTTON_INSET, COLLAPSED_TOGGLE_WIDTH, DIVIDER_WIDTH, DragAnchor, PaneLayoutState,
    PaneSpan, RightPaneRegion, SplitDragState, SplitPaneConfig, SplitPaneConfigError,
    SplitPaneController, SplitPaneEffect, SplitPaneFrame, SplitPaneNoopReason, SplitPaneTransition,
    WidthBounds,
};

// --- Host binding re-exports -----------------------------------------------

pub use sidepane_web::{
    CursorOverride, DividerCancelReason, DividerPointerAdapter, DividerPointerButton,
    DividerPointerConfig, DividerPointerDispatch, DividerPointerIgnoredReason,
    DividerPointerLogEntry, DividerPointerLogOutcome, DividerPointerPhase, DividerReplayOutcome,
    DividerTrace, DividerTraceError, DividerTraceEvent, DragHost, DragListenerCommand,
    HostedSplitPane, RecordingHost, ResizeAffordance,
};

/// Load split configuration from `SIDEPANE_*` environment variables.
pub fn config_from_env() -> Result<SplitPaneConfig> {
    Ok(SplitPaneConfig::from_env()?)
}

/// Parse a JSONL trace file and replay it against a fresh pane.
pub fn replay_trace_file(
    path: impl AsRef<Path>,
    config: SplitPaneConfig,
    container_width: u32,
) -> Result<DividerReplayOutcome> {
    let input = std::fs::read_to_string(path)?;
    let trace = DividerTrace::parse_jsonl(&input)?;
    Ok(trace.replay(config, container_width)?)
}

/// Commonly used types for day-to-day split pane work.
pub mod prelude {
    pub use crate::{
        DividerPointerAdapter, DividerPointerButton, DividerPointerConfig, DragHost,
        DragListenerCommand, Error, HostedSplitPane, PaneLayoutState, ResizeAffordance, Result,
        RightPaneRegion, SplitPaneConfig, SplitPaneController, SplitPaneFrame,
    };
}
