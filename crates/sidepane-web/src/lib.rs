#![forbid(unsafe_code)]

//! `sidepane-web` binds split-pane state to a pointer-driven host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes pointer, focus and
//!   visibility signals; the crate answers with listener and cursor commands.
//! - **Exactly-once listeners**: each drag attaches document listeners once
//!   and detaches them once, including on cancel, blur, collapse and unmount.
//! - **Replayable**: with `input-parser`, recorded JSONL traces replay
//!   deterministically against a [`RecordingHost`].

pub mod divider_pointer;
pub mod drag_session;
#[cfg(feature = "input-parser")]
pub mod pointer_trace;

pub use divider_pointer::{
    CursorOverride, DividerCancelReason, DividerPointerAdapter, DividerPointerButton,
    DividerPointerConfig, DividerPointerDispatch, DividerPointerIgnoredReason,
    DividerPointerLogEntry, DividerPointerLogOutcome, DividerPointerPhase, DragListenerCommand,
    ResizeAffordance,
};
pub use drag_session::{DragHost, HostedSplitPane, RecordingHost};
#[cfg(feature = "input-parser")]
pub use pointer_trace::{DividerReplayOutcome, DividerTrace, DividerTraceError, DividerTraceEvent};
