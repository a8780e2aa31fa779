#![forbid(unsafe_code)]

//! Split-pane layout state for sidepane.
//!
//! # Role
//! `sidepane-layout` is the host-agnostic core: it negotiates the side pane's
//! width from divider drags, owns the collapse flag, and plans the spans a
//! host renders. It never touches input devices or listeners; `sidepane-web`
//! adapts host pointer streams onto it.
//!
//! # Invariant
//! After every resize, `min_right_width <= right_width <=
//! max(min_right_width, container_width - min_left_width)`, further capped by
//! `max_right_width` when configured.

pub mod config;
pub mod frame;
pub mod split;

pub use config::{SplitPaneConfig, SplitPaneConfigError, WidthBounds};
pub use frame::{
    CLOSE_BUTTON_INSET, COLLAPSED_TOGGLE_WIDTH, DIVIDER_WIDTH, PaneSpan, RightPaneRegion,
    SplitPaneFrame,
};
pub use split::{
    DragAnchor, PaneLayoutState, SplitDragState, SplitPaneController, SplitPaneEffect,
    SplitPaneNoopReason, SplitPaneTransition,
};
