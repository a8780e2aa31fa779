//! Split-pane drag/resize and collapse controller.
//!
//! [`SplitPaneController`] owns the right pane's width, the drag lifecycle and
//! the collapse flag. It never measures anything itself: hosts pass pointer
//! x-coordinates and the container's current width on every update.
//!
//! ```text
//! Idle --begin_drag--> Dragging --update_drag--> Dragging
//!   ^                     |
//!   +-----end_drag--------+
//!   +-----toggle_collapse-+   (collapse actions always leave Dragging)
//! ```
//!
//! The divider sits on the left edge of the right pane, so moving the pointer
//! left widens the right pane.

use serde::{Deserialize, Serialize};

use crate::config::{SplitPaneConfig, WidthBounds};

/// Pointer position and width captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragAnchor {
    pub start_pointer_x: i32,
    pub start_width: u32,
}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SplitDragState {
    Idle,
    Dragging { anchor: DragAnchor },
}

impl SplitDragState {
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub const fn anchor(self) -> Option<DragAnchor> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => Some(anchor),
        }
    }
}

/// Observable layout state of one split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneLayoutState {
    /// Current right pane width in pixels. Preserved while collapsed.
    pub right_width: u32,
    /// Whether the right pane is replaced by its collapsed toggle.
    pub collapsed: bool,
    pub drag: SplitDragState,
}

impl PaneLayoutState {
    /// State of a freshly mounted layout.
    #[must_use]
    pub const fn initial(default_right_width: u32) -> Self {
        Self {
            right_width: default_right_width,
            collapsed: false,
            drag: SplitDragState::Idle,
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub const fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag.anchor()
    }
}

/// Why an operation left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPaneNoopReason {
    IdleWithoutActiveDrag,
    DragAlreadyInProgress,
    DraggingDisallowsNudge,
    ZeroNudge,
    AlreadyCollapsed,
    AlreadyExpanded,
}

/// Effect produced by one controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SplitPaneEffect {
    DragStarted {
        anchor: DragAnchor,
    },
    DragUpdated {
        pointer_x: i32,
        container_width: u32,
        requested_width: i64,
        right_width: u32,
        clamped: bool,
    },
    DragEnded {
        start_width: u32,
        right_width: u32,
    },
    Collapsed {
        right_width: u32,
        drag_released: bool,
    },
    Expanded {
        right_width: u32,
        drag_released: bool,
    },
    Nudged {
        delta: i32,
        right_width: u32,
        clamped: bool,
    },
    Noop {
        reason: SplitPaneNoopReason,
    },
}

impl SplitPaneEffect {
    /// True when the effect is a [`SplitPaneEffect::Noop`].
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One controller step with before/after snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPaneTransition {
    pub transition_id: u64,
    pub from: PaneLayoutState,
    pub to: PaneLayoutState,
    pub effect: SplitPaneEffect,
}

impl SplitPaneTransition {
    /// True when this step entered or left the dragging state.
    #[must_use]
    pub const fn changed_drag_mode(&self) -> bool {
        self.from.drag.is_dragging() != self.to.drag.is_dragging()
    }
}

/// Width and collapse controller for a two-pane split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPaneController {
    config: SplitPaneConfig,
    state: PaneLayoutState,
    transition_counter: u64,
}

impl Default for SplitPaneController {
    fn default() -> Self {
        Self::new(SplitPaneConfig::default())
    }
}

impl SplitPaneController {
    /// Mount a split with `right_width = default_right_width`, expanded and idle.
    #[must_use]
    pub const fn new(config: SplitPaneConfig) -> Self {
        Self {
            config,
            state: PaneLayoutState::initial(config.default_right_width),
            transition_counter: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> SplitPaneConfig {
        self.config
    }

    #[must_use]
    pub const fn state(&self) -> PaneLayoutState {
        self.state
    }

    #[must_use]
    pub const fn right_width(&self) -> u32 {
        self.state.right_width
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.state.collapsed
    }

    /// Width range for the given container measurement.
    #[must_use]
    pub fn resize_bounds(&self, container_width: u32) -> WidthBounds {
        self.config.resize_bounds(container_width)
    }

    /// Start a drag at `pointer_x`. Ignored while a drag is already active.
    pub fn begin_drag(&mut self, pointer_x: i32) -> SplitPaneTransition {
        let from = self.state;
        if from.is_dragging() {
            return self.noop(from, SplitPaneNoopReason::DragAlreadyInProgress);
        }

        let anchor = DragAnchor {
            start_pointer_x: pointer_x,
            start_width: from.right_width,
        };
        self.state.drag = SplitDragState::Dragging { anchor };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            start_pointer_x = pointer_x,
            start_width = anchor.start_width,
            "split pane drag started"
        );

        self.transition(from, SplitPaneEffect::DragStarted { anchor })
    }

    /// Move the divider to follow `pointer_x`, bounded by `container_width`.
    pub fn update_drag(&mut self, pointer_x: i32, container_width: u32) -> SplitPaneTransition {
        let from = self.state;
        let Some(anchor) = from.drag_anchor() else {
            return self.noop(from, SplitPaneNoopReason::IdleWithoutActiveDrag);
        };

        let delta = i64::from(anchor.start_pointer_x) - i64::from(pointer_x);
        let requested_width = i64::from(anchor.start_width) + delta;
        let right_width = self.resize_bounds(container_width).clamp(requested_width);
        self.state.right_width = right_width;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            pointer_x,
            container_width,
            requested_width,
            right_width,
            "split pane drag updated"
        );

        self.transition(
            from,
            SplitPaneEffect::DragUpdated {
                pointer_x,
                container_width,
                requested_width,
                right_width,
                clamped: requested_width != i64::from(right_width),
            },
        )
    }

    /// Finish the active drag. Safe to call when idle.
    pub fn end_drag(&mut self) -> SplitPaneTransition {
        let from = self.state;
        let Some(anchor) = from.drag_anchor() else {
            return self.noop(from, SplitPaneNoopReason::IdleWithoutActiveDrag);
        };
        self.state.drag = SplitDragState::Idle;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            start_width = anchor.start_width,
            right_width = from.right_width,
            "split pane drag ended"
        );

        self.transition(
            from,
            SplitPaneEffect::DragEnded {
                start_width: anchor.start_width,
                right_width: from.right_width,
            },
        )
    }

    /// Flip the collapse flag, leaving any active drag.
    pub fn toggle_collapse(&mut self) -> SplitPaneTransition {
        self.set_collapsed(!self.state.collapsed)
    }

    /// Hide the right pane behind its toggle, leaving any active drag.
    pub fn collapse(&mut self) -> SplitPaneTransition {
        self.set_collapsed(true)
    }

    /// Restore the right pane at its preserved width, leaving any active drag.
    pub fn expand(&mut self) -> SplitPaneTransition {
        self.set_collapsed(false)
    }

    /// Resize by a discrete step while idle (keyboard divider control).
    ///
    /// Positive `delta` widens the right pane.
    pub fn nudge(&mut self, delta: i32, container_width: u32) -> SplitPaneTransition {
        let from = self.state;
        if from.is_dragging() {
            return self.noop(from, SplitPaneNoopReason::DraggingDisallowsNudge);
        }
        if delta == 0 {
            return self.noop(from, SplitPaneNoopReason::ZeroNudge);
        }

        let requested = i64::from(from.right_width) + i64::from(delta);
        let right_width = self.resize_bounds(container_width).clamp(requested);
        self.state.right_width = right_width;

        self.transition(
            from,
            SplitPaneEffect::Nudged {
                delta,
                right_width,
                clamped: requested != i64::from(right_width),
            },
        )
    }

    fn set_collapsed(&mut self, collapsed: bool) -> SplitPaneTransition {
        let from = self.state;
        let drag_released = from.is_dragging();
        if from.collapsed == collapsed && !drag_released {
            let reason = if collapsed {
                SplitPaneNoopReason::AlreadyCollapsed
            } else {
                SplitPaneNoopReason::AlreadyExpanded
            };
            return self.noop(from, reason);
        }

        self.state.drag = SplitDragState::Idle;
        self.state.collapsed = collapsed;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            collapsed,
            drag_released,
            right_width = from.right_width,
            "split pane collapse changed"
        );

        let right_width = from.right_width;
        let effect = if collapsed {
            SplitPaneEffect::Collapsed {
                right_width,
                drag_released,
            }
        } else {
            SplitPaneEffect::Expanded {
                right_width,
                drag_released,
            }
        };
        self.transition(from, effect)
    }

    fn noop(&mut self, from: PaneLayoutState, reason: SplitPaneNoopReason) -> SplitPaneTransition {
        self.transition(from, SplitPaneEffect::Noop { reason })
    }

    fn transition(&mut self, from: PaneLayoutState, effect: SplitPaneEffect) -> SplitPaneTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        SplitPaneTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        }
    }
}
