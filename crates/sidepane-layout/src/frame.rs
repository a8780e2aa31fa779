//! Horizontal frame planning for a split layout.
//!
//! Turns a [`PaneLayoutState`] and a container measurement into the spans a
//! host applies as layout dimensions: main pane, divider, and either the side
//! pane or its collapsed toggle.

use serde::{Deserialize, Serialize};

use crate::split::PaneLayoutState;

/// Width of the draggable divider between the panes.
pub const DIVIDER_WIDTH: u32 = 4;

/// Width of the toggle shown in place of a collapsed side pane.
pub const COLLAPSED_TOGGLE_WIDTH: u32 = 40;

/// Gap between the side pane's left edge and its close button.
pub const CLOSE_BUTTON_INSET: u32 = 16;

/// A horizontal slice of the container, in pixels from its left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneSpan {
    pub x: u32,
    pub width: u32,
}

impl PaneSpan {
    #[must_use]
    pub const fn new(x: u32, width: u32) -> Self {
        Self { x, width }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0
    }

    /// Whether `x` falls inside the span.
    #[must_use]
    pub fn contains(self, x: i32) -> bool {
        let x = i64::from(x);
        i64::from(self.x) <= x && x < i64::from(self.right())
    }
}

/// What occupies the right-hand side of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "region", rename_all = "snake_case")]
pub enum RightPaneRegion {
    /// Full side pane. The close button sits `close_button_right_offset`
    /// pixels from the container's right edge, never past its left edge.
    Expanded {
        span: PaneSpan,
        close_button_right_offset: u32,
    },
    /// Collapsed toggle overlaying the right edge of the main pane.
    Collapsed { toggle: PaneSpan },
    /// The host has hidden the side pane for the current view.
    Suppressed,
}

/// Resolved spans for one render of a split layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPaneFrame {
    pub container_width: u32,
    pub left: PaneSpan,
    /// Present only while the side pane is expanded.
    pub divider: Option<PaneSpan>,
    pub right: RightPaneRegion,
    /// Mirrors the drag state so hosts can apply the resize cursor.
    pub dragging: bool,
}

impl SplitPaneFrame {
    /// Plan spans for `state` inside a container `container_width` pixels wide.
    ///
    /// The side pane never extends past the container; whatever remains after
    /// the side pane and divider goes to the main pane.
    #[must_use]
    pub fn plan(
        state: &PaneLayoutState,
        container_width: u32,
        right_pane_suppressed: bool,
    ) -> Self {
        let dragging = state.is_dragging();
        if right_pane_suppressed {
            return Self {
                container_width,
                left: PaneSpan::new(0, container_width),
                divider: None,
                right: RightPaneRegion::Suppressed,
                dragging,
            };
        }

        if state.collapsed {
            let toggle_width = COLLAPSED_TOGGLE_WIDTH.min(container_width);
            return Self {
                container_width,
                left: PaneSpan::new(0, container_width),
                divider: None,
                right: RightPaneRegion::Collapsed {
                    toggle: PaneSpan::new(container_width - toggle_width, toggle_width),
                },
                dragging,
            };
        }

        let right_width = state.right_width.min(container_width);
        let divider_width = DIVIDER_WIDTH.min(container_width - right_width);
        let left_width = container_width - right_width - divider_width;
        let left = PaneSpan::new(0, left_width);
        let divider = PaneSpan::new(left.right(), divider_width);
        let right = PaneSpan::new(divider.right(), right_width);

        Self {
            container_width,
            left,
            divider: Some(divider),
            right: RightPaneRegion::Expanded {
                span: right,
                close_button_right_offset: right_width
                    .saturating_add(CLOSE_BUTTON_INSET)
                    .min(container_width),
            },
            dragging,
        }
    }

    /// Whether a pointer at `x` should start a divider drag.
    #[must_use]
    pub fn hits_divider(&self, x: i32) -> bool {
        self.divider.is_some_and(|divider| divider.contains(x))
    }

    /// Whether a pointer at `x` lands on the collapsed toggle.
    #[must_use]
    pub fn hits_collapsed_toggle(&self, x: i32) -> bool {
        match self.right {
            RightPaneRegion::Collapsed { toggle } => toggle.contains(x),
            _ => false,
        }
    }
}
