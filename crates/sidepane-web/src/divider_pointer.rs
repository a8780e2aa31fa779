#![forbid(unsafe_code)]

//! Deterministic pointer adapter for split-pane divider drags.
//!
//! This module bridges host pointer lifecycle signals into
//! [`SplitPaneController`] operations while enforcing:
//! - one active pointer at a time,
//! - exactly one global-listener attach per drag and exactly one detach, and
//! - teardown on interruption paths (cancel/blur/visibility/collapse).
//!
//! Listener and cursor side effects are returned as commands; the adapter
//! itself never touches the host.

use sidepane_layout::{
    PaneLayoutState, SplitPaneConfig, SplitPaneConfigError, SplitPaneController,
    SplitPaneTransition,
};

/// Pointer button reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "input-parser",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DividerPointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerPointerConfig {
    /// Button required to begin a drag.
    pub activation_button: DividerPointerButton,
}

impl Default for DividerPointerConfig {
    fn default() -> Self {
        Self {
            activation_button: DividerPointerButton::Primary,
        }
    }
}

/// Host command for document-level pointer-move/pointer-up listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragListenerCommand {
    Attach { pointer_id: u32 },
    Detach { pointer_id: u32 },
}

/// Cursor the host should force on the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorOverride {
    #[default]
    Default,
    ColResize,
}

/// Global visual affordance applied for the duration of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeAffordance {
    pub cursor: CursorOverride,
    pub suppress_text_selection: bool,
}

impl ResizeAffordance {
    /// Column-resize cursor with text selection suppressed.
    pub const RESIZING: Self = Self {
        cursor: CursorOverride::ColResize,
        suppress_text_selection: true,
    };

    /// Host defaults restored.
    pub const NONE: Self = Self {
        cursor: CursorOverride::Default,
        suppress_text_selection: false,
    };

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.suppress_text_selection || matches!(self.cursor, CursorOverride::ColResize)
    }
}

/// Lifecycle phase recorded for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerPointerPhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    Blur,
    VisibilityHidden,
    ToggleCollapse,
    Collapse,
    Expand,
    Nudge,
    Teardown,
}

/// Why an incoming signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerPointerIgnoredReason {
    InvalidPointerId,
    ButtonNotAllowed,
    ButtonMismatch,
    ActivePointerAlreadyInProgress,
    NoActivePointer,
    PointerMismatch,
    ControllerNoop,
}

/// Why a drag ended without a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerCancelReason {
    PointerCancel,
    Blur,
    VisibilityHidden,
    Collapse,
    Teardown,
}

impl DividerCancelReason {
    /// Cancel reason implied by an interrupting phase; `None` for a normal release.
    #[must_use]
    pub const fn for_phase(phase: DividerPointerPhase) -> Option<Self> {
        match phase {
            DividerPointerPhase::PointerCancel => Some(Self::PointerCancel),
            DividerPointerPhase::Blur => Some(Self::Blur),
            DividerPointerPhase::VisibilityHidden => Some(Self::VisibilityHidden),
            DividerPointerPhase::ToggleCollapse
            | DividerPointerPhase::Collapse
            | DividerPointerPhase::Expand => Some(Self::Collapse),
            DividerPointerPhase::Teardown => Some(Self::Teardown),
            DividerPointerPhase::PointerDown
            | DividerPointerPhase::PointerMove
            | DividerPointerPhase::PointerUp
            | DividerPointerPhase::Nudge => None,
        }
    }
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerPointerLogOutcome {
    Forwarded,
    Ignored(DividerPointerIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerPointerLogEntry {
    pub phase: DividerPointerPhase,
    pub sequence: Option<u64>,
    pub pointer_id: Option<u32>,
    pub pointer_x: Option<i32>,
    pub listener_command: Option<DragListenerCommand>,
    /// Set when this dispatch ended a drag by interruption.
    pub cancel_reason: Option<DividerCancelReason>,
    pub outcome: DividerPointerLogOutcome,
}

/// Result of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerPointerDispatch {
    pub transition: Option<SplitPaneTransition>,
    pub listener_command: Option<DragListenerCommand>,
    pub affordance: Option<ResizeAffordance>,
    pub log: DividerPointerLogEntry,
}

impl DividerPointerDispatch {
    fn ignored(
        phase: DividerPointerPhase,
        reason: DividerPointerIgnoredReason,
        pointer_id: Option<u32>,
        pointer_x: Option<i32>,
    ) -> Self {
        Self {
            transition: None,
            listener_command: None,
            affordance: None,
            log: DividerPointerLogEntry {
                phase,
                sequence: None,
                pointer_id,
                pointer_x,
                listener_command: None,
                cancel_reason: None,
                outcome: DividerPointerLogOutcome::Ignored(reason),
            },
        }
    }

    /// True when the signal reached the controller.
    #[must_use]
    pub const fn is_forwarded(&self) -> bool {
        matches!(self.log.outcome, DividerPointerLogOutcome::Forwarded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveDividerPointer {
    pointer_id: u32,
    button: DividerPointerButton,
}

#[derive(Debug, Clone, Copy)]
struct DispatchContext {
    phase: DividerPointerPhase,
    pointer_id: Option<u32>,
    pointer_x: Option<i32>,
    cancel_reason: Option<DividerCancelReason>,
}

/// Pointer lifecycle adapter owning one [`SplitPaneController`].
#[derive(Debug, Clone)]
pub struct DividerPointerAdapter {
    controller: SplitPaneController,
    config: DividerPointerConfig,
    active: Option<ActiveDividerPointer>,
    next_sequence: u64,
}

impl DividerPointerAdapter {
    /// Construct an adapter over a validated split configuration.
    pub fn new(
        split: SplitPaneConfig,
        config: DividerPointerConfig,
    ) -> Result<Self, SplitPaneConfigError> {
        Ok(Self {
            controller: SplitPaneController::new(split.validated()?),
            config,
            active: None,
            next_sequence: 1,
        })
    }

    #[must_use]
    pub const fn config(&self) -> DividerPointerConfig {
        self.config
    }

    #[must_use]
    pub const fn controller(&self) -> &SplitPaneController {
        &self.controller
    }

    #[must_use]
    pub const fn state(&self) -> PaneLayoutState {
        self.controller.state()
    }

    /// Active pointer ID, if a drag holds the global listeners.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.active.map(|active| active.pointer_id)
    }

    /// Handle pointer-down on the divider.
    pub fn pointer_down(
        &mut self,
        pointer_id: u32,
        button: DividerPointerButton,
        pointer_x: i32,
    ) -> DividerPointerDispatch {
        let phase = DividerPointerPhase::PointerDown;
        if pointer_id == 0 {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::InvalidPointerId,
                Some(pointer_id),
                Some(pointer_x),
            );
        }
        if button != self.config.activation_button {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::ButtonNotAllowed,
                Some(pointer_id),
                Some(pointer_x),
            );
        }
        if self.active.is_some() {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::ActivePointerAlreadyInProgress,
                Some(pointer_id),
                Some(pointer_x),
            );
        }

        let transition = self.controller.begin_drag(pointer_x);
        let dispatch = self.forward(
            DispatchContext {
                phase,
                pointer_id: Some(pointer_id),
                pointer_x: Some(pointer_x),
                cancel_reason: None,
            },
            transition,
            Some(DragListenerCommand::Attach { pointer_id }),
            Some(ResizeAffordance::RESIZING),
        );
        if dispatch.is_forwarded() {
            self.active = Some(ActiveDividerPointer { pointer_id, button });
        }
        dispatch
    }

    /// Handle a document-level pointer-move during an active drag.
    pub fn pointer_move(
        &mut self,
        pointer_id: u32,
        pointer_x: i32,
        container_width: u32,
    ) -> DividerPointerDispatch {
        let phase = DividerPointerPhase::PointerMove;
        let Some(active) = self.active else {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                Some(pointer_x),
            );
        };
        if active.pointer_id != pointer_id {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(pointer_x),
            );
        }

        let transition = self.controller.update_drag(pointer_x, container_width);
        self.forward(
            DispatchContext {
                phase,
                pointer_id: Some(pointer_id),
                pointer_x: Some(pointer_x),
                cancel_reason: None,
            },
            transition,
            None,
            None,
        )
    }

    /// Handle a document-level pointer-up; ends the drag wherever it lands.
    pub fn pointer_up(
        &mut self,
        pointer_id: u32,
        button: DividerPointerButton,
    ) -> DividerPointerDispatch {
        let phase = DividerPointerPhase::PointerUp;
        let Some(active) = self.active else {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                None,
            );
        }
        if active.button != button {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::ButtonMismatch,
                Some(pointer_id),
                None,
            );
        }
        self.release_active(phase, active)
    }

    /// Handle host pointer-cancel. `None` cancels whichever pointer is active.
    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> DividerPointerDispatch {
        self.interrupt(DividerPointerPhase::PointerCancel, pointer_id)
    }

    /// Handle window blur.
    pub fn blur(&mut self) -> DividerPointerDispatch {
        self.interrupt(DividerPointerPhase::Blur, None)
    }

    /// Handle the document becoming hidden.
    pub fn visibility_hidden(&mut self) -> DividerPointerDispatch {
        self.interrupt(DividerPointerPhase::VisibilityHidden, None)
    }

    /// Release listeners held by an unfinished drag (unmount path).
    pub fn teardown(&mut self) -> DividerPointerDispatch {
        self.interrupt(DividerPointerPhase::Teardown, None)
    }

    /// Flip the side pane's collapse flag; releases an active drag.
    pub fn toggle_collapse(&mut self) -> DividerPointerDispatch {
        let transition = self.controller.toggle_collapse();
        self.after_collapse_action(DividerPointerPhase::ToggleCollapse, transition)
    }

    /// Collapse the side pane; releases an active drag.
    pub fn collapse(&mut self) -> DividerPointerDispatch {
        let transition = self.controller.collapse();
        self.after_collapse_action(DividerPointerPhase::Collapse, transition)
    }

    /// Expand the side pane; releases an active drag.
    pub fn expand(&mut self) -> DividerPointerDispatch {
        let transition = self.controller.expand();
        self.after_collapse_action(DividerPointerPhase::Expand, transition)
    }

    /// Keyboard resize of the divider. Positive `delta` widens the side pane.
    pub fn nudge(&mut self, delta: i32, container_width: u32) -> DividerPointerDispatch {
        let transition = self.controller.nudge(delta, container_width);
        self.forward(
            DispatchContext {
                phase: DividerPointerPhase::Nudge,
                pointer_id: None,
                pointer_x: None,
                cancel_reason: None,
            },
            transition,
            None,
            None,
        )
    }

    fn interrupt(
        &mut self,
        phase: DividerPointerPhase,
        pointer_id: Option<u32>,
    ) -> DividerPointerDispatch {
        let Some(active) = self.active else {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::NoActivePointer,
                pointer_id,
                None,
            );
        };
        if let Some(id) = pointer_id
            && id != active.pointer_id
        {
            return self.ignore(
                phase,
                DividerPointerIgnoredReason::PointerMismatch,
                Some(id),
                None,
            );
        }
        self.release_active(phase, active)
    }

    fn release_active(
        &mut self,
        phase: DividerPointerPhase,
        active: ActiveDividerPointer,
    ) -> DividerPointerDispatch {
        let transition = self.controller.end_drag();
        self.active = None;
        self.forward(
            DispatchContext {
                phase,
                pointer_id: Some(active.pointer_id),
                pointer_x: None,
                cancel_reason: DividerCancelReason::for_phase(phase),
            },
            transition,
            Some(DragListenerCommand::Detach {
                pointer_id: active.pointer_id,
            }),
            Some(ResizeAffordance::NONE),
        )
    }

    fn after_collapse_action(
        &mut self,
        phase: DividerPointerPhase,
        transition: SplitPaneTransition,
    ) -> DividerPointerDispatch {
        let released = self.active.take();
        let (listener_command, affordance) = match released {
            Some(active) => (
                Some(DragListenerCommand::Detach {
                    pointer_id: active.pointer_id,
                }),
                Some(ResizeAffordance::NONE),
            ),
            None => (None, None),
        };
        self.forward(
            DispatchContext {
                phase,
                pointer_id: released.map(|active| active.pointer_id),
                pointer_x: None,
                cancel_reason: released.map(|_| DividerCancelReason::Collapse),
            },
            transition,
            listener_command,
            affordance,
        )
    }

    fn forward(
        &mut self,
        context: DispatchContext,
        transition: SplitPaneTransition,
        listener_command: Option<DragListenerCommand>,
        affordance: Option<ResizeAffordance>,
    ) -> DividerPointerDispatch {
        if transition.effect.is_noop() && listener_command.is_none() {
            return self.ignore(
                context.phase,
                DividerPointerIgnoredReason::ControllerNoop,
                context.pointer_id,
                context.pointer_x,
            );
        }

        let dispatch = DividerPointerDispatch {
            transition: Some(transition),
            listener_command,
            affordance,
            log: DividerPointerLogEntry {
                phase: context.phase,
                sequence: Some(self.next_sequence()),
                pointer_id: context.pointer_id,
                pointer_x: context.pointer_x,
                listener_command,
                cancel_reason: context.cancel_reason,
                outcome: DividerPointerLogOutcome::Forwarded,
            },
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            phase = ?dispatch.log.phase,
            sequence = dispatch.log.sequence,
            pointer_id = dispatch.log.pointer_id,
            command = ?dispatch.listener_command,
            cancel_reason = ?dispatch.log.cancel_reason,
            right_width = transition.to.right_width,
            "divider pointer dispatch forwarded"
        );

        dispatch
    }

    fn ignore(
        &self,
        phase: DividerPointerPhase,
        reason: DividerPointerIgnoredReason,
        pointer_id: Option<u32>,
        pointer_x: Option<i32>,
    ) -> DividerPointerDispatch {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            phase = ?phase,
            reason = ?reason,
            pointer_id,
            active_pointer_id = self.active_pointer_id(),
            "divider pointer dispatch ignored"
        );

        DividerPointerDispatch::ignored(phase, reason, pointer_id, pointer_x)
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}
