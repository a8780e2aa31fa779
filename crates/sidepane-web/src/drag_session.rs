#![forbid(unsafe_code)]

//! Host binding for divider drags.
//!
//! [`HostedSplitPane`] applies the listener and cursor commands produced by
//! [`DividerPointerAdapter`] to a [`DragHost`], and measures the container
//! from the host on every move so resizes mid-drag are honoured. Dropping a
//! hosted pane with a drag in flight detaches the listeners it attached.

use sidepane_layout::{PaneLayoutState, SplitPaneFrame};

use crate::divider_pointer::{
    DividerPointerAdapter, DividerPointerButton, DividerPointerDispatch, DragListenerCommand,
    ResizeAffordance,
};

/// Environment a split pane is mounted in.
pub trait DragHost {
    /// Current measured width of the split container, in pixels.
    fn container_width(&self) -> u32;

    /// Register document-level move/up listeners for `pointer_id`.
    fn attach_global_listeners(&mut self, pointer_id: u32);

    /// Remove the listeners registered by [`Self::attach_global_listeners`].
    fn detach_global_listeners(&mut self, pointer_id: u32);

    /// Apply (or clear) the document-wide resize cursor and selection lock.
    fn set_resize_affordance(&mut self, affordance: ResizeAffordance);
}

impl<H: DragHost + ?Sized> DragHost for &mut H {
    fn container_width(&self) -> u32 {
        (**self).container_width()
    }

    fn attach_global_listeners(&mut self, pointer_id: u32) {
        (**self).attach_global_listeners(pointer_id);
    }

    fn detach_global_listeners(&mut self, pointer_id: u32) {
        (**self).detach_global_listeners(pointer_id);
    }

    fn set_resize_affordance(&mut self, affordance: ResizeAffordance) {
        (**self).set_resize_affordance(affordance);
    }
}

/// A split pane mounted on a host.
#[derive(Debug)]
pub struct HostedSplitPane<H: DragHost> {
    adapter: DividerPointerAdapter,
    host: H,
}

impl<H: DragHost> HostedSplitPane<H> {
    #[must_use]
    pub fn new(adapter: DividerPointerAdapter, host: H) -> Self {
        Self { adapter, host }
    }

    #[must_use]
    pub const fn adapter(&self) -> &DividerPointerAdapter {
        &self.adapter
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub const fn state(&self) -> PaneLayoutState {
        self.adapter.state()
    }

    /// Plan spans against the host's current container width.
    #[must_use]
    pub fn frame(&self, right_pane_suppressed: bool) -> SplitPaneFrame {
        SplitPaneFrame::plan(
            &self.adapter.state(),
            self.host.container_width(),
            right_pane_suppressed,
        )
    }

    pub fn pointer_down(
        &mut self,
        pointer_id: u32,
        button: DividerPointerButton,
        pointer_x: i32,
    ) -> DividerPointerDispatch {
        let dispatch = self.adapter.pointer_down(pointer_id, button, pointer_x);
        self.apply(&dispatch);
        dispatch
    }

    pub fn pointer_move(&mut self, pointer_id: u32, pointer_x: i32) -> DividerPointerDispatch {
        let container_width = self.host.container_width();
        let dispatch = self
            .adapter
            .pointer_move(pointer_id, pointer_x, container_width);
        self.apply(&dispatch);
        dispatch
    }

    pub fn pointer_up(
        &mut self,
        pointer_id: u32,
        button: DividerPointerButton,
    ) -> DividerPointerDispatch {
        let dispatch = self.adapter.pointer_up(pointer_id, button);
        self.apply(&dispatch);
        dispatch
    }

    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> DividerPointerDispatch {
        let dispatch = self.adapter.pointer_cancel(pointer_id);
        self.apply(&dispatch);
        dispatch
    }

    pub fn blur(&mut self) -> DividerPointerDispatch {
        let dispatch = self.adapter.blur();
        self.apply(&dispatch);
        dispatch
    }

    pub fn visibility_hidden(&mut self) -> DividerPointerDispatch {
        let dispatch = self.adapter.visibility_hidden();
        self.apply(&dispatch);
        dispatch
    }

    pub fn toggle_collapse(&mut self) -> DividerPointerDispatch {
        let dispatch = self.adapter.toggle_collapse();
        self.apply(&dispatch);
        dispatch
    }

    pub fn collapse(&mut self) -> DividerPointerDispatch {
        let dispatch = self.adapter.collapse();
        self.apply(&dispatch);
        dispatch
    }

    pub fn expand(&mut self) -> DividerPointerDispatch {
        let dispatch = self.adapter.expand();
        self.apply(&dispatch);
        dispatch
    }

    pub fn nudge(&mut self, delta: i32) -> DividerPointerDispatch {
        let container_width = self.host.container_width();
        let dispatch = self.adapter.nudge(delta, container_width);
        self.apply(&dispatch);
        dispatch
    }

    /// Release any in-flight drag now instead of at drop.
    pub fn release(&mut self) -> DividerPointerDispatch {
        let dispatch = self.adapter.teardown();
        self.apply(&dispatch);
        dispatch
    }

    fn apply(&mut self, dispatch: &DividerPointerDispatch) {
        match dispatch.listener_command {
            Some(DragListenerCommand::Attach { pointer_id }) => {
                self.host.attach_global_listeners(pointer_id);
            }
            Some(DragListenerCommand::Detach { pointer_id }) => {
                self.host.detach_global_listeners(pointer_id);
            }
            None => {}
        }
        if let Some(affordance) = dispatch.affordance {
            self.host.set_resize_affordance(affordance);
        }
    }
}

impl<H: DragHost> Drop for HostedSplitPane<H> {
    fn drop(&mut self) {
        if self.adapter.active_pointer_id().is_some() {
            self.release();
        }
    }
}

/// In-memory host that records every command it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    container_width: u32,
    commands: Vec<DragListenerCommand>,
    live_listeners: u32,
    peak_live_listeners: u32,
    affordance: ResizeAffordance,
}

impl RecordingHost {
    #[must_use]
    pub fn new(container_width: u32) -> Self {
        Self {
            container_width,
            ..Self::default()
        }
    }

    pub fn set_container_width(&mut self, container_width: u32) {
        self.container_width = container_width;
    }

    /// Listener commands in the order they were applied.
    #[must_use]
    pub fn commands(&self) -> &[DragListenerCommand] {
        &self.commands
    }

    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DragListenerCommand::Attach { .. }))
            .count()
    }

    #[must_use]
    pub fn detach_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DragListenerCommand::Detach { .. }))
            .count()
    }

    /// Listener registrations currently outstanding.
    #[must_use]
    pub const fn live_listeners(&self) -> u32 {
        self.live_listeners
    }

    #[must_use]
    pub const fn peak_live_listeners(&self) -> u32 {
        self.peak_live_listeners
    }

    #[must_use]
    pub const fn affordance(&self) -> ResizeAffordance {
        self.affordance
    }
}

impl DragHost for RecordingHost {
    fn container_width(&self) -> u32 {
        self.container_width
    }

    fn attach_global_listeners(&mut self, pointer_id: u32) {
        self.commands.push(DragListenerCommand::Attach { pointer_id });
        self.live_listeners = self.live_listeners.saturating_add(1);
        self.peak_live_listeners = self.peak_live_listeners.max(self.live_listeners);
    }

    fn detach_global_listeners(&mut self, pointer_id: u32) {
        self.commands.push(DragListenerCommand::Detach { pointer_id });
        self.live_listeners = self.live_listeners.saturating_sub(1);
    }

    fn set_resize_affordance(&mut self, affordance: ResizeAffordance) {
        self.affordance = affordance;
    }
}
