//! Control lifecycle and the per-update context
//!
//! A host mounts a control once, then drives it through a strict sequence:
//!
//! 1. [`StandardControl::init`] with the first context and the notify callback
//! 2. [`StandardControl::update_view`] on every property-bag change
//! 3. [`StandardControl::get_outputs`] after the control has notified
//! 4. [`StandardControl::destroy`] when the control is unmounted
//!
//! Calls never overlap; the host serializes them on its own event turn.

use std::sync::Arc;

use crate::events::{HostEvents, UiEvent};
use crate::geometry::Geometry;

/// Callback telling the host that outputs are ready to be re-read
pub type NotifyOutputChanged = Arc<dyn Fn() + Send + Sync>;

/// The container region the host allocated to a control
pub trait HostContainer {
    /// Allocated width, or [`crate::ALLOCATION_UNKNOWN`]
    fn allocated_width(&self) -> i32;

    /// Allocated height, or [`crate::ALLOCATION_UNKNOWN`]
    fn allocated_height(&self) -> i32;

    /// Ask the host to keep (or stop) delivering updates on container resize
    fn set_resize_tracking(&mut self, enabled: bool);

    /// Snapshot of both allocation axes
    fn geometry(&self) -> Geometry {
        Geometry::new(self.allocated_width(), self.allocated_height())
    }
}

/// Everything the host hands a control for one update
pub struct Context<'a, I> {
    /// Typed input properties for this update
    pub parameters: &'a I,
    /// Container the control is mounted in
    pub mode: &'a mut dyn HostContainer,
    /// Sink for manifest-declared events
    pub events: Arc<dyn HostEvents>,
}

impl<'a, I> Context<'a, I> {
    pub fn new(
        parameters: &'a I,
        mode: &'a mut dyn HostContainer,
        events: Arc<dyn HostEvents>,
    ) -> Self {
        Self {
            parameters,
            mode,
            events,
        }
    }
}

/// A control mounted into a host container
pub trait StandardControl {
    /// Typed view of the manifest's input properties
    type Inputs;
    /// Typed view of the manifest's output properties
    type Outputs;

    /// Mount the control; implementations run their first update from here
    fn init(&mut self, ctx: Context<'_, Self::Inputs>, notify: NotifyOutputChanged);

    /// Called whenever any value in the property bag changed, including
    /// container geometry
    fn update_view(&mut self, ctx: Context<'_, Self::Inputs>);

    /// Current outputs, read by the host after a notify
    fn get_outputs(&self) -> Self::Outputs;

    /// Unmount the control and release anything it holds from the host
    fn destroy(&mut self);

    /// Route user interaction into the control. Returns true when handled.
    fn dispatch(&mut self, event: &UiEvent) -> bool {
        let _ = event;
        false
    }
}
