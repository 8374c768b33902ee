//! Host events and user interaction routing
//!
//! Two directions are covered here:
//!
//! - [`HostEvents`]: events a control raises *to* the host (the `[[event]]`
//!   entries of its manifest, e.g. `onOk`)
//! - [`UiEvent`]: interaction the host routes *into* a control (a click on
//!   one of the control's elements)

/// Sink for manifest-declared events raised by a control
pub trait HostEvents: Send + Sync {
    /// Raise the named event
    fn fire(&self, event: &str);
}

/// Host that declares no events; every fire is dropped
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHostEvents;

impl HostEvents for NoHostEvents {
    fn fire(&self, event: &str) {
        tracing::trace!(event, "dropped host event");
    }
}

impl<F> HostEvents for F
where
    F: Fn(&str) + Send + Sync,
{
    fn fire(&self, event: &str) {
        self(event)
    }
}

/// User interaction delivered to a mounted control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Primary click on the element named `target`
    Click { target: String },
}

impl UiEvent {
    pub fn click(target: impl Into<String>) -> Self {
        UiEvent::Click {
            target: target.into(),
        }
    }
}
