//! Host doubles
//!
//! Stand-ins for the pieces of the host shell a control talks to.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pcf_core::{Geometry, HostContainer, HostEvents, NotifyOutputChanged};

/// Container with a settable allocation that records tracking requests
#[derive(Debug, Default)]
pub struct MockHost {
    geometry: Geometry,
    tracking: Vec<bool>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allocation(width: i32, height: i32) -> Self {
        Self {
            geometry: Geometry::new(width, height),
            tracking: Vec::new(),
        }
    }

    pub fn set_allocation(&mut self, width: i32, height: i32) {
        self.geometry = Geometry::new(width, height);
    }

    /// Last tracking state requested by the control
    pub fn resize_tracking(&self) -> Option<bool> {
        self.tracking.last().copied()
    }

    /// Every tracking request, in order
    pub fn tracking_history(&self) -> &[bool] {
        &self.tracking
    }
}

impl HostContainer for MockHost {
    fn allocated_width(&self) -> i32 {
        self.geometry.allocated_width
    }

    fn allocated_height(&self) -> i32 {
        self.geometry.allocated_height
    }

    fn set_resize_tracking(&mut self, enabled: bool) {
        self.tracking.push(enabled);
    }
}

/// Event sink that keeps everything fired at it
#[derive(Clone, Debug, Default)]
pub struct RecordedEvents {
    fired: Arc<Mutex<Vec<String>>>,
}

impl RecordedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<String> {
        match self.fired.lock() {
            Ok(mut fired) => std::mem::take(&mut *fired),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl HostEvents for RecordedEvents {
    fn fire(&self, event: &str) {
        match self.fired.lock() {
            Ok(mut fired) => fired.push(event.to_string()),
            Err(poisoned) => poisoned.into_inner().push(event.to_string()),
        }
    }
}

/// Counts notify calls
#[derive(Clone, Debug, Default)]
pub struct NotifyCounter {
    count: Arc<AtomicUsize>,
}

impl NotifyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback to hand to a control
    pub fn notifier(&self) -> NotifyOutputChanged {
        let count = Arc::clone(&self.count);
        Arc::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
