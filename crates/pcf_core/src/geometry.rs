//! Container geometry reported by the host

/// Value the host reports on an axis it has not allocated yet
pub const ALLOCATION_UNKNOWN: i32 = -1;

/// Allocated container size for one update
///
/// The host refreshes this on every update. Either axis may still hold
/// [`ALLOCATION_UNKNOWN`] while the surrounding layout settles, so callers
/// should go through [`Geometry::width`] / [`Geometry::height`] rather than
/// reading the raw fields as dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub allocated_width: i32,
    pub allocated_height: i32,
}

impl Geometry {
    pub const fn new(allocated_width: i32, allocated_height: i32) -> Self {
        Self {
            allocated_width,
            allocated_height,
        }
    }

    /// Geometry with neither axis allocated
    pub const fn unknown() -> Self {
        Self::new(ALLOCATION_UNKNOWN, ALLOCATION_UNKNOWN)
    }

    /// Allocated width, or `None` while the host has not decided it
    pub fn width(&self) -> Option<i32> {
        known(self.allocated_width)
    }

    /// Allocated height, or `None` while the host has not decided it
    pub fn height(&self) -> Option<i32> {
        known(self.allocated_height)
    }

    /// True when both axes carry a real allocation
    pub fn is_resolved(&self) -> bool {
        self.width().is_some() && self.height().is_some()
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<(i32, i32)> for Geometry {
    fn from((w, h): (i32, i32)) -> Self {
        Self::new(w, h)
    }
}

fn known(axis: i32) -> Option<i32> {
    (axis != ALLOCATION_UNKNOWN).then_some(axis)
}
