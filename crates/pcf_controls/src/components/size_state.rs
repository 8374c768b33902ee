//! Preferred-size record with change tracking

/// Last computed preferred size and whether it moved since the last commit
///
/// Setters compare against the stored value and only raise the changed flag
/// on a real difference; `None` ("not computed yet") differs from every
/// number. [`SizeState::commit`] is the single place the flag is consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeState {
    preferred_width: Option<i32>,
    preferred_height: Option<i32>,
    changed: bool,
}

impl SizeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferred_width(&self) -> Option<i32> {
        self.preferred_width
    }

    pub fn preferred_height(&self) -> Option<i32> {
        self.preferred_height
    }

    pub fn set_preferred_width(&mut self, value: Option<i32>) {
        if value != self.preferred_width {
            self.preferred_width = value;
            self.changed = true;
        }
    }

    pub fn set_preferred_height(&mut self, value: Option<i32>) {
        if value != self.preferred_height {
            self.preferred_height = value;
            self.changed = true;
        }
    }

    /// Whether anything changed since the last commit, without consuming it
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Return the changed flag and clear it
    pub fn commit(&mut self) -> bool {
        std::mem::replace(&mut self.changed, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset_and_unchanged() {
        let state = SizeState::new();
        assert_eq!(state.preferred_width(), None);
        assert_eq!(state.preferred_height(), None);
        assert!(!state.is_changed());
    }

    #[test]
    fn test_unset_to_value_is_a_change() {
        let mut state = SizeState::new();
        state.set_preferred_width(Some(106));
        assert!(state.is_changed());
        assert_eq!(state.preferred_width(), Some(106));
    }

    #[test]
    fn test_equal_value_is_noop() {
        let mut state = SizeState::new();
        state.set_preferred_height(Some(40));
        state.commit();

        state.set_preferred_height(Some(40));
        assert!(!state.is_changed());
        state.set_preferred_width(None);
        assert!(!state.is_changed());
    }

    #[test]
    fn test_value_to_unset_is_a_change() {
        let mut state = SizeState::new();
        state.set_preferred_width(Some(300));
        state.commit();

        state.set_preferred_width(None);
        assert!(state.commit());
        assert_eq!(state.preferred_width(), None);
    }

    #[test]
    fn test_commit_consumes_flag() {
        let mut state = SizeState::new();
        state.set_preferred_width(Some(1));
        assert!(state.commit());
        assert!(!state.commit());
    }

    #[test]
    fn test_change_and_revert_still_reports() {
        // The flag tracks writes since the last commit, not the net difference
        let mut state = SizeState::new();
        state.set_preferred_width(Some(10));
        state.commit();

        state.set_preferred_width(Some(20));
        state.set_preferred_width(Some(10));
        assert!(state.commit());
    }
}
