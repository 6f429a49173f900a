use std::cell::Cell;

/// Whether setup has to wait for `DOMContentLoaded`, given
/// `document.readyState`.
#[inline]
pub fn should_defer(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Reveal lifecycle of one observed element. Only ever moves forward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Derive the state from whether the element already carries the
    /// revealed class.
    #[inline]
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    /// Feed one intersection notification. Returns true exactly when this
    /// notification causes the hidden -> revealed transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Set-once flag for the typing animation reset.
///
/// Owned by the observer callback that checks it; not shared elsewhere.
#[derive(Debug, Default)]
pub struct ResetLatch {
    fired: Cell<bool>,
}

impl ResetLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true for the first intersecting notification only.
    pub fn try_fire(&self, intersecting: bool) -> bool {
        if !intersecting || self.fired.get() {
            return false;
        }
        self.fired.set(true);
        true
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}
