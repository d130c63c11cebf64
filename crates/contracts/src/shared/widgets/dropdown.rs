/// Visibility of the option panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Closed,
    Open,
}

/// Open/closed state of one dropdown instance.
///
/// A disabled dropdown stays `Closed` and ignores activation clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    panel: Panel,
    disabled: bool,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == Panel::Open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.panel = Panel::Closed;
        }
    }

    /// Click on the control: flips the panel. Returns false when rejected.
    pub fn activate(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.panel = match self.panel {
            Panel::Closed => Panel::Open,
            Panel::Open => Panel::Closed,
        };
        true
    }

    pub fn close(&mut self) {
        self.panel = Panel::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_toggles_panel() {
        let mut state = DropdownState::new();
        assert_eq!(state.panel(), Panel::Closed);
        assert!(state.activate());
        assert!(state.is_open());
        assert!(state.activate());
        assert!(!state.is_open());
    }

    #[test]
    fn test_disabled_rejects_activation() {
        let mut state = DropdownState::new();
        state.activate();
        state.set_disabled(true);
        assert!(!state.is_open());
        assert!(!state.activate());
        assert!(!state.is_open());

        state.set_disabled(false);
        assert!(state.activate());
    }
}
