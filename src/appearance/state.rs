use bitflags::bitflags;

bitflags! {
    /// The interaction mode a control is in.
    ///
    /// The empty set is the normal state; the other flags combine freely
    /// (a selected button can also be highlighted while it is pressed).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionState: u8 {
        /// The control is being pressed
        const HIGHLIGHTED = 0b001;
        /// The control is toggled on
        const SELECTED    = 0b010;
        /// The control does not accept interaction
        const DISABLED    = 0b100;
    }
}

impl InteractionState {
    /// No flag set.
    pub const NORMAL: InteractionState = InteractionState::empty();

    pub fn is_normal(&self) -> bool {
        self.is_empty()
    }

    /// True when more than one flag is set.
    pub fn is_combined(&self) -> bool {
        self.bits().count_ones() > 1
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_is_empty() {
        assert!(InteractionState::NORMAL.is_normal());
        assert_eq!(InteractionState::default(), InteractionState::NORMAL);
        assert!(!InteractionState::SELECTED.is_normal());
    }

    #[test]
    fn test_combined() {
        let state = InteractionState::HIGHLIGHTED | InteractionState::SELECTED;
        assert!(state.is_combined());
        assert!(state.contains(InteractionState::SELECTED));
        assert!(!InteractionState::DISABLED.is_combined());
        assert!(!InteractionState::NORMAL.is_combined());
    }
}
