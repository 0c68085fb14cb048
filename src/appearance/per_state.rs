use std::collections::HashMap;

use super::InteractionState;

/// Sparse per-state values of one visual property.
///
/// Only presence matters: a state without an entry falls back according to
/// the resolver's precedence table.
#[derive(Debug, Clone)]
pub struct PerState<T> {
    values: HashMap<InteractionState, T>,
}

impl<T> PerState<T> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Register `value` for `state`, or remove the entry when `value` is `None`.
    pub fn set(&mut self, state: InteractionState, value: Option<T>) {
        match value {
            Some(value) => {
                self.values.insert(state, value);
            }
            None => {
                self.values.remove(&state);
            }
        }
    }

    /// The value registered for exactly `state`.
    pub fn get(&self, state: InteractionState) -> Option<&T> {
        self.values.get(&state)
    }

    pub fn normal(&self) -> Option<&T> {
        self.get(InteractionState::NORMAL)
    }

    pub fn contains(&self, state: InteractionState) -> bool {
        self.values.contains_key(&state)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T> Default for PerState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut map = PerState::new();
        map.set(InteractionState::NORMAL, Some(1));
        map.set(InteractionState::DISABLED, Some(2));

        assert_eq!(map.normal(), Some(&1));
        assert_eq!(map.get(InteractionState::DISABLED), Some(&2));
        assert_eq!(map.get(InteractionState::HIGHLIGHTED), None);
    }

    #[test]
    fn test_overwrite_and_remove() {
        let mut map = PerState::new();
        map.set(InteractionState::SELECTED, Some("a"));
        map.set(InteractionState::SELECTED, Some("b"));
        assert_eq!(map.get(InteractionState::SELECTED), Some(&"b"));

        map.set(InteractionState::SELECTED, None);
        assert!(!map.contains(InteractionState::SELECTED));
        assert!(map.is_empty());
    }

    #[test]
    fn test_combined_key_is_distinct() {
        let mut map = PerState::new();
        let combined = InteractionState::HIGHLIGHTED | InteractionState::SELECTED;
        map.set(combined, Some(3));
        assert_eq!(map.get(combined), Some(&3));
        assert_eq!(map.get(InteractionState::SELECTED), None);
    }
}
