//! Precedence table that turns a sparse [`PerState`] map into the value
//! effective for the current [`InteractionState`].

use super::{Adjust, Adjustment, InteractionState, PerState};

/// Which automatic derivations are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdjust {
    /// Derive highlighted values from normal ones when none is registered
    pub when_highlighted: bool,
    /// Derive disabled values from normal ones when none is registered
    pub when_disabled: bool,
}

impl Default for AutoAdjust {
    fn default() -> Self {
        Self {
            when_highlighted: true,
            when_disabled: false,
        }
    }
}

impl AutoAdjust {
    /// No automatic derivation at all.
    pub const NONE: AutoAdjust = AutoAdjust {
        when_highlighted: false,
        when_disabled: false,
    };

    pub fn when_highlighted(mut self, enabled: bool) -> Self {
        self.when_highlighted = enabled;
        self
    }

    pub fn when_disabled(mut self, enabled: bool) -> Self {
        self.when_disabled = enabled;
        self
    }

    fn allows(&self, adjustment: Adjustment) -> bool {
        match adjustment {
            Adjustment::Highlighted => self.when_highlighted,
            Adjustment::Disabled => self.when_disabled,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// The value registered for the rule's flag
    Explicit,
    /// The normal value run through an adjustment
    Derived(Adjustment),
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    flag: InteractionState,
    strategy: Strategy,
}

/// Walked top to bottom; the first rule whose flag is set and that yields a
/// value wins. The normal value is the final fallback.
const PRECEDENCE: [Rule; 5] = [
    Rule {
        flag: InteractionState::DISABLED,
        strategy: Strategy::Explicit,
    },
    Rule {
        flag: InteractionState::DISABLED,
        strategy: Strategy::Derived(Adjustment::Disabled),
    },
    Rule {
        flag: InteractionState::HIGHLIGHTED,
        strategy: Strategy::Explicit,
    },
    Rule {
        flag: InteractionState::HIGHLIGHTED,
        strategy: Strategy::Derived(Adjustment::Highlighted),
    },
    Rule {
        flag: InteractionState::SELECTED,
        strategy: Strategy::Explicit,
    },
];

/// Resolve the effective value of one property for `state`.
///
/// An entry registered for an exact combination of flags (for instance
/// highlighted and selected) is used before the table is consulted.
pub fn resolve<T>(map: &PerState<T>, state: InteractionState, auto_adjust: AutoAdjust) -> Option<T>
where
    T: Adjust + Clone,
{
    if state.is_combined() {
        if let Some(value) = map.get(state) {
            return Some(value.clone());
        }
    }

    for rule in PRECEDENCE.iter().filter(|rule| state.contains(rule.flag)) {
        let value = match rule.strategy {
            Strategy::Explicit => map.get(rule.flag).cloned(),
            Strategy::Derived(adjustment) if auto_adjust.allows(adjustment) => {
                map.normal().and_then(|normal| normal.adjusted(adjustment))
            }
            Strategy::Derived(_) => None,
        };
        if value.is_some() {
            log::trace!("{:?} resolved by {:?}", state, rule);
            return value;
        }
    }

    map.normal().cloned()
}
