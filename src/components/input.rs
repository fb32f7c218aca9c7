use serde::{Deserialize, Serialize};

/// Discrete control intents, set by the input layer and read-only to the
/// flight integrator. Pressing a mapped key sets the flag, releasing clears
/// it; there is no debouncing or repeat suppression.
///
/// `backward` and `use_item` are carried through from the bindings but are
/// not consumed by the current update path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInputState {
    pub forward: bool,
    pub backward: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub left_trigger: bool,
    pub right_trigger: bool,
    pub use_item: bool,
}

impl ControlInputState {
    /// Releases every intent at once.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
