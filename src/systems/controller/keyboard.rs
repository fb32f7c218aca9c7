use bevy::prelude::*;

use crate::components::{ControlInputState, FlightModel, PlayerController};

/// Keys the craft controller recognizes.
const MAPPED_KEYS: [KeyCode; 6] = [
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::KeyA,
    KeyCode::KeyS,
];

/// Direct 1:1 key-to-intent mapping. Returns whether the key was
/// recognized; pressing sets the flag, releasing clears it, nothing else.
pub fn handle_key_event(input: &mut ControlInputState, key: KeyCode, down: bool) -> bool {
    match key {
        KeyCode::ArrowUp => input.forward = down,
        KeyCode::ArrowDown => input.backward = down,
        KeyCode::ArrowLeft => input.steer_left = down,
        KeyCode::ArrowRight => input.steer_right = down,
        KeyCode::KeyA => input.left_trigger = down,
        KeyCode::KeyS => input.right_trigger = down,
        _ => return false,
    }
    true
}

impl FlightModel {
    /// Press-side key handler. Returns whether the key is bound.
    pub fn key_press(&mut self, key: KeyCode) -> bool {
        handle_key_event(&mut self.input, key, true)
    }

    /// Release-side key handler.
    pub fn key_release(&mut self, key: KeyCode) -> bool {
        handle_key_event(&mut self.input, key, false)
    }
}

/// Mirrors the keyboard state into every player-controlled flight model.
pub fn flight_keyboard_system(
    mut query: Query<&mut FlightModel, With<PlayerController>>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    for mut model in query.iter_mut() {
        for key in MAPPED_KEYS {
            handle_key_event(&mut model.input, key, keyboard.pressed(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_key_to_one_intent() {
        let mut input = ControlInputState::default();

        assert!(handle_key_event(&mut input, KeyCode::ArrowUp, true));
        assert!(input.forward);
        assert!(handle_key_event(&mut input, KeyCode::ArrowDown, true));
        assert!(input.backward);
        assert!(handle_key_event(&mut input, KeyCode::ArrowLeft, true));
        assert!(input.steer_left);
        assert!(handle_key_event(&mut input, KeyCode::ArrowRight, true));
        assert!(input.steer_right);
        assert!(handle_key_event(&mut input, KeyCode::KeyA, true));
        assert!(input.left_trigger);
        assert!(handle_key_event(&mut input, KeyCode::KeyS, true));
        assert!(input.right_trigger);
        assert!(!input.use_item);
    }

    #[test]
    fn release_clears_the_flag() {
        let mut input = ControlInputState::default();
        handle_key_event(&mut input, KeyCode::ArrowUp, true);
        handle_key_event(&mut input, KeyCode::ArrowUp, false);
        assert_eq!(input, ControlInputState::default());
    }

    #[test]
    fn model_handlers_pass_through() {
        let mut model = FlightModel::new();
        assert!(model.key_press(KeyCode::KeyA));
        assert!(model.input.left_trigger);
        assert!(model.key_release(KeyCode::KeyA));
        assert!(!model.input.left_trigger);
        assert!(!model.key_press(KeyCode::Enter));
    }

    #[test]
    fn unmapped_keys_are_reported_unhandled() {
        let mut input = ControlInputState::default();
        assert!(!handle_key_event(&mut input, KeyCode::Space, true));
        assert!(!handle_key_event(&mut input, KeyCode::KeyQ, true));
        assert_eq!(input, ControlInputState::default());
    }
}
