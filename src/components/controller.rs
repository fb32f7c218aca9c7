use bevy::prelude::*;

/// Marks the craft the local keyboard drives. Models without this marker
/// only receive input through their `ControlInputState` directly.
#[derive(Component, Debug, Default)]
pub struct PlayerController;
