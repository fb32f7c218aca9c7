use bevy::prelude::*;

use crate::systems::{flight_dynamics_system, flight_keyboard_system};

/// Update stages of the craft controller: keyboard intents land before the
/// dynamics step consumes them.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Input,
    Dynamics,
}

/// Wires the keyboard mapping and the per-frame flight step into `Update`.
pub struct FlightControlPlugin;

impl Plugin for FlightControlPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (FlightSet::Input, FlightSet::Dynamics).chain());

        app.add_systems(
            Update,
            (
                flight_keyboard_system.in_set(FlightSet::Input),
                flight_dynamics_system.in_set(FlightSet::Dynamics),
            ),
        );
    }
}
