pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;

pub use components::{
    ConfigError, ControlInputState, FlightModel, FlightTuning, MotionState, PlayerController,
    SceneNode,
};
pub use plugins::{FlightControlPlugin, FlightSet};
pub use resources::{GridHeightMap, HeightMap, UniformHeightMap};
pub use systems::{flight_dynamics_system, flight_keyboard_system, handle_key_event};
