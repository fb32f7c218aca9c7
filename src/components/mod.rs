pub mod config;
pub mod controller;
pub mod flight;
pub mod input;
pub mod node;
pub mod state;

pub use config::{ConfigError, FlightTuning};
pub use controller::PlayerController;
pub use flight::FlightModel;
pub use input::ControlInputState;
pub use node::SceneNode;
pub use state::MotionState;
