pub mod controller;
pub mod flight;

pub use controller::{flight_keyboard_system, handle_key_event};
pub use flight::flight_dynamics_system;
