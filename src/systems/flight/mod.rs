mod dynamics;
mod sync;

pub use sync::flight_dynamics_system;
