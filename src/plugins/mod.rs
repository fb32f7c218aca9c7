mod flight;

pub use flight::{FlightControlPlugin, FlightSet};
