mod keyboard;

pub use keyboard::{flight_keyboard_system, handle_key_event};
