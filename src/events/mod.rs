pub mod triggers;
pub mod video;

pub use triggers::{wire_teardown, wire_trigger_buttons};
pub use video::wire_load_button;
