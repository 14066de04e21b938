pub mod sound;
pub mod video;

pub use sound::*;
pub use video::*;
