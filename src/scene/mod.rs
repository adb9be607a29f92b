mod floor;
mod rings;
mod sun;

pub use floor::{setup_floor, FLOOR_HALF_EXTENT};
pub use rings::{setup_rings, RING_LIGHT_LUMENS};
pub use sun::setup_sun;
