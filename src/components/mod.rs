mod camera;
mod ui;
mod world;

pub use camera::PlayerController;
pub use ui::{Crosshair, DebugOverlay};
pub use world::{Floor, PulsingRing, RingLight, Sun, SunLight};
