use bevy::prelude::*;

/// Ground slab the player walks on
#[derive(Component)]
pub struct Floor;

/// Visible sun sphere
#[derive(Component)]
pub struct Sun;

/// Marker for the sun's directional light
#[derive(Component)]
pub struct SunLight;

/// Decorative annulus hovering off a floor corner
#[derive(Component)]
pub struct PulsingRing {
    /// Phase offset into the shared pulse (0-3)
    pub index: usize,
}

/// Downward spot light paired with a ring
#[derive(Component)]
pub struct RingLight {
    /// Matches the paired ring's index
    pub index: usize,
}
