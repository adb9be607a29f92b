use bevy::prelude::*;

#[derive(Component)]
pub struct Crosshair;

#[derive(Component)]
pub struct DebugOverlay {
    pub visible: bool,
}
