use bevy::prelude::*;

/// Whether the window currently holds the cursor for mouse-look.
/// Mirrors the primary window's cursor grab mode; the look and movement
/// systems only run while this is true.
#[derive(Resource, Default)]
pub struct PointerCapture {
    pub active: bool,
}
