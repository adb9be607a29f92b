use bevy::prelude::*;

use crate::components::DebugOverlay;

pub fn toggle_debug_overlay(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut DebugOverlay>,
) {
    if keyboard_input.just_pressed(KeyCode::F3) {
        for mut debug_overlay in query.iter_mut() {
            debug_overlay.visible = !debug_overlay.visible;
        }
    }
}
