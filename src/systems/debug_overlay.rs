use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::components::{DebugOverlay, PlayerController};
use crate::resources::PointerCapture;

/// System to update the debug overlay with FPS, position, and player state
pub fn update_debug_overlay(
    diagnostics: Res<DiagnosticsStore>,
    capture: Res<PointerCapture>,
    camera_query: Query<(&Transform, &PlayerController)>,
    mut debug_text_query: Query<(&mut Text, &DebugOverlay)>,
) {
    let Ok((camera_transform, controller)) = camera_query.get_single() else {
        return;
    };

    let Ok((mut text, debug_overlay)) = debug_text_query.get_single_mut() else {
        return;
    };

    if !debug_overlay.visible {
        **text = "".to_string();
        return;
    }

    let camera_pos = camera_transform.translation;
    let mut debug_text = String::new();

    // Add FPS
    if let Some(fps_diagnostic) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
        if let Some(fps_smoothed) = fps_diagnostic.smoothed() {
            debug_text.push_str(&format!("FPS: {:.0}\n", fps_smoothed));
        }
    }

    // Add position
    debug_text.push_str(&format!(
        "X: {:.1}\nY: {:.1}\nZ: {:.1}\n",
        camera_pos.x, camera_pos.y, camera_pos.z
    ));

    // Add cardinal direction
    debug_text.push_str(&format!("Facing: {}\n", get_cardinal_direction(controller.yaw)));

    let capture_status = if capture.active {
        "captured"
    } else {
        "released (click to look)"
    };
    debug_text.push_str(&format!("Pointer: {}", capture_status));

    if controller.airborne {
        debug_text.push_str("\nAirborne");
    }

    **text = debug_text;
}

fn get_cardinal_direction(yaw: f32) -> &'static str {
    // Normalize yaw to 0-2π range
    let mut normalized_yaw = yaw % (2.0 * std::f32::consts::PI);
    if normalized_yaw < 0.0 {
        normalized_yaw += 2.0 * std::f32::consts::PI;
    }

    // Convert to degrees for easier calculation
    let degrees = normalized_yaw.to_degrees();

    // Yaw 0 faces -Z, which this scene treats as north; positive yaw turns
    // the camera toward -X (west)
    match degrees {
        d if d >= 337.5 || d < 22.5 => "N",
        d if d >= 22.5 && d < 67.5 => "NW",
        d if d >= 67.5 && d < 112.5 => "W",
        d if d >= 112.5 && d < 157.5 => "SW",
        d if d >= 157.5 && d < 202.5 => "S",
        d if d >= 202.5 && d < 247.5 => "SE",
        d if d >= 247.5 && d < 292.5 => "E",
        d if d >= 292.5 && d < 337.5 => "NE",
        _ => "?",
    }
}
