use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow, WindowFocused};

use crate::components::PlayerController;
use crate::resources::PointerCapture;
use crate::scene::FLOOR_HALF_EXTENT;

/// Click to lock the cursor, browser pointer-lock style
pub fn grab_pointer_on_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut capture: ResMut<PointerCapture>,
) {
    if capture.active || !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
        capture.active = true;
        info!("Pointer captured");
    }
}

pub fn release_pointer_on_escape(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    windows: Query<&mut Window, With<PrimaryWindow>>,
    capture: ResMut<PointerCapture>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        release_pointer(windows, capture);
    }
}

/// Release the cursor when the window loses focus (e.g. after alt-tabbing)
/// so it never stays hidden outside the window
pub fn handle_window_focus(
    mut focus_events: EventReader<WindowFocused>,
    windows: Query<&mut Window, With<PrimaryWindow>>,
    capture: ResMut<PointerCapture>,
) {
    let lost_focus = focus_events.read().any(|event| !event.focused);
    if lost_focus {
        release_pointer(windows, capture);
    }
}

fn release_pointer(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut capture: ResMut<PointerCapture>,
) {
    if !capture.active {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
    capture.active = false;
    info!("Pointer released");
}

/// Space arms a jump impulse. This runs as an input handler rather than as
/// part of the movement step, so the impulse is applied at most once per
/// key-down edge; the airborne flag is the only guard. Not gated on pointer
/// capture - only the per-frame integration waits for capture.
pub fn player_jump(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut PlayerController>,
) {
    if !keyboard_input.just_pressed(KeyCode::Space) {
        return;
    }
    for mut controller in query.iter_mut() {
        arm_jump(&mut controller);
    }
}

pub fn player_look(
    mut mouse_motion_events: EventReader<MouseMotion>,
    mut query: Query<(&mut Transform, &mut PlayerController)>,
) {
    for (mut transform, mut controller) in query.iter_mut() {
        for event in mouse_motion_events.read() {
            apply_look(&mut controller, event.delta);
        }

        // Re-derive the camera orientation from the look angles
        transform.rotation =
            Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);
    }
}

pub fn player_movement(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Transform, &mut PlayerController)>,
) {
    let keys = MoveKeys {
        forward: keyboard_input.pressed(KeyCode::KeyW),
        backward: keyboard_input.pressed(KeyCode::KeyS),
        left: keyboard_input.pressed(KeyCode::KeyA),
        right: keyboard_input.pressed(KeyCode::KeyD),
    };

    for (mut transform, mut controller) in query.iter_mut() {
        step_player(&mut transform, &mut controller, keys);
    }
}

/// Movement keys held this frame
#[derive(Clone, Copy, Default)]
struct MoveKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

fn arm_jump(controller: &mut PlayerController) {
    if controller.airborne {
        return;
    }
    controller.jump_velocity = controller.jump_strength;
    controller.airborne = true;
}

fn apply_look(controller: &mut PlayerController, delta: Vec2) {
    controller.yaw -= delta.x * controller.look_sensitivity;
    controller.pitch -= delta.y * controller.look_sensitivity;

    // Clamp pitch so the camera cannot flip over
    controller.pitch = controller.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
}

/// One movement step: horizontal walk with the floor-bounds clamp, then the
/// vertical jump/gravity integration. Both operate in units per frame.
fn step_player(transform: &mut Transform, controller: &mut PlayerController, keys: MoveKeys) {
    let velocity = wish_velocity(&transform.rotation, controller.move_speed, keys);
    let next = clamp_to_floor(transform.translation + velocity);
    transform.translation.x = next.x;
    transform.translation.z = next.z;

    controller.jump_velocity -= controller.gravity;
    transform.translation.y += controller.jump_velocity;
    if transform.translation.y <= PlayerController::REST_HEIGHT {
        transform.translation.y = PlayerController::REST_HEIGHT;
        controller.jump_velocity = 0.0;
        controller.airborne = false;
    }
}

/// Horizontal velocity from the held keys. Forward is the camera's facing
/// flattened onto the ground plane; sideways is its cross with world-up.
/// Opposite keys cancel; perpendicular keys add without renormalizing, so
/// diagonal movement is up to sqrt(2) faster than cardinal movement.
fn wish_velocity(rotation: &Quat, speed: f32, keys: MoveKeys) -> Vec3 {
    let facing = *rotation * Vec3::NEG_Z;
    let forward = Vec3::new(facing.x, 0.0, facing.z).normalize_or_zero();
    let sideways = forward.cross(Vec3::Y).normalize_or_zero();

    let mut velocity = Vec3::ZERO;
    if keys.forward {
        velocity += forward * speed;
    }
    if keys.backward {
        velocity -= forward * speed;
    }
    if keys.right {
        velocity += sideways * speed;
    }
    if keys.left {
        velocity -= sideways * speed;
    }
    velocity
}

/// Clamp each horizontal axis independently into the floor's footprint
fn clamp_to_floor(mut position: Vec3) -> Vec3 {
    position.x = position.x.clamp(-FLOOR_HALF_EXTENT, FLOOR_HALF_EXTENT);
    position.z = position.z.clamp(-FLOOR_HALF_EXTENT, FLOOR_HALF_EXTENT);
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player() -> (Transform, PlayerController) {
        (
            Transform::from_xyz(0.0, PlayerController::REST_HEIGHT, 5.0),
            PlayerController::default(),
        )
    }

    const FORWARD_HELD: MoveKeys = MoveKeys {
        forward: true,
        backward: false,
        left: false,
        right: false,
    };

    #[test]
    fn test_step_stays_within_floor_bounds() {
        // One step from any starting point lands inside the square
        let starts = [
            Vec3::new(400.0, 2.0, -400.0),
            Vec3::new(-26.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(25.0, 2.0, 25.0),
        ];
        for start in starts {
            let mut transform = Transform::from_translation(start);
            let mut controller = PlayerController::default();
            step_player(&mut transform, &mut controller, FORWARD_HELD);
            assert!(transform.translation.x.abs() <= FLOOR_HALF_EXTENT);
            assert!(transform.translation.z.abs() <= FLOOR_HALF_EXTENT);
        }
    }

    #[test]
    fn test_clamp_is_idempotent_at_boundary() {
        let outside = Vec3::new(100.0, 2.0, -100.0);
        let clamped = clamp_to_floor(outside);
        assert_eq!(clamped, clamp_to_floor(clamped));
        assert_eq!(clamped.x, FLOOR_HALF_EXTENT);
        assert_eq!(clamped.z, -FLOOR_HALF_EXTENT);

        // Points already on the boundary are untouched
        let corner = Vec3::new(FLOOR_HALF_EXTENT, 2.0, FLOOR_HALF_EXTENT);
        assert_eq!(clamp_to_floor(corner), corner);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let rotation = Quat::IDENTITY;
        let both_z = MoveKeys {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(wish_velocity(&rotation, 0.10, both_z), Vec3::ZERO);

        let both_x = MoveKeys {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(wish_velocity(&rotation, 0.10, both_x), Vec3::ZERO);
    }

    #[test]
    fn test_diagonal_is_faster_than_cardinal() {
        // No renormalization across axes: forward+right moves sqrt(2) faster
        let rotation = Quat::IDENTITY;
        let diagonal = MoveKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        let speed = wish_velocity(&rotation, 0.10, diagonal).length();
        assert!((speed - 0.10 * 2.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_jump_returns_to_exact_rest_height() {
        let (mut transform, mut controller) = grounded_player();
        arm_jump(&mut controller);
        assert!(controller.airborne);

        // Velocity sequence 0.3, 0.28, 0.26, ... brings the camera back
        // down within a deterministic number of steps
        let mut steps = 0;
        while controller.airborne {
            step_player(&mut transform, &mut controller, MoveKeys::default());
            steps += 1;
            assert!(steps <= 100, "jump never landed");
        }
        assert_eq!(transform.translation.y, PlayerController::REST_HEIGHT);
        assert_eq!(controller.jump_velocity, 0.0);
    }

    #[test]
    fn test_grounded_height_is_stable() {
        let (mut transform, mut controller) = grounded_player();
        for _ in 0..5 {
            step_player(&mut transform, &mut controller, MoveKeys::default());
            assert_eq!(transform.translation.y, PlayerController::REST_HEIGHT);
            assert!(!controller.airborne);
        }
    }

    #[test]
    fn test_jump_impulse_only_when_grounded() {
        let (mut transform, mut controller) = grounded_player();
        arm_jump(&mut controller);
        assert_eq!(controller.jump_velocity, controller.jump_strength);

        step_player(&mut transform, &mut controller, MoveKeys::default());
        let mid_air_velocity = controller.jump_velocity;

        // A second trigger while airborne must not re-apply the impulse
        arm_jump(&mut controller);
        assert_eq!(controller.jump_velocity, mid_air_velocity);
    }

    #[test]
    fn test_pitch_clamped_for_any_delta_sequence() {
        let mut controller = PlayerController::default();
        let deltas = [
            Vec2::new(0.0, -1.0e6),
            Vec2::new(3.0, 250.0),
            Vec2::new(-12.0, 1.0e6),
            Vec2::new(0.5, -40.0),
        ];
        for delta in deltas {
            apply_look(&mut controller, delta);
            assert!(controller.pitch >= -FRAC_PI_2);
            assert!(controller.pitch <= FRAC_PI_2);
        }

        // Extreme deltas pin the pitch to the clamp edges exactly
        apply_look(&mut controller, Vec2::new(0.0, -1.0e6));
        assert_eq!(controller.pitch, FRAC_PI_2);
        apply_look(&mut controller, Vec2::new(0.0, 1.0e6));
        assert_eq!(controller.pitch, -FRAC_PI_2);
    }

    #[test]
    fn test_forward_walk_clamps_at_far_wall() {
        // From (0, 2, 5) facing -Z, each step moves -move_speed in Z until
        // the far wall, where Z pins to exactly -25 and stays there
        let (mut transform, mut controller) = grounded_player();

        let mut previous_z = transform.translation.z;
        for _ in 0..400 {
            step_player(&mut transform, &mut controller, FORWARD_HELD);
            let z = transform.translation.z;
            assert!(z <= previous_z);
            if z > -FLOOR_HALF_EXTENT {
                let step = previous_z - z;
                assert!((step - controller.move_speed).abs() < 1e-4);
            }
            assert_eq!(transform.translation.y, PlayerController::REST_HEIGHT);
            previous_z = z;
        }
        assert_eq!(transform.translation.z, -FLOOR_HALF_EXTENT);

        // Further forward steps leave the position unchanged
        step_player(&mut transform, &mut controller, FORWARD_HELD);
        assert_eq!(transform.translation.z, -FLOOR_HALF_EXTENT);
    }
}
