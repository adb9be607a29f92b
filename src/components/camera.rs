use bevy::prelude::*;

#[derive(Component)]
pub struct PlayerController {
    pub yaw: f32,   // Horizontal rotation (left/right)
    pub pitch: f32, // Vertical rotation (up/down)
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub airborne: bool,
}

impl PlayerController {
    /// Camera height while standing on the floor
    pub const REST_HEIGHT: f32 = 2.0;
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 0.10,
            look_sensitivity: 0.002,
            jump_velocity: 0.0,
            gravity: 0.02,
            jump_strength: 0.3,
            airborne: false,
        }
    }
}
