use bevy::prelude::*;

use crate::components::Floor;

/// Edge length of the square floor slab
pub const FLOOR_SIZE: f32 = 50.0;

/// Invisible walls keep the player inside the slab's footprint
pub const FLOOR_HALF_EXTENT: f32 = FLOOR_SIZE / 2.0;

const FLOOR_THICKNESS: f32 = 0.1;
const FLOOR_Y: f32 = -1.0;

pub fn setup_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_mesh = meshes.add(Cuboid::new(FLOOR_SIZE, FLOOR_THICKNESS, FLOOR_SIZE));
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.13, 0.55, 0.13), // Forest green
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Mesh3d(floor_mesh),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, FLOOR_Y, 0.0),
        Floor,
    ));
}
