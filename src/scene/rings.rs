use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use bevy::prelude::*;

use crate::components::{PulsingRing, RingLight};

/// Ring centers hover above the floor corners, outside the walkable square
const RING_POSITIONS: [Vec3; 4] = [
    Vec3::new(30.0, 10.0, 30.0),
    Vec3::new(-30.0, 10.0, 30.0),
    Vec3::new(30.0, 10.0, -30.0),
    Vec3::new(-30.0, 10.0, -30.0),
];

const RING_INNER_RADIUS: f32 = 2.0;
const RING_OUTER_RADIUS: f32 = 3.0;
const RING_SEGMENTS: u32 = 32;

/// Base brightness of each ring's spot light; the pulse scales this
pub const RING_LIGHT_LUMENS: f32 = 1_000_000.0;

const RING_LIGHT_RANGE: f32 = 50.0;

pub fn setup_rings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ring_mesh = meshes.add(
        Annulus::new(RING_INNER_RADIUS, RING_OUTER_RADIUS)
            .mesh()
            .resolution(RING_SEGMENTS),
    );
    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.67, 0.67, 0.67),
        unlit: true,
        cull_mode: None, // visible from above and below
        double_sided: true,
        ..default()
    });

    for (index, position) in RING_POSITIONS.into_iter().enumerate() {
        // Annulus meshes lie in the XY plane; tip them over to face the floor
        commands.spawn((
            Mesh3d(ring_mesh.clone()),
            MeshMaterial3d(ring_material.clone()),
            Transform::from_translation(position).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            PulsingRing { index },
        ));

        // Narrow beam aimed at the floor directly under the ring
        commands.spawn((
            SpotLight {
                color: Color::WHITE,
                intensity: RING_LIGHT_LUMENS,
                range: RING_LIGHT_RANGE,
                outer_angle: FRAC_PI_6,
                inner_angle: FRAC_PI_6 * 0.5,
                ..default()
            },
            Transform::from_translation(position)
                .looking_at(Vec3::new(position.x, -1.0, position.z), Vec3::Z),
            RingLight { index },
        ));
    }
}
