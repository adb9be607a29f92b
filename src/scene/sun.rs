use bevy::prelude::*;

use crate::components::{Sun, SunLight};

/// The sun hangs high off one corner of the floor and never moves
const SUN_POSITION: Vec3 = Vec3::new(10.0, 30.0, 10.0);
const SUN_RADIUS: f32 = 2.0;

pub fn setup_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Directional light shining from the sun toward the scene
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.99, 0.95),
            illuminance: 80000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        SunLight,
    ));

    // Bright emissive sphere so the light source is visible in the sky
    let sun_mesh = meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 18));
    let sun_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 0.0),
        emissive: LinearRgba::new(10.0, 10.0, 0.0, 1.0),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(sun_mesh),
        MeshMaterial3d(sun_material),
        Transform::from_translation(SUN_POSITION),
        Sun,
    ));

    // Soft fill so surfaces facing away from the sun are not pitch black
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.95, 1.0),
        brightness: 300.0,
    });

    // Powder-blue sky for the window background
    commands.insert_resource(ClearColor(Color::srgb(0.69, 0.88, 0.90)));
}
