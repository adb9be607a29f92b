mod components;
mod resources;
mod scene;
mod systems;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::settings::{Backends, RenderCreation, WgpuSettings};
use bevy::render::RenderPlugin;
use bevy::text::{TextColor, TextFont};

use components::{Crosshair, DebugOverlay, PlayerController};
use resources::PointerCapture;
use scene::{setup_floor, setup_rings, setup_sun};
use systems::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sunplaza".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(RenderPlugin {
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        // Force Vulkan backend for multi-platform compatibility
                        backends: Some(Backends::VULKAN),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .init_resource::<PointerCapture>()
        .add_systems(Startup, (setup, setup_floor, setup_sun, setup_rings).chain())
        // Pointer capture and HUD input
        .add_systems(Update, (
            grab_pointer_on_click,
            release_pointer_on_escape,
            handle_window_focus,
            toggle_debug_overlay,
        ))
        // Player systems, in input-handler-then-update order; look and
        // movement only run while the pointer is captured
        .add_systems(Update, (
            player_jump,
            player_look.run_if(|capture: Res<PointerCapture>| capture.active),
            player_movement.run_if(|capture: Res<PointerCapture>| capture.active),
        ).chain())
        // Decorative updates
        .add_systems(Update, (update_rings, update_debug_overlay))
        .run();
}

fn setup(mut commands: Commands) {
    // First-person camera standing on the floor, facing -Z
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Transform::from_xyz(0.0, PlayerController::REST_HEIGHT, 5.0),
        PlayerController::default(),
        Tonemapping::TonyMcMapface,
    ));

    // Crosshair cursor (centered on screen)
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(20.0),
            height: Val::Px(2.0),
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            margin: UiRect {
                left: Val::Px(-10.0),
                top: Val::Px(-1.0),
                ..default()
            },
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Crosshair,
    ));

    // Crosshair vertical line
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(2.0),
            height: Val::Px(20.0),
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            margin: UiRect {
                left: Val::Px(-1.0),
                top: Val::Px(-10.0),
                ..default()
            },
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Crosshair,
    ));

    // Debug overlay (visible by default, F3 toggles)
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 1.0, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        DebugOverlay { visible: true },
    ));
}
