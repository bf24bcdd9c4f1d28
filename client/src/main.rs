use aircraft::hud::SpeedProbe;
use aircraft::{standard_bindings, Aircraft, AircraftPlugin};
use bevy::prelude::*;
use controls::ControlsPlugin;

mod config;

use config::RuntimeConfig;

fn main() {
    let config = RuntimeConfig::load_or_default("config.json");
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins((ControlsPlugin, AircraftPlugin))
        .insert_resource(standard_bindings())
        .insert_resource(config.tuning)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawns the aircraft with a chase camera, a light, and the ground.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let start = Transform::from_xyz(0.0, 4.0, 0.0);
    commands
        .spawn((
            PbrBundle {
                mesh: meshes.add(Mesh::from(shape::Box::new(1.2, 0.3, 2.0))),
                material: materials.add(Color::rgb(0.7, 0.7, 0.8).into()),
                transform: start,
                ..default()
            },
            Aircraft::default(),
            SpeedProbe {
                last_position: start.translation,
            },
        ))
        .with_children(|parent| {
            parent.spawn(Camera3dBundle {
                transform: Transform::from_xyz(0.0, 2.5, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
                ..default()
            });
        });

    commands.spawn(DirectionalLightBundle {
        transform: Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });
    commands.spawn(PbrBundle {
        mesh: meshes.add(Mesh::from(shape::Plane {
            size: 200.0,
            subdivisions: 0,
        })),
        material: materials.add(Color::rgb(0.3, 0.5, 0.3).into()),
        ..default()
    });
}
