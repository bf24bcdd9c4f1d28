use bevy::prelude::*;

use crate::throttle::Aircraft;

/// Root HUD node.
#[derive(Component)]
pub struct HudRoot;

/// Text readout for the derived speed.
#[derive(Component)]
pub struct SpeedometerText;

/// Text readout for the current delta-v.
#[derive(Component)]
pub struct AccelerationText;

/// Previous-position snapshot, overwritten every frame to derive the
/// displayed speed.
#[derive(Component, Debug, Default)]
pub struct SpeedProbe {
    pub last_position: Vec3,
}

pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::all(Val::Px(10.0)),
                    ..Default::default()
                },
                ..Default::default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                TextBundle::from_section(
                    "0.0 m/s",
                    TextStyle {
                        font_size: 24.0,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ),
                SpeedometerText,
            ));
            parent.spawn((
                TextBundle::from_section(
                    "0.0",
                    TextStyle {
                        font_size: 24.0,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ),
                AccelerationText,
            ));
        });
}

/// Refresh both readouts. The displayed speed is recomputed from the
/// distance moved since the previous frame over the frame delta, which can
/// diverge from the integrator's own speed.
pub fn update_hud(
    time: Res<Time>,
    mut probes: Query<(&Aircraft, &Transform, &mut SpeedProbe)>,
    mut speedometer: Query<&mut Text, (With<SpeedometerText>, Without<AccelerationText>)>,
    mut acceleration: Query<&mut Text, (With<AccelerationText>, Without<SpeedometerText>)>,
) {
    let Ok((craft, transform, mut probe)) = probes.get_single_mut() else {
        return;
    };

    let distance = transform.translation.distance(probe.last_position);
    let speed = distance / time.delta_seconds();
    probe.last_position = transform.translation;

    for mut text in &mut speedometer {
        text.sections[0].value = format!("{speed:.1} m/s");
    }
    for mut text in &mut acceleration {
        text.sections[0].value = format!("{:.1}", craft.delta_v);
    }
}
