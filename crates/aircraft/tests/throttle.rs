use std::time::Duration;

use aircraft::{standard_bindings, Aircraft, AircraftPlugin, ACCELERATE};
use bevy::input::Input;
use bevy::prelude::*;
use controls::{ActionState, ControlsPlugin};

const DT: f32 = 1.0 / 60.0;

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins((ControlsPlugin, AircraftPlugin));
    app.insert_resource(standard_bindings());
    // first update runs the initial state transition and binds the map
    app.update();
    app
}

fn spawn_craft(app: &mut App) -> Entity {
    app.world
        .spawn((Aircraft::default(), Transform::default()))
        .id()
}

/// Step one frame with a fixed delta, bypassing the real clock.
fn step(app: &mut App, dt: f32) {
    app.world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.world.run_schedule(PreUpdate);
    app.world.run_schedule(Update);
}

fn craft_state(app: &mut App, entity: Entity) -> Aircraft {
    *app.world.get::<Aircraft>(entity).unwrap()
}

#[test]
fn speed_never_leaves_bounds_and_ramp_saturates() {
    let mut app = app();
    let entity = spawn_craft(&mut app);

    app.world
        .resource_mut::<Input<KeyCode>>()
        .press(KeyCode::ShiftLeft);

    // one full rampup period
    for _ in 0..60 {
        step(&mut app, DT);
        let craft = craft_state(&mut app, entity);
        assert!(craft.current_speed >= 0.0 && craft.current_speed <= 10.0);
    }
    let craft = craft_state(&mut app, entity);
    assert!(craft.delta_v > 0.99 && craft.delta_v <= 1.0 + f32::EPSILON);
    assert!(craft.current_speed > 0.0 && craft.current_speed < 1.0);

    // keep holding well past the point the ceiling is reached
    for _ in 0..1200 {
        step(&mut app, DT);
        let craft = craft_state(&mut app, entity);
        assert!(craft.current_speed >= 0.0 && craft.current_speed <= 10.0);
    }
    assert_eq!(craft_state(&mut app, entity).current_speed, 10.0);
}

#[test]
fn release_resets_ramp_timer_and_flag() {
    let mut app = app();
    let entity = spawn_craft(&mut app);

    app.world
        .resource_mut::<Input<KeyCode>>()
        .press(KeyCode::ShiftLeft);
    for _ in 0..30 {
        step(&mut app, DT);
    }
    assert!(app.world.resource::<ActionState>().pressed(ACCELERATE));
    assert!(craft_state(&mut app, entity).ramp_elapsed > 0.4);

    app.world
        .resource_mut::<Input<KeyCode>>()
        .release(KeyCode::ShiftLeft);
    step(&mut app, DT);

    assert!(!app.world.resource::<ActionState>().pressed(ACCELERATE));
    // reset on the release edge, then one idle frame accumulated
    let craft = craft_state(&mut app, entity);
    assert!((craft.ramp_elapsed - DT).abs() < 1e-6);
}

#[test]
fn idle_decay_is_monotonic_and_reaches_exact_zero() {
    let mut app = app();
    let entity = spawn_craft(&mut app);

    app.world
        .resource_mut::<Input<KeyCode>>()
        .press(KeyCode::ShiftLeft);
    for _ in 0..30 {
        step(&mut app, DT);
    }
    app.world
        .resource_mut::<Input<KeyCode>>()
        .release(KeyCode::ShiftLeft);

    let mut last = craft_state(&mut app, entity).delta_v;
    assert!(last > 0.0);
    for _ in 0..70 {
        step(&mut app, DT);
        let delta_v = craft_state(&mut app, entity).delta_v;
        assert!(delta_v <= last);
        last = delta_v;
    }
    // a full ramp period of idle time has passed; the lerp factor clamped
    // at one snaps the value to its target
    assert_eq!(last, 0.0);
}

#[test]
fn simultaneous_throttle_inputs_cancel_from_rest() {
    let mut app = app();
    let entity = spawn_craft(&mut app);

    let mut keys = app.world.resource_mut::<Input<KeyCode>>();
    keys.press(KeyCode::ShiftLeft);
    keys.press(KeyCode::ControlLeft);
    for _ in 0..30 {
        step(&mut app, DT);
    }

    let craft = craft_state(&mut app, entity);
    // both branches run each frame: the add and the subtract use the same
    // ramp value, so from rest the speed pins at the lower clamp
    assert_eq!(craft.current_speed, 0.0);
    assert!(craft.delta_v > 0.0);
    // the shared timer advances once per branch
    assert!((craft.ramp_elapsed - 2.0 * 30.0 * DT).abs() < 1e-4);
}
