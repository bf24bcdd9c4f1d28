use aircraft::{standard_bindings, Aircraft, AircraftPlugin, FlightPhase};
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use controls::{ActionState, ControlsPlugin};

fn press_escape(app: &mut App, state: ButtonState) {
    app.world.send_event(KeyboardInput {
        scan_code: 1,
        key_code: Some(KeyCode::Escape),
        state,
        window: Entity::PLACEHOLDER,
    });
}

#[test]
fn missing_action_map_logs_and_leaves_input_disabled() {
    let mut logger = logtest::Logger::start();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins((ControlsPlugin, AircraftPlugin));
    // no action maps configured: binding must fail on activation
    app.update();

    assert!(!app.world.resource::<ActionState>().is_enabled());
    assert!(logger.any(|record| record.args().contains("Aircraft")));
}

#[test]
fn escape_pauses_and_resumes_the_flight() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins((ControlsPlugin, AircraftPlugin));
    app.insert_resource(standard_bindings());
    app.update();
    assert!(app.world.resource::<ActionState>().is_enabled());

    let entity = app
        .world
        .spawn((
            Aircraft {
                current_speed: 5.0,
                ..Default::default()
            },
            Transform::default(),
        ))
        .id();

    press_escape(&mut app, ButtonState::Pressed);
    app.update();
    // the queued transition applies on the following frame
    app.update();
    assert_eq!(
        *app.world.resource::<State<FlightPhase>>().get(),
        FlightPhase::Paused
    );
    assert!(!app.world.resource::<ActionState>().is_enabled());

    // paused frames leave the pose untouched
    let frozen = app.world.get::<Transform>(entity).unwrap().translation;
    app.update();
    assert_eq!(app.world.get::<Transform>(entity).unwrap().translation, frozen);

    press_escape(&mut app, ButtonState::Released);
    app.update();
    press_escape(&mut app, ButtonState::Pressed);
    app.update();
    app.update();
    assert_eq!(
        *app.world.resource::<State<FlightPhase>>().get(),
        FlightPhase::Active
    );
    assert!(app.world.resource::<ActionState>().is_enabled());
}
