mod common;

use std::time::Duration;

use approx::assert_relative_eq;
use bevy::input::InputPlugin;
use bevy::prelude::*;
use skimmer::{FlightControlPlugin, FlightModel, FlightTuning, HeightMap, PlayerController};

#[test]
fn forward_run_tracks_the_ramp() {
    let map = common::ramp_track();
    let mut model = common::player_model(map.clone());
    model.input.forward = true;

    for _ in 0..50 {
        model.update(1.0);
        let position = model.root().position();
        let surface = map.lookup(position.x, position.z);
        // Climbing keeps the craft snapped to the hover line.
        assert_relative_eq!(position.y, surface + 4.0, epsilon = 1e-9);
    }

    assert!(model.motion.speed > 0.9);
    let expected = -(0.5f64).atan2(5.0);
    assert_relative_eq!(model.motion.gradient_target, expected, epsilon = 1e-9);
    assert!(model.motion.gradient < 0.0);
    assert_relative_eq!(model.motion.tilt_target, 0.0);
}

#[test]
fn air_brake_drift_slides_the_craft_sideways() {
    let mut model = common::player_model(common::flat_track(0.0));
    model.input.forward = true;
    for _ in 0..30 {
        model.update(1.0);
    }

    let speed_before = model.motion.speed;
    model.input.left_trigger = true;
    for _ in 0..20 {
        model.update(1.0);
    }

    assert!(model.motion.drift > 0.0 && model.motion.drift <= model.tuning.air_drift);
    assert!(model.motion.angular > 0.0);
    // Thrust and air brake cancel out while both are held.
    assert_relative_eq!(model.motion.speed, speed_before, epsilon = 1e-9);
    assert!(model.root().position().x > 0.0);
}

#[test]
fn custom_tuning_caps_the_top_speed() {
    let tuning = FlightTuning {
        max_speed: 2.0,
        ..Default::default()
    };
    let mut model = FlightModel::with_tuning(tuning);
    model.input.forward = true;
    for _ in 0..300 {
        model.update(1.0);
    }
    assert_eq!(model.motion.speed, 2.0);
    assert_eq!(model.speed_ratio(), 1.0);
}

#[test]
fn plugin_drives_a_player_craft() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InputPlugin, FlightControlPlugin));

    let craft = app
        .world_mut()
        .spawn((
            common::player_model(common::flat_track(0.0)),
            PlayerController,
            Transform::default(),
        ))
        .id();

    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowUp);

    for _ in 0..5 {
        std::thread::sleep(Duration::from_millis(5));
        app.update();
    }

    let model = app.world().get::<FlightModel>(craft).unwrap();
    assert!(model.input.forward);
    assert!(model.speed_ratio() > 0.0);

    // The entity transform mirrors the body node, settled on the hover line.
    let transform = app.world().get::<Transform>(craft).unwrap();
    assert!((transform.translation.y - 4.0).abs() < 1e-3);
}
