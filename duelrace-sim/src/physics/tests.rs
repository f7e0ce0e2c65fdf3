use duelrace_core::player::player_inputs::{EngineStatus, PlayerInputs};
use duelrace_core::GLOBAL_CONFIG;
use glam::DVec2;

use crate::physics::bounding_box::BoundingBox;
use crate::physics::collisions::{CollisionResolver, NoObstacles, ObstacleLayer};
use crate::physics::player_entity::{heading_direction, PlayerEntity};

fn get_moving_player() -> PlayerEntity {
    let mut player = PlayerEntity::new(0, DVec2::new(100.0, 100.0), 0.0);
    player.launch();
    player
}

fn holding(turn_left: bool, turn_right: bool, reverse: bool) -> PlayerInputs {
    PlayerInputs {
        turn_left,
        turn_right,
        reverse,
    }
}

#[test]
fn test_locked_player_does_not_steer_or_move() {
    let mut player = PlayerEntity::new(0, DVec2::ZERO, 30.0);
    player.velocity = DVec2::new(3.0, 3.0);
    player.do_physics_step(&holding(true, false, false), 1.0);

    assert_eq!(player.velocity, DVec2::ZERO);
    assert_eq!(player.heading, 30.0);
    assert_eq!(player.steering_angle, 0.0);
}

#[test]
fn test_full_lock_left_and_right() {
    let max_steer = GLOBAL_CONFIG.max_steering_angle;

    let mut player = get_moving_player();
    player.do_physics_step(&holding(true, false, false), 0.0);
    assert_eq!(player.steering_angle, -max_steer);

    player.do_physics_step(&holding(false, true, false), 0.0);
    assert_eq!(player.steering_angle, max_steer);
}

#[test]
fn test_steering_recenters_by_fixed_factor_per_step() {
    let max_steer = GLOBAL_CONFIG.max_steering_angle;
    let decay = GLOBAL_CONFIG.steering_decay;

    let mut player = get_moving_player();
    player.do_physics_step(&holding(false, true, false), 0.0);

    // same decay no matter how long the tick was
    player.do_physics_step(&holding(false, false, false), 0.5);
    assert!((player.steering_angle - max_steer * decay).abs() < 1e-9);

    // both held counts as neither
    player.do_physics_step(&holding(true, true, false), 0.001);
    assert!((player.steering_angle - max_steer * decay * decay).abs() < 1e-9);
}

#[test]
fn test_heading_turn_rate_scales_with_time_not_speed() {
    let mut player = get_moving_player();
    player.do_physics_step(&holding(false, true, false), 0.5);

    let expected = (GLOBAL_CONFIG.max_steering_angle.to_radians()
        * 0.5
        * GLOBAL_CONFIG.steering_gain)
        .to_degrees();
    assert!((player.heading - expected).abs() < 1e-9);

    let mut reversing = get_moving_player();
    reversing.do_physics_step(&holding(false, true, true), 0.5);
    assert!((reversing.heading - player.heading).abs() < 1e-9);
}

#[test]
fn test_velocity_follows_heading() {
    let mut player = get_moving_player();
    player.heading = 90.0;
    player.do_physics_step(&holding(false, false, false), 0.016);
    assert!(player
        .velocity
        .abs_diff_eq(DVec2::new(GLOBAL_CONFIG.car_speed, 0.0), 1e-9));

    // any winding of the same angle points the same way
    for heading in [-270.0, 450.0, 810.0] {
        assert!(heading_direction(heading).abs_diff_eq(DVec2::new(1.0, 0.0), 1e-9));
    }
}

#[test]
fn test_reverse_moves_backwards_while_facing_forwards() {
    let mut player = get_moving_player();
    player.do_physics_step(&holding(false, false, true), 0.016);

    assert_eq!(player.engine_status, EngineStatus::Reversing);
    assert_eq!(player.heading, 0.0);
    assert!(player
        .velocity
        .abs_diff_eq(DVec2::new(0.0, -GLOBAL_CONFIG.car_reverse_speed), 1e-9));

    player.release_reverse();
    assert_eq!(player.engine_status, EngineStatus::Forward);
    assert!(player
        .velocity
        .abs_diff_eq(DVec2::new(0.0, GLOBAL_CONFIG.car_speed), 1e-9));
}

#[test]
fn test_release_reverse_ignored_without_control() {
    let mut player = PlayerEntity::new(0, DVec2::ZERO, 0.0);
    player.release_reverse();
    assert_eq!(player.velocity, DVec2::ZERO);
}

#[test]
fn test_freeze_stops_player() {
    let mut player = get_moving_player();
    player.freeze();
    assert!(!player.can_move);
    assert_eq!(player.velocity, DVec2::ZERO);
}

#[test]
fn test_open_track_moves_by_velocity() {
    let mut player = get_moving_player();
    NoObstacles.resolve(&mut player);
    assert!(player
        .position
        .abs_diff_eq(DVec2::new(100.0, 100.0 + GLOBAL_CONFIG.car_speed), 1e-9));
}

#[test]
fn test_wall_blocks_one_axis_and_lets_the_other_slide() {
    let mut player = get_moving_player();
    player.velocity = DVec2::new(3.0, 3.0);
    let half_length = player.size.y / 2.0;

    // wall directly above the car, just out of reach of this tick's move
    let wall_bottom = 100.0 + half_length + 1.0;
    let layer = ObstacleLayer::new(vec![BoundingBox::new(
        0.0,
        1000.0,
        wall_bottom,
        wall_bottom + 10.0,
    )]);
    layer.resolve(&mut player);

    assert!(player.position.abs_diff_eq(DVec2::new(103.0, 100.0), 1e-9));
    assert_eq!(player.velocity, DVec2::new(3.0, 0.0));
}

#[test]
fn test_clear_layer_moves_freely() {
    let mut player = get_moving_player();
    let layer = ObstacleLayer::new(vec![BoundingBox::new(500.0, 600.0, 500.0, 600.0)]);
    layer.resolve(&mut player);
    assert!(player
        .position
        .abs_diff_eq(DVec2::new(100.0, 100.0 + GLOBAL_CONFIG.car_speed), 1e-9));
}
