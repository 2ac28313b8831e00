//! Motor Tests - Locomotion Over a Box World
//!
//! Drives the player motor through small box courses and checks the state
//! machine, ground snap, wall ride, wall jump and slide behavior end to end.

use glam::{Quat, Vec2, Vec3};
use hr_runner_engine::config::MotorConfig;
use hr_runner_engine::input::AxisInput;
use hr_runner_engine::physics::{BoxWorld, Contact, SolidBox};
use hr_runner_engine::player::integrator::jump_speed;
use hr_runner_engine::player::{LocomotionState, MotorEvent, PlayerMotor};

const DT: f32 = 0.02;
const RUN_WALL: &str = "RunWall";

fn floor_world() -> BoxWorld {
    let mut world = BoxWorld::new();
    world.add_floor(0.0, 100.0);
    world
}

/// Floor plus a ride-able wall whose face is at x = 1.
fn wall_world(tag: &str) -> BoxWorld {
    let mut world = floor_world();
    world.add(SolidBox::tagged(
        Vec3::new(1.0, -1.0, -50.0),
        Vec3::new(2.0, 20.0, 50.0),
        tag,
    ));
    world
}

fn wall_config() -> MotorConfig {
    MotorConfig {
        wall_ridable_tag: RUN_WALL.to_string(),
        ..Default::default()
    }
}

fn still() -> AxisInput {
    AxisInput::default()
}

/// Tick until `state` is reached, returning the number of ticks taken.
fn tick_until(
    motor: &mut PlayerMotor,
    world: &mut BoxWorld,
    input: &AxisInput,
    state: LocomotionState,
    max_ticks: usize,
) -> Option<usize> {
    for i in 0..max_ticks {
        motor.tick(world, input, DT);
        if motor.current_state() == state {
            return Some(i + 1);
        }
    }
    None
}

/// Motor riding the wall in `wall_world(RUN_WALL)`.
fn riding_motor(world: &mut BoxWorld) -> PlayerMotor {
    let mut motor = PlayerMotor::new(wall_config(), Vec3::new(0.0, 5.0, 0.0), Quat::IDENTITY);
    let push_right = AxisInput::moving(Vec2::X);
    tick_until(&mut motor, world, &push_right, LocomotionState::WallRide, 30)
        .expect("motor should reach the wall");
    motor
}

// ============================================================================
// Grounded
// ============================================================================

#[test]
fn test_resting_on_floor_stays_grounded() {
    let mut world = floor_world();
    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);

    for _ in 0..50 {
        motor.tick(&mut world, &still(), DT);
        assert_eq!(motor.current_state(), LocomotionState::Grounded);
        assert!(motor.collision_flags().below);
    }
    assert!((motor.position().y - 1.0).abs() < 0.0001);
    assert!(motor.velocity().length() < 0.0001);
}

#[test]
fn test_falling_body_lands() {
    let mut world = floor_world();
    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 4.0, 0.0), Quat::IDENTITY);

    motor.tick(&mut world, &still(), DT);
    assert_eq!(motor.current_state(), LocomotionState::InAir);

    let ticks = tick_until(&mut motor, &mut world, &still(), LocomotionState::Grounded, 200);
    assert!(ticks.is_some(), "body never landed");
    assert!((motor.position().y - 1.0).abs() < 0.001);
    assert!(motor.was_grounded());
}

#[test]
fn test_ground_snap_follows_step_down() {
    let mut world = BoxWorld::new();
    world.add(SolidBox::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)));
    world.add(SolidBox::new(Vec3::new(-10.0, -1.3, 10.0), Vec3::new(10.0, -0.3, 50.0)));

    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 1.0, 8.0), Quat::IDENTITY);
    let forward = AxisInput::moving(Vec2::Y);

    for _ in 0..80 {
        motor.tick(&mut world, &forward, DT);
        assert_eq!(
            motor.current_state(),
            LocomotionState::Grounded,
            "lost ground at {:?}",
            motor.position()
        );
    }
    assert!(motor.position().z > 11.0);
    assert!((motor.position().y - 0.7).abs() < 0.001);
}

#[test]
fn test_running_off_a_ledge_falls() {
    let mut world = BoxWorld::new();
    world.add(SolidBox::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)));

    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 1.0, 8.0), Quat::IDENTITY);
    let forward = AxisInput::moving(Vec2::Y);

    let ticks = tick_until(&mut motor, &mut world, &forward, LocomotionState::InAir, 100);
    assert!(ticks.is_some());
    assert!(!motor.was_grounded());
    assert!(motor.position().z > 10.0);
}

// ============================================================================
// Jump
// ============================================================================

#[test]
fn test_ground_jump_has_no_horizontal_kick() {
    let mut world = floor_world();
    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
    motor.tick(&mut world, &still(), DT);

    motor.request_jump();
    motor.tick(&mut world, &still(), DT);

    let expected = jump_speed(-9.81, 1.5) - 9.81 * DT;
    assert_eq!(motor.current_state(), LocomotionState::InAir);
    assert!((motor.velocity().y - expected).abs() < 0.001);
    assert!(motor.velocity().x.abs() < 0.0001);
    assert!(motor.velocity().z.abs() < 0.0001);
}

#[test]
fn test_jump_reaches_configured_height() {
    let mut world = floor_world();
    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
    motor.tick(&mut world, &still(), DT);
    motor.request_jump();

    let mut apex: f32 = 0.0;
    for _ in 0..100 {
        motor.tick(&mut world, &still(), DT);
        apex = apex.max(motor.position().y - 1.0);
    }
    // Discrete integration lands slightly under the analytic apex
    assert!(apex > 1.3 && apex <= 1.5 + 0.001, "apex {}", apex);
    assert_eq!(motor.current_state(), LocomotionState::Grounded);
}

#[test]
fn test_gravity_scale_changes_fall_rate() {
    let mut world = BoxWorld::new();
    let config = MotorConfig {
        gravity_scale: Vec3::new(1.0, 2.0, 1.0),
        ..Default::default()
    };
    let mut motor = PlayerMotor::new(config, Vec3::new(0.0, 10.0, 0.0), Quat::IDENTITY);

    motor.tick(&mut world, &still(), DT);
    assert!((motor.velocity().y + 2.0 * 9.81 * DT).abs() < 0.001);
}

// ============================================================================
// Wall Ride
// ============================================================================

#[test]
fn test_tagged_wall_starts_wall_ride() {
    let mut world = wall_world(RUN_WALL);
    let mut motor = riding_motor(&mut world);

    let push_right = AxisInput::moving(Vec2::X);
    for _ in 0..10 {
        motor.tick(&mut world, &push_right, DT);
        assert_eq!(motor.current_state(), LocomotionState::WallRide);
        // Cling speed replaces accumulated gravity
        assert!((motor.velocity().y + 9.81 * 0.5).abs() < 0.001);
    }
}

#[test]
fn test_untagged_wall_is_not_ridable() {
    let mut world = wall_world("Concrete");
    let mut motor = PlayerMotor::new(wall_config(), Vec3::new(0.0, 5.0, 0.0), Quat::IDENTITY);
    let push_right = AxisInput::moving(Vec2::X);

    for _ in 0..30 {
        motor.tick(&mut world, &push_right, DT);
        assert_ne!(motor.current_state(), LocomotionState::WallRide);
    }
    assert!(motor.collision_flags().sides);
}

#[test]
fn test_reported_contact_enables_wall_ride() {
    let mut world = wall_world("Concrete");
    let mut motor = PlayerMotor::new(wall_config(), Vec3::new(0.0, 5.0, 0.0), Quat::IDENTITY);
    let push_right = AxisInput::moving(Vec2::X);

    for _ in 0..30 {
        motor.tick(&mut world, &push_right, DT);
    }
    assert_eq!(motor.current_state(), LocomotionState::InAir);

    motor.notify_contact(&Contact {
        point: motor.position() + Vec3::X * 0.5,
        normal: Vec3::NEG_X,
        tag: RUN_WALL.to_string(),
    });
    motor.tick(&mut world, &push_right, DT);
    assert_eq!(motor.current_state(), LocomotionState::WallRide);

    // The report is consumed by that one tick
    motor.tick(&mut world, &push_right, DT);
    assert_eq!(motor.current_state(), LocomotionState::InAir);
}

#[test]
fn test_wall_jump_pushes_off_wall() {
    let mut world = wall_world(RUN_WALL);
    let mut motor = riding_motor(&mut world);
    // One full tick against the wall so no approach speed is left
    motor.tick(&mut world, &AxisInput::moving(Vec2::X), DT);
    assert_eq!(motor.current_state(), LocomotionState::WallRide);
    assert!(motor.velocity().x.abs() < 0.0001);
    motor.drain_events().for_each(drop);

    motor.request_jump();
    motor.tick(&mut world, &still(), DT);

    let jump = jump_speed(-9.81, 1.5);
    let kick = jump * 0.5 * (1.0 - 3.0 * DT);
    assert_eq!(motor.current_state(), LocomotionState::InAir);
    assert!((motor.velocity().x + kick).abs() < 0.001, "vx {}", motor.velocity().x);
    assert!((motor.velocity().y - (jump - 9.81 * DT)).abs() < 0.001);
    assert_eq!(motor.drain_events().collect::<Vec<_>>(), vec![MotorEvent::JumpPressed]);
}

// ============================================================================
// Slide
// ============================================================================

fn running_motor(world: &mut BoxWorld) -> PlayerMotor {
    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
    let forward = AxisInput::moving(Vec2::Y);
    for _ in 0..60 {
        motor.tick(world, &forward, DT);
    }
    motor
}

#[test]
fn test_slide_boosts_speed_and_keeps_feet_on_floor() {
    let mut world = floor_world();
    let mut motor = running_motor(&mut world);
    let speed = motor.current_speed();
    let feet = motor.position().y + motor.collider().center.y - motor.collider().half_height();

    motor.request_slide_begin();
    motor.tick(&mut world, &still(), DT);

    assert_eq!(motor.current_state(), LocomotionState::Sliding);
    assert!(motor.current_speed() > speed * 1.1);
    assert!((motor.collider().height - 1.0).abs() < 0.0001);
    assert!((motor.head_position().y + 0.4).abs() < 0.0001);

    let slid_feet = motor.position().y + motor.collider().center.y - motor.collider().half_height();
    assert!((feet - slid_feet).abs() < 0.0001);
}

#[test]
fn test_slide_decays_slower_than_running_stop() {
    let mut world = floor_world();
    let mut sliding = running_motor(&mut world);
    let mut stopping = sliding.clone();

    sliding.request_slide_begin();
    for _ in 0..30 {
        sliding.tick(&mut world, &still(), DT);
        stopping.tick(&mut world, &still(), DT);
    }
    assert_eq!(sliding.current_state(), LocomotionState::Sliding);
    assert!(sliding.current_speed() > stopping.current_speed());
}

#[test]
fn test_slide_exit_restores_shape_exactly() {
    let mut world = floor_world();
    let mut motor = running_motor(&mut world);
    let collider = *motor.collider();
    let head = motor.head_position();

    motor.request_slide_begin();
    for _ in 0..13 {
        motor.tick(&mut world, &still(), DT);
    }
    motor.request_slide_end();
    motor.tick(&mut world, &still(), DT);

    assert_eq!(motor.current_state(), LocomotionState::Grounded);
    assert_eq!(*motor.collider(), collider);
    assert_eq!(motor.head_position(), head);
}

#[test]
fn test_slide_begin_and_end_in_one_tick_restores_shape() {
    let mut world = floor_world();
    let mut motor = running_motor(&mut world);
    let collider = *motor.collider();
    let head = motor.head_position();
    motor.drain_events().for_each(drop);

    motor.request_slide_begin();
    motor.request_slide_end();
    motor.tick(&mut world, &still(), DT);

    assert_eq!(motor.current_state(), LocomotionState::Grounded);
    assert_eq!(*motor.collider(), collider);
    assert_eq!(motor.head_position(), head);
    assert_eq!(
        motor.drain_events().collect::<Vec<_>>(),
        vec![MotorEvent::SlideBegan, MotorEvent::SlideEnded]
    );
}

#[test]
fn test_slide_end_without_slide_is_ignored() {
    let mut world = floor_world();
    let mut motor = running_motor(&mut world);
    motor.drain_events().for_each(drop);

    motor.request_slide_end();
    motor.tick(&mut world, &still(), DT);
    assert_eq!(motor.current_state(), LocomotionState::Grounded);
    assert_eq!(motor.drain_events().count(), 0);
}

/// Upper floor ending at z = 10, with an optional lower floor past the ledge.
fn ledge_world(lower_top: Option<f32>) -> BoxWorld {
    let mut world = BoxWorld::new();
    world.add(SolidBox::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)));
    if let Some(top) = lower_top {
        world.add(SolidBox::new(Vec3::new(-10.0, top - 1.0, 10.0), Vec3::new(10.0, top, 50.0)));
    }
    world
}

fn feet(motor: &PlayerMotor) -> f32 {
    motor.position().y + motor.collider().center.y - motor.collider().half_height()
}

/// Run at the ledge, start a slide and keep sliding until the floor is gone.
fn slide_off_ledge(world: &mut BoxWorld) -> PlayerMotor {
    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 1.0, 7.0), Quat::IDENTITY);
    let forward = AxisInput::moving(Vec2::Y);
    for _ in 0..100 {
        motor.tick(world, &forward, DT);
        if motor.position().z > 8.0 {
            break;
        }
    }
    assert_eq!(motor.current_state(), LocomotionState::Grounded);

    motor.request_slide_begin();
    for _ in 0..100 {
        motor.tick(world, &still(), DT);
        if !motor.collision_flags().below {
            break;
        }
    }
    assert!(motor.position().z > 10.0, "slide stopped at {:?}", motor.position());
    assert_eq!(motor.current_state(), LocomotionState::Sliding);
    motor
}

#[test]
fn test_jump_out_of_slide_past_ledge() {
    let mut world = ledge_world(None);
    let mut motor = slide_off_ledge(&mut world);
    motor.drain_events().for_each(drop);

    motor.request_jump();
    motor.tick(&mut world, &still(), DT);

    let expected = jump_speed(-9.81, 1.5) - 9.81 * DT;
    assert_eq!(motor.current_state(), LocomotionState::InAir);
    assert!((motor.velocity().y - expected).abs() < 0.001, "vy {}", motor.velocity().y);
    assert!((motor.collider().height - 2.0).abs() < 0.0001);
    assert_eq!(
        motor.drain_events().collect::<Vec<_>>(),
        vec![MotorEvent::SlideEnded, MotorEvent::JumpPressed]
    );
}

#[test]
fn test_slide_ended_mid_fall_does_not_snap() {
    let mut world = ledge_world(Some(-2.0));
    let mut motor = slide_off_ledge(&mut world);
    assert!(!motor.was_grounded());

    // Fall while still sliding until the lower floor is within snap reach
    let mut gap = feet(&motor) + 2.0;
    for _ in 0..200 {
        motor.tick(&mut world, &still(), DT);
        gap = feet(&motor) + 2.0;
        if gap < 0.5 {
            break;
        }
    }
    assert!(gap > 0.3 && gap < 0.5, "gap {}", gap);
    assert_eq!(motor.current_state(), LocomotionState::Sliding);
    assert!(!motor.was_grounded());

    motor.request_slide_end();
    motor.tick(&mut world, &still(), DT);
    assert_eq!(motor.current_state(), LocomotionState::InAir);
    assert!(feet(&motor) > -2.0 + 0.1, "snapped to {}", feet(&motor));

    let ticks = tick_until(&mut motor, &mut world, &still(), LocomotionState::Grounded, 50);
    assert!(ticks.is_some());
    assert!((feet(&motor) + 2.0).abs() < 0.001);
}

#[test]
fn test_slide_into_ridable_wall_ends_in_wall_ride() {
    // Floor ends at x = -1, a gap, then a ride-able wall face at x = 1
    let mut world = BoxWorld::new();
    world.add(SolidBox::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(-1.0, 0.0, 10.0)));
    world.add(SolidBox::tagged(
        Vec3::new(1.0, -10.0, -10.0),
        Vec3::new(2.0, 20.0, 10.0),
        RUN_WALL,
    ));

    let mut motor = PlayerMotor::new(wall_config(), Vec3::new(-3.0, 1.0, 0.0), Quat::IDENTITY);
    let push_right = AxisInput::moving(Vec2::X);
    for _ in 0..100 {
        motor.tick(&mut world, &push_right, DT);
        if motor.position().x > -2.2 {
            break;
        }
    }

    motor.request_slide_begin();
    motor.tick(&mut world, &push_right, DT);
    assert_eq!(motor.current_state(), LocomotionState::Sliding);
    for _ in 0..100 {
        motor.tick(&mut world, &push_right, DT);
        if motor.collision_flags().sides {
            break;
        }
    }
    assert!(motor.collision_flags().sides, "never reached the wall");
    assert!(!motor.collision_flags().below);
    assert_eq!(motor.current_state(), LocomotionState::Sliding);

    motor.request_slide_end();
    motor.tick(&mut world, &push_right, DT);
    assert_eq!(motor.current_state(), LocomotionState::WallRide);
    assert!((motor.collider().height - 2.0).abs() < 0.0001);
}

// ============================================================================
// Host Control
// ============================================================================

#[test]
fn test_locked_player_does_not_move_or_fall() {
    let mut world = BoxWorld::new();
    let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::new(0.0, 10.0, 0.0), Quat::IDENTITY);
    motor.set_lock_player(true);

    for _ in 0..20 {
        motor.tick(&mut world, &AxisInput::moving(Vec2::Y), DT);
    }
    assert_eq!(motor.position(), Vec3::new(0.0, 10.0, 0.0));
    assert!(!motor.request_slide_begin());

    motor.set_lock_player(false);
    motor.tick(&mut world, &still(), DT);
    assert!(motor.position().y < 10.0);
}

#[test]
fn test_reset_while_sliding_ends_slide() {
    let mut world = floor_world();
    let mut motor = running_motor(&mut world);
    motor.request_slide_begin();
    motor.tick(&mut world, &still(), DT);
    motor.drain_events().for_each(drop);

    motor.reset_motor(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY, Quat::IDENTITY);

    assert_eq!(motor.current_state(), LocomotionState::Grounded);
    assert!((motor.collider().height - 2.0).abs() < 0.0001);
    assert_eq!(motor.velocity(), Vec3::ZERO);
    assert_eq!(motor.current_speed(), 0.0);
    assert_eq!(motor.drain_events().collect::<Vec<_>>(), vec![MotorEvent::SlideEnded]);
}

#[test]
fn test_requests_apply_in_arrival_order() {
    let mut world = floor_world();
    let mut motor = running_motor(&mut world);
    motor.drain_events().for_each(drop);

    // Slide, then jump out of it, all within one tick
    motor.request_slide_begin();
    motor.request_jump();
    motor.tick(&mut world, &still(), DT);

    assert_eq!(motor.current_state(), LocomotionState::InAir);
    assert!((motor.collider().height - 2.0).abs() < 0.0001);
    assert_eq!(
        motor.drain_events().collect::<Vec<_>>(),
        vec![MotorEvent::SlideBegan, MotorEvent::SlideEnded, MotorEvent::JumpPressed]
    );
}
