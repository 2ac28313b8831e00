//! Motor Sandbox - headless scripted run
//!
//! Run with: `cargo run --bin motor_sandbox [path/to/motor.json]`
//!
//! Builds a small course out of boxes (floor, a step down, a ride-able wall)
//! and drives the motor through it with a fixed script: run, slide, jump onto
//! the wall, ride it, jump off. Every state change and a periodic summary are
//! logged; set `RUST_LOG=debug` to also see every transition inside the motor.

use glam::{Quat, Vec2, Vec3};

use hr_runner_engine::config::{ConfigError, MotorConfig};
use hr_runner_engine::input::{ActionMap, KeyCode};
use hr_runner_engine::physics::{BoxWorld, SolidBox};
use hr_runner_engine::player::PlayerMotor;

/// Fixed tick rate of the simulation
const TICK_RATE: f32 = 50.0;

/// Length of the scripted run in ticks
const TOTAL_TICKS: u32 = 400;

/// Surface tag of the ride-able wall
const RUN_WALL_TAG: &str = "RunWall";

/// A key event fired at a given tick.
struct ScriptStep {
    tick: u32,
    key: KeyCode,
    pressed: bool,
}

const SCRIPT: &[ScriptStep] = &[
    ScriptStep { tick: 5, key: KeyCode::W, pressed: true },
    ScriptStep { tick: 60, key: KeyCode::ControlLeft, pressed: true },
    ScriptStep { tick: 90, key: KeyCode::ControlLeft, pressed: false },
    ScriptStep { tick: 140, key: KeyCode::D, pressed: true },
    ScriptStep { tick: 142, key: KeyCode::Space, pressed: true },
    ScriptStep { tick: 143, key: KeyCode::Space, pressed: false },
    ScriptStep { tick: 200, key: KeyCode::D, pressed: false },
    ScriptStep { tick: 200, key: KeyCode::Space, pressed: true },
    ScriptStep { tick: 201, key: KeyCode::Space, pressed: false },
    ScriptStep { tick: 300, key: KeyCode::W, pressed: false },
];

fn build_course() -> BoxWorld {
    let mut world = BoxWorld::new();

    // Upper floor, then a 0.3m step down onto the lower floor
    world.add(SolidBox::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 20.0)));
    world.add(SolidBox::new(Vec3::new(-10.0, -1.3, 20.0), Vec3::new(10.0, -0.3, 120.0)));

    // Ride-able wall on the right side of the lower floor
    world.add(SolidBox::tagged(
        Vec3::new(2.0, -0.3, 30.0),
        Vec3::new(3.0, 6.0, 90.0),
        RUN_WALL_TAG,
    ));

    world
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => MotorConfig::load(path)?,
        None => MotorConfig::default(),
    };
    config.wall_ridable_tag = RUN_WALL_TAG.to_string();
    config.validate()?;

    let mut world = build_course();
    log::info!("Course built with {} boxes", world.len());

    let spawn = Vec3::new(0.0, config.body.height * 0.5, 0.0);
    let mut motor = PlayerMotor::new(config, spawn, Quat::IDENTITY);
    let mut actions = ActionMap::new();
    let dt = 1.0 / TICK_RATE;

    let mut last_state = motor.current_state();
    for tick in 0..TOTAL_TICKS {
        for step in SCRIPT.iter().filter(|step| step.tick == tick) {
            actions.handle_key(step.key, step.pressed);
        }
        for event in actions.drain_events() {
            motor.handle_action(event.action, event.phase);
        }

        // Turn slightly right while pushing toward the wall
        if (140..160).contains(&tick) {
            actions.add_look_delta(Vec2::new(0.5, 0.0));
        }

        motor.tick(&mut world, &actions, dt);
        actions.end_tick();

        for event in motor.drain_events() {
            log::info!("[tick {:>3}] {:?}", tick, event);
        }
        if motor.current_state() != last_state {
            log::info!(
                "[tick {:>3}] {:?} -> {:?} at {:.2?}",
                tick,
                last_state,
                motor.current_state(),
                motor.position()
            );
            last_state = motor.current_state();
        }
        if tick % 25 == 0 {
            let gizmo = motor.debug_gizmo();
            log::info!(
                "[tick {:>3}] {:?} speed {:.2} m/s, pos {:.2?}, snap ray to y={:.2}",
                tick,
                motor.current_state(),
                motor.current_speed(),
                motor.position(),
                gizmo.snap_ray_end.y
            );
        }
    }

    motor.reset_motor(spawn, Quat::IDENTITY, Quat::IDENTITY);
    log::info!(
        "Run finished, motor reset to {:?} in state {:?}",
        motor.position(),
        motor.current_state()
    );
    Ok(())
}
