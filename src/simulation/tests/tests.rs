use super::*;
use crate::domain::BridgeError;
use crate::systems::physics_world::live_worlds;

fn step_n(sim: &mut SimulationCore, n: usize) {
    for _ in 0..n {
        sim.step();
    }
}

#[test]
fn new_simulation_has_default_gravity_and_is_empty() {
    let sim = SimulationCore::new().unwrap();
    assert_eq!(sim.gravity(), (0.0, 50.0));
    assert_eq!(sim.body_count(), 0);
    assert_eq!(sim.wall_count(), 0);
    assert_eq!(sim.frame(), 0);
}

#[test]
fn create_then_destroy_releases_the_world() {
    let before = live_worlds::count();

    let mut sim = Simulation::new().unwrap_or_else(|_| panic!("simulation should construct"));
    sim.add_wall(0, 0.0, 0.0, 10.0, 0.0);
    sim.add_circle(0, 5.0, -5.0, 1.0);
    assert_eq!(live_worlds::count(), before + 1);

    sim.destroy();
    assert_eq!(live_worlds::count(), before);

    destroy_simulation(None);
    assert_eq!(live_worlds::count(), before);
}

#[test]
fn dropping_a_core_releases_the_world() {
    let before = live_worlds::count();
    {
        let mut sim = SimulationCore::new().unwrap();
        sim.add_circle(0, 0.0, 0.0, 1.0);
        sim.step();
        assert_eq!(live_worlds::count(), before + 1);
    }
    assert_eq!(live_worlds::count(), before);
}

#[test]
fn circle_reports_spawn_location_before_first_step() {
    let mut sim = SimulationCore::new().unwrap();
    let body = sim.add_circle(0, 10.0, 20.0, 5.0);

    assert_ne!(body, 0);
    let loc = sim.location(body).unwrap();
    assert_eq!(loc, Location { x: 10.0, y: 20.0, angular_velocity: 0.0 });
}

#[test]
fn circle_gets_solid_disc_mass_properties() {
    let mut sim = SimulationCore::new().unwrap();
    let body = sim.add_circle(0, 0.0, 0.0, 4.0);

    // Mass properties are folded in by the first step.
    sim.step();

    let rb = sim.physics.body(body).unwrap();
    assert!((rb.mass() - 1.0).abs() < 1e-6);
    // I = m r^2 / 2
    let inertia = rb.mass_properties().local_mprops.principal_inertia();
    assert!((inertia - 8.0).abs() < 1e-4, "inertia = {inertia}");
}

#[test]
fn falling_circle_moves_down_every_frame() {
    let mut sim = SimulationCore::new().unwrap();
    let body = sim.add_circle(0, 50.0, 0.0, 3.0);

    let mut last_y = sim.location(body).unwrap().y;
    for _ in 0..60 {
        sim.step();
        let y = sim.location(body).unwrap().y;
        assert!(y > last_y, "y should keep increasing: {y} <= {last_y}");
        last_y = y;
    }
    assert_eq!(sim.frame(), 60);
}

#[test]
fn gravity_change_applies_on_next_step() {
    let mut sim = SimulationCore::new().unwrap();
    sim.set_gravity(3.0, -1.0);
    assert_eq!(sim.gravity(), (3.0, -1.0));

    let body = sim.add_circle(0, 0.0, 0.0, 1.0);
    sim.step();

    let v = sim.velocity(body).unwrap();
    let dt = 1.0 / 60.0;
    assert!((v.y - (-1.0 * dt)).abs() < 1e-4, "vy = {}", v.y);
    assert!((v.x - 3.0 * dt).abs() < 1e-4, "vx = {}", v.x);
    assert!(sim.location(body).unwrap().y < 0.0);
}

#[test]
fn circle_settles_on_wall_without_bouncing() {
    let mut sim = SimulationCore::new().unwrap();
    sim.add_wall(1, 0.0, 0.0, 100.0, 0.0);
    assert_eq!(sim.wall_count(), 1);

    // Resting contact is at y = -(wall thickness + radius) = -6.5
    let body = sim.add_circle(2, 50.0, -7.0, 5.0);

    step_n(&mut sim, 120);
    let settled = sim.location(body).unwrap();
    assert!((settled.y - -6.5).abs() < 0.1, "settled at y = {}", settled.y);

    for _ in 0..120 {
        sim.step();
        let loc = sim.location(body).unwrap();
        assert!((loc.y - settled.y).abs() < 0.05, "body moved to y = {}", loc.y);
        assert!((loc.x - 50.0).abs() < 0.05);
        assert!(loc.angular_velocity.abs() < 1e-3);
    }
}

#[test]
fn locations_of_two_bodies_are_independent_values() {
    let mut sim = SimulationCore::new().unwrap();
    let a = sim.add_circle(0, 1.0, 2.0, 1.0);
    let b = sim.add_circle(0, 30.0, 40.0, 1.0);

    let first = sim.location(a).unwrap();
    let second = sim.location(b).unwrap();

    assert_eq!((first.x, first.y), (1.0, 2.0));
    assert_eq!((second.x, second.y), (30.0, 40.0));
}

#[test]
fn location_into_fills_caller_buffer() {
    let mut sim = SimulationCore::new().unwrap();
    let body = sim.add_circle(0, 4.0, 5.0, 1.0);

    let mut out = [9.0f32; 4];
    assert!(sim.location_into(body, &mut out).unwrap());
    assert_eq!(out, [4.0, 5.0, 0.0, 9.0]);

    let mut short = [0.0f32; 2];
    assert!(!sim.location_into(body, &mut short).unwrap());
    assert_eq!(short, [0.0, 0.0]);
}

#[test]
fn unknown_handles_are_rejected() {
    let mut sim = SimulationCore::new().unwrap();
    let body = sim.add_circle(0, 0.0, 0.0, 1.0);

    assert!(matches!(sim.location(0), Err(BridgeError::UnknownBody { id: 0 })));
    assert!(matches!(sim.location(body + 1), Err(BridgeError::UnknownBody { .. })));
    assert!(matches!(sim.velocity(42), Err(BridgeError::UnknownBody { id: 42 })));
}

#[test]
fn handles_are_sequential_and_ids_are_not_keys() {
    let mut sim = SimulationCore::new().unwrap();
    let a = sim.add_circle(7, 0.0, 0.0, 1.0);
    let b = sim.add_circle(7, 10.0, 0.0, 1.0);

    assert_eq!((a, b), (1, 2));
    assert_eq!(sim.body_count(), 2);
}

#[test]
fn degenerate_inputs_pass_through() {
    let mut sim = SimulationCore::new().unwrap();
    sim.add_wall(0, 5.0, 5.0, 5.0, 5.0);
    let body = sim.add_circle(0, 0.0, 0.0, 0.0);
    sim.step();

    assert_eq!(sim.wall_count(), 1);
    assert!(sim.location(body).is_ok());
}

#[test]
fn sleeping_bodies_wake_when_gravity_flips() {
    let config = SimulationConfig { allow_sleep: true, ..Default::default() };
    let mut sim = SimulationCore::with_config(config).unwrap();
    sim.add_wall(0, 0.0, 0.0, 100.0, 0.0);
    let body = sim.add_circle(0, 50.0, -7.0, 5.0);

    step_n(&mut sim, 400);
    let resting = sim.location(body).unwrap().y;

    sim.set_gravity(0.0, -50.0);
    step_n(&mut sim, 20);
    assert!(sim.location(body).unwrap().y < resting - 1.0);
}

#[test]
fn config_json_overrides_gravity() {
    let sim = SimulationCore::with_config_json(r#"{ "gravity_x": 1.0, "gravity_y": 2.0 }"#).unwrap();
    assert_eq!(sim.gravity(), (1.0, 2.0));
    assert_eq!(sim.config().wall_thickness, 1.5);
}

#[test]
fn invalid_config_fails_construction() {
    let config = SimulationConfig { circle_mass: 0.0, ..Default::default() };
    assert!(matches!(
        SimulationCore::with_config(config),
        Err(BridgeError::InvalidConfig { .. })
    ));
}

#[test]
fn perf_stats_track_last_step_only_when_enabled() {
    let mut sim = SimulationCore::new().unwrap();
    sim.add_circle(0, 0.0, 0.0, 1.0);
    sim.step();
    assert_eq!(sim.get_perf_stats().frame(), 0);

    sim.enable_perf_metrics(true);
    sim.step();
    let stats = sim.get_perf_stats();
    assert_eq!(stats.frame(), 2);
    assert_eq!(stats.body_count(), 1);
    assert!(stats.step_ms() >= 0.0);

    sim.enable_perf_metrics(false);
    assert_eq!(sim.get_perf_stats().body_count(), 0);
}
