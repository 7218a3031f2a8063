//! Actuator saturation: the plant never applies more than its limit.

use ladrc_common::prelude::PlantParameters;
use ladrc_sim::config::SimConfig;
use ladrc_sim::physics::PointMassPlant;
use ladrc_sim::scenario::ScenarioRunner;

#[test]
fn applied_input_bounded_while_command_exceeds_limit() {
    let mut config = SimConfig::default();
    // Leave the controller unclamped so its raw command overshoots the actuator.
    config.controller.out_max = 0.0;
    let limit = config.plant.limit;

    let mut runner = ScenarioRunner::new(&config).unwrap();
    let (samples, summary) = runner.run_collect().unwrap();

    assert!(summary.max_abs_command > limit, "command never saturated");
    assert!(summary.max_abs_applied <= limit);
    for s in &samples {
        assert!(s.applied.abs() <= limit, "tick {}: applied {}", s.tick, s.applied);
        assert_eq!(s.applied, s.command.clamp(-limit, limit));
    }
}

#[test]
fn controller_side_limit_bounds_command() {
    let config = SimConfig::default();
    let out_max = config.controller.out_max;
    let mut runner = ScenarioRunner::new(&config).unwrap();
    let (samples, _) = runner.run_collect().unwrap();
    assert!(samples.iter().all(|s| s.command.abs() <= out_max));
    assert!(samples.iter().any(|s| s.command.abs() == out_max));
}

#[test]
fn plant_clamps_arbitrary_commands() {
    let limit = 25.0;
    let mut plant = PointMassPlant::new(PlantParameters::new(0.5, 0.2, limit)).unwrap();
    let commands = [0.0, 24.9, 25.0, 25.1, -1e9, 1e300, -0.0, 7.5, -25.000001];
    for &u in commands.iter().cycle().take(90) {
        plant.update(u, 0.001).unwrap();
        assert!(plant.last_applied().abs() <= limit);
        assert_eq!(plant.last_applied(), u.clamp(-limit, limit));
    }
}
