//! Step-response accuracy on the reference demonstration.
//!
//! Controller `wc=30, b0=1, w0=120, h=0.005, r=100`; plant `mass=0.1,
//! damping=0.1, limit=1000`; target step 500 from rest, 1000 ticks. The plant
//! gain (1/mass = 10) is ten times `b0`; the observer has to absorb it.

use ladrc_sim::config::SimConfig;
use ladrc_sim::scenario::{Sample, ScenarioRunner};

fn run(config: &SimConfig) -> (Vec<Sample>, ladrc_sim::scenario::Summary) {
    let mut runner = ScenarioRunner::new(config).unwrap();
    runner.run_collect().unwrap()
}

fn mean_abs_error(samples: &[Sample]) -> f64 {
    samples.iter().map(|s| s.error.abs()).sum::<f64>() / samples.len() as f64
}

#[test]
fn reference_step_converges() {
    let config = SimConfig::default();
    let (samples, summary) = run(&config);

    assert_eq!(samples.len(), 1000);
    let settle = summary.settle_tick.expect("never settled within 5");
    assert!(settle < 800, "settled too late: tick {settle}");
    assert!(summary.final_error.abs() < 5.0, "final error {}", summary.final_error);
    // No overshoot beyond the initial error, no divergence.
    assert!(summary.max_abs_error <= 500.0, "max error {}", summary.max_abs_error);
    assert!(samples[900..].iter().all(|s| s.error.abs() < 5.0));
}

#[test]
fn error_decreases_on_average() {
    let (samples, _) = run(&SimConfig::default());
    let early = mean_abs_error(&samples[..200]);
    let middle = mean_abs_error(&samples[400..600]);
    let late = mean_abs_error(&samples[800..]);
    assert!(early > middle && middle > late, "{early} {middle} {late}");
    assert!(late < 5.0);
}

#[test]
fn converges_without_command_saturation() {
    let mut config = SimConfig::default();
    config.controller.out_max = 0.0;
    let (samples, summary) = run(&config);

    let settle = summary.settle_tick.expect("never settled within 5");
    assert!(settle < 800, "settled too late: tick {settle}");
    assert!(samples.iter().all(|s| s.command.is_finite()));
}

#[test]
fn identical_runs_are_identical() {
    let config = SimConfig::default();
    let (a, sa) = run(&config);
    let (b, sb) = run(&config);
    assert_eq!(a, b);
    assert_eq!(sa, sb);
}

#[test]
fn independent_instances_do_not_interact() {
    let config = SimConfig::default();
    let mut solo = ScenarioRunner::new(&config).unwrap();
    let mut first = ScenarioRunner::new(&config).unwrap();
    let mut second = ScenarioRunner::new(&config).unwrap();

    for _ in 0..300 {
        let s = solo.step().unwrap();
        let a = first.step().unwrap();
        let b = second.step().unwrap();
        assert_eq!(s, a);
        assert_eq!(s, b);
    }
}
