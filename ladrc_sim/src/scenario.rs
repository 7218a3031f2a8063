//! Closed-loop scenario runner.
//!
//! Wires `Ladrc::update` and `PointMassPlant` together at the controller's
//! sample period:
//!
//! ```text
//! u      = ladrc.update(target, y[k])
//! y[k+1] = plant.update(u, h)          (plant clamps u to ±limit)
//! ```
//!
//! The measured output fed to the controller is the plant position from the
//! previous tick (zero before the first tick).

use ladrc_control::Ladrc;
use serde::Serialize;
use tracing::{info, trace};

use crate::config::{ScenarioConfig, SimConfig};
use crate::error::SimError;
use crate::physics::PointMassPlant;

/// One tick of the closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub tick: usize,
    /// Time at the end of the tick [s].
    pub time: f64,
    pub target: f64,
    /// Plant position after this tick.
    pub actual: f64,
    /// Controller command `u`.
    pub command: f64,
    /// Actuator input after plant saturation.
    pub applied: f64,
    /// External force acting during this tick.
    pub disturbance: f64,
    /// Observer's total-disturbance estimate `x3`.
    pub disturbance_estimate: f64,
    /// `target - actual`.
    pub error: f64,
}

/// Aggregate statistics over a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub ticks: usize,
    pub final_error: f64,
    pub max_abs_error: f64,
    pub mean_abs_error: f64,
    pub max_abs_command: f64,
    pub max_abs_applied: f64,
    /// First tick from which `|error| < settle_tolerance` held to the end.
    /// `None` if the last tick was still outside the band.
    pub settle_tick: Option<usize>,
}

#[derive(Debug, Default)]
struct SummaryAccumulator {
    ticks: usize,
    final_error: f64,
    max_abs_error: f64,
    sum_abs_error: f64,
    max_abs_command: f64,
    max_abs_applied: f64,
    last_outside: Option<usize>,
}

impl SummaryAccumulator {
    fn push(&mut self, sample: &Sample, tolerance: f64) {
        let abs_error = sample.error.abs();
        self.ticks += 1;
        self.final_error = sample.error;
        self.max_abs_error = self.max_abs_error.max(abs_error);
        self.sum_abs_error += abs_error;
        self.max_abs_command = self.max_abs_command.max(sample.command.abs());
        self.max_abs_applied = self.max_abs_applied.max(sample.applied.abs());
        if abs_error >= tolerance {
            self.last_outside = Some(sample.tick);
        }
    }

    fn finish(&self, last_tick: Option<usize>) -> Summary {
        let settle_tick = match (self.last_outside, last_tick) {
            (None, Some(_)) => Some(0),
            (Some(outside), Some(last)) if outside < last => Some(outside + 1),
            _ => None,
        };
        Summary {
            ticks: self.ticks,
            final_error: self.final_error,
            max_abs_error: self.max_abs_error,
            mean_abs_error: if self.ticks > 0 {
                self.sum_abs_error / self.ticks as f64
            } else {
                0.0
            },
            max_abs_command: self.max_abs_command,
            max_abs_applied: self.max_abs_applied,
            settle_tick,
        }
    }
}

/// Controller + plant + scenario, stepped one tick at a time.
#[derive(Debug)]
pub struct ScenarioRunner {
    controller: Ladrc,
    plant: PointMassPlant,
    scenario: ScenarioConfig,
    tick: usize,
    measured: f64,
}

impl ScenarioRunner {
    /// Build controller and plant from a validated config.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        let controller = Ladrc::new(config.controller)?;
        let plant = PointMassPlant::new(config.plant)?;
        Ok(Self {
            measured: plant.position(),
            controller,
            plant,
            scenario: config.scenario,
            tick: 0,
        })
    }

    /// Run one control tick.
    pub fn step(&mut self) -> Result<Sample, SimError> {
        let h = self.controller.params().h;
        let target = self.scenario.target;
        let disturbance = if self.tick >= self.scenario.disturbance_start {
            self.scenario.disturbance
        } else {
            0.0
        };

        let command = self.controller.update(target, self.measured)?;
        let actual = self
            .plant
            .update_with_disturbance(command, disturbance, h)?;
        self.measured = actual;

        let sample = Sample {
            tick: self.tick,
            time: (self.tick + 1) as f64 * h,
            target,
            actual,
            command,
            applied: self.plant.last_applied(),
            disturbance,
            disturbance_estimate: self.controller.state().x3,
            error: target - actual,
        };
        self.tick += 1;

        trace!(
            tick = sample.tick,
            actual = sample.actual,
            command = sample.command,
            error = sample.error,
            "tick"
        );
        Ok(sample)
    }

    /// Run the configured number of ticks, handing each sample to `on_sample`.
    pub fn run<F>(&mut self, mut on_sample: F) -> Result<Summary, SimError>
    where
        F: FnMut(&Sample),
    {
        info!(
            ticks = self.scenario.ticks,
            target = self.scenario.target,
            disturbance = self.scenario.disturbance,
            "scenario start"
        );

        let mut acc = SummaryAccumulator::default();
        let mut last_tick = None;
        for _ in 0..self.scenario.ticks {
            let sample = self.step()?;
            acc.push(&sample, self.scenario.settle_tolerance);
            last_tick = Some(sample.tick);
            on_sample(&sample);
        }

        let summary = acc.finish(last_tick);
        info!(
            final_error = summary.final_error,
            max_abs_error = summary.max_abs_error,
            settle_tick = ?summary.settle_tick,
            "scenario complete"
        );
        Ok(summary)
    }

    /// Run and keep every sample.
    pub fn run_collect(&mut self) -> Result<(Vec<Sample>, Summary), SimError> {
        let mut samples = Vec::with_capacity(self.scenario.ticks);
        let summary = self.run(|s| samples.push(*s))?;
        Ok((samples, summary))
    }

    pub fn controller(&self) -> &Ladrc {
        &self.controller
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
