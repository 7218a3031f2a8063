//! The shipped config file reproduces the built-in reference scenario.

use std::path::PathBuf;

use ladrc_common::prelude::{LogLevel, TdMode};
use ladrc_sim::config::SimConfig;

fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("config")
        .join("ladrc_sim.toml")
}

#[test]
fn shipped_config_matches_defaults() {
    let loaded = SimConfig::load_validated(&shipped_config()).unwrap();
    let defaults = SimConfig::default();
    assert_eq!(loaded.controller, defaults.controller);
    assert_eq!(loaded.plant, defaults.plant);
    assert_eq!(loaded.scenario, defaults.scenario);
    assert_eq!(loaded.shared.service_name, "ladrc-sim");
    assert_eq!(loaded.shared.log_level, LogLevel::Info);
    assert_eq!(loaded.controller.td_mode, TdMode::Fhan);
}
