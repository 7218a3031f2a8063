mod config_file;
mod control_accuracy;
mod disturbance_rejection;
mod saturation;
