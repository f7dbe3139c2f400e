//! Default snowflake shape

pub const NUM_ARMS: u32 = 6;
pub const ARM_LENGTH: f64 = 100.0;
pub const ARM_THICKNESS: f64 = 3.0;
pub const NUM_SPIKES: u32 = 4;
pub const SPACER: f64 = 0.5;

/// Half-angle between a spike and the arm's axis, in degrees
pub const SPIKE_ANGLE_DEG: f64 = 30.0;
