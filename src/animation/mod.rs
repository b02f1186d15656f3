pub mod ease;
pub mod ramp;
