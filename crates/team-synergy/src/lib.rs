pub mod config;
pub mod error;
pub mod synergy;
pub mod telemetry;
