pub mod statistics;
pub mod telemetry;
