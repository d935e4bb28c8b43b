pub mod error;
pub mod launcher;
pub mod staging;
pub mod telemetry;
