
use thiserror::Error;

pub mod block;

pub mod io;
pub mod gnss;

pub mod utils;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum DigSigProcErr {
	#[error("invalid telemetry data: {0}")]
	InvalidTelemetryData(&'static str),
}
