
use num_complex::Complex;
use ::serde::{Serialize, Deserialize};

use crate::gnss::satellite::GnssSystem;

/// One tracking loop output per symbol, annotated by the telemetry decoder on its way to the observables
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GnssSynchro {
	pub system: GnssSystem,
	pub prn: u32,

	// Filled in by tracking
	pub prompt: Complex<f64>,
	pub tracking_sample_counter: u64,

	// Filled in by telemetry decoding
	pub flag_valid_word: bool,
	pub tow_at_current_symbol_s: f64,
}

impl GnssSynchro {

	pub fn new(system:GnssSystem, prn:u32, prompt:Complex<f64>, tracking_sample_counter:u64) -> Self {
		Self{ system, prn, prompt, tracking_sample_counter, flag_valid_word: false, tow_at_current_symbol_s: 0.0 }
	}

	pub fn prompt_i(&self) -> f64 { self.prompt.re }

}
