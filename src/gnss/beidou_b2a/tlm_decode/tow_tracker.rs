
use crate::gnss::beidou_b2a::navigation::NavigationContext;

/// Time of week at the current symbol.
///
/// Re-anchored to the navigation message when a validated string carries a fresh time of week,
/// otherwise advanced by one symbol period per call.
#[derive(Debug, Clone)]
pub struct TowTracker {
	tow_at_current_symbol_s: f64,
	delta_t_s: f64,
	increment_s: f64,
	preamble_duration_s: f64,
}

impl TowTracker {

	pub fn new(increment_s:f64, preamble_duration_s:f64) -> Self {
		Self{ tow_at_current_symbol_s: 0.0, delta_t_s: 0.0, increment_s, preamble_duration_s }
	}

	/// Uncorrected time of week [sec]
	pub fn tow_at_current_symbol_s(&self) -> f64 { self.tow_at_current_symbol_s }

	/// Time of week with the time scale correction removed [sec]
	pub fn corrected_tow_s(&self) -> f64 { self.tow_at_current_symbol_s - self.delta_t_s }

	pub fn delta_t_s(&self) -> f64 { self.delta_t_s }
	pub fn set_delta_t_s(&mut self, delta_t_s:f64) { self.delta_t_s = delta_t_s; }

	/// Runs once per symbol. `flag_preamble` is true only for the symbol on which a string was validated.
	pub fn update<N: NavigationContext + ?Sized>(&mut self, flag_preamble:bool, nav:&mut N) -> f64 {
		let fresh_sow:Option<f64> = if flag_preamble { nav.take_fresh_time_of_week() } else { None };

		match fresh_sow {
			// Update TOW at the preamble instant, truncated to the millisecond
			Some(sow) => self.tow_at_current_symbol_s = ((sow - self.preamble_duration_s) * 1000.0).floor() / 1000.0,
			None => self.tow_at_current_symbol_s += self.increment_s,
		}

		self.corrected_tow_s()
	}

}
