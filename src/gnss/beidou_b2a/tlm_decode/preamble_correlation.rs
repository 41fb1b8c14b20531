
use super::symbol_history::SymbolHistory;

/// Preamble bits expanded to one +1/-1 entry per channel symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreambleTemplate {
	symbols: Vec<i32>,
}

impl PreambleTemplate {

	pub fn new(bits:&[bool], symbols_per_bit:usize) -> Self {
		let symbols = bits.iter()
			.flat_map(|b| std::iter::repeat(if *b { 1 } else { -1 }).take(symbols_per_bit))
			.collect();
		Self{ symbols }
	}

	pub fn len(&self) -> usize { self.symbols.len() }
	pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

	pub fn symbols(&self) -> &[i32] { &self.symbols }

	/// True for a match at full strength with either polarity
	pub fn is_full_match(&self, corr_value:i32) -> bool {
		corr_value.unsigned_abs() as usize >= self.symbols.len()
	}

}

/// Correlates the oldest symbols in the window against the preamble.
///
/// Only evaluated once the window holds more than `required_symbols`; returns 0 otherwise.
/// A negative prompt subtracts the template value and anything else adds it, so inverting the
/// sign of every symbol inverts the sign of the result without changing its magnitude.
pub fn correlate(history:&SymbolHistory, preamble:&PreambleTemplate, required_symbols:usize) -> i32 {
	if history.len() <= required_symbols { return 0; }

	preamble.symbols().iter().enumerate().fold(0i32, |corr_value, (i, expected)| {
		// Symbols clipping
		if history.at(i).prompt_i() < 0.0 { corr_value - expected } else { corr_value + expected }
	})
}

#[cfg(test)]
mod tests {

	use num_complex::Complex;

	use super::*;
	use crate::gnss::beidou_b2a::BEIDOU_CNAV2_PREAMBLE;
	use crate::gnss::satellite::GnssSystem;
	use crate::gnss::synchro::GnssSynchro;

	fn history_from(prompts:&[f64]) -> SymbolHistory {
		let mut history = SymbolHistory::default();
		for (idx, p) in prompts.iter().enumerate() {
			history.push(GnssSynchro::new(GnssSystem::Beidou, 19, Complex{ re: *p, im: 0.0 }, idx as u64));
		}
		history
	}

	fn preamble_prompts(sign:f64) -> Vec<f64> {
		BEIDOU_CNAV2_PREAMBLE.iter().map(|b| if *b { sign } else { -sign }).collect()
	}

	#[test]
	fn template_expansion() {
		let template = PreambleTemplate::new(&[true, false, true], 2);
		assert_eq!(template.symbols(), &[1, 1, -1, -1, 1, 1]);
		assert_eq!(template.len(), 6);
	}

	#[test]
	fn full_match_both_polarities() {
		let template = PreambleTemplate::new(&BEIDOU_CNAV2_PREAMBLE, 1);

		let mut prompts = preamble_prompts(0.8);
		prompts.extend(vec![0.5; 10]);
		assert_eq!(correlate(&history_from(&prompts), &template, 30), 24);

		let inverted:Vec<f64> = prompts.iter().map(|p| -p).collect();
		assert_eq!(correlate(&history_from(&inverted), &template, 30), -24);

		assert!(template.is_full_match(24));
		assert!(template.is_full_match(-24));
		assert!(!template.is_full_match(22));
	}

	#[test]
	fn not_evaluated_until_window_is_full() {
		let template = PreambleTemplate::new(&BEIDOU_CNAV2_PREAMBLE, 1);
		let mut prompts = preamble_prompts(1.0);
		prompts.extend(vec![1.0; 6]);

		assert_eq!(correlate(&history_from(&prompts), &template, 30), 0);
		prompts.push(1.0);
		assert_eq!(correlate(&history_from(&prompts), &template, 30), 24);
	}

	#[test]
	fn magnitude_invariant_to_polarity() {
		let template = PreambleTemplate::new(&BEIDOU_CNAV2_PREAMBLE, 1);

		// Zero amplitude counts as positive, so keep it out of the stream
		let prompts:Vec<f64> = (0..200).map(|i| if (i * 37 + i / 3) % 7 < 3 { 0.3 + i as f64 } else { -0.7 - i as f64 }).collect();
		for end in 40..prompts.len() {
			let window = &prompts[(end - 40)..end];
			let inverted:Vec<f64> = window.iter().map(|p| -p).collect();
			let a = correlate(&history_from(window), &template, 30);
			let b = correlate(&history_from(&inverted), &template, 30);
			assert_eq!(a.abs(), b.abs());
			assert_eq!(a, -b);
		}
	}

	#[test]
	fn single_symbol_error_is_not_full_strength() {
		let template = PreambleTemplate::new(&BEIDOU_CNAV2_PREAMBLE, 1);
		let mut prompts = preamble_prompts(1.0);
		prompts[5] = -prompts[5];
		prompts.extend(vec![1.0; 10]);

		let corr_value = correlate(&history_from(&prompts), &template, 30);
		assert_eq!(corr_value, 22);
		assert!(!template.is_full_match(corr_value));
	}

}
