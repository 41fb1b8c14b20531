
use std::collections::VecDeque;

use crate::gnss::synchro::GnssSynchro;

/// Sliding window over the most recent tracking outputs, oldest first
#[derive(Debug, Default)]
pub struct SymbolHistory {
	buffer: VecDeque<GnssSynchro>,
}

impl SymbolHistory {

	pub fn with_capacity(capacity:usize) -> Self {
		Self{ buffer: VecDeque::with_capacity(capacity + 1) }
	}

	pub fn push(&mut self, symbol:GnssSynchro) { self.buffer.push_back(symbol); }

	pub fn evict_if_over(&mut self, capacity:usize) {
		while self.buffer.len() > capacity { self.buffer.pop_front(); }
	}

	/// Random access from the oldest symbol. Indexing outside the window is a caller bug.
	pub fn at(&self, idx:usize) -> &GnssSynchro {
		debug_assert!(idx < self.buffer.len(), "symbol history index {} out of range (len {})", idx, self.buffer.len());
		&self.buffer[idx]
	}

	pub fn len(&self) -> usize { self.buffer.len() }
	pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

}

#[cfg(test)]
mod tests {

	use num_complex::Complex;

	use super::*;
	use crate::gnss::satellite::GnssSystem;

	fn symbol(idx:u64) -> GnssSynchro {
		GnssSynchro::new(GnssSystem::Beidou, 19, Complex{ re: idx as f64, im: 0.0 }, idx)
	}

	#[test]
	fn evicts_oldest_first() {
		let mut history = SymbolHistory::with_capacity(3);
		for idx in 0..5 {
			history.push(symbol(idx));
			history.evict_if_over(3);
			assert!(history.len() <= 3);
		}

		assert_eq!(history.len(), 3);
		assert_eq!(history.at(0).tracking_sample_counter, 2);
		assert_eq!(history.at(2).tracking_sample_counter, 4);
	}

	#[test]
	fn holds_one_extra_until_evicted() {
		let mut history = SymbolHistory::with_capacity(2);
		history.push(symbol(0));
		history.push(symbol(1));
		history.push(symbol(2));
		assert_eq!(history.len(), 3);

		history.evict_if_over(2);
		assert_eq!(history.at(0).tracking_sample_counter, 1);
	}

	#[test]
	#[should_panic]
	fn out_of_range_access() {
		let mut history = SymbolHistory::default();
		history.push(symbol(0));
		history.at(1);
	}

}
