
use tracing::{debug, info};

use crate::gnss::satellite::Satellite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
	NoLock,
	PreSync,
	Locked,
}

/// Frame synchronization with hysteresis.
///
/// A first full-strength preamble only moves to `PreSync`; lock requires a second one exactly
/// one frame later. Once locked, a string is handed to the decoder every frame period and the
/// CRC outcome is reported back through `report_decode`.
#[derive(Debug)]
pub struct FrameSync {
	state: SyncState,
	preamble_index: u64,
	preamble_time_samples: u64,
	crc_error_counter: u32,
	flag_frame_sync: bool,
	frame_symbols: usize,
	crc_error_limit: u32,
}

impl FrameSync {

	pub fn new(frame_symbols:usize, crc_error_limit:u32) -> Self {
		Self{ state: SyncState::NoLock, preamble_index: 0, preamble_time_samples: 0, crc_error_counter: 0, flag_frame_sync: false,
			frame_symbols, crc_error_limit }
	}

	pub fn state(&self) -> SyncState { self.state }
	pub fn preamble_index(&self) -> u64 { self.preamble_index }
	pub fn preamble_time_samples(&self) -> u64 { self.preamble_time_samples }
	pub fn crc_error_counter(&self) -> u32 { self.crc_error_counter }
	pub fn frame_sync_asserted(&self) -> bool { self.flag_frame_sync }

	/// Advances the state machine with the preamble match (either polarity) found for `sample_counter`.
	///
	/// `oldest_sample_stamp` is the tracking sample counter of the oldest symbol in the window,
	/// i.e. the first symbol of the candidate preamble. Returns true when a full string is
	/// buffered and must be decoded now.
	pub fn advance(&mut self, full_match:bool, sample_counter:u64, oldest_sample_stamp:u64, satellite:&Satellite) -> bool {
		match self.state {
			SyncState::NoLock => {
				if full_match {
					self.preamble_index = sample_counter;
					info!("Preamble detection for {}", satellite);
					self.state = SyncState::PreSync;
					self.preamble_time_samples = oldest_sample_stamp;
				}
				false
			},
			SyncState::PreSync => {
				if full_match {
					let preamble_diff = sample_counter - self.preamble_index;
					self.preamble_time_samples = oldest_sample_stamp;
					if preamble_diff == self.frame_symbols as u64 {
						info!("Starting string decoder for {}", satellite);
						self.preamble_index = sample_counter;
						self.state = SyncState::Locked;
					} else {
						if preamble_diff > self.frame_symbols as u64 {
							// Missed the expected preamble, start over
							self.state = SyncState::NoLock;
						}
						debug!(preamble_diff, "Failed string decoder for {}", satellite);
					}
				}
				false
			},
			// Exact equality: a symbol dropped upstream means this never fires again for the current lock
			SyncState::Locked => sample_counter == self.preamble_index + self.frame_symbols as u64,
		}
	}

	/// Reports the integrity check of the string decoded at `sample_counter`.
	/// Returns true when the preamble of this string is confirmed.
	pub fn report_decode(&mut self, crc_ok:bool, sample_counter:u64, oldest_sample_stamp:u64, satellite:&Satellite) -> bool {
		self.preamble_index = sample_counter;

		if crc_ok {
			self.crc_error_counter = 0;
			if !self.flag_frame_sync {
				self.flag_frame_sync = true;
				debug!("Frame sync {} with preamble start at {} [samples]", satellite, oldest_sample_stamp);
			}
			true
		} else {
			self.crc_error_counter += 1;
			if self.crc_error_counter > self.crc_error_limit {
				info!("Loss of frame sync {}", satellite);
				self.flag_frame_sync = false;
				self.crc_error_counter = 0;
				self.state = SyncState::NoLock;
			}
			false
		}
	}

}
