//! BeiDou B2a B-CNAV2 telemetry decoding.
//!
//! [`TelemetryDecoder`] takes one tracking output per call and returns exactly one annotated
//! copy of it. Internally it keeps one string worth of symbols, correlates the oldest of them
//! against the preamble, and runs the frame synchronization state machine:
//!
//! - `NoLock`: waiting for a full-strength preamble (either polarity)
//! - `PreSync`: a preamble was seen; a second one exactly one string later gives lock
//! - `Locked`: every string period the buffered string is handed to the navigation context
//!
//! Lock is lost after more than `crc_error_limit` consecutive strings fail their CRC. Output
//! symbols are marked valid only while frame sync is asserted and the navigation message has
//! provided time of week.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::block::{BlockFunctionality, BlockResult};
use crate::gnss::satellite::Satellite;
use crate::gnss::synchro::GnssSynchro;
use crate::gnss::beidou_b2a::navigation::{Cnav2Navigation, NavigationContext};
use crate::gnss::beidou_b2a::{BEIDOU_B2A_CODE_PERIOD_SEC, BEIDOU_CNAV2_CRC_ERROR_LIMIT, BEIDOU_CNAV2_PREAMBLE,
	BEIDOU_CNAV2_PREAMBLE_DURATION_SEC, BEIDOU_CNAV2_PREAMBLE_PERIOD_SYMBOLS, BEIDOU_CNAV2_STRING_SYMBOLS,
	BEIDOU_CNAV2_TELEMETRY_SYMBOLS_PER_PREAMBLE_BIT};

pub mod dump;
pub mod frame_sync;
pub mod preamble_correlation;
pub mod sink;
pub mod string_decode;
pub mod symbol_history;
pub mod tow_tracker;


pub use self::frame_sync::SyncState;
pub use self::sink::{NavigationData, TelemetryMessage, TelemetrySink};

use self::dump::DumpFile;
use self::frame_sync::FrameSync;
use self::preamble_correlation::PreambleTemplate;
use self::symbol_history::SymbolHistory;
use self::tow_tracker::TowTracker;

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
	/// Write one binary record per symbol to `telemetry<channel>.dat`
	pub dump: bool,
	pub dump_directory: PathBuf,
	/// Time of week increment per input symbol [sec]
	pub tow_increment_s: f64,
	pub crc_error_limit: u32,
}

impl Default for TelemetryConfig {
	fn default() -> Self {
		Self{ dump: false, dump_directory: PathBuf::from("."), tow_increment_s: BEIDOU_B2A_CODE_PERIOD_SEC,
			crc_error_limit: BEIDOU_CNAV2_CRC_ERROR_LIMIT }
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecoderControl {
	SetSatellite(Satellite),
	SetChannel(usize),
	SetDeltaT(f64),
}

pub struct TelemetryDecoder<N, S> {
	satellite: Satellite,
	channel: usize,
	config: TelemetryConfig,
	preamble: PreambleTemplate,
	history: SymbolHistory,
	sync: FrameSync,
	tow: TowTracker,
	nav: N,
	sink: S,
	sample_counter: u64,
	flag_preamble: bool,
	dump_file: Option<DumpFile>,
}

pub fn new_default_decoder<S: TelemetrySink>(satellite:Satellite, sink:S) -> TelemetryDecoder<Cnav2Navigation, S> {
	TelemetryDecoder::new(satellite, TelemetryConfig::default(), Cnav2Navigation::new(), sink)
}

impl<N: NavigationContext, S: TelemetrySink> TelemetryDecoder<N, S> {

	pub fn new(satellite:Satellite, config:TelemetryConfig, nav:N, sink:S) -> Self {
		info!("Initializing BeiDou B2a telemetry decoding for {}", satellite);

		let preamble = PreambleTemplate::new(&BEIDOU_CNAV2_PREAMBLE, BEIDOU_CNAV2_TELEMETRY_SYMBOLS_PER_PREAMBLE_BIT);
		assert!(preamble.len() <= BEIDOU_CNAV2_STRING_SYMBOLS);

		let sync = FrameSync::new(BEIDOU_CNAV2_PREAMBLE_PERIOD_SYMBOLS, config.crc_error_limit);
		let tow = TowTracker::new(config.tow_increment_s, BEIDOU_CNAV2_PREAMBLE_DURATION_SEC);

		Self{ satellite, channel: 0, config, preamble, history: SymbolHistory::with_capacity(BEIDOU_CNAV2_STRING_SYMBOLS),
			sync, tow, nav, sink, sample_counter: 0, flag_preamble: false, dump_file: None }
	}

	// Read-only getter methods
	pub fn satellite(&self) -> Satellite { self.satellite }
	pub fn channel(&self) -> usize { self.channel }
	pub fn sync_state(&self) -> SyncState { self.sync.state() }
	pub fn frame_sync_asserted(&self) -> bool { self.sync.frame_sync_asserted() }
	pub fn crc_error_counter(&self) -> u32 { self.sync.crc_error_counter() }
	pub fn preamble_time_samples(&self) -> u64 { self.sync.preamble_time_samples() }
	pub fn sample_counter(&self) -> u64 { self.sample_counter }
	pub fn history_len(&self) -> usize { self.history.len() }
	pub fn flag_preamble(&self) -> bool { self.flag_preamble }
	pub fn tow_at_current_symbol_s(&self) -> f64 { self.tow.corrected_tow_s() }
	pub fn navigation(&self) -> &N { &self.nav }
	pub fn sink(&self) -> &S { &self.sink }

	pub fn sink_mut(&mut self) -> &mut S { &mut self.sink }

	pub fn set_satellite(&mut self, satellite:Satellite) {
		self.satellite = Satellite::new(satellite.system, satellite.prn);
		debug!("Setting decoder Finite State Machine to satellite {}", self.satellite);
	}

	/// Also opens the dump file the first time it is called, if dumping is enabled
	pub fn set_channel(&mut self, channel:usize) {
		self.channel = channel;
		info!("Navigation channel set to {}", channel);

		if self.config.dump && self.dump_file.is_none() {
			let path = dump::dump_filename(&self.config.dump_directory, channel);
			match DumpFile::create(path) {
				Ok(dump_file) => {
					info!("Telemetry decoder dump enabled on channel {} Log file: {}", channel, dump_file.path().display());
					self.dump_file = Some(dump_file);
				},
				Err(e) => warn!("channel {}: exception opening BeiDou TLM dump file. {}", channel, e),
			}
		}
	}

	/// Time scale correction subtracted from the exposed time of week [sec]
	pub fn set_delta_t_s(&mut self, delta_t_s:f64) { self.tow.set_delta_t_s(delta_t_s); }

	pub fn apply(&mut self, input:&GnssSynchro) -> GnssSynchro {
		let mut current_symbol:GnssSynchro = *input;
		self.history.push(current_symbol);
		self.sample_counter += 1;
		self.flag_preamble = false;

		let corr_value = preamble_correlation::correlate(&self.history, &self.preamble, BEIDOU_CNAV2_STRING_SYMBOLS);
		let full_match = self.preamble.is_full_match(corr_value);

		// Frame sync
		let oldest_sample_stamp = self.history.at(0).tracking_sample_counter;
		if self.sync.advance(full_match, self.sample_counter, oldest_sample_stamp, &self.satellite) {
			let string_symbols = string_decode::extract_string_symbols(&self.history, self.preamble.len(), BEIDOU_CNAV2_STRING_SYMBOLS, corr_value);
			string_decode::decode_string(&mut self.nav, &mut self.sink, &mut self.satellite, self.channel, &string_symbols);
			self.flag_preamble = self.sync.report_decode(self.nav.crc_ok(), self.sample_counter, oldest_sample_stamp, &self.satellite);
		}

		// Telemetry decoder annotations
		let tow_at_current_symbol_s = self.tow.update(self.flag_preamble, &mut self.nav);

		current_symbol.flag_valid_word = self.sync.frame_sync_asserted() && self.nav.navigation_time_confirmed();
		current_symbol.system = self.satellite.system;
		current_symbol.prn = self.satellite.prn;
		current_symbol.tow_at_current_symbol_s = tow_at_current_symbol_s;

		if let Some(dump_file) = &mut self.dump_file {
			if let Err(e) = dump_file.write_record(self.tow.tow_at_current_symbol_s(), current_symbol.tracking_sample_counter) {
				warn!("Exception writing telemetry dump file {}", e);
			}
		}

		self.history.evict_if_over(BEIDOU_CNAV2_STRING_SYMBOLS);

		current_symbol
	}

}

impl<N, S> BlockFunctionality<DecoderControl, (), GnssSynchro, GnssSynchro> for TelemetryDecoder<N, S>
	where N: NavigationContext, S: TelemetrySink {

	fn control(&mut self, control:&DecoderControl) -> Result<(), &'static str> {
		match control {
			DecoderControl::SetSatellite(satellite) => self.set_satellite(*satellite),
			DecoderControl::SetChannel(channel)     => self.set_channel(*channel),
			DecoderControl::SetDeltaT(delta_t_s)    => self.set_delta_t_s(*delta_t_s),
		}
		Ok(())
	}

	fn apply(&mut self, input:&GnssSynchro) -> BlockResult<GnssSynchro> {
		BlockResult::Ready(TelemetryDecoder::apply(self, input))
	}

}
