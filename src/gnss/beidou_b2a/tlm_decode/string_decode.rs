
use tracing::info;

use crate::gnss::satellite::Satellite;
use crate::gnss::beidou_b2a::navigation::NavigationContext;
use super::sink::{NavigationData, TelemetryMessage, TelemetrySink};
use super::symbol_history::SymbolHistory;

/// Copies the symbols following the preamble out of the window, inverted if the preamble was.
pub fn extract_string_symbols(history:&SymbolHistory, preamble_symbols:usize, string_symbols:usize, corr_value:i32) -> Vec<f64> {
	assert!(history.len() >= string_symbols, "string decode with {} buffered symbols, need {}", history.len(), string_symbols);

	(preamble_symbols..string_symbols).map(|i| {
		let prompt_i = history.at(i).prompt_i();
		if corr_value > 0 { prompt_i } else { -prompt_i }
	}).collect()
}

pub fn symbols_to_bits(symbols:&[f64]) -> Vec<bool> {
	symbols.iter().map(|s| *s > 0.0).collect()
}

/// Hands one string to the navigation context and publishes whatever it completed
pub fn decode_string<N, S>(nav:&mut N, sink:&mut S, satellite:&mut Satellite, channel:usize, string_symbols:&[f64])
	where N: NavigationContext + ?Sized, S: TelemetrySink + ?Sized {

	let data_bits = symbols_to_bits(string_symbols);
	nav.decode_string(&data_bits);

	if nav.crc_ok() {
		info!("BeiDou CNAV2 CRC correct in channel {} from satellite {}", channel, satellite);
	} else {
		info!("BeiDou CNAV2 CRC error in channel {} from satellite {}", channel, satellite);
	}

	if let Some(eph) = nav.take_new_ephemeris() {
		info!("BeiDou CNAV2 ephemeris received in channel {} from satellite {}", channel, satellite);
		sink.publish(TelemetryMessage{ satellite: *satellite, channel, data: NavigationData::Ephemeris(eph) });
	}
	if let Some(utc) = nav.take_new_utc_model() {
		info!("BeiDou CNAV2 UTC model received in channel {} from satellite {}", channel, satellite);
		sink.publish(TelemetryMessage{ satellite: *satellite, channel, data: NavigationData::UtcModel(utc) });
	}
	if let Some(alm) = nav.take_new_almanac() {
		info!("BeiDou CNAV2 almanac received in channel {} for PRN {}", channel, alm.prn);
		sink.publish(TelemetryMessage{ satellite: *satellite, channel, data: NavigationData::Almanac(alm) });
	}

	if let Some(update) = nav.take_satellite_update() {
		info!("BeiDou CNAV2 slot number identified in channel {}: PRN {}", channel, update.prn);
		satellite.update_prn(update.prn);
		satellite.what_block(update.orbit);
	}
}

#[cfg(test)]
mod tests {

	use num_complex::Complex;

	use super::*;
	use crate::gnss::satellite::{GnssSystem, OrbitType};
	use crate::gnss::synchro::GnssSynchro;
	use crate::gnss::beidou_b2a::navigation::{Cnav2Navigation, SatelliteUpdate};
	use crate::gnss::beidou_b2a::navigation::test_support::*;

	#[test]
	fn bits_from_sign() {
		assert_eq!(symbols_to_bits(&[0.4, -0.1, 0.0, 12.0]), vec![true, false, false, true]);
	}

	#[test]
	fn extraction_resolves_polarity() {
		let mut history = SymbolHistory::default();
		for idx in 0..11 {
			history.push(GnssSynchro::new(GnssSystem::Beidou, 19, Complex{ re: idx as f64, im: 0.0 }, idx));
		}

		assert_eq!(extract_string_symbols(&history, 4, 10, 4), vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
		assert_eq!(extract_string_symbols(&history, 4, 10, -4), vec![-4.0, -5.0, -6.0, -7.0, -8.0, -9.0]);
	}

	#[test]
	#[should_panic]
	fn extraction_requires_full_string() {
		let history = SymbolHistory::default();
		extract_string_symbols(&history, 4, 10, 4);
	}

	fn to_symbols(bits:&[bool]) -> Vec<f64> {
		bits.iter().map(|b| if *b { 0.9 } else { -0.9 }).collect()
	}

	#[test]
	fn publishes_once_and_updates_identity() {
		let mut nav = Cnav2Navigation::new();
		let mut sink:Vec<TelemetryMessage> = vec![];
		let mut satellite = Satellite::new(GnssSystem::Beidou, 1);

		decode_string(&mut nav, &mut sink, &mut satellite, 2, &to_symbols(&build_message(24, 10, 3000, &type10_body(880, 3))));
		decode_string(&mut nav, &mut sink, &mut satellite, 2, &to_symbols(&build_message(24, 11, 3003, &zero_body())));
		assert!(sink.is_empty());
		assert_eq!(satellite.prn, 24);
		assert_eq!(satellite.orbit, OrbitType::Meo);

		decode_string(&mut nav, &mut sink, &mut satellite, 2, &to_symbols(&build_message(24, 30, 3006, &zero_body())));
		assert_eq!(sink.len(), 1);
		match &sink[0].data {
			NavigationData::Ephemeris(eph) => assert_eq!(eph.week_number, 880),
			other => panic!("Expected ephemeris, got {:?}", other),
		}
		assert_eq!(sink[0].satellite.prn, 24);
		assert_eq!(sink[0].channel, 2);

		// A corrupted string publishes nothing and leaves the identity alone
		let mut bits = build_message(30, 34, 3009, &type34_body(18));
		bits[100] = !bits[100];
		decode_string(&mut nav, &mut sink, &mut satellite, 2, &to_symbols(&bits));
		assert_eq!(sink.len(), 1);
		assert_eq!(satellite.prn, 24);
		assert_eq!(nav.take_satellite_update(), None::<SatelliteUpdate>);
	}

	#[test]
	fn channel_sink() {
		let (mut tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
		let mut nav = Cnav2Navigation::new();
		let mut satellite = Satellite::new(GnssSystem::Beidou, 24);

		decode_string(&mut nav, &mut tx, &mut satellite, 0, &to_symbols(&build_message(24, 40, 3000, &type40_body(7))));
		match rx.try_recv() {
			Ok(TelemetryMessage{ data: NavigationData::Almanac(alm), .. }) => assert_eq!(alm.prn, 7),
			other => panic!("Expected almanac, got {:?}", other),
		}

		// Closed receiver is not an error for the decoder
		drop(rx);
		decode_string(&mut nav, &mut tx, &mut satellite, 0, &to_symbols(&build_message(24, 40, 3003, &type40_body(8))));
	}

}
