//! B-CNAV2 navigation message state.
//!
//! The telemetry decoder only talks to the navigation data through the
//! [`NavigationContext`] trait: it hands over the hard-decision bits of one
//! frame and then polls for whatever the frame completed. Every `take_*`
//! query clears what it returns, so a product is handed out once per
//! occurrence. [`Cnav2Navigation`] is the B-CNAV2 implementation.

use ::serde::{Serialize, Deserialize};
use tracing::debug;

use crate::gnss::satellite::OrbitType;
use crate::gnss::beidou_b2a::BEIDOU_CNAV2_MESSAGE_BITS;

pub mod almanac;
pub mod ephemeris;
pub mod error_detection;
pub mod message_decode;
pub mod utc_model;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::almanac::Almanac;
pub use self::ephemeris::Ephemeris;
pub use self::utc_model::UtcModel;

use self::message_decode::{type10, type11, type30, Message, MessageBody};

/// Satellite identity reported by the navigation message itself
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteUpdate {
	pub prn: u32,
	pub orbit: OrbitType,
}

pub trait NavigationContext {

	/// Decode one string of hard-decision bits
	fn decode_string(&mut self, bits:&[bool]);

	/// Whether the last string passed its integrity check
	fn crc_ok(&self) -> bool;

	fn take_new_ephemeris(&mut self) -> Option<Ephemeris>;
	fn take_new_utc_model(&mut self) -> Option<UtcModel>;
	fn take_new_almanac(&mut self) -> Option<Almanac>;
	fn take_satellite_update(&mut self) -> Option<SatelliteUpdate>;

	/// Seconds of week carried by the last valid string, if not already consumed
	fn take_fresh_time_of_week(&mut self) -> Option<f64>;

	/// True once time of week has been received at least once
	fn navigation_time_confirmed(&self) -> bool;

}

#[derive(Debug, Default)]
pub struct Cnav2Navigation {
	flag_crc_test: bool,
	flag_tow_set: bool,
	last_message: Option<Message>,

	// Partial ephemeris, cleared on publication
	eph1: Option<type10::Body>,
	eph2: Option<type11::Body>,
	clk: Option<type30::Body>,

	new_ephemeris: Option<Ephemeris>,
	new_utc_model: Option<UtcModel>,
	new_almanac: Option<Almanac>,
	satellite_update: Option<SatelliteUpdate>,
	reported_identity: Option<SatelliteUpdate>,
	fresh_sow: Option<f64>,
}

impl Cnav2Navigation {

	pub fn new() -> Self { Self::default() }

	pub fn last_message(&self) -> Option<&Message> { self.last_message.as_ref() }

	fn apply_message(&mut self, msg:Message) {
		self.fresh_sow = Some(msg.seconds_of_week as f64);
		self.flag_tow_set = true;

		let mut orbit = self.reported_identity.map(|id| id.orbit).unwrap_or(OrbitType::Unknown);

		match &msg.body {
			MessageBody::Type10(body) => {
				orbit = OrbitType::from_sat_type(body.sat_type);
				self.eph1 = Some(*body);
			},
			MessageBody::Type11(body) => self.eph2 = Some(*body),
			MessageBody::Type30(body) => self.clk = Some(*body),
			MessageBody::Type34(body) => self.new_utc_model = Some(UtcModel::from_message(body)),
			MessageBody::Type40(body) => self.new_almanac = Some(Almanac::from_message(body)),
			MessageBody::Unknown => debug!(type_id = msg.type_id, "B-CNAV2 message type not decoded"),
		}

		if let (Some(eph1), Some(eph2), Some(clk)) = (self.eph1, self.eph2, self.clk) {
			self.new_ephemeris = Some(Ephemeris::from_messages(msg.prn, &eph1, &eph2, &clk));
			self.eph1 = None;
			self.eph2 = None;
			self.clk = None;
		}

		let identity = SatelliteUpdate{ prn: msg.prn as u32, orbit };
		if self.reported_identity != Some(identity) {
			self.reported_identity = Some(identity);
			self.satellite_update = Some(identity);
		}

		self.last_message = Some(msg);
	}

}

impl NavigationContext for Cnav2Navigation {

	fn decode_string(&mut self, bits:&[bool]) {
		self.flag_crc_test = false;

		// The LDPC code is systematic, so the message is the leading part of the string
		if bits.len() < BEIDOU_CNAV2_MESSAGE_BITS {
			debug!(len = bits.len(), "B-CNAV2 string too short");
			return;
		}
		let message_bits = &bits[..BEIDOU_CNAV2_MESSAGE_BITS];
		if !error_detection::is_crc_ok(message_bits) { return; }

		match Message::new(message_bits) {
			// PRN 0 is unassigned; an all-zero string has a valid CRC
			Ok(msg) if msg.prn == 0 => debug!("B-CNAV2 string with PRN 0 rejected"),
			Ok(msg) => {
				self.flag_crc_test = true;
				self.apply_message(msg);
			},
			Err(e) => debug!("B-CNAV2 message decode failed: {}", e),
		}
	}

	fn crc_ok(&self) -> bool { self.flag_crc_test }

	fn take_new_ephemeris(&mut self) -> Option<Ephemeris> { self.new_ephemeris.take() }
	fn take_new_utc_model(&mut self) -> Option<UtcModel> { self.new_utc_model.take() }
	fn take_new_almanac(&mut self) -> Option<Almanac> { self.new_almanac.take() }
	fn take_satellite_update(&mut self) -> Option<SatelliteUpdate> { self.satellite_update.take() }
	fn take_fresh_time_of_week(&mut self) -> Option<f64> { self.fresh_sow.take() }

	fn navigation_time_confirmed(&self) -> bool { self.flag_tow_set }

}
