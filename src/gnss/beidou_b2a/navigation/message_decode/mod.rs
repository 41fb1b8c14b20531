
use ::serde::{Serialize, Deserialize};

use crate::utils::bools_to_int;
use crate::DigSigProcErr;
use crate::gnss::beidou_b2a::{BEIDOU_CNAV2_MESSAGE_BITS, BEIDOU_CNAV2_CRC_BITS};

pub const BODY_BITS:usize = 234;

/// One B-CNAV2 message with the CRC already checked and removed
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Message {
	pub prn: u8,
	pub type_id: u8,
	pub seconds_of_week: u32,
	pub body: MessageBody,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum MessageBody {
	Type10(type10::Body),
	Type11(type11::Body),
	Type30(type30::Body),
	Type34(type34::Body),
	Type40(type40::Body),
	Unknown
}

pub mod type10;
pub mod type11;
pub mod type30;
pub mod type34;
pub mod type40;

/// Integrity flags and SISMAI shared by the ephemeris and clock messages (BDS-SIS-ICD-B2a, section 6.2.9)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct IntegrityFlags {
	pub dif: bool, pub sif: bool, pub aif: bool,
	pub sismai: u8,
	pub dif_b1c: bool, pub sif_b1c: bool, pub aif_b1c: bool,
}

impl IntegrityFlags {

	pub const BITS:usize = 10;

	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {
		if bits.len() == Self::BITS {
			let dif     = bits[0];
			let sif     = bits[1];
			let aif     = bits[2];
			let sismai  = bools_to_int::to_u8(&bits[3..7])?;
			let dif_b1c = bits[7];
			let sif_b1c = bits[8];
			let aif_b1c = bits[9];
			Ok(Self{ dif, sif, aif, sismai, dif_b1c, sif_b1c, aif_b1c })
		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a bool slice of length 10 in IntegrityFlags::new"))
		}
	}

}

/// Clock correction parameters shared by message types 30 through 34 (BDS-SIS-ICD-B2a, section 6.2.5)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct ClockCorrection {
	pub t_oc: u32,
	pub a0: f64, pub a1: f64, pub a2: f64,
}

impl ClockCorrection {

	pub const BITS:usize = 69;

	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {
		if bits.len() == Self::BITS {
			let t_oc = (bools_to_int::to_u16(&bits[ 0..11])? as u32) * 300u32;				// Clock reference time [sec]
			let a0   = (bools_to_int::to_i32(&bits[11..36])? as f64) * 2.0_f64.powi(-34);	// Clock bias [sec]
			let a1   = (bools_to_int::to_i32(&bits[36..58])? as f64) * 2.0_f64.powi(-50);	// Clock drift [sec/sec]
			let a2   = (bools_to_int::to_i16(&bits[58..69])? as f64) * 2.0_f64.powi(-66);	// Clock drift rate [sec/sec^2]
			Ok(Self{ t_oc, a0, a1, a2 })
		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a bool slice of length 69 in ClockCorrection::new"))
		}
	}

}

impl Message {

	/// Expects the full 288-bit message; the caller has already verified the CRC
	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {

		if bits.len() == BEIDOU_CNAV2_MESSAGE_BITS {
			let prn             =  bools_to_int::to_u8( &bits[ 0.. 6])?;
			let type_id         =  bools_to_int::to_u8( &bits[ 6..12])?;
			let seconds_of_week =  bools_to_int::to_u32(&bits[12..30])? * 3;	// SOW counts in units of 3 seconds
			let body_bits = &bits[30..(BEIDOU_CNAV2_MESSAGE_BITS - BEIDOU_CNAV2_CRC_BITS)];
			let body = match type_id {
				10 => MessageBody::Type10(type10::Body::new(body_bits)?),
				11 => MessageBody::Type11(type11::Body::new(body_bits)?),
				30 => MessageBody::Type30(type30::Body::new(body_bits)?),
				34 => MessageBody::Type34(type34::Body::new(body_bits)?),
				40 => MessageBody::Type40(type40::Body::new(body_bits)?),
				_  => MessageBody::Unknown,
			};
			Ok(Self{ prn, type_id, seconds_of_week, body })
		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a 288-bit B-CNAV2 message but got a different size"))
		}

	}

}
