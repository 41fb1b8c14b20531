
use ::serde::{Serialize, Deserialize};

use crate::utils::bools_to_int;
use crate::DigSigProcErr;
use super::{ClockCorrection, IntegrityFlags, BODY_BITS};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Body {
	pub health: u8,
	pub integrity: IntegrityFlags,
	pub clock: ClockCorrection,
	pub iodc: u16,
	pub t_gd_b2ap: f64,
	pub isc_b2ad: f64,
}

impl Body {

	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {
		if bits.len() == BODY_BITS {
			let health    =  bools_to_int::to_u8(&bits[0..2])?;
			let integrity =  IntegrityFlags::new(&bits[2..12])?;
			let clock     =  ClockCorrection::new(&bits[12..81])?;
			let iodc      =  bools_to_int::to_u16(&bits[81..91])?;

			// Group delay differential parameters, BDS-SIS-ICD-B2a section 7.2.3
			let t_gd_b2ap = (bools_to_int::to_i16(&bits[ 91..103])? as f64) * 2.0_f64.powi(-34);	// [sec]
			let isc_b2ad  = (bools_to_int::to_i16(&bits[103..115])? as f64) * 2.0_f64.powi(-34);	// [sec]

			// Ionospheric model and remaining fields are not used here

			Ok(Self{ health, integrity, clock, iodc, t_gd_b2ap, isc_b2ad })

		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a bool slice of length 234 in type30::Body::new"))
		}
	}

}
