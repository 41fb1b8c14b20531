
use ::serde::{Serialize, Deserialize};

use crate::utils::bools_to_int;
use crate::DigSigProcErr;
use super::{IntegrityFlags, BODY_BITS};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Body {
	pub health: u8,
	pub integrity: IntegrityFlags,
	pub omega0: f64, pub i0:  f64, pub omega_dot: f64, pub i0_dot: f64,
	pub cis:    f64, pub cic: f64, pub crs: f64,       pub crc:    f64,
	pub cus:    f64, pub cuc: f64,
}

impl Body {

	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {
		if bits.len() == BODY_BITS {
			// Ephemeris II, BDS-SIS-ICD-B2a section 7.2.1 and table 6-4
			let health    =  bools_to_int::to_u8(&bits[0..2])?;
			let integrity =  IntegrityFlags::new(&bits[2..12])?;

			let omega0    = (bools_to_int::to_i64(&bits[ 12.. 45])? as f64) * 2.0_f64.powi(-32);	// Longitude of ascending node at weekly epoch [semicircles]
			let i0        = (bools_to_int::to_i64(&bits[ 45.. 78])? as f64) * 2.0_f64.powi(-32);	// Inclination at reference time [semicircles]
			let omega_dot = (bools_to_int::to_i32(&bits[ 78.. 97])? as f64) * 2.0_f64.powi(-44);	// Rate of right ascension [semicircles/sec]
			let i0_dot    = (bools_to_int::to_i16(&bits[ 97..112])? as f64) * 2.0_f64.powi(-44);	// Rate of inclination [semicircles/sec]
			let cis       = (bools_to_int::to_i16(&bits[112..128])? as f64) * 2.0_f64.powi(-30);	// [rad]
			let cic       = (bools_to_int::to_i16(&bits[128..144])? as f64) * 2.0_f64.powi(-30);	// [rad]
			let crs       = (bools_to_int::to_i32(&bits[144..168])? as f64) * 2.0_f64.powi(-8);		// [m]
			let crc       = (bools_to_int::to_i32(&bits[168..192])? as f64) * 2.0_f64.powi(-8);		// [m]
			let cus       = (bools_to_int::to_i32(&bits[192..213])? as f64) * 2.0_f64.powi(-30);	// [rad]
			let cuc       = (bools_to_int::to_i32(&bits[213..234])? as f64) * 2.0_f64.powi(-30);	// [rad]

			Ok(Self{ health, integrity, omega0, i0, omega_dot, i0_dot, cis, cic, crs, crc, cus, cuc })

		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a bool slice of length 234 in type11::Body::new"))
		}
	}

}
