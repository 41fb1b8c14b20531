
use ::serde::{Serialize, Deserialize};

use crate::utils::bools_to_int;
use crate::DigSigProcErr;
use super::{IntegrityFlags, BODY_BITS};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Body {
	pub week_number: u16,
	pub integrity: IntegrityFlags,
	pub iode: u8,
	pub t_oe: u32, pub sat_type: u8,
	pub d_a:   f64, pub a_dot: f64, pub d_n0: f64, pub d_n0_dot: f64,
	pub m0:    f64, pub e:     f64, pub omega: f64,
}

impl Body {

	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {
		if bits.len() == BODY_BITS {
			// Ephemeris I, BDS-SIS-ICD-B2a section 7.2.1 and table 6-3
			let week_number = bools_to_int::to_u16(&bits[0..13])?;
			let integrity   = IntegrityFlags::new(&bits[13..23])?;
			let iode        = bools_to_int::to_u8(&bits[23..31])?;

			let t_oe     = (bools_to_int::to_u16(&bits[ 31.. 42])? as u32) * 300u32;			// Ephemeris reference time [sec]
			let sat_type =  bools_to_int::to_u8( &bits[ 42.. 44])?;								// 01 GEO, 10 IGSO, 11 MEO
			let d_a      = (bools_to_int::to_i32(&bits[ 44.. 70])? as f64) * 2.0_f64.powi(-9);	// Semi-major axis difference from 27,906,100 m (MEO) or 42,162,200 m (IGSO/GEO) [m]
			let a_dot    = (bools_to_int::to_i32(&bits[ 70.. 95])? as f64) * 2.0_f64.powi(-21);	// Change rate in semi-major axis [m/sec]
			let d_n0     = (bools_to_int::to_i32(&bits[ 95..112])? as f64) * 2.0_f64.powi(-44);	// Mean motion difference [semicircles/sec]
			let d_n0_dot = (bools_to_int::to_i32(&bits[112..135])? as f64) * 2.0_f64.powi(-57);	// Rate of mean motion difference [semicircles/sec^2]
			let m0       = (bools_to_int::to_i64(&bits[135..168])? as f64) * 2.0_f64.powi(-32);	// Mean anomaly at reference time [semicircles]
			let e        = (bools_to_int::to_u64(&bits[168..201])? as f64) * 2.0_f64.powi(-34);	// Eccentricity
			let omega    = (bools_to_int::to_i64(&bits[201..234])? as f64) * 2.0_f64.powi(-32);	// Argument of perigee [semicircles]

			Ok(Self{ week_number, integrity, iode, t_oe, sat_type, d_a, a_dot, d_n0, d_n0_dot, m0, e, omega })

		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a bool slice of length 234 in type10::Body::new"))
		}
	}

}
