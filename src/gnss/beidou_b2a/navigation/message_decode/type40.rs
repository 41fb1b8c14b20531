
use ::serde::{Serialize, Deserialize};

use crate::utils::bools_to_int;
use crate::DigSigProcErr;
use super::BODY_BITS;

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Body {
	pub prn_a: u8, pub sat_type: u8,
	pub wn_a: u16, pub t_oa: u32,
	pub e: f64, pub delta_i: f64, pub sqrt_a: f64,
	pub omega0: f64, pub omega_dot: f64, pub omega: f64, pub m0: f64,
	pub a_f0: f64, pub a_f1: f64,
	pub health: u8,
}

impl Body {

	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {
		if bits.len() == BODY_BITS {
			// Midi almanac, BDS-SIS-ICD-B2a section 7.2.8
			let prn_a     =  bools_to_int::to_u8( &bits[  0..  6])?;
			let sat_type  =  bools_to_int::to_u8( &bits[  6..  8])?;
			let wn_a      =  bools_to_int::to_u16(&bits[  8.. 21])?;
			let t_oa      = (bools_to_int::to_u8( &bits[ 21.. 29])? as u32) * 4096u32;			// Almanac reference time [sec]
			let e         = (bools_to_int::to_u16(&bits[ 29.. 40])? as f64) * 2.0_f64.powi(-16);
			let delta_i   = (bools_to_int::to_i16(&bits[ 40.. 51])? as f64) * 2.0_f64.powi(-14);	// Inclination offset [semicircles]
			let sqrt_a    = (bools_to_int::to_u32(&bits[ 51.. 68])? as f64) * 2.0_f64.powi(-4);	// [m^0.5]
			let omega0    = (bools_to_int::to_i16(&bits[ 68.. 84])? as f64) * 2.0_f64.powi(-15);	// [semicircles]
			let omega_dot = (bools_to_int::to_i16(&bits[ 84.. 95])? as f64) * 2.0_f64.powi(-33);	// [semicircles/sec]
			let omega     = (bools_to_int::to_i16(&bits[ 95..111])? as f64) * 2.0_f64.powi(-15);	// [semicircles]
			let m0        = (bools_to_int::to_i16(&bits[111..127])? as f64) * 2.0_f64.powi(-15);	// [semicircles]
			let a_f0      = (bools_to_int::to_i16(&bits[127..138])? as f64) * 2.0_f64.powi(-20);	// [sec]
			let a_f1      = (bools_to_int::to_i16(&bits[138..148])? as f64) * 2.0_f64.powi(-37);	// [sec/sec]
			let health    =  bools_to_int::to_u8( &bits[148..156])?;

			Ok(Self{ prn_a, sat_type, wn_a, t_oa, e, delta_i, sqrt_a, omega0, omega_dot, omega, m0, a_f0, a_f1, health })

		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a bool slice of length 234 in type40::Body::new"))
		}
	}

}
