
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
	pub a0_utc: f64, pub a1_utc: f64, pub a2_utc: f64,
	pub dt_ls: i8,
	pub t_ot: u32, pub wn_ot: u16,
	pub wn_lsf: u16, pub dn: u8, pub dt_lsf: i8,
}

impl Body {

	pub fn new(bits:&[bool]) -> Result<Self, DigSigProcErr> {
		if bits.len() == BODY_BITS {
			let health    =  bools_to_int::to_u8(&bits[0..2])?;
			let integrity =  IntegrityFlags::new(&bits[2..12])?;
			let clock     =  ClockCorrection::new(&bits[12..81])?;
			let iodc      =  bools_to_int::to_u16(&bits[81..91])?;

			// BDT-UTC time offset parameters, BDS-SIS-ICD-B2a section 7.2.7
			let a0_utc = (bools_to_int::to_i16(&bits[ 91..107])? as f64) * 2.0_f64.powi(-35);	// Bias coefficient [sec]
			let a1_utc = (bools_to_int::to_i16(&bits[107..120])? as f64) * 2.0_f64.powi(-51);	// Drift coefficient [sec/sec]
			let a2_utc = (bools_to_int::to_i8( &bits[120..127])? as f64) * 2.0_f64.powi(-68);	// Drift rate coefficient [sec/sec^2]
			let dt_ls  =  bools_to_int::to_i8( &bits[127..135])?;								// Leap seconds before the new leap second [sec]
			let t_ot   = (bools_to_int::to_u16(&bits[135..151])? as u32) * 16u32;				// Reference time of week [sec]
			let wn_ot  =  bools_to_int::to_u16(&bits[151..164])?;								// Reference week number
			let wn_lsf =  bools_to_int::to_u16(&bits[164..177])?;								// Leap second reference week number
			let dn     =  bools_to_int::to_u8( &bits[177..180])?;								// Leap second reference day number
			let dt_lsf =  bools_to_int::to_i8( &bits[180..188])?;								// Leap seconds after the new leap second [sec]

			Ok(Self{ health, integrity, clock, iodc, a0_utc, a1_utc, a2_utc, dt_ls, t_ot, wn_ot, wn_lsf, dn, dt_lsf })

		} else {
			Err(DigSigProcErr::InvalidTelemetryData("Expected a bool slice of length 234 in type34::Body::new"))
		}
	}

}
