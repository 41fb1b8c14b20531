
use ::serde::{Serialize, Deserialize};

use super::message_decode::type34;

/// BDT to UTC conversion parameters from message type 34
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct UtcModel {
	pub a0_utc: f64, pub a1_utc: f64, pub a2_utc: f64,
	pub dt_ls: i8,   pub dt_lsf: i8,
	pub t_ot: u32,   pub wn_ot: u16,
	pub wn_lsf: u16, pub dn: u8,
}

impl UtcModel {

	pub fn from_message(body:&type34::Body) -> Self {
		Self{ a0_utc: body.a0_utc, a1_utc: body.a1_utc, a2_utc: body.a2_utc, dt_ls: body.dt_ls, dt_lsf: body.dt_lsf,
			t_ot: body.t_ot, wn_ot: body.wn_ot, wn_lsf: body.wn_lsf, dn: body.dn }
	}

	/// BDT minus UTC [sec] at BDT time of week `t` in week `wn`, outside of a leap second event
	pub fn bdt_minus_utc(&self, t:f64, wn:u16) -> f64 {
		let dt = t - (self.t_ot as f64) + 604800.0 * ((wn as f64) - (self.wn_ot as f64));
		(self.dt_ls as f64) + self.a0_utc + self.a1_utc*dt + self.a2_utc*dt.powi(2)
	}

}
