
use ::serde::{Serialize, Deserialize};

use super::message_decode::type40;

/// Midi almanac for the satellite identified by `prn`, decoded from message type 40
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Almanac {
	pub prn: u8,        pub sat_type: u8,
	pub wn_a: u16,      pub t_oa: u32,
	pub e: f64,         pub delta_i: f64,  pub sqrt_a: f64,
	pub omega0: f64,    pub omega_dot: f64,
	pub omega: f64,     pub m0: f64,
	pub a_f0: f64,      pub a_f1: f64,
	pub health: u8,
}

impl Almanac {

	pub fn from_message(body:&type40::Body) -> Self {
		Self{ prn: body.prn_a, sat_type: body.sat_type, wn_a: body.wn_a, t_oa: body.t_oa,
			e: body.e, delta_i: body.delta_i, sqrt_a: body.sqrt_a, omega0: body.omega0, omega_dot: body.omega_dot,
			omega: body.omega, m0: body.m0, a_f0: body.a_f0, a_f1: body.a_f1, health: body.health }
	}

}
