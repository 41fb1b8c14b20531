
use ::serde::{Serialize, Deserialize};

use super::message_decode::{type10, type11, type30};

/// Broadcast ephemeris assembled from message types 10, 11 and 30
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Ephemeris {
	pub prn: u8,         pub sat_type: u8,  pub week_number: u16, pub health: u8,
	pub iode: u8,        pub iodc: u16,
	pub t_oe: u32,       pub d_a: f64,      pub a_dot: f64,       pub d_n0: f64,
	pub d_n0_dot: f64,   pub m0: f64,       pub e: f64,           pub omega: f64,
	pub omega0: f64,     pub i0: f64,       pub omega_dot: f64,   pub i0_dot: f64,
	pub cis: f64,        pub cic: f64,      pub crs: f64,         pub crc: f64,
	pub cus: f64,        pub cuc: f64,
	pub t_oc: u32,       pub a0: f64,       pub a1: f64,          pub a2: f64,
	pub t_gd_b2ap: f64,  pub isc_b2ad: f64,
}

impl Ephemeris {

	pub fn from_messages(prn:u8, eph1:&type10::Body, eph2:&type11::Body, clk:&type30::Body) -> Self {
		Self {
			prn, sat_type: eph1.sat_type, week_number: eph1.week_number, health: clk.health,
			iode: eph1.iode, iodc: clk.iodc,
			t_oe: eph1.t_oe, d_a: eph1.d_a, a_dot: eph1.a_dot, d_n0: eph1.d_n0,
			d_n0_dot: eph1.d_n0_dot, m0: eph1.m0, e: eph1.e, omega: eph1.omega,
			omega0: eph2.omega0, i0: eph2.i0, omega_dot: eph2.omega_dot, i0_dot: eph2.i0_dot,
			cis: eph2.cis, cic: eph2.cic, crs: eph2.crs, crc: eph2.crc,
			cus: eph2.cus, cuc: eph2.cuc,
			t_oc: clk.clock.t_oc, a0: clk.clock.a0, a1: clk.clock.a1, a2: clk.clock.a2,
			t_gd_b2ap: clk.t_gd_b2ap, isc_b2ad: clk.isc_b2ad,
		}
	}

}
