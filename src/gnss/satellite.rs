
use std::fmt;

use ::serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GnssSystem {
	Gps,
	Galileo,
	Glonass,
	Beidou,
}

impl fmt::Display for GnssSystem {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			GnssSystem::Gps     => write!(f, "GPS"),
			GnssSystem::Galileo => write!(f, "Galileo"),
			GnssSystem::Glonass => write!(f, "Glonass"),
			GnssSystem::Beidou  => write!(f, "BeiDou"),
		}
	}
}

/// BeiDou satellite orbit type, as broadcast in the SatType field (BDS-SIS-ICD-B2a, section 6.2.2)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrbitType {
	Unknown,
	Geo,
	Igso,
	Meo,
}

impl OrbitType {

	pub fn from_sat_type(sat_type:u8) -> Self {
		match sat_type {
			1 => OrbitType::Geo,
			2 => OrbitType::Igso,
			3 => OrbitType::Meo,
			_ => OrbitType::Unknown,
		}
	}

}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
	pub system: GnssSystem,
	pub prn: u32,
	pub orbit: OrbitType,
}

impl Satellite {

	pub fn new(system:GnssSystem, prn:u32) -> Self {
		Self{ system, prn, orbit: OrbitType::Unknown }
	}

	pub fn update_prn(&mut self, prn:u32) { self.prn = prn; }

	pub fn what_block(&mut self, orbit:OrbitType) { self.orbit = orbit; }

}

impl fmt::Display for Satellite {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.orbit {
			OrbitType::Unknown => write!(f, "{} PRN {:02}", self.system, self.prn),
			orbit => write!(f, "{} PRN {:02} ({:?})", self.system, self.prn, orbit),
		}
	}
}
