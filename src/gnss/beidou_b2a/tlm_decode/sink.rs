
use ::serde::{Serialize, Deserialize};
use tokio::sync::mpsc;
use tracing::warn;

use crate::gnss::satellite::Satellite;
use crate::gnss::beidou_b2a::navigation::{Almanac, Ephemeris, UtcModel};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum NavigationData {
	Ephemeris(Ephemeris),
	UtcModel(UtcModel),
	Almanac(Almanac),
}

/// A decoded navigation product tagged with the satellite and channel it came from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TelemetryMessage {
	pub satellite: Satellite,
	pub channel: usize,
	pub data: NavigationData,
}

pub trait TelemetrySink {
	fn publish(&mut self, msg:TelemetryMessage);
}

impl TelemetrySink for Vec<TelemetryMessage> {
	fn publish(&mut self, msg:TelemetryMessage) { self.push(msg); }
}

impl TelemetrySink for mpsc::UnboundedSender<TelemetryMessage> {
	fn publish(&mut self, msg:TelemetryMessage) {
		if let Err(e) = self.send(msg) {
			warn!("Telemetry receiver closed, dropping message from {}", e.0.satellite);
		}
	}
}
