
pub mod satellite;
pub mod synchro;

pub mod beidou_b2a;
