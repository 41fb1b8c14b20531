//! Builders for CRC-valid B-CNAV2 strings used by the unit tests.

use crate::utils::bools_to_int::{from_u64, from_i64};
use super::error_detection;
use super::message_decode::BODY_BITS;

pub fn build_message(prn:u8, type_id:u8, seconds_of_week:u32, body:&[bool]) -> Vec<bool> {
	assert_eq!(body.len(), BODY_BITS);

	let mut bits:Vec<bool> = vec![];
	bits.extend(from_u64(prn as u64, 6));
	bits.extend(from_u64(type_id as u64, 6));
	bits.extend(from_u64((seconds_of_week / 3) as u64, 18));
	bits.extend_from_slice(body);
	let parity = error_detection::crc_24q(&bits);
	bits.extend_from_slice(&parity);
	bits
}

fn set_field(body:&mut [bool], start:usize, field:&[bool]) {
	body[start..(start + field.len())].copy_from_slice(field);
}

pub fn zero_body() -> Vec<bool> { vec![false; BODY_BITS] }

pub fn type10_body(week_number:u16, sat_type:u8) -> Vec<bool> {
	let mut body = zero_body();
	set_field(&mut body, 0, &from_u64(week_number as u64, 13));
	set_field(&mut body, 42, &from_u64(sat_type as u64, 2));
	set_field(&mut body, 44, &from_i64(-1024, 26));
	body
}

pub fn type34_body(dt_ls:i8) -> Vec<bool> {
	let mut body = zero_body();
	set_field(&mut body, 127, &from_i64(dt_ls as i64, 8));
	body
}

pub fn type40_body(prn_a:u8) -> Vec<bool> {
	let mut body = zero_body();
	set_field(&mut body, 0, &from_u64(prn_a as u64, 6));
	set_field(&mut body, 6, &from_u64(3, 2));
	body
}
