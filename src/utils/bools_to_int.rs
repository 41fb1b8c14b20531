
use crate::DigSigProcErr;

pub fn to_byte_vec(x:&[bool]) -> Result<Vec<u8>, DigSigProcErr> {
    if x.len()%8 == 0 {
	    x.chunks(8).map(to_u8).collect()
    } else {
    	Err(DigSigProcErr::InvalidTelemetryData("x.len()%8 != 0 in bools_to_int::to_byte_vec"))
    }
}

fn unsigned(bools:&[bool], max_bits:usize, msg:&'static str) -> Result<u64, DigSigProcErr> {
	if bools.len() <= max_bits {
		Ok(bools.iter().fold(0u64, |acc, b| (acc << 1) | (*b as u64)))
	} else {
		Err(DigSigProcErr::InvalidTelemetryData(msg))
	}
}

// Two's complement with the most significant bit first
fn signed(bools:&[bool], max_bits:usize, msg:&'static str) -> Result<i128, DigSigProcErr> {
	if bools.is_empty() { return Err(DigSigProcErr::InvalidTelemetryData("Empty slice in bools_to_int signed conversion")); }

	let magnitude = unsigned(bools, max_bits, msg)? as i128;
	if bools[0] { Ok(magnitude - (1i128 << bools.len())) } else { Ok(magnitude) }
}

pub fn to_u8(bools:&[bool])  -> Result<u8, DigSigProcErr>  { unsigned(bools,  8, "x.len() > 8 in bools_to_int::to_u8").map(|x| x as u8) }
pub fn to_u16(bools:&[bool]) -> Result<u16, DigSigProcErr> { unsigned(bools, 16, "x.len() > 16 in bools_to_int::to_u16").map(|x| x as u16) }
pub fn to_u32(bools:&[bool]) -> Result<u32, DigSigProcErr> { unsigned(bools, 32, "x.len() > 32 in bools_to_int::to_u32").map(|x| x as u32) }
pub fn to_u64(bools:&[bool]) -> Result<u64, DigSigProcErr> { unsigned(bools, 64, "x.len() > 64 in bools_to_int::to_u64") }

pub fn to_i8(bools:&[bool])  -> Result<i8, DigSigProcErr>  { signed(bools,  8, "x.len() > 8 in bools_to_int::to_i8").map(|x| x as i8) }
pub fn to_i16(bools:&[bool]) -> Result<i16, DigSigProcErr> { signed(bools, 16, "x.len() > 16 in bools_to_int::to_i16").map(|x| x as i16) }
pub fn to_i32(bools:&[bool]) -> Result<i32, DigSigProcErr> { signed(bools, 32, "x.len() > 32 in bools_to_int::to_i32").map(|x| x as i32) }
pub fn to_i64(bools:&[bool]) -> Result<i64, DigSigProcErr> { signed(bools, 64, "x.len() > 64 in bools_to_int::to_i64").map(|x| x as i64) }

/// Inverse of `to_u64`; the `n` least significant bits of `x`, most significant first.
pub fn from_u64(x:u64, n:usize) -> Vec<bool> {
	(0..n).rev().map(|i| if i < 64 { (x >> i) & 1 == 1 } else { false }).collect()
}

/// Inverse of `to_i64` for a field `n` bits wide.
pub fn from_i64(x:i64, n:usize) -> Vec<bool> {
	(0..n).rev().map(|i| (x >> i.min(63)) & 1 == 1).collect()
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn unsigned_msb_first() {
		assert_eq!(to_u8(&[true, false, true]), Ok(5));
		assert_eq!(to_u16(&[true; 16]), Ok(0xFFFF));
		assert_eq!(to_u32(&[]), Ok(0));
		assert!(to_u8(&[false; 9]).is_err());
	}

	#[test]
	fn signed_twos_complement() {
		assert_eq!(to_i8(&[true, true, true]), Ok(-1));
		assert_eq!(to_i8(&[true, false, false]), Ok(-4));
		assert_eq!(to_i8(&[false, true, true]), Ok(3));
		assert_eq!(to_i32(&from_i64(-123_456, 25)), Ok(-123_456));
		assert_eq!(to_i64(&from_i64(-(1 << 32), 33)), Ok(-(1 << 32)));
		assert!(to_i16(&[]).is_err());
	}

	#[test]
	fn byte_vec() {
		let bits = from_u64(0xE24DE8, 24);
		assert_eq!(to_byte_vec(&bits), Ok(vec![0xE2, 0x4D, 0xE8]));
		assert!(to_byte_vec(&bits[0..7]).is_err());
	}

}
