
use crate::gnss::beidou_b2a::BEIDOU_CNAV2_CRC_BITS;

// CRC-24Q generator, g(x) = x^24 + x^23 + x^18 + x^17 + x^14 + x^11 + x^10 + x^7 + x^6 + x^5 + x^4 + x^3 + x + 1
pub const CRC_24Q_POLYNOMIAL:[bool; 25] = [true, true, false, false, false, false, true, true, false, false, true, false,
	false, true, true, false, false, true, true, true, true, true, false, true, true];

// Polynomial long division over GF(2); returns the 24-bit remainder
fn remainder(bits:&[bool]) -> [bool; BEIDOU_CNAV2_CRC_BITS] {
	let mut m:Vec<bool> = bits.to_vec();

  	for i in 0..(m.len() + 1).saturating_sub(CRC_24Q_POLYNOMIAL.len()) {
  		if m[i] {
  			for j in 0..CRC_24Q_POLYNOMIAL.len() {
  				m[i+j] ^= CRC_24Q_POLYNOMIAL[j];
  			}
  		}
  	}

	let mut ans = [false; BEIDOU_CNAV2_CRC_BITS];
	let tail = m.len().saturating_sub(BEIDOU_CNAV2_CRC_BITS);
	for (a, b) in ans.iter_mut().rev().zip(m[tail..].iter().rev()) { *a = *b; }
	ans
}

/// Parity bits to append to `message` so that the whole string passes `is_crc_ok`
pub fn crc_24q(message:&[bool]) -> [bool; BEIDOU_CNAV2_CRC_BITS] {
	let mut padded:Vec<bool> = message.to_vec();
	padded.extend_from_slice(&[false; BEIDOU_CNAV2_CRC_BITS]);
	remainder(&padded)
}

pub fn is_crc_ok(message_w_crc:&[bool]) -> bool {
	if message_w_crc.len() <= BEIDOU_CNAV2_CRC_BITS { return false; }

	remainder(message_w_crc).iter().all(|b| !*b)
}
