
// Signal parameters from BDS-SIS-ICD-B2a-1.0
pub const BEIDOU_B2A_CODE_PERIOD_SEC:f64 = 1.0e-3;

// B-CNAV2 frame structure: 24-symbol preamble (0xE24DE8) followed by 576 LDPC(96,48) encoded symbols
pub const BEIDOU_CNAV2_PREAMBLE:[bool; 24] = [true,  true,  true,  false, false, false, true,  false,
                                              false, true,  false, false, true,  true,  false, true,
                                              true,  true,  true,  false, true,  false, false, false];
pub const BEIDOU_CNAV2_TELEMETRY_SYMBOLS_PER_PREAMBLE_BIT:usize = 1;
pub const BEIDOU_CNAV2_PREAMBLE_DURATION_SEC:f64 = 0.120;
pub const BEIDOU_CNAV2_STRING_SYMBOLS:usize = 600;
pub const BEIDOU_CNAV2_PREAMBLE_PERIOD_SYMBOLS:usize = 600;
pub const BEIDOU_CNAV2_DATA_SYMBOLS:usize = 576;

// Message content, including the 24-bit CRC
pub const BEIDOU_CNAV2_MESSAGE_BITS:usize = 288;
pub const BEIDOU_CNAV2_CRC_BITS:usize = 24;

pub const BEIDOU_CNAV2_CRC_ERROR_LIMIT:u32 = 8;

pub mod navigation;
pub mod tlm_decode;
