
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use num_complex::Complex;
use tracing::warn;

use crate::gnss::satellite::GnssSystem;
use crate::gnss::synchro::GnssSynchro;

/// Prompt I, prompt Q, tracking sample counter
pub const SYMBOL_RECORD_BYTES:usize = 24;

/// Iterates tracking outputs stored as little-endian `f64` prompt I, `f64` prompt Q and `u64` sample counter.
///
/// Iteration ends at end of input. A truncated final record or a read error also ends it, with a warning.
pub struct SymbolSource<R: BufRead> {
	src: R,
	idx: usize,
}

pub fn symbol_source<R: Read>(src:R) -> SymbolSource<BufReader<R>> {
	SymbolSource{ src: BufReader::new(src), idx: 0 }
}

pub fn file_symbol_source<P: AsRef<Path>>(path:P) -> io::Result<SymbolSource<BufReader<File>>> {
	Ok(symbol_source(File::open(path)?))
}

pub fn write_symbol<W: io::Write>(w:&mut W, prompt:Complex<f64>, tracking_sample_counter:u64) -> io::Result<()> {
	w.write_f64::<LittleEndian>(prompt.re)?;
	w.write_f64::<LittleEndian>(prompt.im)?;
	w.write_u64::<LittleEndian>(tracking_sample_counter)
}

impl<R: BufRead> SymbolSource<R> {

	/// Number of records read so far
	pub fn records_read(&self) -> usize { self.idx }

	fn read_record(&mut self) -> io::Result<GnssSynchro> {
		let re = self.src.read_f64::<LittleEndian>()?;
		let im = self.src.read_f64::<LittleEndian>()?;
		let tracking_sample_counter = self.src.read_u64::<LittleEndian>()?;
		Ok(GnssSynchro::new(GnssSystem::Beidou, 0, Complex{ re, im }, tracking_sample_counter))
	}

	fn at_end(&mut self) -> io::Result<bool> {
		let buf = self.src.fill_buf()?;
		Ok(buf.is_empty())
	}

}

impl<R: BufRead> Iterator for SymbolSource<R> {
	type Item = GnssSynchro;

	fn next(&mut self) -> Option<GnssSynchro> {
		match self.at_end() {
			Ok(true) => return None,
			Ok(false) => (),
			Err(e) => {
				warn!("Unable to read symbol record {}: {}", self.idx, e);
				return None;
			}
		}

		match self.read_record() {
			Ok(symbol) => {
				self.idx += 1;
				Some(symbol)
			},
			Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
				warn!("Truncated symbol record {} at end of input", self.idx);
				None
			},
			Err(e) => {
				warn!("Unable to read symbol record {}: {}", self.idx, e);
				None
			}
		}
	}
}
