
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::warn;

/// Bytes per record: TOW (f64), tracking sample counter (u64), reserved (f64)
pub const DUMP_RECORD_BYTES:usize = 24;

pub fn dump_filename(directory:&Path, channel:usize) -> PathBuf {
	directory.join(format!("telemetry{}.dat", channel))
}

pub fn write_record<W: Write>(w:&mut W, tow_at_current_symbol_s:f64, tracking_sample_counter:u64) -> io::Result<()> {
	w.write_f64::<LittleEndian>(tow_at_current_symbol_s)?;
	w.write_u64::<LittleEndian>(tracking_sample_counter)?;
	w.write_f64::<LittleEndian>(0.0)
}

#[derive(Debug)]
pub struct DumpFile {
	path: PathBuf,
	writer: BufWriter<File>,
}

impl DumpFile {

	pub fn create(path:PathBuf) -> io::Result<Self> {
		let writer = BufWriter::new(File::create(&path)?);
		Ok(Self{ path, writer })
	}

	pub fn path(&self) -> &Path { &self.path }

	pub fn write_record(&mut self, tow_at_current_symbol_s:f64, tracking_sample_counter:u64) -> io::Result<()> {
		write_record(&mut self.writer, tow_at_current_symbol_s, tracking_sample_counter)
	}

}

impl Drop for DumpFile {
	fn drop(&mut self) {
		if let Err(e) = self.writer.flush() {
			warn!("Exception closing the dump file {}: {}", self.path.display(), e);
		}
	}
}

#[cfg(test)]
mod tests {

	use byteorder::ReadBytesExt;

	use super::*;

	#[test]
	fn record_layout() {
		let mut buffer:Vec<u8> = vec![];
		write_record(&mut buffer, 1234.5, 987_654_321).unwrap();
		assert_eq!(buffer.len(), DUMP_RECORD_BYTES);

		let mut rdr = io::Cursor::new(buffer);
		assert_eq!(rdr.read_f64::<LittleEndian>().unwrap(), 1234.5);
		assert_eq!(rdr.read_u64::<LittleEndian>().unwrap(), 987_654_321);
		assert_eq!(rdr.read_f64::<LittleEndian>().unwrap(), 0.0);
	}

	#[test]
	fn filename_from_channel() {
		assert_eq!(dump_filename(Path::new("/tmp"), 7), PathBuf::from("/tmp/telemetry7.dat"));
	}

}
