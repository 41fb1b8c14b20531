
extern crate clap;
extern crate colored;
extern crate b2a_telemetry;
extern crate serde_json;

use std::path::PathBuf;
use std::process;

use clap::{Arg, App};
use colored::*;
use tokio::sync::mpsc;

use b2a_telemetry::io;
use b2a_telemetry::gnss::satellite::{GnssSystem, Satellite};
use b2a_telemetry::gnss::beidou_b2a::navigation::Cnav2Navigation;
use b2a_telemetry::gnss::beidou_b2a::tlm_decode::{TelemetryConfig, TelemetryDecoder, TelemetryMessage, SyncState};

fn main() {

	let matches = App::new("BeiDou B2a Telemetry Decoder")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Takes BeiDou B2a tracking outputs (one prompt correlator value per symbol) and decodes the B-CNAV2 navigation message")
		.arg(Arg::with_name("filename")
			.short("f").long("filename")
			.help("Input filename; records of f64 prompt I, f64 prompt Q, u64 sample counter, little-endian")
			.required(true).takes_value(true))
		.arg(Arg::with_name("prn")
			.short("p").long("prn")
			.help("PRN assumed until the navigation message provides one")
			.takes_value(true).default_value("0"))
		.arg(Arg::with_name("channel")
			.short("c").long("channel")
			.takes_value(true).default_value("0"))
		.arg(Arg::with_name("dump")
			.short("d").long("dump")
			.help("Write telemetry<channel>.dat with one record per symbol"))
		.arg(Arg::with_name("dump_directory")
			.long("dump_directory")
			.takes_value(true).default_value("."))
		.get_matches();

	tracing_subscriber::fmt().with_writer(std::io::stderr).init();

	let fname:&str = matches.value_of("filename").unwrap_or_default();
	let prn:u32 = parse_or_exit(matches.value_of("prn"), "prn");
	let channel:usize = parse_or_exit(matches.value_of("channel"), "channel");

	let config = TelemetryConfig{
		dump: matches.is_present("dump"),
		dump_directory: PathBuf::from(matches.value_of("dump_directory").unwrap_or(".")),
		..Default::default()
	};

	let source = match io::file_symbol_source(fname) {
		Ok(source) => source,
		Err(e) => {
			eprintln!("{}", format!("Unable to open {}: {}", fname, e).red());
			process::exit(1);
		}
	};

	eprintln!("Decoding {} on channel {}", fname, channel);

	// Navigation data is passed out through a channel as it is decoded
	let (tx, mut rx) = mpsc::unbounded_channel::<TelemetryMessage>();
	let mut decoder = TelemetryDecoder::new(Satellite::new(GnssSystem::Beidou, prn), config, Cnav2Navigation::new(), tx);
	decoder.set_channel(channel);

	let mut num_symbols:usize = 0;
	let mut num_valid:usize = 0;
	let mut num_messages:usize = 0;
	let mut last_state = decoder.sync_state();
	let mut last_tow_s:Option<f64> = None;

	for symbol in source {
		let output = decoder.apply(&symbol);
		num_symbols += 1;

		if output.flag_valid_word {
			num_valid += 1;
			last_tow_s = Some(output.tow_at_current_symbol_s);
		}

		let state = decoder.sync_state();
		if state != last_state {
			match state {
				SyncState::Locked  => eprintln!("{}", format!("{}: frame lock at symbol {}", decoder.satellite(), num_symbols).green()),
				SyncState::PreSync => eprintln!("{}", format!("{}: preamble found at symbol {}", decoder.satellite(), num_symbols).yellow()),
				SyncState::NoLock  => eprintln!("{}", format!("{}: no frame lock at symbol {}", decoder.satellite(), num_symbols).red()),
			}
			last_state = state;
		}

		while let Ok(msg) = rx.try_recv() {
			match serde_json::to_string(&msg) {
				Ok(json) => println!("{}", json),
				Err(e) => eprintln!("{}", format!("Unable to serialize telemetry message: {}", e).red()),
			}
			num_messages += 1;
		}
	}

	eprintln!("{} symbols, {} valid, {} navigation messages", num_symbols, format!("{}", num_valid).green(), num_messages);
	match last_tow_s {
		Some(tow) => eprintln!("{}: last time of week {:.3} [sec]", decoder.satellite(), tow),
		None => eprintln!("{}", format!("{}: time of week never confirmed", decoder.satellite()).yellow()),
	}

}

fn parse_or_exit<T: std::str::FromStr>(value:Option<&str>, name:&str) -> T {
	match value.map(|s| s.parse::<T>()) {
		Some(Ok(x)) => x,
		_ => {
			eprintln!("{}", format!("Invalid value for --{}", name).red());
			process::exit(1);
		}
	}
}
