//! Export geotagged cravings
//!
//! Same input as cr-top, but instead of counting, every craving that came with coordinates is
//! written out as `Hour,Longitude,Latitude,Craving`. Hour is local solar time.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate cravings;

use std::fs::File;
use std::io::BufWriter;

use cravings::errors::*;
use cravings::stopwords::StopWordSet;
use cravings::extract::Extractor;
use cravings::aggregate::{aggregate, read_batch};
use cravings::export::write_csv;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<tweets> 'tweets as JSON, one per line'")
        .arg_from_usage("<output> 'CSV file to write'")
        .arg_from_usage("-s, --stopwords=[FILE] 'stop words, one per line, instead of the built-in English list'")
        .get_matches();
    let outname = args.value_of("output").unwrap();

    let stops = StopWordSet::load_or_default(args.value_of("stopwords"))?;
    let extractor = Extractor::new(&stops)?;
    let lines = read_batch(args.value_of("tweets").unwrap())?;
    let (records, _tally) = aggregate(&lines, &extractor);

    let written = write_csv(&records, BufWriter::new(File::create(outname)?))?;
    info!("Wrote {} rows to {}", written, outname);
    Ok(())
}
