//! Print the most common cravings
//!
//! Reads a file of tweets from the streaming API (one JSON object per line, tracked on
//! "craving") and prints `craving<TAB>count`, most common first.

// argument parsing
#[macro_use] extern crate clap;
// logging
extern crate env_logger;
// lastly, this library
extern crate cravings;

use cravings::errors::*;
use cravings::stopwords::StopWordSet;
use cravings::extract::Extractor;
use cravings::aggregate::{aggregate, read_batch};
use cravings::report::{most_common, DEFAULT_TOP};

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<tweets> 'tweets as JSON, one per line'")
        .arg_from_usage("-s, --stopwords=[FILE] 'stop words, one per line, instead of the built-in English list'")
        .arg_from_usage("-n, --top=[N] 'how many cravings to list, 25 if not given'")
        .get_matches();
    let top = match args.value_of("top") {
        Some(n) => n.parse()?,
        None => DEFAULT_TOP,
    };

    let stops = StopWordSet::load_or_default(args.value_of("stopwords"))?;
    let extractor = Extractor::new(&stops)?;
    let lines = read_batch(args.value_of("tweets").unwrap())?;
    let (records, _tally) = aggregate(&lines, &extractor);

    for (label, count) in most_common(&records, top) {
        println!("{}\t{}", label, count);
    }
    Ok(())
}
