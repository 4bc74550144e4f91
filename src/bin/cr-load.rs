//! Load an exported CSV (from cr-export) into a SQLite table
//!
//! The table is `Cravings(Hour INT, Longitude REAL, Latitude REAL, Craving TEXT)`. It's created
//! if it doesn't exist yet and rows are appended.

// argument parsing
#[macro_use] extern crate clap;
// logging
extern crate env_logger;
// the database
extern crate rusqlite;
// lastly, this library
extern crate cravings;

use std::fs::File;
use std::io::BufReader;
use rusqlite::Connection;

use cravings::errors::*;
use cravings::db::load_csv;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<csv> 'rows written by cr-export, header first'")
        .arg_from_usage("<database> 'SQLite database file, created if missing'")
        .get_matches();

    let csv = File::open(args.value_of("csv").unwrap())
        .map_err(|e| Error::MissingFile("exported CSV", Some(e)))?;
    let mut conn = Connection::open(args.value_of("database").unwrap())?;
    let loaded = load_csv(&mut conn, BufReader::new(csv))?;
    println!("{}", loaded);
    Ok(())
}
