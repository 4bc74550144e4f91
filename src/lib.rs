//! What is Twitter craving?
//!
//! Helpers for the `cr-` binaries: read a file of tweets that mention "craving", pull a short
//! craving out of each one, count the most common, and export the geotagged ones for mapping.
//!
//! The pipeline is tweet line -> `tweet::Post` -> `extract::Extractor` -> `aggregate::Record`,
//! and then `report` and `export` read the finished records.


#[macro_use] extern crate log;
extern crate nom;
extern crate regex;
extern crate serde;
extern crate serde_json;
extern crate farmhash;
extern crate rusqlite;
#[cfg(test)] extern crate tempfile;
pub mod errors;
pub mod farm;
pub mod stopwords;
pub mod tweet;
pub mod extract;
pub mod aggregate;
pub mod report;
pub mod hour;
pub mod export;
pub mod db;
