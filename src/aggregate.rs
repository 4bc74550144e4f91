//! Turn a batch of tweet lines into craving records
//!
//! This is build-then-query: `aggregate` returns the finished records and the reports and
//! exports only ever read them afterward.
use std::fs::File;
use std::str;
use std::io::{BufRead, BufReader};
use std::path::Path;
use extract::Extractor;
use tweet::{Coordinates, Post};
use errors::*;

/// A tweet that had a craving in it
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub label: String,
    pub date: String,
    pub coords: Option<Coordinates>,
}

/// Why lines didn't become records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub lines: usize,
    pub malformed: usize,
    pub no_anchor: usize,
    pub no_label: usize,
    pub kept: usize,
}

/// Read the whole input into memory, one tweet per line.
///
/// Lines are kept as bytes. A line that isn't UTF-8 is just another malformed tweet, so it's
/// `aggregate` that decides to skip it, not the reader.
pub fn read_batch<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    let file = File::open(path.as_ref())
        .map_err(|e| Error::MissingFile("tweet file", Some(e)))?;
    let mut lines = vec![];
    for line in BufReader::new(file).split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(line);
    }
    info!("Read {} lines from {}", lines.len(), path.as_ref().display());
    Ok(lines)
}

/// Extract a record from every line that has one, in input order
pub fn aggregate<S: AsRef<[u8]>>(lines: &[S], extractor: &Extractor) -> (Vec<Record>, Tally) {
    let mut records = vec![];
    let mut tally = Tally::default();
    for (line_i, line) in lines.iter().enumerate() {
        tally.lines += 1;
        let text = match str::from_utf8(line.as_ref()) {
            Ok(text) => text,
            Err(err) => {
                debug!("Skipping line {}: {}", line_i, err);
                tally.malformed += 1;
                continue;
            }
        };
        let post = match Post::parse(text) {
            Ok(post) => post,
            Err(err) => {
                debug!("Skipping line {}: {}", line_i, err);
                tally.malformed += 1;
                continue;
            }
        };
        match extractor.extract(&post.text) {
            Ok(Some(label)) => {
                tally.kept += 1;
                records.push(Record {
                    label: label,
                    date: post.created_at,
                    coords: post.coordinates,
                });
            }
            Ok(None) => {
                debug!("Line {} has no usable craving: {:?}", line_i, post.text);
                tally.no_label += 1;
            }
            Err(err) => {
                debug!("Line {}: {}", line_i, err);
                tally.no_anchor += 1;
            }
        }
    }
    info!("Kept {} of {} lines ({} malformed, {} without 'craving', {} without a label)",
        tally.kept, tally.lines, tally.malformed, tally.no_anchor, tally.no_label);
    (records, tally)
}
