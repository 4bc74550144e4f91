//! Stop words: the phrase boundaries and noise words that never make a craving
//!
//! The set is built once per run and only ever read afterward.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use farm::FarmSet;
use errors::*;

/// Twitter's HTML escaping leaves "amp" behind from every "&amp;"
pub const EXTRA_STOP_WORD: &str = "amp";

/// Built-in English list, one word per line
const DEFAULT_STOP_WORDS: &str = include_str!("stopwords.txt");

#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: FarmSet<String>,
}

impl StopWordSet {
    /// Build from any list of words. Words are lowercased and "amp" is always added.
    pub fn from_words<I, S>(words: I) -> Self
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut set: FarmSet<String> = words.into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        set.insert(EXTRA_STOP_WORD.to_string());
        StopWordSet { words: set }
    }

    /// The embedded English list
    pub fn english() -> Self {
        StopWordSet::from_words(DEFAULT_STOP_WORDS.lines())
    }

    /// Read a newline-separated list. A list we can't open is fatal for the whole run.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| Error::MissingFile("stop word list", Some(e)))?;
        let mut words = vec![];
        for line in BufReader::new(file).lines() {
            words.push(line?);
        }
        info!("Loaded {} stop words from {}", words.len(), path.as_ref().display());
        Ok(StopWordSet::from_words(words))
    }

    /// Either the file given on the command line or the built-in list
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => StopWordSet::load(p),
            None => Ok(StopWordSet::english()),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
