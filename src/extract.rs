//! Pull the craving out of a tweet
//!
//! Three steps, all of them heuristics:
//!
//! 1. Normalize: keep printable ASCII, drop punctuation, lowercase, split on whitespace, and keep
//!    only what comes after the first "craving".
//! 2. Select candidates: the first two words are taken no matter what, then words up until the
//!    first stop word. "craving ice cream" gets both words without the rest of the sentence.
//! 3. Resolve: drop long words and stop words, then keep one word or hyphenate the first two.
use regex::Regex;
use stopwords::StopWordSet;
use errors::*;

/// The word every tweet in the stream was matched on
pub const ANCHOR: &str = "craving";
/// Candidates this long or longer are usually hashtags or URLs mashed together
pub const MAX_WORD_LEN: usize = 12;
/// Always taken after the anchor, stop word or not
const SEED_WORDS: usize = 2;

/// Strips tweet text down to lowercase ASCII words
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    unprintable: Regex,
    punctuation: Regex,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        Ok(TextNormalizer {
            // Printable ASCII plus the whitespace control characters
            unprintable: Regex::new(r"[^\x20-\x7E\t\n\r\x0B\x0C]")?,
            punctuation: Regex::new(r"[[:punct:]]")?,
        })
    }

    /// Every word after the first "craving", which may be none at all.
    ///
    /// The order matters: unprintable characters go first, then punctuation, then case. So
    /// "#craving" becomes "craving" but "craving's" becomes "cravings" and doesn't count.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        let printable = self.unprintable.replace_all(text, "");
        let bare = self.punctuation.replace_all(&printable, "");
        let lower = bare.to_lowercase();
        let mut words = lower.split_whitespace();
        if words.by_ref().any(|w| w == ANCHOR) {
            Ok(words.map(String::from).collect())
        } else {
            Err(Error::NoCravingToken)
        }
    }
}

/// Take the first two words, then everything up to (not including) the next stop word
pub fn select_candidates<'t>(words: &'t [String], stops: &StopWordSet) -> Vec<&'t str> {
    let seeds = words.iter().take(SEED_WORDS);
    let rest = words.iter().skip(SEED_WORDS).take_while(|w| !stops.contains(w));
    seeds.chain(rest).map(|w| w.as_str()).collect()
}

/// Collapse the candidates into a label, or None if nothing useful survives
pub fn resolve(candidates: &[&str], stops: &StopWordSet) -> Option<String> {
    let kept: Vec<&str> = candidates.iter()
        .cloned()
        .filter(|w| w.len() < MAX_WORD_LEN && !stops.contains(w))
        .collect();
    match kept.len() {
        0 => None,
        1 => Some(kept[0].to_string()),
        _ => Some(kept[..2].join("-")),
    }
}

/// The whole pipeline with its configuration attached
pub struct Extractor<'s> {
    normalizer: TextNormalizer,
    stops: &'s StopWordSet,
}

impl<'s> Extractor<'s> {
    pub fn new(stops: &'s StopWordSet) -> Result<Self> {
        Ok(Extractor {
            normalizer: TextNormalizer::new()?,
            stops: stops,
        })
    }

    /// Ok(None) means "craving" was there but nothing after it made the cut
    pub fn extract(&self, text: &str) -> Result<Option<String>> {
        let words = self.normalizer.normalize(text)?;
        let candidates = select_candidates(&words, self.stops);
        Ok(resolve(&candidates, self.stops))
    }
}
