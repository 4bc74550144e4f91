//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::num;
use std::fmt;
use serde_json;
use regex;
use rusqlite;

/// Type alias for craving errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for many kinds of errors occuring while reading tweets and writing cravings
#[derive(Debug)]
pub enum Error {
    /// The tweet never says "craving" once punctuation is gone
    NoCravingToken,
    MalformedTimestamp(String),
    ParseError(serde_json::Error),
    RegexError(regex::Error),
    SqliteError(rusqlite::Error),
    IOError(io::Error),
    ParseFloatError(num::ParseFloatError),
    ParseIntError(num::ParseIntError),
    MissingFile(&'static str, Option<io::Error>),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NoCravingToken => write!(f, "No 'craving' token after normalization"),
            Error::MalformedTimestamp(ref stamp) => write!(f,
                "Expected a timestamp like 'Mon Jan 01 12:00:00 +0000 2024' but got {:?}",
                stamp),
            Error::ParseError(ref err) => write!(f, "Malformed tweet record: {}", err),
            Error::RegexError(ref err) => write!(f, "Regex error: {}", err),
            Error::SqliteError(ref err) => write!(f, "SQLite error: {}", err),
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::ParseFloatError(ref err) => write!(f, "Error parsing float: {}", err),
            Error::ParseIntError(ref err) => write!(f, "Error parsing integer: {}", err),
            Error::MissingFile(ref info, ref opt_err) => {
                write!(f,
                    "The {} must already exist at this point but there was a problem opening it. \
                    Wrong directory? Maybe missed a step? The OS error was: ",
                    info)?;
                if let Some(ref err) = *opt_err { err.fmt(f) }
                else { write!(f, "Unknown") }
            },
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::NoCravingToken => None,
            Error::MalformedTimestamp(_) => None,
            Error::ParseError(ref err) => Some(err),
            Error::RegexError(ref err) => Some(err),
            Error::SqliteError(ref err) => Some(err),
            Error::IOError(ref err) => Some(err),
            Error::ParseFloatError(ref err) => Some(err),
            Error::ParseIntError(ref err) => Some(err),
            Error::MissingFile(_, ref opt_err) => opt_err.as_ref().map(|e| e as &(dyn error::Error + 'static)),
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err)
    }
}
impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::RegexError(err)
    }
}
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::SqliteError(err)
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<num::ParseFloatError> for Error {
    fn from(err: num::ParseFloatError) -> Self {
        Error::ParseFloatError(err)
    }
}
impl From<num::ParseIntError> for Error {
    fn from(err: num::ParseIntError) -> Self {
        Error::ParseIntError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn missing_file_names_the_resource() {
        let err = Error::MissingFile("stop word list",
            Some(io::Error::new(io::ErrorKind::NotFound, "gone")));
        let msg = err.to_string();
        assert!(msg.contains("stop word list"));
        assert!(msg.ends_with("gone"));
        assert!(err.source().is_some());
    }

    #[test]
    fn json_errors_convert() {
        let err: Error = serde_json::from_str::<u32>("{").unwrap_err().into();
        match err {
            Error::ParseError(_) => {},
            other => panic!("unexpected {:?}", other),
        }
    }
}
