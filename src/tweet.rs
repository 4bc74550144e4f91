//! Tweets as they come off the streaming API, one JSON object per line
//!
//! Only the fields we need are kept. Everything else in the object is ignored.
use serde::Deserialize;
use serde_json;
use serde_json::Value;
use errors::*;

/// A point on the map, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    /// GeoJSON point: `{"type": "Point", "coordinates": [longitude, latitude]}`.
    ///
    /// Anything else is treated as untagged. Bad geodata costs the tweet its map row, not its
    /// craving.
    fn from_point(point: &Value) -> Option<Coordinates> {
        match point.get("coordinates").and_then(Value::as_array).map(|v| v.as_slice()) {
            Some(&[ref lon, ref lat]) => Some(Coordinates {
                longitude: lon.as_f64()?,
                latitude: lat.as_f64()?,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawTweet {
    text: String,
    created_at: String,
    #[serde(default)]
    coordinates: Option<Value>,
}

/// One tweet
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub text: String,
    /// Like "Mon Jan 01 12:00:00 +0000 2024"
    pub created_at: String,
    pub coordinates: Option<Coordinates>,
}

impl Post {
    /// Parse one line of the stream. Deletes, rate limit notices and garbage are all errors.
    pub fn parse(line: &str) -> Result<Post> {
        let raw: RawTweet = serde_json::from_str(line)?;
        Ok(Post {
            text: raw.text,
            created_at: raw.created_at,
            coordinates: raw.coordinates.as_ref().and_then(Coordinates::from_point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_tweet() {
        let post = Post::parse(r#"{"text": "craving pie", "created_at": "Mon Jan 01 12:00:00 +0000 2024", "id": 7}"#).unwrap();
        assert_eq!(post.text, "craving pie");
        assert_eq!(post.created_at, "Mon Jan 01 12:00:00 +0000 2024");
        assert_eq!(post.coordinates, None);
    }

    #[test]
    fn null_coordinates_are_absent() {
        let post = Post::parse(r#"{"text": "x", "created_at": "y", "coordinates": null}"#).unwrap();
        assert_eq!(post.coordinates, None);
    }

    #[test]
    fn geojson_point_is_longitude_first() {
        let post = Post::parse(r#"{"text": "x", "created_at": "y",
            "coordinates": {"type": "Point", "coordinates": [-73.99, 40.73]}}"#).unwrap();
        assert_eq!(post.coordinates, Some(Coordinates { longitude: -73.99, latitude: 40.73 }));
    }

    #[test]
    fn odd_coordinates_keep_the_tweet() {
        for coords in &["{}", "[1.0, 2.0]", "\"here\"",
                        r#"{"type": "Point", "coordinates": [1.0, 2.0, 3.0]}"#,
                        r#"{"type": "Point", "coordinates": ["east", "north"]}"#,
                        r#"{"type": "Point", "coordinates": [1.0]}"#] {
            let line = format!(r#"{{"text": "craving pie", "created_at": "y", "coordinates": {}}}"#, coords);
            let post = Post::parse(&line).unwrap();
            assert_eq!(post.text, "craving pie");
            assert_eq!(post.coordinates, None, "{} should count as untagged", coords);
        }
    }

    #[test]
    fn stream_noise_is_rejected() {
        assert!(Post::parse(r#"{"delete": {"status": {"id": 1}}}"#).is_err());
        assert!(Post::parse(r#"{"limit": {"track": 12}}"#).is_err());
        assert!(Post::parse("").is_err());
        assert!(Post::parse("{\"text\": \"craving pie\"").is_err());
    }
}
