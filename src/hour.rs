//! Local hour of day from a tweet timestamp and a longitude
//!
//! Twitter stamps everything in UTC like "Mon Jan 01 12:00:00 +0000 2024". We only have the
//! longitude to go on, so local time is solar time: one hour per 15 degrees east.
use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, digit1, one_of, space1};
use nom::combinator::{all_consuming, map_res, recognize};
use nom::sequence::{preceded, terminated, tuple};
use errors::*;

const DEGREES_PER_HOUR: f64 = 15.0;
const HOURS_PER_DAY: i64 = 24;

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

fn clock(input: &str) -> IResult<&str, (u32, u32, u32)> {
    tuple((number, preceded(tag(":"), number), preceded(tag(":"), number)))(input)
}

/// "<weekday> <month> <day> HH:MM:SS <offset> <year>", keeping only the clock
fn timestamp(input: &str) -> IResult<&str, (u32, u32, u32)> {
    let (input, _weekday) = terminated(alpha1, space1)(input)?;
    let (input, _month) = terminated(alpha1, space1)(input)?;
    let (input, _day) = terminated(digit1, space1)(input)?;
    let (input, time) = terminated(clock, space1)(input)?;
    let (input, _offset) = terminated(recognize(preceded(one_of("+-"), digit1)), space1)(input)?;
    let (input, _year) = digit1(input)?;
    Ok((input, time))
}

/// Hour, minute and second in UTC
pub fn utc_clock(stamp: &str) -> Result<(u32, u32, u32)> {
    match all_consuming(timestamp)(stamp.trim()) {
        Ok((_, (h, m, s))) if h < 24 && m < 60 && s < 61 => Ok((h, m, s)),
        _ => Err(Error::MalformedTimestamp(stamp.to_string())),
    }
}

/// Local hour in 0..24.
///
/// Rounds half away from zero before wrapping, so 2.5 is 3 and -2.5 is -3 (which is 21).
pub fn local_hour(stamp: &str, longitude: f64) -> Result<u32> {
    let (h, m, s) = utc_clock(stamp)?;
    let utc = h as f64 + m as f64 / 60.0 + s as f64 / 3600.0;
    let local = (utc + longitude / DEGREES_PER_HOUR).round() as i64;
    Ok(local.rem_euclid(HOURS_PER_DAY) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_clock() {
        assert_eq!(utc_clock("Mon Jan 01 03:30:15 +0000 2024").unwrap(), (3, 30, 15));
    }

    #[test]
    fn greenwich_is_utc() {
        assert_eq!(local_hour("Mon Jan 01 12:00:00 +0000 2024", 0.0).unwrap(), 12);
        assert_eq!(local_hour("Mon Jan 01 12:29:59 +0000 2024", 0.0).unwrap(), 12);
    }

    #[test]
    fn negative_half_rounds_away_from_zero_then_wraps() {
        // 3.5 - 6 = -2.5 -> -3 -> 21
        assert_eq!(local_hour("Mon Jan 01 03:30:00 +0000 2024", -90.0).unwrap(), 21);
    }

    #[test]
    fn positive_half_rounds_up() {
        assert_eq!(local_hour("Mon Jan 01 02:30:00 +0000 2024", 0.0).unwrap(), 3);
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(local_hour("Sun Dec 31 23:00:00 +0000 2023", 30.0).unwrap(), 1);
        assert_eq!(local_hour("Mon Jan 01 23:45:00 +0000 2024", 180.0).unwrap(), 12);
        assert_eq!(local_hour("Mon Jan 01 00:00:00 +0000 2024", -180.0).unwrap(), 12);
        assert_eq!(local_hour("Mon Jan 01 23:40:00 +0000 2024", 0.0).unwrap(), 0);
    }

    #[test]
    fn always_in_range() {
        for hour in 0..24 {
            let stamp = format!("Mon Jan 01 {:02}:30:00 +0000 2024", hour);
            for lon in (-180..181).step_by(7) {
                assert!(local_hour(&stamp, lon as f64).unwrap() < 24);
            }
        }
    }

    #[test]
    fn malformed_timestamps() {
        for stamp in &["2024-01-01T12:00:00Z",
                       "Mon Jan 01 12:00 +0000 2024",
                       "Mon Jan 01 25:00:00 +0000 2024",
                       "Mon Jan 01 12:00:00 +0000",
                       "Mon Jan 01 12:00:00 +0000 2024 extra",
                       ""] {
            match local_hour(stamp, 0.0) {
                Err(Error::MalformedTimestamp(ref s)) => assert_eq!(s, stamp),
                other => panic!("{:?} gave {:?}", stamp, other),
            }
        }
    }
}
