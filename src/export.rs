//! Geotagged cravings as CSV
//!
//! Only records with coordinates make it into the file. Untagged tweets still count toward the
//! most common cravings, they just can't go on a map.
use std::io::Write;
use aggregate::Record;
use hour::local_hour;
use errors::*;

pub const HEADER: &str = "Hour,Longitude,Latitude,Craving";

/// One CSV row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub hour: u32,
    pub longitude: f64,
    pub latitude: f64,
    pub craving: String,
}

/// Rows for every record with coordinates. Records with unreadable timestamps are dropped.
pub fn rows(records: &[Record]) -> Vec<Row> {
    records.iter()
        .filter_map(|rec| rec.coords.map(|c| (rec, c)))
        .filter_map(|(rec, c)| match local_hour(&rec.date, c.longitude) {
            Ok(hour) => Some(Row {
                hour: hour,
                longitude: c.longitude,
                latitude: c.latitude,
                craving: rec.label.clone(),
            }),
            Err(err) => {
                warn!("Not exporting {:?}: {}", rec.label, err);
                None
            }
        })
        .collect()
}

/// Write the header and the rows, returning how many rows were written
pub fn write_csv<W: Write>(records: &[Record], mut writer: W) -> Result<usize> {
    let rows = rows(records);
    writeln!(writer, "{}", HEADER)?;
    for row in &rows {
        writeln!(writer, "{},{},{},{}", row.hour, row.longitude, row.latitude, row.craving)?;
    }
    writer.flush()?;
    info!("Exported {} of {} records", rows.len(), records.len());
    Ok(rows.len())
}
