//! Load an exported CSV into SQLite
use std::io::BufRead;
use rusqlite::{Connection, params};
use export::{HEADER, Row};
use errors::*;

pub const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS Cravings (Hour INT, Longitude REAL, Latitude REAL, Craving TEXT)";
const INSERT_ROW: &str =
    "INSERT INTO Cravings (Hour, Longitude, Latitude, Craving) VALUES (?1, ?2, ?3, ?4)";

/// Parse one line written by `export::write_csv`
pub fn parse_row(line: &str) -> Result<Row> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(Error::Other(format!(
            "Expected 4 comma separated fields ({}) but got {:?}", HEADER, line)));
    }
    Ok(Row {
        hour: fields[0].trim().parse()?,
        longitude: fields[1].trim().parse()?,
        latitude: fields[2].trim().parse()?,
        craving: fields[3].trim().to_string(),
    })
}

/// Create the Cravings table if needed and insert every row after the header.
///
/// All or nothing: one bad row rolls back the whole load.
pub fn load_csv<R: BufRead>(conn: &mut Connection, reader: R) -> Result<usize> {
    conn.execute(CREATE_TABLE, [])?;
    let tx = conn.transaction()?;
    let mut count = 0;
    {
        let mut insert = tx.prepare(INSERT_ROW)?;
        for line in reader.lines().skip(1) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = parse_row(&line)?;
            insert.execute(params![row.hour, row.longitude, row.latitude, row.craving])?;
            count += 1;
        }
    }
    tx.commit()?;
    info!("Loaded {} rows into Cravings", count);
    Ok(count)
}
