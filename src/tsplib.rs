//! Loader for the TSPLIB node-coordinate subset.
//!
//! Only the `NODE_COORD_SECTION` is read: everything before the marker
//! line is skipped, an `EOF` line ends the section, and any record
//! line that does not start with three integers is skipped. The index
//! field of each record is parsed but ignored; cities take their
//! position from file order.

use crate::error::Error;
use crate::tour::City;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads cities from a TSPLIB-style file.
///
/// Fails with [`Error::Io`] if the file cannot be read and with
/// [`Error::InvalidInput`] if no valid coordinate record is found.
pub fn load_cities(path: &Path) -> Result<Vec<City>, Error> {
    let file = File::open(path)?;
    let cities = parse_cities(BufReader::new(file))?;
    log::info!("loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

/// Parses cities from any buffered reader. See [`load_cities`].
pub fn parse_cities<R: BufRead>(reader: R) -> Result<Vec<City>, Error> {
    let mut cities = Vec::new();
    let mut in_section = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line == "NODE_COORD_SECTION" {
            in_section = true;
            continue;
        }
        if line == "EOF" {
            break;
        }
        if !in_section {
            continue;
        }

        let mut fields = line.split_whitespace();
        let record = (fields.next(), fields.next(), fields.next());
        if let (Some(index), Some(x), Some(y)) = record {
            if let (Ok(_), Ok(x), Ok(y)) =
                (index.parse::<i64>(), x.parse::<i32>(), y.parse::<i32>())
            {
                cities.push(City { x, y });
            }
        }
    }

    if cities.is_empty() {
        return Err(Error::InvalidInput(
            "no city records found in NODE_COORD_SECTION".into(),
        ));
    }
    Ok(cities)
}
