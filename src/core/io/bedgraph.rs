use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::bufread::GzDecoder;

use crate::core::{Error, Position, Result, TrackRow};

use super::utils::read_compressed;

const POSITION_COLUMN: usize = 1;
const COUNTS_COLUMN: usize = 3;
const COLUMNS: usize = 4;

fn malformed(path: &Path, line: usize, reason: String) -> Error {
    Error::MalformedTrack { path: path.to_path_buf(), line, reason }
}

#[inline]
fn is_header(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("track") || line.starts_with("browser")
}

fn _parse<T: BufRead>(mut reader: T, path: &Path) -> Result<Vec<TrackRow>> {
    let mut records = Vec::new();

    let mut buf = String::new();
    let mut line = 0;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        if read == 0 {
            break;
        }
        line += 1;

        let record = buf.trim_end();
        if record.trim().is_empty() || is_header(record) {
            continue;
        }

        let split: Vec<&str> = record.split('\t').take(COLUMNS).collect();
        if split.len() < COLUMNS {
            return Err(malformed(
                path,
                line,
                format!("expected {} tab-separated columns, got {}", COLUMNS, split.len()),
            ));
        }

        let position = split[POSITION_COLUMN].trim();
        let position: Position = position
            .parse()
            .map_err(|_| malformed(path, line, format!("position \"{}\" is not an integer", position)))?;

        let counts = split[COUNTS_COLUMN].trim();
        let counts: f64 =
            counts.parse().map_err(|_| malformed(path, line, format!("counts \"{}\" is not a number", counts)))?;
        if !counts.is_finite() || counts < 0.0 {
            return Err(malformed(path, line, format!("counts must be a finite non-negative number, got {}", counts)));
        }

        records.push(TrackRow::new(position, counts));
    }
    Ok(records)
}

/// Parses `(position, counts)` pairs from a bedgraph-like file. Files ending with `.gz` are decompressed.
pub fn parse(bedgraph: impl AsRef<Path>) -> Result<Vec<TrackRow>> {
    let bedgraph = bedgraph.as_ref();
    read_compressed!(bedgraph, _parse, bedgraph)
}
