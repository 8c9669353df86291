use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::bufread::GzDecoder;

use crate::core::{Error, Position, Result};

use super::utils::read_compressed;

fn _parse<T: BufRead>(reader: T, path: &Path) -> Result<Vec<Position>> {
    let mut sites = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        let site = value.parse().map_err(|_| Error::MalformedSites {
            path: path.to_path_buf(),
            line: ind + 1,
            value: value.to_owned(),
        })?;
        sites.push(site);
    }
    Ok(sites)
}

/// One integer position per line. Order and duplicates are preserved.
pub fn parse(sites: impl AsRef<Path>) -> Result<Vec<Position>> {
    let sites = sites.as_ref();
    read_compressed!(sites, _parse, sites)
}

pub fn parse_set(sites: impl AsRef<Path>) -> Result<HashSet<Position>> {
    parse(sites).map(|x| x.into_iter().collect())
}
