//! Reading card sheet lines from files or streams

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read all lines from a reader, dropping `\n` and `\r\n` terminators
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|mut l| {
                if l.ends_with('\r') {
                    l.pop();
                }
                l
            })
            .map_err(Error::Io)
        })
        .collect()
}

/// Read all lines of a sheet file
pub fn read_lines_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_lines(BufReader::new(file)).map_err(|e| match e {
        Error::Io(source) => Error::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Read a sheet named by `location`: a local path, a `file://` URL, or `-`
/// for stdin
pub fn read_source(location: &str) -> Result<Vec<String>> {
    if location == "-" {
        let stdin = std::io::stdin();
        return read_lines(stdin.lock());
    }

    if let Some(path) = location.strip_prefix("file://") {
        return read_lines_from_path(path);
    }

    if location.contains("://") {
        return Err(Error::UnsupportedSource(location.to_string()));
    }

    read_lines_from_path(location)
}
