//! Line-delimited JSON event-file reading.

use crate::error::{Error, Result};
use crate::event::EventRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader over a line-delimited JSON event file.
///
/// Each non-blank line is one event record. Iteration yields events in
/// file order; a malformed line is reported with its line number and does
/// not consume the rest of the file.
pub struct EventFileReader<R> {
    reader: R,
    line: usize,
}

impl EventFileReader<BufReader<File>> {
    /// Opens an event file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> EventFileReader<R> {
    /// Wraps an already-buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// Reads all remaining events into memory.
    pub fn read_all(self) -> Result<Vec<EventRecord>> {
        self.collect()
    }
}

impl<R: BufRead> Iterator for EventFileReader<R> {
    type Item = Result<EventRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut buf = String::new();
            self.line += 1;
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    if buf.trim().is_empty() {
                        continue;
                    }
                    return Some(serde_json::from_str(&buf).map_err(|source| {
                        Error::MalformedEvent {
                            line: self.line,
                            source,
                        }
                    }));
                }
                Err(err) => return Some(Err(Error::Io(err))),
            }
        }
    }
}
