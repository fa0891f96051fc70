use std::collections::HashMap;
use std::io::prelude::*;

use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use log::warn;

// Everything from this line on describes tasks, not waypoints
pub static TASKS_SENTINEL: &str = "-----Related Tasks-----";

#[derive(Debug)]
pub struct DataFile {
    buf: String,
}

impl DataFile {
    pub fn new<S: Into<String>>(buf: S) -> DataFile {
        DataFile { buf: buf.into() }
    }

    pub fn from_reader<B: Read>(reader: &mut B) -> std::io::Result<DataFile> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(DataFile {
            buf: String::from_utf8_lossy(&buf).into_owned(),
        })
    }

    pub fn waypoint_table(&self) -> &str {
        match self.buf.find(TASKS_SENTINEL) {
            Some(pos) => &self.buf[..pos],
            None => &self.buf,
        }
    }

    pub fn records(&self) -> RecordIter {
        let table = self.waypoint_table().trim_start_matches('\u{feff}');
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(table.as_bytes());
        let header: Vec<String> = reader
            .headers()
            .map(|h| h.iter().map(str::to_lowercase).collect())
            .unwrap_or_default();

        RecordIter {
            records: reader.into_records(),
            header,
        }
    }
}

pub struct RecordIter<'a> {
    records: StringRecordsIntoIter<&'a [u8]>,
    header: Vec<String>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = Record;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.records.next()? {
                Ok(row) => row,
                Err(e) => {
                    warn!("Unreadable row: {}", e);
                    continue;
                }
            };
            if row.iter().all(str::is_empty) {
                continue;
            }
            break Some(Record {
                line: row.position().map_or(0, |p| p.line() as usize),
                fields: self.header.iter().cloned().zip(row.iter().map(String::from)).collect(),
            });
        }
    }
}

/// One row of the waypoint table keyed by (lowercase) column name.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub line: usize,
    fields: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|s| s.as_str())
    }
}
