use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::GenerationError;

/// Write records as CSV with a header row and no index column.
///
/// Returns the number of bytes written.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<u64, GenerationError> {
    let file = File::create(path)?;
    let counting = CountingWriter::new(BufWriter::new(file));
    let mut writer = csv::Writer::from_writer(counting);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

/// Read a whole table back from disk.
///
/// Dependent stages sample foreign keys from what was actually persisted,
/// not from the in-memory rows.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, GenerationError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
