use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::ByteRecord;

use crate::errors::GenerationError;

use super::{persist, prepare_parent, temp_path};

/// Write header and rows as CSV, returning the number of bytes written.
/// Rows may have different lengths and need not be UTF-8; malformed rows are
/// written as they came.
pub fn write_records_csv<'a>(
    path: &Path,
    header: &ByteRecord,
    rows: impl IntoIterator<Item = &'a ByteRecord>,
) -> Result<u64, GenerationError> {
    prepare_parent(path)?;
    let tmp_path = temp_path(path)?;
    let result = write_to(&tmp_path, header, rows);
    match result {
        Ok(bytes) => {
            persist(&tmp_path, path)?;
            Ok(bytes)
        }
        Err(err) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(err)
        }
    }
}

fn write_to<'a>(
    path: &Path,
    header: &ByteRecord,
    rows: impl IntoIterator<Item = &'a ByteRecord>,
) -> Result<u64, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(counting);

    writer.write_byte_record(header)?;
    for row in rows {
        writer.write_byte_record(row)?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    counting.inner.get_ref().sync_all()?;
    Ok(counting.bytes_written())
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
