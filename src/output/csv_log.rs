use crate::errors::Result;
use crate::models::record::CycleRecord;
use crate::simulation::cycle::CycleSink;
use csv::Writer;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Per-cycle CSV table. The header row comes from the serde field names of
/// [`CycleRecord`] and is written together with the first row.
pub struct CycleLog<W: Write> {
    writer: Writer<W>,
}

impl CycleLog<File> {
    /// Creates `path`, and its parent directory if needed.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> CycleLog<W> {
    pub fn from_writer(inner: W) -> Self {
        CycleLog {
            writer: Writer::from_writer(inner),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| {
            let err = e.error();
            io::Error::new(err.kind(), err.to_string()).into()
        })
    }
}

impl<W: Write> CycleSink for CycleLog<W> {
    fn record(&mut self, record: &CycleRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }
}
