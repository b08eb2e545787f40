//! Text output for emitted efficiency records.

use crate::error::Result;
use effmap_core::{CountMap, EfficiencyRecord, Position};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer for the efficiency output sink.
///
/// One text line per record, no header:
/// `<subsystem-name> <x> <y> <z> <ratio>` for calorimeter channels and
/// `<subsystem-name> <x> <y> <ratio>` for drift cells. Creating the writer
/// truncates the target file, so each finalize run rewrites it fully.
pub struct EfficiencyWriter {
    writer: BufWriter<File>,
}

impl EfficiencyWriter {
    /// Creates (and truncates) the output file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Appends one line per record.
    pub fn write_records(&mut self, records: &[EfficiencyRecord]) -> Result<()> {
        for record in records {
            match record.position {
                Position::Block { x, y, z } => writeln!(
                    self.writer,
                    "{} {} {} {} {}",
                    record.subsystem, x, y, z, record.ratio
                )?,
                Position::Cell { x, y } => writeln!(
                    self.writer,
                    "{} {} {} {}",
                    record.subsystem, x, y, record.ratio
                )?,
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Dumps raw `<id> <count>` lines for diagnostics.
///
/// Debugging aid only; no ordering or format contract beyond one channel
/// per line.
pub fn dump_raw_counts<W: Write>(out: &mut W, counts: &CountMap) -> std::io::Result<()> {
    for (id, count) in counts {
        writeln!(out, "{id} {count}")?;
    }
    Ok(())
}
