//! effmap-io: Event-record I/O and efficiency output writing.
//!
//! This crate provides the bank-structured event model consumed by the
//! pipeline, a line-delimited JSON reader over event files, and the
//! plain-text writer for emitted efficiency records.
//!

mod error;
pub mod event;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use event::{
    CalibratedBank, CalorimeterHit, EventRecord, TrackerHit, CALIBRATED_DATA_LABEL,
};
pub use reader::EventFileReader;
pub use writer::{dump_raw_counts, EfficiencyWriter};
