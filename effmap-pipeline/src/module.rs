//! The efficiency processing module and its lifecycle.

use crate::config::ModuleConfig;
use crate::emitter::ResultEmitter;
use crate::error::{Error, Result};
use effmap_core::{Category, CountMap, HitAccumulator};
use effmap_geometry::{DetectorModel, SubsystemClassifier};
use effmap_io::{EfficiencyWriter, EventRecord};
use std::fmt;
use std::path::PathBuf;

/// Lifecycle state of a processing module.
///
/// Transitions are one-way: Uninitialized, then Ready, then Closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// Constructed, not yet configured.
    Uninitialized,
    /// Initialized and accepting events.
    Ready,
    /// Finalized; results written, no further input.
    Closed,
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModuleState::Uninitialized => "uninitialized",
            ModuleState::Ready => "ready",
            ModuleState::Closed => "closed",
        })
    }
}

/// Per-event outcome of [`Module::process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Event fully processed.
    Continue,
    /// Processing of this event stopped (e.g. expected bank absent).
    /// Accumulated state from earlier events is untouched.
    Stop,
}

/// A host-style processing module: configured once, fed events one at a
/// time, finalized once at teardown.
pub trait Module: Send {
    /// Registered name of the module.
    fn name(&self) -> &'static str;

    /// Configures the module against the detector geometry.
    fn initialize(&mut self, config: &ModuleConfig, geometry: &DetectorModel) -> Result<()>;

    /// Processes one event record.
    fn process(&mut self, event: &EventRecord) -> Result<ProcessStatus>;

    /// Closes accumulation, classifies and normalizes counts, and writes
    /// the efficiency map.
    fn finalize(&mut self) -> Result<()>;
}

/// The detector-efficiency module.
///
/// Counts calorimeter and tracker hits per channel over the event stream;
/// at finalize, each channel is classified into its subsystem, normalized
/// against the most-hit channel of its category, and written as one output
/// line. Finalize on an already-closed module is a no-op: closed state is
/// never re-mutated and output is never duplicated.
pub struct EfficiencyModule {
    state: ModuleState,
    bank_label: String,
    output_path: PathBuf,
    classifier: Option<SubsystemClassifier>,
    accumulator: HitAccumulator,
}

impl EfficiencyModule {
    /// Registered module name.
    pub const NAME: &'static str = "detector_efficiency";

    /// Creates an uninitialized module.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ModuleState::Uninitialized,
            bank_label: String::new(),
            output_path: PathBuf::new(),
            classifier: None,
            accumulator: HitAccumulator::new(),
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ModuleState {
        self.state
    }

    /// Returns the frozen count map for `category`; valid once finalized.
    ///
    /// Unclassified channels stay present here even though they are absent
    /// from the written output.
    pub fn snapshot(&self, category: Category) -> Result<&CountMap> {
        Ok(self.accumulator.snapshot(category)?)
    }

    fn expect_state(&self, operation: &'static str, expected: ModuleState) -> Result<()> {
        if self.state != expected {
            return Err(Error::InvalidState {
                operation,
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }
}

impl Default for EfficiencyModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for EfficiencyModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(&mut self, config: &ModuleConfig, geometry: &DetectorModel) -> Result<()> {
        self.expect_state("initialize", ModuleState::Uninitialized)?;
        config.validate()?;

        self.bank_label = config.bank_label.clone();
        self.output_path = config.output_path.clone();
        self.classifier = Some(geometry.classifier());
        self.state = ModuleState::Ready;
        tracing::info!(
            bank_label = %self.bank_label,
            output = %self.output_path.display(),
            "efficiency module initialized"
        );
        Ok(())
    }

    fn process(&mut self, event: &EventRecord) -> Result<ProcessStatus> {
        self.expect_state("process", ModuleState::Ready)?;

        let Some(bank) = event.bank(&self.bank_label) else {
            tracing::error!(
                bank_label = %self.bank_label,
                "could not find any bank with the configured label"
            );
            return Ok(ProcessStatus::Stop);
        };

        for hit in &bank.calorimeter_hits {
            self.accumulator.record(Category::Calorimeter, hit.id)?;
        }
        for hit in &bank.tracker_hits {
            self.accumulator.record(Category::DriftCell, hit.id)?;
        }
        tracing::debug!(
            calorimeter_hits = bank.calorimeter_hits.len(),
            tracker_hits = bank.tracker_hits.len(),
            "event recorded"
        );
        Ok(ProcessStatus::Continue)
    }

    fn finalize(&mut self) -> Result<()> {
        match self.state {
            ModuleState::Uninitialized => {
                return Err(Error::InvalidState {
                    operation: "finalize",
                    expected: ModuleState::Ready,
                    actual: self.state,
                })
            }
            ModuleState::Closed => return Ok(()),
            ModuleState::Ready => {}
        }

        self.accumulator.close();
        // Ready state implies initialize installed the classifier.
        let classifier = self.classifier.as_ref().ok_or(Error::InvalidState {
            operation: "finalize",
            expected: ModuleState::Ready,
            actual: ModuleState::Uninitialized,
        })?;
        let emitter = ResultEmitter::new(classifier);

        let mut writer = EfficiencyWriter::create(&self.output_path)?;
        for category in Category::ALL {
            let counts = self.accumulator.snapshot(category)?;
            let records = emitter.emit(category, counts);
            tracing::info!(
                %category,
                channels = counts.len(),
                emitted = records.len(),
                "efficiency map written"
            );
            writer.write_records(&records)?;
        }

        self.state = ModuleState::Closed;
        Ok(())
    }
}
