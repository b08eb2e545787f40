//! effmap-pipeline: Module lifecycle, result emission and registration.
//!
//! This crate turns the counting engine into a host-style processing
//! module: events are fed one at a time through [`Module::process`], and a
//! single finalize pass classifies, normalizes and writes the efficiency
//! map. Module construction goes through a named-factory registry instead
//! of a host registration macro.
//!

pub mod config;
pub mod emitter;
mod error;
pub mod module;
pub mod registry;

pub use config::ModuleConfig;
pub use emitter::ResultEmitter;
pub use error::{Error, Result};
pub use module::{EfficiencyModule, Module, ModuleState, ProcessStatus};
pub use registry::{ModuleRegistry, EFFICIENCY_MODULE_NAME};
