//! Module configuration.

use crate::error::{Error, Result};
use effmap_io::CALIBRATED_DATA_LABEL;
use std::path::PathBuf;

/// Configuration of the efficiency module.
///
/// A single recognized processing option, the bank label, plus the output
/// sink path. The only supported label is the calibrated-data label; any
/// other value is rejected at initialization, before the first event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Label of the event bank to count hits from.
    pub bank_label: String,
    /// Path of the efficiency output file, truncated on each finalize.
    pub output_path: PathBuf,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            bank_label: CALIBRATED_DATA_LABEL.to_owned(),
            output_path: PathBuf::from("/tmp/efficiency.dat"),
        }
    }
}

impl ModuleConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bank label.
    #[must_use]
    pub fn with_bank_label(mut self, label: impl Into<String>) -> Self {
        self.bank_label = label.into();
        self
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Checks that the configuration is supported.
    ///
    /// # Errors
    /// [`Error::UnsupportedBankLabel`] for any label other than the
    /// calibrated-data label.
    pub fn validate(&self) -> Result<()> {
        if self.bank_label != CALIBRATED_DATA_LABEL {
            return Err(Error::UnsupportedBankLabel(self.bank_label.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ModuleConfig::new();
        assert_eq!(config.bank_label, CALIBRATED_DATA_LABEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsupported_label_rejected() {
        let config = ModuleConfig::new().with_bank_label("PTD");
        assert!(matches!(
            config.validate(),
            Err(Error::UnsupportedBankLabel(label)) if label == "PTD"
        ));
    }

    #[test]
    fn test_builders() {
        let config = ModuleConfig::new().with_output_path("/tmp/out.dat");
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.dat"));
    }
}
