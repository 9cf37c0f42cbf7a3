//! Configuration for sheet cutting optimization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_sheetcut_core::StockSheet;

/// Configuration parameters for the sheet-filling scheduler.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CuttingConfig {
    /// Also derive the two-cuts-per-part saw sequence for every sheet.
    /// The placement stream is always produced.
    pub saw_instructions: bool,

    /// Sheet template for [`SheetFillingScheduler::solve_on_default_sheet`].
    /// Default: 2800 x 2100 with a 4 mm blade.
    ///
    /// Only API callers that hold bare parts use it. A deserialized
    /// [`OptimizationRequest`] always carries a sheet; when the JSON omits
    /// one it gets [`StockSheet::default`] (kerf 3) instead.
    ///
    /// [`SheetFillingScheduler::solve_on_default_sheet`]: crate::SheetFillingScheduler::solve_on_default_sheet
    /// [`OptimizationRequest`]: u_sheetcut_core::OptimizationRequest
    pub default_sheet: StockSheet,
}

impl Default for CuttingConfig {
    fn default() -> Self {
        Self {
            saw_instructions: false,
            default_sheet: StockSheet::default().with_kerf(4.0),
        }
    }
}

impl CuttingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the saw instruction stream.
    pub fn with_saw_instructions(mut self, enabled: bool) -> Self {
        self.saw_instructions = enabled;
        self
    }

    /// Sets the fallback sheet template.
    pub fn with_default_sheet(mut self, sheet: StockSheet) -> Self {
        self.default_sheet = sheet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CuttingConfig::default();
        assert!(!config.saw_instructions);
        assert_eq!(config.default_sheet.width, 2800.0);
        assert_eq!(config.default_sheet.height, 2100.0);
        assert_eq!(config.default_sheet.kerf, 4.0);
    }

    #[test]
    fn test_builder() {
        let config = CuttingConfig::new()
            .with_saw_instructions(true)
            .with_default_sheet(StockSheet::new(1220.0, 2440.0, 3.2));

        assert!(config.saw_instructions);
        assert_eq!(config.default_sheet.width, 1220.0);
        assert_eq!(config.default_sheet.kerf, 3.2);
    }
}
