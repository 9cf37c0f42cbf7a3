//! Part and stock sheet geometry.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a unit part within one optimization run.
pub type PartId = u32;

/// Identifier of a physical sheet within one optimization run (1-based).
pub type SheetId = u32;

/// A rectangular part to be cut, already expanded to unit quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Unique identifier within the run.
    pub id: PartId,
    /// Width along the sheet's x axis.
    pub width: f64,
    /// Height along the sheet's y axis.
    pub height: f64,
}

impl Part {
    /// Creates a new part.
    pub fn new(id: PartId, width: f64, height: f64) -> Self {
        Self { id, width, height }
    }

    /// Returns the area of the part.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the part could fit an empty sheet of the given size.
    pub fn fits_within(&self, sheet: &StockSheet) -> bool {
        self.width <= sheet.width && self.height <= sheet.height
    }

    /// Validates the part and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(Error::InvalidGeometry(format!(
                "part {} has invalid size {}x{}",
                self.id, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// The stock sheet template: size and saw blade width.
///
/// One template is given per request. The scheduler clones it for every
/// physical sheet it opens and stamps the clone with an incrementing id.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StockSheet {
    /// Sheet number (0 for a template, 1.. for physical sheets).
    pub id: SheetId,
    /// Sheet width.
    pub width: f64,
    /// Sheet height.
    pub height: f64,
    /// Material consumed by one saw cut.
    #[cfg_attr(feature = "serde", serde(alias = "kerfSize"))]
    pub kerf: f64,
}

impl Default for StockSheet {
    fn default() -> Self {
        Self {
            id: 0,
            width: 2800.0,
            height: 2100.0,
            kerf: 3.0,
        }
    }
}

impl StockSheet {
    /// Creates a sheet template.
    pub fn new(width: f64, height: f64, kerf: f64) -> Self {
        Self {
            id: 0,
            width,
            height,
            kerf,
        }
    }

    /// Sets the kerf width.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Returns a copy of this template stamped with a physical sheet id.
    pub fn instance(&self, id: SheetId) -> Self {
        Self { id, ..*self }
    }

    /// Returns the area of the sheet.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Validates the sheet and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(Error::InvalidBoundary(format!(
                "sheet size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(Error::InvalidBoundary(format!(
                "kerf {} must be zero or positive",
                self.kerf
            )));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
