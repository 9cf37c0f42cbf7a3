//! Optimization requests: validation and part-count expansion.

use std::collections::HashSet;

use crate::geometry::{Part, PartId, StockSheet};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of unit parts a single request may expand into.
pub const MAX_TOTAL_PARTS: usize = 1_000_000;

/// One line of a cutting list: a part size and how many of it are needed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartRequest {
    /// Client-side identifier. Ignored by expansion, which assigns its own ids.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: u32,
    /// Part width.
    pub width: f64,
    /// Part height.
    pub height: f64,
    /// Number of identical parts.
    #[cfg_attr(feature = "serde", serde(default = "default_count"))]
    pub count: u32,
}

impl PartRequest {
    /// Creates a request line for `count` parts of the given size.
    pub fn new(width: f64, height: f64, count: u32) -> Self {
        Self {
            id: 0,
            width,
            height,
            count,
        }
    }
}

#[cfg(feature = "serde")]
fn default_count() -> u32 {
    1
}

/// A cutting list together with the stock sheet template to cut it from.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizationRequest {
    /// Request lines, in the order the user entered them.
    pub parts: Vec<PartRequest>,
    /// Sheet template.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sheet: StockSheet,
}

impl OptimizationRequest {
    /// Creates a request for the given lines on the given sheet.
    pub fn new(parts: Vec<PartRequest>, sheet: StockSheet) -> Self {
        Self { parts, sheet }
    }

    /// Demo cutting list on a 2800x2100 sheet with a 4 mm blade.
    pub fn sample() -> Self {
        Self {
            parts: vec![
                PartRequest::new(1000.0, 500.0, 1),
                PartRequest::new(500.0, 500.0, 1),
                PartRequest::new(750.0, 330.0, 1),
            ],
            sheet: StockSheet::default().with_kerf(4.0),
        }
    }

    /// Total number of unit parts after expansion.
    pub fn total_count(&self) -> usize {
        self.parts.iter().map(|p| p.count as usize).sum()
    }

    /// Checks the request before any packing happens.
    pub fn validate(&self) -> Result<()> {
        if self.parts.is_empty() {
            return Err(Error::EmptyDemand);
        }
        self.sheet.validate()?;

        for (line, part) in self.parts.iter().enumerate() {
            if !(part.width.is_finite() && part.width > 0.0)
                || !(part.height.is_finite() && part.height > 0.0)
            {
                return Err(Error::InvalidGeometry(format!(
                    "line {} has invalid size {}x{}",
                    line + 1,
                    part.width,
                    part.height
                )));
            }
            if part.count == 0 {
                return Err(Error::InvalidGeometry(format!(
                    "line {} has count 0",
                    line + 1
                )));
            }
        }

        let total = self.total_count();
        if total > MAX_TOTAL_PARTS {
            return Err(Error::InvalidInput(format!(
                "request expands to {} parts, limit is {}",
                total, MAX_TOTAL_PARTS
            )));
        }
        Ok(())
    }

    /// Validates the request and expands every line into unit parts.
    ///
    /// Ids are assigned 1, 2, 3, ... in request order, so the parts of one
    /// line receive consecutive ids.
    pub fn expand(&self) -> Result<Vec<Part>> {
        self.validate()?;

        let mut parts = Vec::with_capacity(self.total_count());
        let mut next_id: PartId = 1;
        for line in &self.parts {
            for _ in 0..line.count {
                parts.push(Part::new(next_id, line.width, line.height));
                next_id = next_id
                    .checked_add(1)
                    .ok_or_else(|| Error::Internal("part id overflow".to_string()))?;
            }
        }
        log::debug!(
            "expanded {} request lines into {} parts",
            self.parts.len(),
            parts.len()
        );
        Ok(parts)
    }
}

/// Validates a list of unit parts: positive finite sizes and unique ids.
pub fn validate_parts(parts: &[Part]) -> Result<()> {
    let mut seen = HashSet::with_capacity(parts.len());
    for part in parts {
        part.validate()?;
        if !seen.insert(part.id) {
            return Err(Error::InvalidGeometry(format!(
                "duplicate part id {}",
                part.id
            )));
        }
    }
    Ok(())
}
