//! Optimization result representation.

use crate::geometry::{PartId, StockSheet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis a saw cut runs along, named by the coordinate it fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CutAxis {
    /// Vertical cut at a fixed x.
    X,
    /// Horizontal cut at a fixed y.
    Y,
}

/// A part placed on a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlacedPart {
    /// The placed part.
    pub part_id: PartId,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Placed width.
    pub w: f64,
    /// Placed height.
    pub h: f64,
    /// Number of the step at which the part is cut free.
    pub finished_at_step: u32,
}

impl PlacedPart {
    /// Returns the footprint area.
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Returns true if the interiors of the two footprints intersect.
    pub fn overlaps(&self, other: &PlacedPart) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// One instruction in a sheet's cut sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CutStep {
    /// 1-based, contiguous within a sheet.
    pub step_number: u32,
    /// Operator-facing text.
    pub description: String,
    /// Cut axis, `None` for non-cutting steps such as mounting the sheet.
    pub axis: Option<CutAxis>,
    /// Blade position along the axis.
    pub cut_value: f64,
    /// Whether a part comes free with this step.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_part_finished: bool,
    /// The part that comes free, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub finished_part_id: Option<PartId>,
}

/// Layout and cut sequence for one physical sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CuttingResult {
    /// The physical sheet (template stamped with its id).
    pub sheet: StockSheet,
    /// Parts placed on this sheet, in placement order.
    pub layout: Vec<PlacedPart>,
    /// One step per placement, after the mounting step.
    pub steps: Vec<CutStep>,
    /// Two-cuts-per-part saw sequence derived from the finished free-space tree.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub saw_steps: Option<Vec<CutStep>>,
}

impl CuttingResult {
    /// Creates an empty result for a sheet.
    pub fn new(sheet: StockSheet) -> Self {
        Self {
            sheet,
            layout: Vec::new(),
            steps: Vec::new(),
            saw_steps: None,
        }
    }

    /// Total area of the placed parts.
    pub fn used_area(&self) -> f64 {
        self.layout.iter().map(PlacedPart::area).sum()
    }

    /// Fraction of the sheet covered by parts (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let area = self.sheet.area();
        if area > 0.0 {
            self.used_area() / area
        } else {
            0.0
        }
    }

    /// Returns true if nothing was placed on this sheet.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }
}

/// Result of a complete optimization run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationResult {
    /// Per-sheet results in production order.
    pub sheets: Vec<CuttingResult>,
    /// Parts dropped because they do not fit an empty sheet.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unplaced: Vec<PartId>,
}

impl OptimizationResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of physical sheets produced.
    pub fn sheets_used(&self) -> usize {
        self.sheets.len()
    }

    /// Number of parts placed across all sheets.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.layout.len()).sum()
    }

    /// Returns true if every requested part was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Finds the sheet and placement of a part.
    pub fn find_part(&self, id: PartId) -> Option<(&CuttingResult, &PlacedPart)> {
        self.sheets.iter().find_map(|sheet| {
            sheet
                .layout
                .iter()
                .find(|p| p.part_id == id)
                .map(|placed| (sheet, placed))
        })
    }

    /// Overall utilization across all produced sheets (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let total: f64 = self.sheets.iter().map(|s| s.sheet.area()).sum();
        if total > 0.0 {
            self.sheets.iter().map(CuttingResult::used_area).sum::<f64>() / total
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}

/// Summary statistics for an optimization result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SolveSummary {
    /// Total parts requested.
    pub total_requested: usize,
    /// Total parts placed.
    pub total_placed: usize,
    /// Sheets produced.
    pub sheets_used: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
}

impl From<&OptimizationResult> for SolveSummary {
    fn from(result: &OptimizationResult) -> Self {
        let placed = result.placed_count();
        Self {
            total_requested: placed + result.unplaced.len(),
            total_placed: placed,
            sheets_used: result.sheets_used(),
            utilization_percent: result.utilization() * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(part_id: PartId, x: f64, y: f64, w: f64, h: f64) -> PlacedPart {
        PlacedPart {
            part_id,
            x,
            y,
            w,
            h,
            finished_at_step: 2,
        }
    }

    #[test]
    fn test_result_new() {
        let result = OptimizationResult::new();
        assert!(result.sheets.is_empty());
        assert_eq!(result.utilization(), 0.0);
        assert!(result.all_placed());
    }

    #[test]
    fn test_overlap_detection() {
        let a = placed(1, 0.0, 0.0, 50.0, 50.0);
        let touching = placed(2, 50.0, 0.0, 50.0, 50.0);
        let crossing = placed(3, 49.0, 49.0, 10.0, 10.0);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
    }

    #[test]
    fn test_utilization() {
        let mut sheet = CuttingResult::new(StockSheet::new(100.0, 100.0, 0.0).instance(1));
        sheet.layout.push(placed(1, 0.0, 0.0, 50.0, 100.0));
        let empty = CuttingResult::new(StockSheet::new(100.0, 100.0, 0.0).instance(2));

        assert!((sheet.utilization() - 0.5).abs() < 1e-12);

        let result = OptimizationResult {
            sheets: vec![sheet, empty],
            unplaced: vec![7],
        };
        assert!((result.utilization() - 0.25).abs() < 1e-12);
        assert_eq!(result.utilization_percent(), "25.0%");
        assert!(!result.all_placed());
    }

    #[test]
    fn test_find_part() {
        let mut first = CuttingResult::new(StockSheet::new(100.0, 100.0, 0.0).instance(1));
        first.layout.push(placed(4, 0.0, 0.0, 10.0, 10.0));
        let mut second = CuttingResult::new(StockSheet::new(100.0, 100.0, 0.0).instance(2));
        second.layout.push(placed(9, 0.0, 0.0, 10.0, 10.0));
        let result = OptimizationResult {
            sheets: vec![first, second],
            unplaced: Vec::new(),
        };

        let (sheet, part) = result.find_part(9).unwrap();
        assert_eq!(sheet.sheet.id, 2);
        assert_eq!(part.part_id, 9);
        assert!(result.find_part(5).is_none());
    }

    #[test]
    fn test_solve_summary() {
        let mut sheet = CuttingResult::new(StockSheet::new(10.0, 10.0, 0.0).instance(1));
        sheet.layout.push(placed(1, 0.0, 0.0, 10.0, 5.0));
        let result = OptimizationResult {
            sheets: vec![sheet],
            unplaced: vec![2, 3],
        };

        let summary = SolveSummary::from(&result);
        assert_eq!(summary.total_requested, 3);
        assert_eq!(summary.total_placed, 1);
        assert_eq!(summary.sheets_used, 1);
        assert_eq!(summary.utilization_percent, 50.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_field_names() {
        let step = CutStep {
            step_number: 1,
            description: "mount".to_string(),
            axis: None,
            cut_value: 0.0,
            is_part_finished: false,
            finished_part_id: None,
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["stepNumber"], 1);
        assert!(json["axis"].is_null());
        assert!(json.get("finishedPartId").is_none());

        let json = serde_json::to_value(placed(3, 1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json["partId"], 3);
        assert_eq!(json["finishedAtStep"], 2);

        assert_eq!(serde_json::to_value(CutAxis::Y).unwrap(), "y");
    }
}
