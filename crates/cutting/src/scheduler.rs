//! Multi-sheet scheduling.
//!
//! # Algorithm
//!
//! 1. Sort the demand once by area, largest first (stable, so equal areas
//!    keep their input order).
//! 2. Open a fresh sheet and try every pending part in order; parts that do
//!    not fit are carried to the next sheet in the same order.
//! 3. If a pass places nothing, the first pending part cannot fit even an
//!    empty sheet. It is dropped and reported in
//!    [`OptimizationResult::unplaced`].
//! 4. Repeat until nothing is pending.
//!
//! Every pass either places a part or drops one, so the number of sheets is
//! bounded by the number of parts.

use u_sheetcut_core::{
    validate_parts, CuttingResult, OptimizationRequest, OptimizationResult, Part, PlacedPart,
    Result, SheetId, StockSheet,
};

use crate::config::CuttingConfig;
use crate::packer::SpacePacker;
use crate::sequence::{mount_step, placement_step, tree_instructions};

/// Places a demand list across as many copies of one sheet as needed.
#[derive(Debug, Clone, Default)]
pub struct SheetFillingScheduler {
    config: CuttingConfig,
}

/// Outcome of filling a single sheet.
struct SheetPass {
    result: CuttingResult,
    carried: Vec<Part>,
}

impl SheetFillingScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: CuttingConfig) -> Self {
        Self { config }
    }

    /// Creates a scheduler with default configuration.
    pub fn default_config() -> Self {
        Self::new(CuttingConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CuttingConfig {
        &self.config
    }

    /// Validates and expands a request, then solves it on the request's sheet.
    pub fn solve_request(&self, request: &OptimizationRequest) -> Result<OptimizationResult> {
        let parts = request.expand()?;
        self.solve(&parts, &request.sheet)
    }

    /// Solves on the configured default sheet.
    pub fn solve_on_default_sheet(&self, parts: &[Part]) -> Result<OptimizationResult> {
        self.solve(parts, &self.config.default_sheet)
    }

    /// Places `parts` on copies of `sheet`.
    ///
    /// Invalid sheet or part geometry is rejected before any packing. Parts
    /// larger than the sheet are not an error; they end up in `unplaced`.
    pub fn solve(&self, parts: &[Part], sheet: &StockSheet) -> Result<OptimizationResult> {
        sheet.validate()?;
        validate_parts(parts)?;

        let mut result = OptimizationResult::new();
        let mut pending = sort_by_area(parts);
        let mut sheet_id: SheetId = 0;

        while !pending.is_empty() {
            sheet_id += 1;
            let pass = self.fill_sheet(sheet.instance(sheet_id), &pending);
            let mut carried = pass.carried;

            if pass.result.layout.is_empty() {
                let dropped = carried.remove(0);
                log::warn!(
                    "part {} ({}x{}) does not fit a {}x{} sheet and is skipped",
                    dropped.id,
                    dropped.width,
                    dropped.height,
                    sheet.width,
                    sheet.height
                );
                result.unplaced.push(dropped.id);
            }

            log::debug!(
                "sheet {}: placed {}, carried {}",
                sheet_id,
                pass.result.layout.len(),
                carried.len()
            );
            result.sheets.push(pass.result);
            pending = carried;
        }

        log::info!(
            "placed {} of {} parts on {} sheets ({} utilization)",
            result.placed_count(),
            parts.len(),
            result.sheets_used(),
            result.utilization_percent()
        );
        Ok(result)
    }

    /// Runs one pass over the pending parts on a fresh sheet.
    fn fill_sheet(&self, sheet: StockSheet, pending: &[Part]) -> SheetPass {
        let mut packer = SpacePacker::for_sheet(&sheet);
        let mut result = CuttingResult::new(sheet);
        let mut carried = Vec::new();

        result.steps.push(mount_step(sheet.id));
        let mut step_number = 2u32;

        for part in pending {
            match packer.place(part) {
                Some(placement) => {
                    result.steps.push(placement_step(step_number, part, &placement));
                    result.layout.push(PlacedPart {
                        part_id: part.id,
                        x: placement.x,
                        y: placement.y,
                        w: placement.width,
                        h: placement.height,
                        finished_at_step: step_number,
                    });
                    step_number += 1;
                }
                None => carried.push(*part),
            }
        }

        if self.config.saw_instructions {
            result.saw_steps = Some(tree_instructions(&packer));
        }

        SheetPass { result, carried }
    }
}

/// Returns the parts sorted by area, largest first. Equal areas keep their
/// relative input order.
pub fn sort_by_area(parts: &[Part]) -> Vec<Part> {
    let mut sorted = parts.to_vec();
    sorted.sort_by(|a, b| b.area().total_cmp(&a.area()));
    sorted
}
