//! Cut sequence derivations.
//!
//! Two independent instruction streams are produced for a sheet:
//!
//! 1. **Placement stream**: one step per placed part, built while the
//!    scheduler fills the sheet ([`mount_step`], [`placement_step`]).
//! 2. **Saw stream**: a kerf-accurate sequence with up to two cuts per part,
//!    derived from a finished free-space tree ([`tree_instructions`]).
//!
//! The streams are numbered separately and are never merged.

use u_sheetcut_core::{CutAxis, CutStep, Part, SheetId};

use crate::packer::{Placement, SpacePacker};

/// The first step of every sheet: the raw sheet goes onto the saw table.
pub fn mount_step(sheet_id: SheetId) -> CutStep {
    CutStep {
        step_number: 1,
        description: format!("Sheet {}: start, raw sheet mounted on the table.", sheet_id),
        axis: None,
        cut_value: 0.0,
        is_part_finished: false,
        finished_part_id: None,
    }
}

/// Step recorded when a part is placed. The cut value is the part's right edge.
pub fn placement_step(step_number: u32, part: &Part, placement: &Placement) -> CutStep {
    CutStep {
        step_number,
        description: format!(
            "Part {} ({}x{}) placed.",
            part.id, part.width, part.height
        ),
        axis: Some(CutAxis::X),
        cut_value: placement.x + part.width,
        is_part_finished: true,
        finished_part_id: Some(part.id),
    }
}

/// Derives saw instructions from a finished packer's tree.
///
/// Pre-order traversal, right subtree before down subtree. Every node holding
/// a part yields a horizontal cut separating the lower block (only when the
/// node has a down child) followed by a vertical cut that frees the part.
/// Cut values sit on the far side of the kerf. Traversal stops at free leaves.
pub fn tree_instructions(packer: &SpacePacker) -> Vec<CutStep> {
    let tree = packer.tree();
    let kerf = packer.kerf();
    let mut steps = Vec::new();
    let mut next_step = 1u32;
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        if !node.used {
            continue;
        }

        if let Some(part_id) = node.occupant {
            if node.down.is_some() {
                steps.push(CutStep {
                    step_number: next_step,
                    description: format!(
                        "Horizontal cut at Y={}: separate the lower block.",
                        node.y + node.height
                    ),
                    axis: Some(CutAxis::Y),
                    cut_value: node.y + node.height + kerf,
                    is_part_finished: false,
                    finished_part_id: None,
                });
                next_step += 1;
            }

            steps.push(CutStep {
                step_number: next_step,
                description: format!(
                    "Vertical cut at X={}: part {} is ready.",
                    node.x + node.width,
                    part_id
                ),
                axis: Some(CutAxis::X),
                cut_value: node.x + node.width + kerf,
                is_part_finished: true,
                finished_part_id: Some(part_id),
            });
            next_step += 1;
        }

        if let Some(down) = node.down {
            stack.push(down);
        }
        if let Some(right) = node.right {
            stack.push(right);
        }
    }

    steps
}
