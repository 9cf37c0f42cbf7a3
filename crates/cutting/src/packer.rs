//! Single-sheet guillotine packer.
//!
//! # Algorithm
//!
//! Placement is first-fit over the free-rectangle tree in pre-order,
//! visiting an occupied node's right child before its down child:
//!
//! 1. At an occupied node, descend into right, then down.
//! 2. At a free leaf that is too small in either dimension, give up on it.
//! 3. At a free leaf of exactly the requested size, occupy it as is.
//! 4. Otherwise split the leaf (see [`FreeRectTree`]) and occupy the
//!    top-left footprint.
//!
//! There is no backtracking: once placed, a part never moves.

use u_sheetcut_core::{Part, StockSheet};

use crate::tree::{FreeRectTree, NodeId};

/// Where a rectangle was placed on the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Tree node that now holds the footprint.
    pub node: NodeId,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Placed width.
    pub width: f64,
    /// Placed height.
    pub height: f64,
}

/// Owns the free-space tree of exactly one physical sheet.
#[derive(Debug, Clone)]
pub struct SpacePacker {
    width: f64,
    height: f64,
    kerf: f64,
    tree: FreeRectTree,
}

impl SpacePacker {
    /// Creates a packer for an empty sheet.
    pub fn new(width: f64, height: f64, kerf: f64) -> Self {
        Self {
            width,
            height,
            kerf,
            tree: FreeRectTree::new(width, height),
        }
    }

    /// Creates a packer sized from a sheet template.
    pub fn for_sheet(sheet: &StockSheet) -> Self {
        Self::new(sheet.width, sheet.height, sheet.kerf)
    }

    /// Sheet width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sheet height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Saw blade width applied at every split.
    pub fn kerf(&self) -> f64 {
        self.kerf
    }

    /// Read-only view of the free-space tree.
    pub fn tree(&self) -> &FreeRectTree {
        &self.tree
    }

    /// Places a `width` x `height` rectangle, or returns `None` if no free
    /// region can hold it. Non-positive sizes never fit.
    pub fn insert(&mut self, width: f64, height: f64) -> Option<Placement> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }

        let id = self.find_leaf(width, height)?;
        let node = self.tree.node(id);
        if width == node.width && height == node.height {
            self.tree.occupy(id);
        } else {
            self.tree.split(id, width, height, self.kerf);
        }

        let node = self.tree.node(id);
        Some(Placement {
            node: id,
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
        })
    }

    /// Places a part and records it as the occupant of its node.
    pub fn place(&mut self, part: &Part) -> Option<Placement> {
        let placement = self.insert(part.width, part.height)?;
        self.tree.set_occupant(placement.node, part.id);
        Some(placement)
    }

    /// Finds the first free leaf, in right-before-down pre-order, that can
    /// hold the rectangle. Leaves that are too small end their branch.
    fn find_leaf(&self, width: f64, height: f64) -> Option<NodeId> {
        let mut stack = vec![self.tree.root()];

        while let Some(id) = stack.pop() {
            let node = self.tree.node(id);
            if node.used {
                if let Some(down) = node.down {
                    stack.push(down);
                }
                if let Some(right) = node.right {
                    stack.push(right);
                }
                continue;
            }
            if node.can_hold(width, height) {
                return Some(id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_at_origin() {
        let mut packer = SpacePacker::new(100.0, 100.0, 0.0);
        let p = packer.insert(40.0, 30.0).unwrap();
        assert_eq!((p.x, p.y, p.width, p.height), (0.0, 0.0, 40.0, 30.0));
        assert_eq!(p.node, packer.tree().root());
    }

    #[test]
    fn test_right_child_searched_before_down() {
        let mut packer = SpacePacker::new(100.0, 100.0, 0.0);
        packer.insert(40.0, 30.0).unwrap();

        // Fits both the right strip (60x30) and the bottom region (100x70).
        let p = packer.insert(20.0, 20.0).unwrap();
        assert_eq!((p.x, p.y), (40.0, 0.0));

        // Too tall for the right strip, goes below.
        let p = packer.insert(50.0, 40.0).unwrap();
        assert_eq!((p.x, p.y), (0.0, 30.0));
    }

    #[test]
    fn test_kerf_offsets_children() {
        let mut packer = SpacePacker::new(100.0, 100.0, 4.0);
        packer.insert(30.0, 30.0).unwrap();

        let beside = packer.insert(10.0, 10.0).unwrap();
        assert_eq!((beside.x, beside.y), (34.0, 0.0));

        let below = packer.insert(80.0, 10.0).unwrap();
        assert_eq!((below.x, below.y), (0.0, 34.0));
    }

    #[test]
    fn test_exact_fit_does_not_split() {
        let mut packer = SpacePacker::new(50.0, 20.0, 2.0);
        let p = packer.insert(50.0, 20.0).unwrap();
        let root = packer.tree().node(p.node);
        assert!(root.used);
        assert!(root.right.is_none() && root.down.is_none());
        assert_eq!(packer.tree().len(), 1);

        // Nothing left; a childless occupied node yields no candidate.
        assert!(packer.insert(1.0, 1.0).is_none());
    }

    #[test]
    fn test_too_large_rejected() {
        let mut packer = SpacePacker::new(100.0, 100.0, 0.0);
        assert!(packer.insert(101.0, 10.0).is_none());
        assert!(packer.insert(10.0, 100.5).is_none());
        assert!(packer.tree().is_empty());
    }

    #[test]
    fn test_non_positive_request_rejected() {
        let mut packer = SpacePacker::new(100.0, 100.0, 0.0);
        assert!(packer.insert(0.0, 10.0).is_none());
        assert!(packer.insert(10.0, -5.0).is_none());
        assert!(packer.insert(f64::NAN, 10.0).is_none());
        assert!(packer.tree().is_empty());
    }

    #[test]
    fn test_dead_space_never_used() {
        // Full-width placement leaves a right child of width -kerf.
        let mut packer = SpacePacker::new(100.0, 100.0, 5.0);
        packer.insert(100.0, 40.0).unwrap();
        let p = packer.insert(0.5, 0.5).unwrap();
        assert_eq!((p.x, p.y), (0.0, 45.0));
    }

    #[test]
    fn test_no_backtracking_past_small_leaf() {
        // A first-fit miss: the right strip is too narrow, the bottom is used,
        // so the sheet is full even though total free area would suffice.
        let mut packer = SpacePacker::new(100.0, 100.0, 0.0);
        packer.insert(60.0, 100.0).unwrap();
        assert!(packer.insert(50.0, 50.0).is_none());
        assert!(packer.insert(40.0, 100.0).is_some());
    }

    #[test]
    fn test_later_split_keeps_earlier_children() {
        let mut packer = SpacePacker::new(87.0, 537.0, 0.0);
        let first = packer.insert(1.0, 1.0).unwrap();
        let second = packer.insert(1.0, 1.0).unwrap();
        assert_eq!((second.x, second.y), (1.0, 0.0));

        let tree = packer.tree();
        let root = tree.node(first.node);
        let right = tree.node(root.right.unwrap());
        let down = tree.node(root.down.unwrap());

        // The right child became the second footprint; the root's down child
        // still spans the root's pre-split width.
        assert!(right.used);
        assert_eq!(right.width, 1.0);
        assert_eq!(down.width, 87.0);
        assert_eq!(down.height, 536.0);

        let beside = tree.node(right.right.unwrap());
        assert_eq!((beside.x, beside.width), (2.0, 85.0));
        assert_eq!(tree.node(right.down.unwrap()).width, 86.0);
    }

    #[test]
    fn test_place_records_occupant() {
        let mut packer = SpacePacker::new(100.0, 100.0, 0.0);
        let p = packer.place(&Part::new(7, 10.0, 10.0)).unwrap();
        assert_eq!(packer.tree().node(p.node).occupant, Some(7));
        assert!(packer.place(&Part::new(8, 200.0, 10.0)).is_none());
    }

    #[test]
    fn test_for_sheet() {
        let packer = SpacePacker::for_sheet(&StockSheet::new(1200.0, 600.0, 3.0));
        assert_eq!(packer.width(), 1200.0);
        assert_eq!(packer.height(), 600.0);
        assert_eq!(packer.kerf(), 3.0);
    }
}
