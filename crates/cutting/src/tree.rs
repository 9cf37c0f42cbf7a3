//! Free-rectangle tree for guillotine partitioning of one sheet.
//!
//! Nodes live in an arena owned by the tree. A node starts as a free leaf;
//! when a part is placed into it the node becomes the part's footprint and
//! gains up to two child leaves:
//!
//! ```text
//! +---------+---+-----------------+
//! |  part   | k |   right child   |   height = part height
//! +---------+---+-----------------+
//! |           kerf strip          |
//! +-------------------------------+
//! |          down child           |   width = pre-split width
//! +-------------------------------+
//! ```
//!
//! Every child index is referenced by exactly one parent, so the arena
//! forms a tree without sharing or cycles.

use u_sheetcut_core::PartId;

/// Index of a node in a [`FreeRectTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A rectangular region of a sheet: either free space or a placed footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeRectNode {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width. May be zero or negative for dead space left by a split.
    pub width: f64,
    /// Height. May be zero or negative for dead space left by a split.
    pub height: f64,
    /// Whether the node holds a placement.
    pub used: bool,
    /// The part occupying the node, if one was recorded.
    pub occupant: Option<PartId>,
    /// Free space to the right of the footprint.
    pub right: Option<NodeId>,
    /// Free space below the footprint.
    pub down: Option<NodeId>,
}

impl FreeRectNode {
    fn leaf(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            used: false,
            occupant: None,
            right: None,
            down: None,
        }
    }

    /// Returns true while the node is unused free space.
    pub fn is_leaf(&self) -> bool {
        !self.used
    }

    /// Returns true if a rectangle of the given size fits inside this node.
    pub fn can_hold(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }
}

/// Arena-backed free-rectangle tree covering one sheet.
#[derive(Debug, Clone)]
pub struct FreeRectTree {
    nodes: Vec<FreeRectNode>,
}

impl FreeRectTree {
    /// Creates a tree whose root is the whole, unused sheet.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            nodes: vec![FreeRectNode::leaf(0.0, 0.0, width, height)],
        }
    }

    /// Returns the root node id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different tree.
    pub fn node(&self, id: NodeId) -> &FreeRectNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been placed: the tree is a single unused
    /// root. An exact-fit root is used and therefore not empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && !self.nodes[0].used
    }

    /// Iterates over all nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &FreeRectNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Marks a leaf as used without splitting (exact fit).
    pub(crate) fn occupy(&mut self, id: NodeId) {
        self.nodes[id.0].used = true;
    }

    /// Records which part occupies a used node.
    pub(crate) fn set_occupant(&mut self, id: NodeId, part: PartId) {
        self.nodes[id.0].occupant = Some(part);
    }

    /// Splits a leaf around a `width` x `height` footprint in its top-left corner.
    ///
    /// The right child spans the footprint's height; the down child spans the
    /// node's full pre-split width. Both are inset by one kerf strip. The node
    /// itself shrinks to the footprint.
    pub(crate) fn split(&mut self, id: NodeId, width: f64, height: f64, kerf: f64) {
        let (x, y, full_width, full_height) = {
            let node = &self.nodes[id.0];
            (node.x, node.y, node.width, node.height)
        };

        let right = self.push(FreeRectNode::leaf(
            x + width + kerf,
            y,
            full_width - width - kerf,
            height,
        ));
        let down = self.push(FreeRectNode::leaf(
            x,
            y + height + kerf,
            full_width,
            full_height - height - kerf,
        ));

        let node = &mut self.nodes[id.0];
        node.used = true;
        node.right = Some(right);
        node.down = Some(down);
        node.width = width;
        node.height = height;
    }

    fn push(&mut self, node: FreeRectNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
