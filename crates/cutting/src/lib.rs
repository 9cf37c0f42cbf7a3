//! Guillotine sheet cutting for rectangular parts.
//!
//! Given a cutting list and a stock sheet template, this crate lays parts
//! out on as few sheets as a greedy heuristic manages and derives the cut
//! instructions an operator follows at the saw.
//!
//! # Algorithm
//!
//! 1. **Ordering**: Parts are sorted once by area, largest first (stable)
//! 2. **Packing**: Each sheet owns a free-rectangle tree; parts are placed
//!    first-fit and every placement splits its free region into a right and
//!    a down remainder, each inset by the kerf
//! 3. **Scheduling**: Parts that do not fit are carried to the next sheet;
//!    parts that cannot fit an empty sheet are dropped and reported
//! 4. **Sequencing**: A placement step per part is recorded while packing;
//!    a kerf-accurate saw sequence can be derived from each finished tree
//!
//! This is a heuristic. There is no rotation and no backtracking.
//!
//! # Example
//!
//! ```rust
//! use u_sheetcut_core::{Part, StockSheet};
//! use u_sheetcut_cutting::SheetFillingScheduler;
//!
//! let parts = vec![Part::new(1, 500.0, 500.0), Part::new(2, 500.0, 500.0)];
//! let sheet = StockSheet::new(1000.0, 1000.0, 0.0);
//!
//! let result = SheetFillingScheduler::default_config()
//!     .solve(&parts, &sheet)
//!     .unwrap();
//! assert_eq!(result.sheets_used(), 1);
//! assert_eq!(result.placed_count(), 2);
//! ```

pub mod config;
pub mod packer;
pub mod scheduler;
pub mod sequence;
pub mod tree;

pub use config::CuttingConfig;
pub use packer::{Placement, SpacePacker};
pub use scheduler::{sort_by_area, SheetFillingScheduler};
pub use sequence::{mount_step, placement_step, tree_instructions};
pub use tree::{FreeRectNode, FreeRectTree, NodeId};
pub use u_sheetcut_core::{
    CutAxis, CutStep, CuttingResult, Error, OptimizationRequest, OptimizationResult, Part,
    PartRequest, PlacedPart, Result, StockSheet,
};
