//! # U-Sheetcut Core
//!
//! Core types for the U-Sheetcut panel cutting optimizer.
//!
//! This crate holds the records exchanged between the packing engine and its
//! callers. It contains no packing logic; see `u-sheetcut-cutting` for that.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Part`], [`StockSheet`]
//! - **Requests**: [`OptimizationRequest`], [`PartRequest`] with validation and
//!   count expansion
//! - **Results**: [`OptimizationResult`], [`CuttingResult`], [`PlacedPart`], [`CutStep`]
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Example
//!
//! ```rust
//! use u_sheetcut_core::{OptimizationRequest, PartRequest, StockSheet};
//!
//! let request = OptimizationRequest::new(
//!     vec![PartRequest::new(600.0, 400.0, 3)],
//!     StockSheet::new(2800.0, 2100.0, 3.0),
//! );
//! let parts = request.expand().unwrap();
//! assert_eq!(parts.len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialization/deserialization support with
//!   camelCase field names

pub mod error;
pub mod geometry;
pub mod request;
pub mod result;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Part, PartId, SheetId, StockSheet};
pub use request::{validate_parts, OptimizationRequest, PartRequest, MAX_TOTAL_PARTS};
pub use result::{CutAxis, CutStep, CuttingResult, OptimizationResult, PlacedPart, SolveSummary};
