//! Nutrition Labels Layout
//!
//! Geometry primitives and the flow layout used to wrap badges onto lines.
//!
//! Packing is a pure function of its inputs: it keeps no state between
//! calls and may be invoked from any thread.

mod geometry;
mod flow;

pub use geometry::{Point, Rect, Size};
pub use flow::{pack, FlowLayout, PackResult, PlacedItem, DEFAULT_SPACING};
