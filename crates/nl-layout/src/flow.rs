//! Flow Layout
//!
//! Greedy line packing for variable-width items such as badges and tags.
//! Items flow left to right and wrap to a new line when the next one would
//! overflow the available width.

use serde::Serialize;

use crate::geometry::{non_negative, Point, Rect, Size};

/// Default gap between items, both horizontally and between lines
pub const DEFAULT_SPACING: f32 = 8.0;

/// An item after packing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedItem {
    /// Top-left corner relative to the container
    pub origin: Point,
    /// Size used for placement (after clamping)
    pub size: Size,
    /// Zero-based line the item landed on
    pub line: usize,
}

impl PlacedItem {
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Output of [`pack`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackResult {
    /// One placement per input item, in input order
    pub placements: Vec<PlacedItem>,
    /// Bounding size of the packed content
    pub size: Size,
    /// Number of lines used
    pub line_count: usize,
}

impl PackResult {
    pub fn frames(&self) -> Vec<Rect> {
        self.placements.iter().map(PlacedItem::frame).collect()
    }
}

/// Pack `items` into lines no wider than `max_width`.
///
/// A `max_width` that is not a positive finite number means unconstrained:
/// nothing wraps and the reported width is the natural width of the line.
/// Negative or NaN item sizes and spacing are clamped to zero. An item wider
/// than `max_width` is still placed alone at the start of its line.
pub fn pack(max_width: f32, items: &[Size], spacing: f32) -> PackResult {
    let constrained = max_width.is_finite() && max_width > 0.0;
    let limit = if constrained { max_width } else { f32::INFINITY };
    let spacing = non_negative(spacing);

    let mut placements = Vec::with_capacity(items.len());
    let mut cursor_x = 0.0_f32;
    let mut cursor_y = 0.0_f32;
    let mut line_height = 0.0_f32;
    let mut line = 0;
    let mut widest = 0.0_f32;

    for item in items {
        let size = item.clamped();

        if cursor_x + size.width > limit && cursor_x > 0.0 {
            tracing::trace!(line, cursor_x, width = size.width, "wrapping flow line");
            widest = widest.max(cursor_x - spacing);
            cursor_y += line_height + spacing;
            cursor_x = 0.0;
            line_height = 0.0;
            line += 1;
        }

        placements.push(PlacedItem {
            origin: Point::new(cursor_x, cursor_y),
            size,
            line,
        });

        line_height = line_height.max(size.height);
        cursor_x += size.width + spacing;
    }

    let line_count = if placements.is_empty() { 0 } else { line + 1 };
    if line_count > 0 {
        widest = widest.max(cursor_x - spacing);
    }

    let size = Size::new(
        if constrained { max_width } else { widest },
        cursor_y + line_height,
    );

    tracing::debug!(
        items = placements.len(),
        lines = line_count,
        height = size.height,
        "packed flow layout"
    );

    PackResult { placements, size, line_count }
}

/// Container-facing flow layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    pub spacing: f32,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self { spacing: DEFAULT_SPACING }
    }
}

impl FlowLayout {
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    /// Size needed for `sizes` under a proposed width. `None` is unspecified.
    pub fn size_that_fits(&self, proposed_width: Option<f32>, sizes: &[Size]) -> Size {
        pack(proposed_width.unwrap_or(f32::INFINITY), sizes, self.spacing).size
    }

    /// Frames for `sizes` placed inside `bounds`.
    pub fn place_in(&self, bounds: Rect, sizes: &[Size]) -> Vec<Rect> {
        pack(bounds.width, sizes, self.spacing)
            .placements
            .iter()
            .map(|p| Rect::from_origin_size(p.origin.offset(bounds.x, bounds.y), p.size))
            .collect()
    }
}
