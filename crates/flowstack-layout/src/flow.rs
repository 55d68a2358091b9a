//! The horizontal-then-vertical wrap algorithm.
//!
//! Two single-pass walks over the child sizes: [`measure_sizes`] decides the
//! container's reported extent, [`wrap_placements`] decides where each child
//! lands. Children are processed in input order in both passes; there is no
//! reordering or bin-packing for better row fill.

use flowstack_core::{Point, ProposedSize, Rect, Size};

use crate::subview::{Placement, Subview};

/// Measure the container extent for pre-queried child sizes.
///
/// `width_hint` is the width available to the container; `None` means
/// unconstrained, in which case no child ever wraps and the result width is
/// the sum of child widths. When at least one child wraps, the result width
/// is the full hinted width; a single-row stack reports its actual content
/// width instead.
///
/// A child fits on the current row only when the running offset plus its
/// width stays strictly below the boundary, so a child whose width exactly
/// equals the remaining space starts a new row. A wrapping child is not
/// checked against the boundary a second time: a child wider than the
/// container still gets a row of its own, unclipped.
pub fn measure_sizes(width_hint: Option<f64>, sizes: &[Size]) -> Size {
    let boundary = width_hint.unwrap_or(f64::INFINITY);

    let mut pos_x = 0.0_f64;
    let mut pos_y = 0.0_f64;
    let mut line_height = 0.0_f64;
    let mut wrapped = false;

    for size in sizes {
        if pos_x + size.width < boundary {
            // Same row.
            pos_x += size.width;
            line_height = line_height.max(size.height);
        } else {
            // New row: the child's own width becomes the running offset.
            pos_x = size.width;
            pos_y += line_height;
            line_height = size.height;
            wrapped = true;
        }
    }

    let width = if wrapped { boundary } else { pos_x };
    Size::new(width, pos_y + line_height)
}

/// Compute a top-left-anchored placement per child inside `bounds`.
///
/// Children flow from the rectangle's origin, left to right; a child that
/// would extend past `bounds.max_x()` is moved to the start of the next row.
/// Each child keeps its queried size exactly.
///
/// The row advance on wrap uses the wrapping child's own height, not the
/// tallest child of the finished row, so rows with mixed heights can extend
/// past the extent [`measure_sizes`] reports.
pub fn wrap_placements(bounds: Rect, sizes: &[Size]) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(sizes.len());

    let mut x = bounds.min_x();
    let mut y = bounds.min_y();

    for size in sizes {
        if x + size.width > bounds.max_x() {
            x = bounds.min_x();
            y += size.height;
        }

        placements.push(Placement {
            origin: Point::new(x, y),
            size: *size,
        });

        x += size.width;
    }

    placements
}

/// A horizontal-then-vertical stacking container layout.
///
/// Children fill a row left to right and wrap onto successive rows when they
/// would overflow the container's available width, the way inline text wraps.
/// The engine is stateless; every call recomputes from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowLayout;

impl FlowLayout {
    /// Create a flow layout.
    pub fn new() -> Self {
        Self
    }

    /// Compute the size the container wants under the given proposal.
    ///
    /// Only the proposal's width participates in wrapping; each subview is
    /// queried with [`ProposedSize::UNSPECIFIED`] for its intrinsic size.
    pub fn measure<S: Subview>(&self, proposal: ProposedSize, subviews: &[S]) -> Size {
        measure_sizes(proposal.width, &intrinsic_sizes(subviews))
    }

    /// Position every subview inside `bounds`, in input order.
    ///
    /// Sizes are re-queried rather than shared with [`measure`](Self::measure);
    /// the two passes agree because both ask each subview the same question.
    pub fn place<S: Subview>(&self, bounds: Rect, subviews: &mut [S]) {
        let sizes = intrinsic_sizes(subviews);
        for (subview, placement) in subviews.iter_mut().zip(wrap_placements(bounds, &sizes)) {
            subview.place_at(placement.origin, placement.size);
        }
    }
}

fn intrinsic_sizes<S: Subview>(subviews: &[S]) -> Vec<Size> {
    subviews
        .iter()
        .map(|subview| subview.size_that_fits(ProposedSize::UNSPECIFIED))
        .collect()
}
