//! Flow layout for horizontal-then-vertical stacking containers.
//!
//! This crate computes sizes and positions for a container that stacks its
//! children left to right and wraps onto a new row when the next child would
//! overflow the available width, the way inline text wraps.
//!
//! # Architecture
//!
//! 1. **Size query**: each child exposes a single
//!    [`size_that_fits`](Subview::size_that_fits) capability; the engine asks
//!    every child for its intrinsic size with an unconstrained proposal.
//! 2. **Measurement**: [`measure_sizes`] walks the sizes once and reports the
//!    extent the container wants for a given width hint.
//! 3. **Placement**: [`wrap_placements`] walks the sizes once against a
//!    concrete bounding rectangle and produces a top-left-anchored
//!    [`Placement`] per child, in input order.
//!
//! Both passes are pure functions over their parameters; [`FlowLayout`] is a
//! thin wrapper that queries the children and forwards placements to them.
//!
//! # Example
//!
//! ```ignore
//! use flowstack_core::{ProposedSize, Rect};
//! use flowstack_layout::FlowLayout;
//!
//! let layout = FlowLayout::new();
//! let wanted = layout.measure(ProposedSize::width_hint(320.0), &subviews);
//! layout.place(Rect::new(0.0, 0.0, 320.0, wanted.height), &mut subviews);
//! ```

mod flow;
mod subview;

pub use flow::{measure_sizes, wrap_placements, FlowLayout};
pub use subview::{Placement, Subview};
