//! The capability boundary between the flow engine and its host.

use flowstack_core::{Point, ProposedSize, Size};

/// A layout participant.
///
/// The engine never inspects a subview beyond these two capabilities, and it
/// holds subviews only for the duration of one call — ownership stays with
/// the host.
pub trait Subview {
    /// Report the size this subview wants under the given proposal.
    fn size_that_fits(&self, proposal: ProposedSize) -> Size;

    /// Adopt the given origin and size, anchored at the top-left corner.
    fn place_at(&mut self, origin: Point, size: Size);
}

impl<S: Subview + ?Sized> Subview for &mut S {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn place_at(&mut self, origin: Point, size: Size) {
        (**self).place_at(origin, size);
    }
}

impl<S: Subview + ?Sized> Subview for Box<S> {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn place_at(&mut self, origin: Point, size: Size) {
        (**self).place_at(origin, size);
    }
}

/// The computed position and size for one subview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner, in the placement rectangle's coordinate space.
    pub origin: Point,
    /// The subview's intrinsic size, never stretched or compressed.
    pub size: Size,
}
