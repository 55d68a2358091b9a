//! Geometry value types shared by the layout passes.

use glam::Vec2;

/// A width/height pair in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A size of zero width and zero height.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite numbers.
    ///
    /// The layout passes accept any numeric value; hosts that want to reject
    /// degenerate subview sizes can check this at the boundary.
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Get the size as a Vec2 (lossy, f64 to f32).
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Create a size from a Vec2.
    pub fn from_vec2(v: Vec2) -> Self {
        Self {
            width: v.x as f64,
            height: v.y as f64,
        }
    }
}

/// A position in the container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the point as a Vec2 (lossy, f64 to f32).
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Create a point from a Vec2.
    pub fn from_vec2(v: Vec2) -> Self {
        Self {
            x: v.x as f64,
            y: v.y as f64,
        }
    }
}

/// Axis-aligned rectangle: an origin plus a size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self {
            x: position.x as f64,
            y: position.y as f64,
            width: size.x as f64,
            height: size.y as f64,
        }
    }

    /// Get the left edge.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Get the top edge.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Get the right edge (x + width).
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Get the origin corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A size proposal where either axis may be unconstrained.
///
/// `None` on an axis means "no constraint": a subview queried with an
/// unconstrained axis reports its intrinsic extent, and a container measured
/// with an unconstrained width never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProposedSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ProposedSize {
    /// Proposes nothing on either axis.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Create a proposal constrained on both axes.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Create a proposal constrained on the width only.
    pub fn width_hint(width: f64) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Create a proposal from a concrete size.
    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
