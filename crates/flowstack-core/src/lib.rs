//! Core geometry types for the flowstack layout engine.
//!
//! This crate hosts the value types shared by the measurement and placement
//! passes: [`Size`], [`Point`], [`Rect`], and [`ProposedSize`]. All values use
//! `f64` logical units; conversion to device pixels is the host's concern.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on every
//! type in this crate.

mod geometry;

pub use geometry::{Point, ProposedSize, Rect, Size};
