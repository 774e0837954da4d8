//! Paint model shared between applications and renderers.
//!
//! Shapes are filled with a single flat color; there are no paint sources
//! beyond [`Color`].

pub mod color;

pub use color::Color;
