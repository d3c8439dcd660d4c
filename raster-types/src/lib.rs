//! Small value types used throughout the rasterization pipeline.
//!
//! [`Point`] carries coordinates in either font design units or scaled
//! device space and [`Rgb`] is a single 24-bit pixel.

#![deny(rustdoc::broken_intra_doc_links)]

mod color;
mod point;


pub use color::{InvalidColor, Rgb};
pub use point::Point;
