//! Color and gradient-stop model shared by the reader and the style writer.
//!
//! Scope:
//! - source colors (normalized `f64` channels, straight alpha)
//! - output colors (`0`–`255` integer channels)
//! - gradient stops before and after re-encoding
//!
//! XML concerns stay in `source` and `style`.

pub mod color;
pub mod gradient;

pub use color::{Rgba255, UnitColor};
pub use gradient::{EncodedStop, SourceStop, POSITION_DECIMALS};
