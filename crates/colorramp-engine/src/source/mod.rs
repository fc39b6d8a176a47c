//! ColorMoves gradient input.
//!
//! A ColorMoves file is any XML document whose `Point` elements carry the
//! stop attributes `x`, `r`, `g`, `b` and `o`. Everything else in the file is
//! ignored.

mod decode;
mod reader;

pub use decode::{decode, EncodingError};
pub use reader::{parse_document, points, POINT_TAG};
