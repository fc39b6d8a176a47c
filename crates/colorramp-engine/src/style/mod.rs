//! QGIS style output.
//!
//! [`StyleDocument`] is a plain value built per conversion and serialized by
//! its `Display` impl; there is no template text parsed at runtime.

mod document;
mod writer;

pub use document::{keys, ColorRamp, Prop, StyleDocument, GRADIENT_RAMP, STYLE_VERSION};
