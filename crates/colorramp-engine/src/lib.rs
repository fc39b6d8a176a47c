//! Colorramp engine crate.
//!
//! Converts ColorMoves point-list gradients (normalized `0`–`1` channels)
//! into QGIS style documents holding one gradient color ramp (`0`–`255`
//! channels and a single `x;r,g,b,a:…` stop string).
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `UnitColor`, `Rgba255`, `SourceStop`, `EncodedStop` |
//! | [`source`] | input decoding, ColorMoves XML parsing, `Point` iteration |
//! | [`style`] | `StyleDocument` model and XML serialization |
//! | [`transcode`] | `encode`, `transcode`, `transcode_bytes` |
//! | [`run`] | file-to-file conversion |
//! | [`error`] | `ParseError`, `TranscodeError`, `RunError` |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use colorramp_engine::transcode_str;
//!
//! let src = r#"<Gradient>
//!     <Point x="0" r="1" g="1" b="1" o="1"/>
//!     <Point x="1" r="0" g="0" b="0" o="0"/>
//! </Gradient>"#;
//!
//! let style = transcode_str(src, "mono").unwrap();
//! let ramp = style.ramp().unwrap();
//! assert_eq!(ramp.prop("stops"), Some("0.0;255,255,255,255:1.0;0,0,0,0"));
//! ```

pub mod error;
pub mod logging;
pub mod paint;
pub mod run;
pub mod source;
pub mod style;
pub mod transcode;

pub use error::{ParseError, ParseErrorKind, RunError, TranscodeError};
pub use run::{run, run_with, RunOptions};
pub use style::StyleDocument;
pub use transcode::{encode, encode_str, transcode, transcode_bytes, transcode_str, StopEncoding};
