//! ColorMoves → QGIS conversion.
//!
//! [`encode`] turns the `Point` list into the QGIS stop grammar
//! (`x;r,g,b,a:` per stop) and [`transcode`] wraps the result in a
//! [`StyleDocument`]. Neither performs I/O; see [`crate::run`] for files.

use roxmltree::Document;

use crate::error::{ParseError, TranscodeError};
use crate::paint::{EncodedStop, Rgba255};
use crate::source;
use crate::style::StyleDocument;

/// Separator written after every stop segment.
pub const SEGMENT_SEPARATOR: char = ':';

/// Accumulated stop string plus the endpoint colors seen while encoding.
///
/// The endpoints are recorded as stops are pushed, so callers never need to
/// split the assembled string to recover `color1`/`color2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopEncoding {
    text: String,
    first: Option<Rgba255>,
    last: Option<Rgba255>,
    count: usize,
}

impl StopEncoding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `x;r,g,b,a:` segment.
    pub fn push(&mut self, stop: EncodedStop) {
        self.text.push_str(&stop.to_string());
        self.text.push(SEGMENT_SEPARATOR);
        if self.first.is_none() {
            self.first = Some(stop.color);
        }
        self.last = Some(stop.color);
        self.count += 1;
    }

    /// The raw accumulator, including the separator after the last stop.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The stop string as written to the `stops` property: the accumulator
    /// with its single trailing separator removed.
    pub fn stop_string(&self) -> &str {
        self.text.strip_suffix(SEGMENT_SEPARATOR).unwrap_or(&self.text)
    }

    pub fn first_color(&self) -> Option<Rgba255> {
        self.first
    }

    pub fn last_color(&self) -> Option<Rgba255> {
        self.last
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Encodes every `Point` of `doc`, in document order.
pub fn encode(doc: &Document<'_>) -> Result<StopEncoding, ParseError> {
    let mut encoding = StopEncoding::new();
    for (i, stop) in source::points(doc).enumerate() {
        let stop = stop?.encode();
        if !stop.color.is_in_range() {
            log::warn!(
                "Point #{}: color {} has channels outside 0..=255 (source values outside [0, 1])",
                i + 1,
                stop.color
            );
        }
        encoding.push(stop);
    }
    log::debug!("encoded {} stops ({} bytes)", encoding.len(), encoding.as_str().len());
    Ok(encoding)
}

/// Parses `text` as XML and encodes its points.
pub fn encode_str(text: &str) -> Result<StopEncoding, TranscodeError> {
    let doc = source::parse_document(text)?;
    Ok(encode(&doc)?)
}

/// Converts `doc` into a style document holding one gradient ramp named
/// `name`.
///
/// Fails with [`TranscodeError::EmptyGradient`] when the document has no
/// points, since `color1` and `color2` would be undefined.
pub fn transcode(doc: &Document<'_>, name: &str) -> Result<StyleDocument, TranscodeError> {
    let encoding = encode(doc)?;
    let (Some(first), Some(last)) = (encoding.first_color(), encoding.last_color()) else {
        return Err(TranscodeError::EmptyGradient);
    };
    Ok(StyleDocument::gradient(name, first, last, encoding.stop_string()))
}

/// Parses `text` as XML and converts it with [`transcode`].
pub fn transcode_str(text: &str, name: &str) -> Result<StyleDocument, TranscodeError> {
    let doc = source::parse_document(text)?;
    transcode(&doc, name)
}

/// Decodes raw file contents (see [`source::decode`]) and converts them with
/// [`transcode_str`].
pub fn transcode_bytes(bytes: &[u8], name: &str) -> Result<StyleDocument, TranscodeError> {
    let text = source::decode(bytes)?;
    transcode_str(&text, name)
}
