use std::borrow::Cow;

use thiserror::Error;

/// Source bytes that cannot be turned into text.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("input is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("input is not valid UTF-16")]
    Utf16(#[from] std::string::FromUtf16Error),

    #[error("UTF-16 input has an odd number of bytes")]
    TruncatedUtf16,

    #[error("unsupported encoding {0:?}")]
    Unsupported(String),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Utf16Order {
    Little,
    Big,
}

/// Decodes XML source bytes.
///
/// A byte order mark wins. Otherwise the `encoding` of the XML declaration
/// picks between UTF-8 (the default), ASCII and ISO-8859-1. UTF-16 without a
/// BOM is recognised from the first `<?` characters.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, EncodingError> {
    if let Some(rest) = bytes.strip_prefix(b"\xEF\xBB\xBF") {
        return Ok(Cow::Borrowed(std::str::from_utf8(rest)?));
    }
    if let Some(rest) = bytes.strip_prefix(b"\xFF\xFE") {
        return decode_utf16(rest, Utf16Order::Little);
    }
    if let Some(rest) = bytes.strip_prefix(b"\xFE\xFF") {
        return decode_utf16(rest, Utf16Order::Big);
    }
    if bytes.starts_with(b"<\0?\0") {
        return decode_utf16(bytes, Utf16Order::Little);
    }
    if bytes.starts_with(b"\0<\0?") {
        return decode_utf16(bytes, Utf16Order::Big);
    }

    let label = declared_encoding(bytes).map(|l| l.to_ascii_lowercase());
    match label.as_deref() {
        None | Some("utf-8" | "utf8" | "us-ascii" | "ascii") => {
            Ok(Cow::Borrowed(std::str::from_utf8(bytes)?))
        }
        Some("iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" | "l1") => {
            // Every Latin-1 byte is the code point of the same value.
            Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()))
        }
        Some(other) => Err(EncodingError::Unsupported(other.to_owned())),
    }
}

fn decode_utf16(bytes: &[u8], order: Utf16Order) -> Result<Cow<'_, str>, EncodingError> {
    if bytes.len() % 2 != 0 {
        return Err(EncodingError::TruncatedUtf16);
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| match order {
            Utf16Order::Little => u16::from_le_bytes([pair[0], pair[1]]),
            Utf16Order::Big => u16::from_be_bytes([pair[0], pair[1]]),
        })
        .collect();
    Ok(Cow::Owned(String::from_utf16(&units)?))
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let decl = bytes.strip_prefix(b"<?xml")?;
    let end = decl.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&decl[..end]).ok()?;

    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    Some(value[..value.find(quote)?].to_owned())
}
