use std::fmt;

use super::{Rgba255, UnitColor};

/// Decimal places kept for stop positions in the QGIS stop string.
pub const POSITION_DECIMALS: usize = 6;

/// A gradient stop as read from a ColorMoves `Point` element.
///
/// `x` is expected in [0, 1] but is not enforced; stops keep document order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SourceStop {
    pub x: f64,
    pub color: UnitColor,
}

impl SourceStop {
    #[inline]
    pub const fn new(x: f64, color: UnitColor) -> Self {
        Self { x, color }
    }

    /// Re-encodes the stop for the QGIS stop string.
    ///
    /// The position is rounded while the channels are truncated; the two
    /// policies differ on purpose and both are load-bearing for output
    /// compatibility.
    pub fn encode(self) -> EncodedStop {
        EncodedStop {
            position: round_position(self.x),
            color: self.color.to_rgba255(),
        }
    }
}

/// A stop ready for output: rounded position plus integer color.
///
/// Displays as one stop-string segment without the trailing separator,
/// e.g. `0.5;255,128,0,255`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EncodedStop {
    pub position: f64,
    pub color: Rgba255,
}

impl fmt::Display for EncodedStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_position(f, self.position)?;
        write!(f, ";{}", self.color)
    }
}

/// Rounds `x` to [`POSITION_DECIMALS`] places.
///
/// Goes through the standard formatter, which rounds the exact binary value
/// (ties to even), instead of scaling by 10^6 and losing precision.
pub fn round_position(x: f64) -> f64 {
    format!("{x:.prec$}", prec = POSITION_DECIMALS)
        .parse()
        .unwrap_or(x)
}

/// Writes the shortest round-tripping decimal for `x`, always with a
/// fractional part (`1` is written as `1.0`) and never in exponent form.
fn write_position(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = x.to_string();
    if x.is_finite() && !text.contains('.') {
        write!(f, "{text}.0")
    } else {
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x: f64) -> String {
        SourceStop::new(x, UnitColor::new(1.0, 0.0, 0.0, 1.0)).encode().to_string()
    }

    // ── position rounding ─────────────────────────────────────────────────

    #[test]
    fn rounds_to_six_places() {
        assert_eq!(round_position(0.1234567), 0.123457);
        assert_eq!(segment(0.1234567), "0.123457;255,0,0,255");
    }

    #[test]
    fn whole_numbers_keep_a_fraction() {
        assert_eq!(segment(0.0), "0.0;255,0,0,255");
        assert_eq!(segment(1.0), "1.0;255,0,0,255");
    }

    #[test]
    fn trailing_zeros_are_dropped() {
        assert_eq!(segment(0.5), "0.5;255,0,0,255");
        assert_eq!(segment(0.25), "0.25;255,0,0,255");
    }

    #[test]
    fn rounding_can_reach_the_ends() {
        assert_eq!(segment(0.9999996), "1.0;255,0,0,255");
        assert_eq!(segment(0.0000004), "0.0;255,0,0,255");
    }

    #[test]
    fn small_positions_are_never_exponential() {
        assert_eq!(segment(0.00001), "0.00001;255,0,0,255");
        assert_eq!(segment(0.006032), "0.006032;255,0,0,255");
    }

    // ── encode ────────────────────────────────────────────────────────────

    #[test]
    fn encode_keeps_channel_truncation() {
        let stop = SourceStop::new(0.75, UnitColor::new(0.501960784, 0.2, 0.4, 0.6)).encode();
        assert_eq!(stop.color, Rgba255::new(127, 51, 102, 153));
        assert_eq!(stop.position, 0.75);
    }
}
