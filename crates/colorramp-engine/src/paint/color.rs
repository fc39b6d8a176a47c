use std::fmt;

/// Straight-alpha RGBA color with normalized `f64` channels.
///
/// This is the color model of ColorMoves gradients: every channel, including
/// opacity, is expected in `[0, 1]`. The range is not enforced.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UnitColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl UnitColor {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to `0`–`255` channels by scaling and truncating toward zero.
    ///
    /// Channels are truncated, not rounded: `128.0 / 255.0` stored as
    /// `0.501960784` becomes `127`. QGIS ramps produced by earlier converters
    /// carry these values, so the policy must not change.
    ///
    /// Out-of-range inputs are not clamped; see [`Rgba255::is_in_range`].
    #[inline]
    pub fn to_rgba255(self) -> Rgba255 {
        Rgba255 {
            r: scale_channel(self.r),
            g: scale_channel(self.g),
            b: scale_channel(self.b),
            a: scale_channel(self.a),
        }
    }
}

#[inline]
fn scale_channel(v: f64) -> i32 {
    // `as` truncates toward zero and saturates at the i32 bounds.
    (v * 255.0) as i32
}

/// RGBA color with integer channels as written into QGIS ramps.
///
/// Displays as `r,g,b,a`, the quadruple used by the `color1`/`color2`
/// properties and inside every stop segment.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba255 {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

impl Rgba255 {
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns true when every channel lies in `0..=255`.
    #[inline]
    pub fn is_in_range(self) -> bool {
        [self.r, self.g, self.b, self.a].iter().all(|c| (0..=255).contains(c))
    }
}

impl fmt::Display for Rgba255 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}
