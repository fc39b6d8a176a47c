use crate::paint::Rgba255;

/// `version` attribute of the `qgis_style` root.
pub const STYLE_VERSION: u32 = 2;

/// Ramp type for gradient color ramps.
pub const GRADIENT_RAMP: &str = "gradient";

/// Property keys of a gradient color ramp, in output order.
pub mod keys {
    pub const COLOR1: &str = "color1";
    pub const COLOR2: &str = "color2";
    pub const DISCRETE: &str = "discrete";
    pub const RAMP_TYPE: &str = "rampType";
    pub const STOPS: &str = "stops";
}

/// A QGIS style document.
///
/// Only color ramps are modelled. The `symbols`, `textformats` and
/// `labelsettings` sections are always written empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDocument {
    pub version: u32,
    pub color_ramps: Vec<ColorRamp>,
}

/// A named `colorramp` element and its `prop` children.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    pub ramp_type: String,
    pub name: String,
    pub props: Vec<Prop>,
}

/// One `<prop v=".." k=".."/>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
    pub key: String,
    pub value: String,
}

impl Prop {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

impl StyleDocument {
    /// Builds the single-gradient document QGIS imports as a style.
    ///
    /// Every call produces a fresh value; nothing is shared between documents.
    pub fn gradient(
        name: impl Into<String>,
        color1: Rgba255,
        color2: Rgba255,
        stops: impl Into<String>,
    ) -> Self {
        let ramp = ColorRamp {
            ramp_type: GRADIENT_RAMP.to_owned(),
            name: name.into(),
            props: vec![
                Prop::new(keys::COLOR1, color1.to_string()),
                Prop::new(keys::COLOR2, color2.to_string()),
                Prop::new(keys::DISCRETE, "0"),
                Prop::new(keys::RAMP_TYPE, GRADIENT_RAMP),
                Prop::new(keys::STOPS, stops),
            ],
        };
        Self { version: STYLE_VERSION, color_ramps: vec![ramp] }
    }

    /// The first color ramp, which is the only one for converted gradients.
    pub fn ramp(&self) -> Option<&ColorRamp> {
        self.color_ramps.first()
    }
}

impl ColorRamp {
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.iter().find(|p| p.key == key).map(|p| p.value.as_str())
    }
}
