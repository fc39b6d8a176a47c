use std::borrow::Cow;
use std::fmt::{self, Write};

use super::document::{ColorRamp, StyleDocument};

const INDENT: &str = "  ";

impl StyleDocument {
    /// Serializes the document in the layout QGIS writes for exported styles.
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<qgis_style version=\"{}\">", self.version)?;
        writeln!(f, "{INDENT}<symbols/>")?;
        if self.color_ramps.is_empty() {
            writeln!(f, "{INDENT}<colorramps/>")?;
        } else {
            writeln!(f, "{INDENT}<colorramps>")?;
            for ramp in &self.color_ramps {
                write_ramp(f, ramp)?;
            }
            writeln!(f, "{INDENT}</colorramps>")?;
        }
        writeln!(f, "{INDENT}<textformats/>")?;
        writeln!(f, "{INDENT}<labelsettings/>")?;
        writeln!(f, "</qgis_style>")
    }
}

fn write_ramp(f: &mut impl Write, ramp: &ColorRamp) -> fmt::Result {
    writeln!(
        f,
        "{INDENT}{INDENT}<colorramp type=\"{}\" name=\"{}\">",
        escape_attr(&ramp.ramp_type),
        escape_attr(&ramp.name)
    )?;
    for prop in &ramp.props {
        writeln!(
            f,
            "{INDENT}{INDENT}{INDENT}<prop v=\"{}\" k=\"{}\"/>",
            escape_attr(&prop.value),
            escape_attr(&prop.key)
        )?;
    }
    writeln!(f, "{INDENT}{INDENT}</colorramp>")
}

/// Escapes a value for use inside a double-quoted attribute.
pub(crate) fn escape_attr(value: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>' | '"' | '\t' | '\n' | '\r');
    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
