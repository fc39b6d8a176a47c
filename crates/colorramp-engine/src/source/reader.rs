use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{ParseError, ParseErrorKind};
use crate::paint::{SourceStop, UnitColor};

/// Element name of a gradient stop.
pub const POINT_TAG: &str = "Point";

/// Parses ColorMoves source text.
///
/// DTDs are accepted since exported gradients may start with a `<!DOCTYPE>`.
pub fn parse_document(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Document::parse_with_options(text, options)
}

/// Iterates over the stops of `doc` in document order.
///
/// Points may sit at any depth. Only un-namespaced `Point` elements count.
pub fn points<'a, 'input>(
    doc: &'a Document<'input>,
) -> impl Iterator<Item = Result<SourceStop, ParseError>> + 'a {
    doc.descendants()
        .filter(|n| is_point(*n))
        .enumerate()
        .map(move |(i, node)| read_point(doc, node, i + 1))
}

fn is_point(node: Node<'_, '_>) -> bool {
    node.is_element()
        && node.tag_name().name() == POINT_TAG
        && node.tag_name().namespace().is_none()
}

fn read_point(doc: &Document<'_>, node: Node<'_, '_>, index: usize) -> Result<SourceStop, ParseError> {
    let pos = doc.text_pos_at(node.range().start);
    let attr = |name: &'static str| -> Result<f64, ParseError> {
        let raw = node
            .attribute(name)
            .ok_or_else(|| ParseError::new(index, name, ParseErrorKind::Missing, pos.row, pos.col))?;
        parse_decimal(raw).map_err(|kind| ParseError::new(index, name, kind, pos.row, pos.col))
    };

    // Checked in this order; the first failure is reported.
    let x = attr("x")?;
    let (r, g, b, o) = (attr("r")?, attr("g")?, attr("b")?, attr("o")?);
    Ok(SourceStop::new(x, UnitColor::new(r, g, b, o)))
}

fn parse_decimal(raw: &str) -> Result<f64, ParseErrorKind> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ParseErrorKind::NotANumber(raw.to_owned()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseErrorKind::NotFinite(raw.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(src: &str) -> Result<Vec<SourceStop>, ParseError> {
        let doc = parse_document(src).unwrap();
        points(&doc).collect()
    }

    fn err(src: &str) -> ParseError {
        read(src).unwrap_err()
    }

    // ── parse_document ────────────────────────────────────────────────────

    #[test]
    fn accepts_doctype() {
        let src = "<!DOCTYPE gradient>\n<Gradient><Point x=\"0\" r=\"1\" g=\"1\" b=\"1\" o=\"1\"/></Gradient>";
        assert_eq!(read(src).unwrap().len(), 1);
    }

    #[test]
    fn rejects_malformed_xml() {
        assert!(parse_document("<Gradient><Point x=\"0\"></Gradient>").is_err());
        assert!(parse_document("not xml at all").is_err());
    }

    // ── points ────────────────────────────────────────────────────────────

    #[test]
    fn keeps_document_order() {
        let stops = read(
            r#"<Gradient>
                <Point x="0.9" r="0" g="0" b="0" o="1"/>
                <Point x="0.1" r="1" g="1" b="1" o="1"/>
            </Gradient>"#,
        )
        .unwrap();
        assert_eq!(stops[0].x, 0.9);
        assert_eq!(stops[1].x, 0.1);
    }

    #[test]
    fn finds_nested_points_and_ignores_other_elements() {
        let stops = read(
            r#"<ColorMoves>
                <Meta name="sunset"/>
                <Gradient>
                    <Points>
                        <Point x="0" r="0.5" g="0.25" b="0" o="1" extra="yes"/>
                    </Points>
                </Gradient>
            </ColorMoves>"#,
        )
        .unwrap();
        assert_eq!(stops, vec![SourceStop::new(0.0, UnitColor::new(0.5, 0.25, 0.0, 1.0))]);
    }

    #[test]
    fn ignores_namespaced_points() {
        let stops = read(
            r#"<Gradient xmlns:o="urn:other">
                <o:Point x="0" r="0" g="0" b="0" o="0"/>
            </Gradient>"#,
        )
        .unwrap();
        assert!(stops.is_empty());
    }

    #[test]
    fn trims_whitespace_and_accepts_exponents() {
        let stops = read(r#"<G><Point x=" 0.5 " r="1e0" g="5e-1" b="0" o="1"/></G>"#).unwrap();
        assert_eq!(stops[0].x, 0.5);
        assert_eq!(stops[0].color, UnitColor::new(1.0, 0.5, 0.0, 1.0));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn missing_attribute_reports_point_and_position() {
        let e = err("<G>\n  <Point x=\"0\" r=\"1\" g=\"1\" b=\"1\" o=\"1\"/>\n  <Point x=\"1\" g=\"0\" b=\"0\" o=\"0\"/>\n</G>");
        assert_eq!(e.point, 2);
        assert_eq!(e.attribute, "r");
        assert_eq!(e.kind, ParseErrorKind::Missing);
        assert_eq!((e.line, e.col), (3, 3));
    }

    #[test]
    fn non_numeric_attribute() {
        let e = err(r#"<G><Point x="mid" r="1" g="1" b="1" o="1"/></G>"#);
        assert_eq!(e.attribute, "x");
        assert_eq!(e.kind, ParseErrorKind::NotANumber("mid".into()));
    }

    #[test]
    fn empty_attribute_is_not_a_number() {
        let e = err(r#"<G><Point x="0" r="1" g="" b="1" o="1"/></G>"#);
        assert_eq!(e.attribute, "g");
        assert_eq!(e.kind, ParseErrorKind::NotANumber(String::new()));
    }

    #[test]
    fn non_finite_attribute() {
        let e = err(r#"<G><Point x="0" r="1" g="1" b="1" o="NaN"/></G>"#);
        assert_eq!(e.attribute, "o");
        assert_eq!(e.kind, ParseErrorKind::NotFinite("NaN".into()));
    }
}
