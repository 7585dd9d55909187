// File: crates/emberplot/src/svg.rs
// Summary: Single-polygon SVG document used as the histogram rendering intermediate.

use std::fmt::Write as _;

use skia_safe as skia;

/// Textual template for one `<polygon>` in an `<svg>` of fixed pixel size.
///
/// Colors are encoded as `#RRGGBB`; any configured alpha is dropped, the
/// rasterized polygon is fully opaque. The stroke width is emitted as an
/// unsuffixed number. The document is rebuilt and re-rendered on every data
/// update.
#[derive(Clone, Debug)]
pub struct PolygonSvg {
    pub width: i32,
    pub height: i32,
    pub points: Vec<(f32, f32)>,
    /// `None` renders as `fill:none` (no area fill).
    pub fill: Option<skia::Color>,
    pub stroke: skia::Color,
    pub stroke_width: f32,
}

impl PolygonSvg {
    pub fn document(&self) -> String {
        let mut points = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            let _ = write!(points, "{x},{y}");
        }
        let fill = match self.fill {
            Some(c) => hex(c),
            None => "none".to_owned(),
        };
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                "\n",
                r#"    <polygon points="{points}" style="fill:{fill};stroke:{stroke};stroke-width:{sw}"/>"#,
                "\n",
                "</svg>\n",
            ),
            w = self.width,
            h = self.height,
            points = points,
            fill = fill,
            stroke = hex(self.stroke),
            sw = self.stroke_width,
        )
    }
}

/// `#rrggbb` encoding, alpha dropped.
fn hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_encodes_points_and_style() {
        let doc = PolygonSvg {
            width: 10,
            height: 20,
            points: vec![(0.0, 20.0), (5.0, 2.5), (10.0, 20.0)],
            fill: Some(skia::Color::from_argb(0x40, 0x44, 0x55, 0x66)),
            stroke: skia::Color::from_argb(255, 0x11, 0x22, 0x33),
            stroke_width: 5.0,
        }
        .document();

        assert!(doc.contains(r#"width="10" height="20""#));
        assert!(doc.contains(r#"points="0,20 5,2.5 10,20""#));
        // alpha is dropped from the fill and the stroke width is unsuffixed
        assert!(doc.contains("style=\"fill:#445566;stroke:#112233;stroke-width:5\""));
    }

    #[test]
    fn missing_fill_renders_as_none() {
        let doc = PolygonSvg {
            width: 4,
            height: 4,
            points: vec![(0.0, 0.0)],
            fill: None,
            stroke: skia::Color::from_argb(255, 0, 0, 0),
            stroke_width: 1.0,
        }
        .document();
        assert!(doc.contains("fill:none"));
    }
}
