//! Tests for SVG path construction and document output

#[cfg(test)]
mod tests {
    use kolamgen::geometry::compiler::compile;
    use kolamgen::geometry::pattern::{Curve, Point};
    use kolamgen::geometry::svg::{SvgOptions, escape_attribute, svg_path, to_svg};
    use kolamgen::io::configuration::GeneratorConfig;
    use kolamgen::spatial::matrix::TileMatrix;
    use kolamgen::tiles::catalog::{CurvePoint, TileCatalog};

    fn empty_matrix() -> TileMatrix {
        TileMatrix::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap()
    }

    fn point(x: f64, y: f64, control: Option<[f64; 2]>) -> CurvePoint {
        CurvePoint { x, y, control }
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(svg_path(&[]), "");
        assert_eq!(svg_path(&[point(1.0, 2.0, None)]), "M 1 2");
    }

    // Tests explicit control points are used for quadratic segments
    #[test]
    fn test_path_with_control_point() {
        let path = svg_path(&[point(0.0, 0.0, None), point(10.0, 0.0, Some([5.0, 8.0]))]);
        assert_eq!(path, "M 0 0 Q 5 8 10 0");
    }

    // Tests segments without a control point bend through their midpoint
    // Verified by falling back to the previous point instead
    #[test]
    fn test_path_midpoint_fallback() {
        let path = svg_path(&[
            point(0.0, 0.0, None),
            point(10.0, 4.0, None),
            point(10.0, 10.0, Some([12.0, 7.0])),
        ]);
        assert_eq!(path, "M 0 0 Q 5 2 10 4 Q 12 7 10 10");
    }

    #[test]
    fn test_document_structure() {
        let catalog = TileCatalog::builtin().unwrap();
        let matrix = TileMatrix::from_rows(&[vec![6, 9], vec![7, 8]]).unwrap();
        let pattern = compile(&matrix, &catalog, &GeneratorConfig::default()).unwrap();
        let svg = to_svg(&pattern, &SvgOptions::default());

        assert!(svg.starts_with(r#"<svg width="180" height="180" viewBox="0 0 180 180""#));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("<path").count(), 4);
        assert!(!svg.contains("<rect"));

        // Dots come before curves
        let last_circle = svg.rfind("<circle").unwrap();
        let first_path = svg.find("<path").unwrap();
        assert!(last_circle < first_path);
    }

    #[test]
    fn test_background_rectangle() {
        let catalog = TileCatalog::builtin().unwrap();
        let pattern = compile(&empty_matrix(), &catalog, &GeneratorConfig::default())
            .unwrap();
        let options = SvgOptions {
            background: Some("#000000".to_string()),
        };
        let svg = to_svg(&pattern, &options);
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#000000" />"##));
    }

    // Tests outline dots and single-point curves use their fallback markup
    #[test]
    fn test_outline_dot_and_line() {
        let catalog = TileCatalog::builtin().unwrap();
        let mut pattern = compile(&empty_matrix(), &catalog, &GeneratorConfig::default())
            .unwrap();
        if let Some(dot) = pattern.dots.first_mut() {
            dot.filled = false;
        }
        pattern.curves.push(Curve {
            id: "curve-extra".to_string(),
            start: Point { x: 1.0, y: 2.0 },
            end: Point { x: 3.0, y: 4.0 },
            curve_points: vec![point(1.0, 2.0, None)],
            stroke_width: 1.5,
            color: "#ffffff".to_string(),
        });

        let svg = to_svg(&pattern, &SvgOptions::default());
        assert!(svg.contains(r##"fill="none" stroke="#ffffff" stroke-width="1""##));
        assert_eq!(svg.matches(r#"stroke-width="0""#).count(), 3);
        assert!(svg.contains(r#"<line x1="1" y1="2" x2="3" y2="4""#));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("#ffffff"), "#ffffff");
        assert_eq!(
            escape_attribute(r#"a&b"c'd<e>"#),
            "a&amp;b&quot;c&apos;d&lt;e&gt;"
        );
    }

    // Tests user colors cannot close their attribute and add markup
    // Verified by writing the background without escaping
    #[test]
    fn test_colors_are_escaped() {
        let catalog = TileCatalog::builtin().unwrap();
        let config = GeneratorConfig {
            color: r#"red" onclick="x"#.to_string(),
            ..GeneratorConfig::default()
        };
        let matrix = TileMatrix::from_rows(&[vec![16]]).unwrap();
        let pattern = compile(&matrix, &catalog, &config).unwrap();
        let options = SvgOptions {
            background: Some(r#"red" onload="alert(1)"#.to_string()),
        };
        let svg = to_svg(&pattern, &options);

        assert!(!svg.contains("onload=\""));
        assert!(!svg.contains("onclick=\""));
        assert!(svg.contains(r#"fill="red&quot; onload=&quot;alert(1)""#));
        assert!(svg.contains(r#"stroke="red&quot; onclick=&quot;x""#));
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<path").count(), 1);
    }
}
