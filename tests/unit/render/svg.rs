use super::*;
use crate::{DisplayConfig, Score, WidgetKey, render_arc};

#[test]
fn numbers_are_compact() {
    assert_eq!(fmt_num(122.0), "122");
    assert_eq!(fmt_num(100.0), "100");
    assert_eq!(fmt_num(0.0), "0");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(10.5), "10.5");
    assert_eq!(fmt_num(295.30970943744057), "295.31");
    assert_eq!(fmt_pct(0.25), "25%");
    assert_eq!(fmt_pct(-0.5), "-50%");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_text("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
}

#[test]
fn gauge_document_has_expected_markup() {
    let scene = render_arc(Score::new(3.0), &DisplayConfig::default(), WidgetKey(2));
    let svg = to_svg(&scene);

    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"244\" height=\"134\" viewBox=\"0 0 244 134\">"
    ));
    assert!(svg.contains("<linearGradient id=\"sweep-arc2\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\""));
    assert!(svg.contains("<stop offset=\"50%\" stop-color=\"#ffffff\" stop-opacity=\"0.7\"/>"));
    assert!(svg.contains("<filter id=\"glow-arc2\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">"));
    assert!(svg.contains("stdDeviation=\"0\""));
    assert!(svg.contains(
        "<path class=\"track\" d=\"M 28 122 A 94 94 0 0 1 216 122\" fill=\"none\" stroke=\"url(#bg-arc2)\" stroke-width=\"12\" stroke-linecap=\"round\"/>"
    ));
    assert!(svg.contains("stroke-dasharray=\"295.31\" stroke-dashoffset=\"147.655\""));
    assert!(svg.contains("filter=\"url(#glow-arc2)\""));
    assert_eq!(svg.matches("<line class=\"tick\"").count(), 3);
    assert!(svg.contains(">3.0</text>"));
    assert!(svg.contains(">Progress: 50% | Glow: Off</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_parses_with_usvg() {
    for s in [1.0, 2.5, 3.0, 4.7, 5.0] {
        let scene = render_arc(Score::new(s), &DisplayConfig::default(), WidgetKey(0));
        let svg = to_svg(&scene);
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
        assert!(tree.is_ok(), "score {s}: {:?}", tree.err());
    }
}
