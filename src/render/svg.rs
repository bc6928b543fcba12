use crate::render::scene::{
    Def, FontWeight, GlowFilter, LineCap, LinearGradient, Node, Paint, Scene, Stroke,
};

/// Format a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_owned(),
        s => s.to_owned(),
    }
}

fn fmt_pct(v: f64) -> String {
    format!("{}%", fmt_num(v * 100.0))
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialize a scene as a standalone SVG 1.1 document.
///
/// Output is deterministic for a given scene, so it can be diffed or snapshot-tested.
pub fn to_svg(scene: &Scene) -> String {
    let w = fmt_num(scene.width);
    let h = fmt_num(scene.height);
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    );

    if !scene.defs.is_empty() {
        out.push_str("<defs>\n");
        for def in &scene.defs {
            write_def(&mut out, def);
        }
        out.push_str("</defs>\n");
    }
    for node in &scene.nodes {
        write_node(&mut out, node);
    }
    out.push_str("</svg>\n");
    out
}

fn write_def(out: &mut String, def: &Def) {
    match def {
        Def::LinearGradient(g) => write_linear_gradient(out, g),
        Def::Glow(f) => write_glow(out, f),
    }
}

fn write_linear_gradient(out: &mut String, g: &LinearGradient) {
    out.push_str(&format!(
        "<linearGradient id=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" gradientUnits=\"objectBoundingBox\">\n",
        g.id,
        fmt_pct(g.start.x),
        fmt_pct(g.start.y),
        fmt_pct(g.end.x),
        fmt_pct(g.end.y),
    ));
    for stop in &g.stops {
        out.push_str(&format!(
            "<stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>\n",
            fmt_pct(stop.offset),
            stop.color.to_hex_rgb(),
            fmt_num(stop.opacity * stop.color.alpha()),
        ));
    }
    out.push_str("</linearGradient>\n");
}

fn write_glow(out: &mut String, f: &GlowFilter) {
    out.push_str(&format!(
        "<filter id=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\">\n",
        f.id,
        fmt_pct(f.region_origin.x),
        fmt_pct(f.region_origin.y),
        fmt_pct(f.region_size.x),
        fmt_pct(f.region_size.y),
    ));
    out.push_str(&format!(
        "<feGaussianBlur stdDeviation=\"{}\" result=\"coloredBlur\"/>\n",
        fmt_num(f.std_dev)
    ));
    out.push_str(
        "<feMerge><feMergeNode in=\"coloredBlur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\n",
    );
    out.push_str("</filter>\n");
}

fn paint_attr(name: &str, paint: &Paint) -> String {
    match paint {
        Paint::None => format!(" {name}=\"none\""),
        Paint::Solid(c) if c.a == 255 => format!(" {name}=\"{}\"", c.to_hex_rgb()),
        Paint::Solid(c) => format!(
            " {name}=\"{}\" {name}-opacity=\"{}\"",
            c.to_hex_rgb(),
            fmt_num(c.alpha())
        ),
        Paint::Ref(id) => format!(" {name}=\"url(#{id})\""),
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = paint_attr("stroke", &stroke.paint);
    s.push_str(&format!(" stroke-width=\"{}\"", fmt_num(stroke.width)));
    if stroke.cap == LineCap::Round {
        s.push_str(" stroke-linecap=\"round\"");
    }
    if let Some(dash) = stroke.dash {
        s.push_str(&format!(
            " stroke-dasharray=\"{}\" stroke-dashoffset=\"{}\"",
            fmt_num(dash.array),
            fmt_num(dash.offset)
        ));
    }
    s
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Path(p) => {
            out.push_str(&format!(
                "<path class=\"{}\" d=\"{}\"{}{}",
                p.role.class_name(),
                p.arc.to_path_data(),
                paint_attr("fill", &p.fill),
                stroke_attrs(&p.stroke),
            ));
            if let Some(filter) = &p.filter {
                out.push_str(&format!(" filter=\"url(#{filter})\""));
            }
            out.push_str("/>\n");
        }
        Node::Line(l) => {
            out.push_str(&format!(
                "<line class=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
                l.role.class_name(),
                fmt_num(l.from.x),
                fmt_num(l.from.y),
                fmt_num(l.to.x),
                fmt_num(l.to.y),
                stroke_attrs(&l.stroke),
            ));
        }
        Node::Text(t) => {
            let weight = match t.weight {
                FontWeight::Normal => "",
                FontWeight::Bold => " font-weight=\"bold\"",
            };
            out.push_str(&format!(
                "<text class=\"{}\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"{}\"{weight}{}>{}</text>\n",
                t.role.class_name(),
                fmt_num(t.anchor.x),
                fmt_num(t.anchor.y),
                fmt_num(t.font_size),
                paint_attr("fill", &Paint::Solid(t.color)),
                escape_text(&t.content),
            ));
        }
        Node::Group(g) => {
            out.push_str(&format!(
                "<g transform=\"translate({} {})\">\n",
                fmt_num(g.offset.x),
                fmt_num(g.offset.y)
            ));
            for child in &g.children {
                write_node(out, child);
            }
            out.push_str("</g>\n");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
