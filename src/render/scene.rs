use crate::foundation::{
    color::Color,
    core::{Point, Vec2},
};

/// A backend-agnostic vector drawing: paint definitions plus nodes in painter's order.
///
/// Scenes are plain data. They are produced by [`crate::render_arc`], composed by
/// [`crate::compose_gallery`], and consumed by [`crate::to_svg`] and [`crate::rasterize`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    /// Drawing surface width.
    pub width: f64,
    /// Drawing surface height.
    pub height: f64,
    /// Gradients and filters referenced by id from [`Paint::Ref`] and [`PathNode::filter`].
    pub defs: Vec<Def>,
    /// Drawables, back to front.
    pub nodes: Vec<Node>,
}

impl Scene {
    /// An empty scene of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Look up a definition by id.
    pub fn def(&self, id: &str) -> Option<&Def> {
        self.defs.iter().find(|d| d.id() == id)
    }

    /// Top-level nodes with `role`, in painter's order. Groups are not descended into.
    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.role() == Some(role))
    }
}

/// A paint server or filter definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Def {
    /// Linear gradient in object bounding-box units.
    LinearGradient(LinearGradient),
    /// Blur merged under the source graphic.
    Glow(GlowFilter),
}

impl Def {
    /// Definition id, unique within a scene.
    pub fn id(&self) -> &str {
        match self {
            Self::LinearGradient(g) => &g.id,
            Self::Glow(f) => &f.id,
        }
    }
}

/// One gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the gradient vector in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
    /// Stop opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A linear gradient whose vector runs from `start` to `end` in bounding-box fractions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradient {
    /// Definition id.
    pub id: String,
    /// Gradient vector start, `(0, 0)` is the top-left of the painted shape's box.
    pub start: Point,
    /// Gradient vector end, `(1, 0)` is the top-right of the painted shape's box.
    pub end: Point,
    /// Stops in ascending offset order.
    pub stops: Vec<GradientStop>,
}

/// Gaussian-blur glow: `merge(blur(source), source)` over an enlarged filter region.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlowFilter {
    /// Definition id.
    pub id: String,
    /// Blur standard deviation; `0` leaves the source untouched.
    pub std_dev: f64,
    /// Region origin relative to the bounding box (`-0.5` = half a box outward).
    pub region_origin: Vec2,
    /// Region size relative to the bounding box (`2.0` = twice the box).
    pub region_size: Vec2,
}

/// Fill or stroke paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Paint {
    /// Not painted.
    None,
    /// Flat color.
    Solid(Color),
    /// Reference to a gradient definition.
    Ref(String),
}

/// Stroke end-cap style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Square end at the endpoint.
    #[default]
    Butt,
    /// Semicircular end.
    Round,
}

/// A single-period dash: `array` long segments separated by `array` long gaps, shifted by
/// `offset` along the path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Dash {
    /// Dash (and gap) length.
    pub array: f64,
    /// Distance into the dash pattern at which the path starts.
    pub offset: f64,
}

/// Stroke parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Stroke width.
    pub width: f64,
    /// End-cap style.
    pub cap: LineCap,
    /// Optional dash pattern.
    pub dash: Option<Dash>,
}

/// A circular arc from `from` to `to` (SVG elliptical-arc semantics with equal radii).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArcPath {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Circle radius.
    pub radius: f64,
    /// `true` for the positive-angle (clockwise on a y-down surface) direction.
    pub sweep: bool,
    /// `true` to take the larger of the two candidate arcs.
    pub large_arc: bool,
}

impl ArcPath {
    /// The equivalent kurbo SVG arc.
    pub fn to_svg_arc(self) -> kurbo::SvgArc {
        kurbo::SvgArc {
            from: self.from,
            to: self.to,
            radii: Vec2::new(self.radius, self.radius),
            x_rotation: 0.0,
            large_arc: self.large_arc,
            sweep: self.sweep,
        }
    }

    /// Center-parameterized form, or `None` for a degenerate (zero-length) arc.
    pub fn to_kurbo_arc(self) -> Option<kurbo::Arc> {
        kurbo::Arc::from_svg_arc(&self.to_svg_arc())
    }

    /// SVG path data, e.g. `M 22 122 A 94 94 0 0 1 222 122`.
    pub fn to_path_data(self) -> String {
        use crate::render::svg::fmt_num;
        format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            fmt_num(self.from.x),
            fmt_num(self.from.y),
            fmt_num(self.radius),
            fmt_num(self.radius),
            u8::from(self.large_arc),
            u8::from(self.sweep),
            fmt_num(self.to.x),
            fmt_num(self.to.y),
        )
    }
}

/// What a node depicts. Emitted as the SVG `class` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// The unfilled background semicircle.
    Track,
    /// The dashed, gradient-stroked progress semicircle.
    Progress,
    /// A divider line at an integer score.
    Tick,
    /// The large numeric score.
    ScoreLabel,
    /// The `out of 5.0` caption.
    Caption,
    /// Progress percentage and glow state.
    Diagnostic,
    /// Free-standing heading text (gallery titles).
    Title,
}

impl NodeRole {
    /// Kebab-case class name.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Progress => "progress",
            Self::Tick => "tick",
            Self::ScoreLabel => "score-label",
            Self::Caption => "caption",
            Self::Diagnostic => "diagnostic",
            Self::Title => "title",
        }
    }
}

/// Stroked arc path.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathNode {
    /// Node role.
    pub role: NodeRole,
    /// Geometry.
    pub arc: ArcPath,
    /// Interior paint (always [`Paint::None`] for the gauge arcs).
    pub fill: Paint,
    /// Outline.
    pub stroke: Stroke,
    /// Optional filter definition id.
    pub filter: Option<String>,
}

/// Straight stroked segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineNode {
    /// Node role.
    pub role: NodeRole,
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Outline.
    pub stroke: Stroke,
}

/// Font weight subset used by the labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// A single line of horizontally centered text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextNode {
    /// Node role.
    pub role: NodeRole,
    /// Baseline anchor; text is centered on `anchor.x`.
    pub anchor: Point,
    /// Text content.
    pub content: String,
    /// Font size.
    pub font_size: f64,
    /// Font weight.
    pub weight: FontWeight,
    /// Fill color.
    pub color: Color,
}

/// Translated group of nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GroupNode {
    /// Translation applied to every child.
    pub offset: Vec2,
    /// Children, back to front.
    pub children: Vec<Node>,
}

/// A drawable.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Stroked arc.
    Path(PathNode),
    /// Straight segment.
    Line(LineNode),
    /// Text line.
    Text(TextNode),
    /// Translated group.
    Group(GroupNode),
}

impl Node {
    /// Role of a leaf node; groups have none.
    pub fn role(&self) -> Option<NodeRole> {
        match self {
            Self::Path(p) => Some(p.role),
            Self::Line(l) => Some(l.role),
            Self::Text(t) => Some(t.role),
            Self::Group(_) => None,
        }
    }
}
