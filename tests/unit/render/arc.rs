use super::*;
use crate::render::scene::GradientStop;

fn progress(scene: &Scene) -> &PathNode {
    match scene.nodes_with_role(NodeRole::Progress).next() {
        Some(Node::Path(p)) => p,
        other => panic!("missing progress arc: {other:?}"),
    }
}

fn glow(scene: &Scene, key: WidgetKey) -> &GlowFilter {
    match scene.def(&key.def_id("glow")) {
        Some(Def::Glow(f)) => f,
        other => panic!("missing glow filter: {other:?}"),
    }
}

fn sweep(scene: &Scene, key: WidgetKey) -> &[GradientStop] {
    match scene.def(&key.def_id("sweep")) {
        Some(Def::LinearGradient(g)) => &g.stops,
        other => panic!("missing sweep gradient: {other:?}"),
    }
}

fn text(scene: &Scene, role: NodeRole) -> Option<&str> {
    scene.nodes_with_role(role).find_map(|n| match n {
        Node::Text(t) => Some(t.content.as_str()),
        _ => None,
    })
}

#[test]
fn endpoints_map_to_expected_metrics() {
    let geom = ArcGeometry::new(200.0, 12.0);

    let low = ArcMetrics::new(Score::new(1.0), &geom);
    assert_eq!(
        (low.progress_fraction, low.opacity, low.glow),
        (0.0, 1.0, false)
    );

    let high = ArcMetrics::new(Score::new(5.0), &geom);
    assert_eq!(
        (high.progress_fraction, high.opacity, high.glow),
        (1.0, 0.0, true)
    );

    let mid = ArcMetrics::new(Score::new(3.0), &geom);
    assert_eq!(
        (mid.progress_fraction, mid.opacity, mid.glow),
        (0.5, 0.5, false)
    );
}

#[test]
fn scene_carries_layers_in_painter_order() {
    let key = WidgetKey(0);
    let scene = render_arc(Score::new(3.5), &DisplayConfig::default(), key);

    assert_eq!((scene.width, scene.height), (244.0, 134.0));
    let roles: Vec<_> = scene.nodes.iter().filter_map(Node::role).collect();
    assert_eq!(
        roles,
        vec![
            NodeRole::Track,
            NodeRole::Progress,
            NodeRole::Tick,
            NodeRole::Tick,
            NodeRole::Tick,
            NodeRole::ScoreLabel,
            NodeRole::Caption,
            NodeRole::Diagnostic,
        ]
    );

    let p = progress(&scene);
    assert_eq!(p.stroke.width, 14.0);
    assert_eq!(p.stroke.cap, LineCap::Round);
    assert_eq!(p.fill, Paint::None);
    assert_eq!(p.stroke.paint, Paint::Ref("sweep-arc0".to_owned()));
    assert_eq!(p.filter.as_deref(), Some("glow-arc0"));
}

#[test]
fn dash_offset_hides_untraveled_portion() {
    let cfg = DisplayConfig::default();
    let total = std::f64::consts::PI * 94.0;

    let dash = progress(&render_arc(Score::new(2.0), &cfg, WidgetKey(0)))
        .stroke
        .dash
        .expect("progress arc is dashed");
    assert!((dash.array - total).abs() < 1e-9);
    assert!((dash.offset - total * 0.75).abs() < 1e-9);

    let mut prev = f64::INFINITY;
    for i in 0..=40 {
        let s = Score::new(1.0 + f64::from(i) * 0.1);
        let offset = progress(&render_arc(s, &cfg, WidgetKey(0)))
            .stroke
            .dash
            .map(|d| d.offset)
            .unwrap_or_default();
        assert!(offset <= prev + 1e-12, "fill must grow with score");
        prev = offset;
    }
}

#[test]
fn out_of_range_input_renders_like_clamped_input() {
    let cfg = DisplayConfig::default();
    let key = WidgetKey(4);
    assert_eq!(
        render_arc(Score::new(-8.0), &cfg, key),
        render_arc(Score::new(1.0), &cfg, key)
    );
    assert_eq!(
        render_arc(Score::new(5.7), &cfg, key),
        render_arc(Score::new(5.0), &cfg, key)
    );
    assert_eq!(
        render_arc(Score::new(f64::NAN), &cfg, key),
        render_arc(Score::MIN, &cfg, key)
    );
}

#[test]
fn glow_and_sweep_follow_opacity() {
    let cfg = DisplayConfig::default();
    let key = WidgetKey(1);

    assert_eq!(glow(&render_arc(Score::new(3.0), &cfg, key), key).std_dev, 0.0);
    assert_eq!(glow(&render_arc(Score::new(3.01), &cfg, key), key).std_dev, 3.0);

    let high = render_arc(Score::new(5.0), &cfg, key);
    let floors: Vec<f64> = sweep(&high, key).iter().map(|s| s.opacity).collect();
    assert_eq!(floors, vec![0.3, 0.5, 0.7, 0.6, 0.4]);
    assert!(sweep(&high, key).iter().all(|s| s.color == cfg.base_color));
}

#[test]
fn labels_show_displayed_score_and_diagnostics() {
    let cfg = DisplayConfig::default();
    let scene = render_arc(Score::new(4.2), &cfg, WidgetKey(0));
    assert_eq!(text(&scene, NodeRole::ScoreLabel), Some("4.2"));
    assert_eq!(text(&scene, NodeRole::Caption), Some(CAPTION));
    assert_eq!(
        text(&scene, NodeRole::Diagnostic),
        Some("Progress: 80% | Glow: On")
    );

    let scene = render_arc(Score::new(1.8), &cfg, WidgetKey(0));
    assert_eq!(
        text(&scene, NodeRole::Diagnostic),
        Some("Progress: 20% | Glow: Off")
    );

    let hidden = DisplayConfig {
        show_score: false,
        ..cfg
    };
    let scene = render_arc(Score::new(4.1), &hidden, WidgetKey(0));
    assert!(scene.nodes.iter().all(|n| !matches!(n, Node::Text(_))));
}

#[test]
fn keys_keep_definition_ids_apart() {
    let cfg = DisplayConfig::default();
    let a = render_arc(Score::new(2.0), &cfg, WidgetKey(0));
    let b = render_arc(Score::new(2.0), &cfg, WidgetKey(1));
    for def in &a.defs {
        assert!(b.def(def.id()).is_none(), "{} collides", def.id());
    }
    assert_eq!(a.defs.len(), 3);
}
