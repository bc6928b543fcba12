use super::*;
use crate::{WidgetKey, render_arc};

fn tile(key: u64, cfg: &WidgetConfig) -> Scene {
    render_arc(cfg.score, &cfg.display(), WidgetKey(key))
}

#[test]
fn demo_data_matches_page() {
    assert_eq!(PRESET_SCORES.len(), 7);
    assert!(PRESET_SCORES.windows(2).all(|w| w[0] < w[1]));

    let main = main_display_config(INITIAL_SCORE);
    assert_eq!((main.size, main.stroke_width), (300.0, 16.0));
    assert_eq!(main.duration_ms, 1200);
    assert!(main.animated);
    assert_eq!(main.score.get(), 3.5);

    let [small, medium, large] = variants();
    assert_eq!(small.title, "Small (150px)");
    assert_eq!(
        (small.config.size, small.config.stroke_width, small.config.score.get()),
        (150.0, 10.0, 2.1)
    );
    assert_eq!(
        (medium.config.size, medium.config.stroke_width, medium.config.score.get()),
        (200.0, 12.0, 3.8)
    );
    assert_eq!(
        (large.config.size, large.config.stroke_width, large.config.score.get()),
        (250.0, 14.0, 4.9)
    );
    for v in [&small, &medium, &large] {
        v.config.validate().unwrap();
    }
}

#[test]
fn slider_snaps_to_tenths_and_clamps() {
    assert_eq!(slider_value(3.5).get(), 3.5);
    assert_eq!(slider_value(3.54).get(), 3.5);
    assert_eq!(slider_value(3.56).get(), 3.6);
    assert_eq!(slider_value(1.0).get(), 1.0);
    assert_eq!(slider_value(4.99).get(), 5.0);
    assert_eq!(slider_value(0.2).get(), 1.0);
    assert_eq!(slider_value(9.0).get(), 5.0);
    assert_eq!(slider_value(f64::NAN).get(), 1.0);
    assert_eq!(slider_value(f64::INFINITY).get(), 5.0);

    for i in 0..=40 {
        let v = slider_value(1.0 + f64::from(i) * 0.1).get();
        assert_eq!(v, (v * 10.0).round() / 10.0);
    }
}

#[test]
fn gallery_places_tiles_in_grid() {
    let [small, medium, large] = variants();
    let tiles = [
        GalleryTile::titled(small.title, tile(0, &small.config)),
        GalleryTile::titled(medium.title, tile(1, &medium.config)),
        GalleryTile::titled(large.title, tile(2, &large.config)),
    ];
    let gap = 20.0;
    let out = compose_gallery(&tiles, 2, gap, Color::WHITE).unwrap();

    // Largest tile is 250/14: padding 24, width 298, height 163.
    let (cell_w, cell_h) = (298.0, 163.0 + TITLE_BAND);
    assert_eq!(out.width, gap + 2.0 * (cell_w + gap));
    assert_eq!(out.height, gap + 2.0 * (cell_h + gap));
    assert_eq!(out.defs.len(), 9);

    let groups: Vec<&GroupNode> = out
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Group(g) => Some(g),
            _ => None,
        })
        .collect();
    assert_eq!(groups.len(), 3);

    // Small tile (width 190) is centered in the first cell.
    assert_eq!(groups[0].offset, Vec2::new(gap + (cell_w - 190.0) / 2.0, gap + TITLE_BAND));
    assert_eq!(groups[2].offset, Vec2::new(gap, gap + cell_h + gap + TITLE_BAND));
    assert_eq!(groups[1].children, tiles[1].scene.nodes);

    let titles: Vec<&str> = out
        .nodes_with_role(NodeRole::Title)
        .filter_map(|n| match n {
            Node::Text(t) => Some(t.content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["Small (150px)", "Medium (200px)", "Large (250px)"]);
}

#[test]
fn untitled_gallery_has_no_title_band() {
    let cfg = WidgetConfig::new(2.0);
    let tiles = [GalleryTile::new(tile(0, &cfg)), GalleryTile::new(tile(1, &cfg))];
    let out = compose_gallery(&tiles, 4, 0.0, Color::WHITE).unwrap();
    assert_eq!((out.width, out.height), (488.0, 134.0));
    assert_eq!(out.nodes_with_role(NodeRole::Title).count(), 0);
}

#[test]
fn gallery_rejects_bad_layouts() {
    let cfg = WidgetConfig::new(2.0);
    let err = compose_gallery(&[], 0, 10.0, Color::WHITE).unwrap_err();
    assert!(matches!(err, ScoreArcError::Validation(_)));
    let err = compose_gallery(&[], 1, -1.0, Color::WHITE).unwrap_err();
    assert!(matches!(err, ScoreArcError::Validation(_)));

    let dup = [GalleryTile::new(tile(7, &cfg)), GalleryTile::new(tile(7, &cfg))];
    let err = compose_gallery(&dup, 2, 0.0, Color::WHITE).unwrap_err();
    assert!(err.to_string().contains("sweep-arc7"));

    let empty = compose_gallery(&[], 3, 10.0, Color::WHITE).unwrap();
    assert!(empty.nodes.is_empty());
}
