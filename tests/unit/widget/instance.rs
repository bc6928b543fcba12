use super::*;

const MS: Duration = Duration::from_millis(1);

#[test]
fn mount_sweeps_up_from_lowest_score() {
    let cfg = WidgetConfig::new(4.0);
    let mut w = ScoreArcWidget::mount(WidgetKey(5), &cfg, Duration::ZERO);
    assert!(w.needs_frame());
    assert_eq!(w.scene(), render_arc(Score::MIN, &cfg.display(), WidgetKey(5)));

    assert_eq!(w.tick(1000 * MS), Tick::Finished);
    assert!(!w.needs_frame());
    assert_eq!(w.scene(), render_arc(Score::new(4.0), &cfg.display(), WidgetKey(5)));
}

#[test]
fn reconfigure_swaps_display_and_retargets() {
    let mut w = ScoreArcWidget::mount(
        WidgetKey(0),
        &WidgetConfig {
            animated: false,
            ..WidgetConfig::new(2.0)
        },
        Duration::ZERO,
    );
    assert!(!w.needs_frame());

    let next = WidgetConfig {
        size: 300.0,
        stroke_width: 16.0,
        show_score: false,
        ..WidgetConfig::new(3.0)
    };
    assert!(w.reconfigure(&next, 10 * MS));
    assert_eq!(w.display().size, 300.0);
    assert!(!w.display().show_score);
    assert_eq!(w.animator().displayed(), 2.0);
    assert_eq!(w.animator().target(), Score::new(3.0));
}

#[test]
fn set_score_reports_frame_need() {
    let cfg = WidgetConfig {
        duration_ms: 100,
        ..WidgetConfig::new(2.0)
    };
    let mut w = ScoreArcWidget::mount(WidgetKey(0), &cfg, Duration::ZERO);
    w.tick(100 * MS);
    assert!(!w.set_score(Score::new(2.0), 200 * MS));
    assert!(w.set_score(Score::new(9.0), 200 * MS));
    assert_eq!(w.animator().target(), Score::MAX);
    assert_eq!(w.key(), WidgetKey(0));
}
