use super::*;
use crate::{Score, WidgetConfig, render_arc};

fn mounted(score: f64, duration_ms: u64) -> (FrameLoop, WidgetKey) {
    let mut fl = FrameLoop::new();
    let key = fl.mount(&WidgetConfig {
        duration_ms,
        ..WidgetConfig::new(score)
    });
    (fl, key)
}

#[test]
fn records_from_first_frame_until_settled() {
    let (mut fl, key) = mounted(4.0, 100);
    let mut sink = InMemorySink::new();

    // 50 fps is an exact 20 ms interval, so 100 ms settles on the fifth tick.
    let n = record_animation(&mut fl, key, 50, 1000, &mut sink).unwrap();
    assert_eq!(n, 6);
    assert!(sink.is_ended());

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (244.0, 134.0, 50));

    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);

    let display = *fl.widget(key).unwrap().display();
    let (_, first) = &sink.frames()[0];
    assert_eq!(*first, render_arc(Score::MIN, &display, key));
    let (_, last) = sink.frames().last().unwrap();
    assert_eq!(*last, render_arc(Score::new(4.0), &display, key));
    assert!(fl.is_idle());
}

#[test]
fn idle_widget_records_a_single_frame() {
    let mut fl = FrameLoop::new();
    let key = fl.mount(&WidgetConfig {
        animated: false,
        ..WidgetConfig::new(2.5)
    });
    let mut sink = InMemorySink::new();
    assert_eq!(record_animation(&mut fl, key, 60, 100, &mut sink).unwrap(), 1);
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn frame_cap_stops_recording() {
    let (mut fl, key) = mounted(5.0, 10_000);
    let mut sink = InMemorySink::new();
    assert_eq!(record_animation(&mut fl, key, 60, 4, &mut sink).unwrap(), 4);
    assert!(fl.has_pending_frame(key));
}

#[test]
fn rejects_bad_arguments() {
    let (mut fl, key) = mounted(3.0, 100);
    let mut sink = InMemorySink::new();

    let err = record_animation(&mut fl, key, 0, 10, &mut sink).unwrap_err();
    assert!(matches!(err, ScoreArcError::Validation(_)));
    let err = record_animation(&mut fl, key, 60, 0, &mut sink).unwrap_err();
    assert!(matches!(err, ScoreArcError::Validation(_)));
    let err = record_animation(&mut fl, WidgetKey(99), 60, 10, &mut sink).unwrap_err();
    assert!(err.to_string().contains("arc99"));
    assert!(sink.config().is_none());
}

#[test]
fn svg_sequence_writes_numbered_files() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("target/unit_sink_svg");
    let _ = std::fs::remove_dir_all(&dir);

    let (mut fl, key) = mounted(2.0, 40);
    let mut sink = FileSequenceSink::new(&dir, SequenceFormat::Svg).with_prefix("arc");
    let n = record_animation(&mut fl, key, 50, 100, &mut sink).unwrap();
    assert_eq!(n, 3);

    let names: Vec<String> = sink
        .written()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["arc_0000.svg", "arc_0001.svg", "arc_0002.svg"]);

    let text = std::fs::read_to_string(&sink.written()[2]).unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("sweep-arc0"));
}
