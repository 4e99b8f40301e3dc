use gradline::scene::Scene;
use gradline::settings::Settings;
use gradline::types::{Mode, Record, Sample2D, Sample3D};
use gradline::{Error, GRAPH_FILE, SPIRAL_FILE, build_scene, format, sample};
#[test]
fn graph_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::default();
    let original = sample::graph(&settings.graph).unwrap();
    let scene = build_scene(Mode::Graph, &settings, Some(dir.path())).unwrap();
    assert!(dir.path().join(SPIRAL_FILE).is_file());
    let text = std::fs::read_to_string(dir.path().join(GRAPH_FILE)).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Vertex amount: 101"));
    assert_eq!(lines.clone().count(), 101);
    assert!(lines.next().unwrap().starts_with("-10.0000 "));
    assert!(text.lines().last().unwrap().starts_with("10.0000 "));
    let back: Vec<Sample2D> = format::load(&dir.path().join(GRAPH_FILE)).unwrap();
    assert_eq!(back.len(), original.len());
    for (a, b) in original.iter().zip(&back) {
        for (x, y) in a.fields().iter().zip(b.fields()) {
            assert!((x - y).abs() <= 0.00005 + 1e-5, "{x} vs {y}");
        }
        assert!(b.r == 0.0 || b.g == 0.0);
    }
    let Scene::Graph(mut graph) = scene else {
        panic!("expected a graph scene")
    };
    graph.modulate(0.5);
    for (w, o) in graph.vertices().iter().zip(graph.original()) {
        assert!((w.r - o.r * 0.5).abs() < 1e-6);
        assert!((w.g - o.g * 0.5).abs() < 1e-6);
    }
}
#[test]
fn spiral_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::default();
    let scene = build_scene(Mode::Spiral, &settings, Some(dir.path())).unwrap();
    assert_eq!(scene.len(), 500);
    assert!(dir.path().join(GRAPH_FILE).is_file());
    let path = dir.path().join(SPIRAL_FILE);
    let back: Vec<Sample3D> = format::load(&path).unwrap();
    assert_eq!(back.len(), 500);
    assert_eq!(back.iter().filter(|s| s.r == 1.0).count(), 250);
    assert_eq!(back.iter().filter(|s| s.g == 1.0).count(), 250);
}
#[test]
fn reading_one_record_past_the_spiral_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SPIRAL_FILE);
    let samples = sample::SpiralSampler::new(&Settings::default().spiral)
        .unwrap()
        .samples();
    format::save(&path, &samples).unwrap();
    let text = std::fs::read_to_string(&path)
        .unwrap()
        .replacen("Vertex amount: 500", "Vertex amount: 501", 1);
    std::fs::write(&path, text).unwrap();
    match format::load::<Sample3D>(&path) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 502),
        other => panic!("{other:?}"),
    }
}
#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        format::load::<Sample2D>(&dir.path().join("nope.txt")),
        Err(Error::Io(_))
    ));
}
