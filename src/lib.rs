pub mod error;
pub mod format;
#[cfg(feature = "tiny-skia")]
pub mod render;
pub mod sample;
pub mod scene;
pub mod settings;
pub mod types;
#[cfg(feature = "winit")]
pub mod window;
pub use crate::error::{Error, Result};
use crate::scene::{GraphScene, Scene, graph_vertices, spiral_vertices};
use crate::settings::Settings;
use crate::sample::SpiralSampler;
use crate::types::{Mode, Record, Sample2D, Sample3D};
use std::path::Path;
///file the function graph samples are written to when dumping
pub const GRAPH_FILE: &str = "vertices.txt";
///file the helix samples are written to when dumping
pub const SPIRAL_FILE: &str = "spiral_vertices.txt";
///samples the data for mode and prepares it for drawing
///
///with a dump directory both data sets are written there and the one for mode is read
///back and drawn, otherwise only mode is sampled and handed over directly
pub fn build_scene(mode: Mode, settings: &Settings, dump: Option<&Path>) -> Result<Scene> {
    let scene = match dump {
        Some(dir) => {
            let graph = sample::graph(&settings.graph)?;
            let spiral = SpiralSampler::new(&settings.spiral)?.samples();
            let (graph_path, spiral_path) = (dir.join(GRAPH_FILE), dir.join(SPIRAL_FILE));
            format::save(&graph_path, &graph)?;
            format::save(&spiral_path, &spiral)?;
            match mode {
                Mode::Graph => graph_scene(&reload(&graph_path, graph.len())?, settings),
                Mode::Spiral => spiral_scene(&reload(&spiral_path, spiral.len())?, settings),
            }
        }
        None => match mode {
            Mode::Graph => graph_scene(&sample::graph(&settings.graph)?, settings),
            Mode::Spiral => {
                spiral_scene(&SpiralSampler::new(&settings.spiral)?.samples(), settings)
            }
        },
    };
    log::info!("{:?} mode, {} vertices", mode, scene.len());
    Ok(scene)
}
fn graph_scene(samples: &[Sample2D], settings: &Settings) -> Scene {
    Scene::Graph(GraphScene::new(graph_vertices(samples, &settings.graph)))
}
fn spiral_scene(samples: &[Sample3D], settings: &Settings) -> Scene {
    Scene::Spiral {
        vertices: spiral_vertices(samples, &settings.spiral),
        angle: 0.0,
    }
}
///reads a file back and checks it holds as many records as were written
fn reload<R: Record>(path: &Path, written: usize) -> Result<Vec<R>> {
    let back = format::load(path)?;
    if back.len() != written {
        return Err(Error::parse(
            1,
            format!("wrote {written} records, read back {}", back.len()),
        ));
    }
    Ok(back)
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn in_memory_scenes() {
        let settings = Settings::default();
        let graph = build_scene(Mode::Graph, &settings, None).unwrap();
        assert_eq!(graph.mode(), Mode::Graph);
        assert_eq!(graph.len(), 101);
        let spiral = build_scene(Mode::Spiral, &settings, None).unwrap();
        assert_eq!(spiral.mode(), Mode::Spiral);
        assert_eq!(spiral.len(), 500);
    }
    #[test]
    fn graph_is_scaled_into_view() {
        let Scene::Graph(graph) = build_scene(Mode::Graph, &Settings::default(), None).unwrap()
        else {
            unreachable!()
        };
        let v = graph.vertices();
        assert!((v[0].x + 1.0).abs() < 1e-5);
        assert!((v[100].x - 1.0).abs() < 1e-5);
        for s in v {
            assert!(s.y.abs() <= 0.5 + 1e-6);
            assert!(s.r <= 1.0 && s.g <= 1.0);
        }
    }
    #[test]
    fn reload_checks_the_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SPIRAL_FILE);
        format::save(&path, &[Sample3D::default(); 3]).unwrap();
        assert_eq!(reload::<Sample3D>(&path, 3).unwrap().len(), 3);
        assert!(matches!(
            reload::<Sample3D>(&path, 4),
            Err(Error::Parse { line: 1, .. })
        ));
    }
    #[test]
    fn empty_domain_is_fatal() {
        let mut settings = Settings::default();
        settings.graph.subdivisions = 0;
        assert!(matches!(
            build_scene(Mode::Graph, &settings, None),
            Err(Error::EmptyDomain)
        ));
    }
}
