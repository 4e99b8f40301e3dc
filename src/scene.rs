use crate::settings::{GraphSettings, SpiralSettings};
use crate::types::{Mode, Sample2D, Sample3D};
///maps the cursor height to [0,1], 1 at the top of the window and 0 at the bottom
pub fn cursor_factor(y: f64, height: f64) -> f32 {
    if height <= 0.0 {
        return 1.0;
    }
    (1.0 - y / height).clamp(0.0, 1.0) as f32
}
///scales loaded graph samples into view and boosts their colors
pub fn graph_vertices(samples: &[Sample2D], settings: &GraphSettings) -> Vec<Sample2D> {
    let boost = |c: f32| (c * settings.color_intensity).min(1.0);
    samples
        .iter()
        .map(|s| {
            Sample2D::new(
                s.x * settings.x_scale,
                s.y * settings.y_scale,
                boost(s.r),
                boost(s.g),
                s.b,
            )
        })
        .collect()
}
///drops loaded helix samples by the configured offset
pub fn spiral_vertices(samples: &[Sample3D], settings: &SpiralSettings) -> Vec<Sample3D> {
    samples
        .iter()
        .map(|s| Sample3D {
            y: s.y + settings.y_offset,
            ..*s
        })
        .collect()
}
///graph vertices with the colors they were loaded with and the colors drawn this frame
#[derive(Clone, Debug)]
pub struct GraphScene {
    original: Vec<Sample2D>,
    working: Vec<Sample2D>,
}
impl GraphScene {
    pub fn new(vertices: Vec<Sample2D>) -> Self {
        Self {
            working: vertices.clone(),
            original: vertices,
        }
    }
    ///rescales red and green from their loaded values, never below 0
    pub fn modulate(&mut self, factor: f32) {
        for (w, o) in self.working.iter_mut().zip(&self.original) {
            w.r = (o.r * factor).max(0.0);
            w.g = (o.g * factor).max(0.0);
        }
    }
    pub fn vertices(&self) -> &[Sample2D] {
        &self.working
    }
    pub fn original(&self) -> &[Sample2D] {
        &self.original
    }
}
#[derive(Clone, Debug)]
pub enum Scene {
    Graph(GraphScene),
    ///the helix never changes, the cursor only turns it
    Spiral {
        vertices: Vec<Sample3D>,
        angle: f32,
    },
}
impl Scene {
    pub fn mode(&self) -> Mode {
        match self {
            Scene::Graph(_) => Mode::Graph,
            Scene::Spiral { .. } => Mode::Spiral,
        }
    }
    ///applies this frame's cursor factor
    pub fn update(&mut self, factor: f32) {
        match self {
            Scene::Graph(graph) => graph.modulate(factor),
            Scene::Spiral { angle, .. } => *angle = factor,
        }
    }
    pub fn len(&self) -> usize {
        match self {
            Scene::Graph(graph) => graph.vertices().len(),
            Scene::Spiral { vertices, .. } => vertices.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn factor_follows_cursor() {
        assert_eq!(cursor_factor(0.0, 480.0), 1.0);
        assert_eq!(cursor_factor(480.0, 480.0), 0.0);
        assert_eq!(cursor_factor(240.0, 480.0), 0.5);
        assert_eq!(cursor_factor(-20.0, 480.0), 1.0);
        assert_eq!(cursor_factor(700.0, 480.0), 0.0);
        assert_eq!(cursor_factor(10.0, 0.0), 1.0);
    }
    #[test]
    fn modulation_scales_from_the_original() {
        let mut scene = GraphScene::new(vec![
            Sample2D::new(0.0, 0.0, 0.8, 0.0, 0.0),
            Sample2D::new(0.1, 0.0, 0.0, 0.6, 0.3),
        ]);
        scene.modulate(0.5);
        assert!((scene.vertices()[0].r - 0.4).abs() < 1e-6);
        assert!((scene.vertices()[1].g - 0.3).abs() < 1e-6);
        assert_eq!(scene.vertices()[1].b, 0.3);
        scene.modulate(0.25);
        assert!((scene.vertices()[0].r - 0.2).abs() < 1e-6);
        scene.modulate(-1.0);
        assert_eq!(scene.vertices()[0].r, 0.0);
        assert_eq!(scene.original()[0].r, 0.8);
    }
    #[test]
    fn spiral_only_turns() {
        let vertices = vec![Sample3D::new(0.5, 0.0, 0.0, 1.0, 0.0, 0.0)];
        let mut scene = Scene::Spiral {
            vertices: vertices.clone(),
            angle: 0.0,
        };
        scene.update(0.7);
        match &scene {
            Scene::Spiral { vertices: v, angle } => {
                assert_eq!(*angle, 0.7);
                assert_eq!(v, &vertices);
            }
            Scene::Graph(_) => unreachable!(),
        }
        assert_eq!(scene.mode(), Mode::Spiral);
    }
    #[test]
    fn presentation_transforms() {
        let g = graph_vertices(
            &[Sample2D::new(-10.0, 1.0, 0.1, 0.5, 0.0)],
            &GraphSettings::default(),
        );
        assert!((g[0].x + 1.0).abs() < 1e-6);
        assert_eq!(g[0].y, 0.5);
        assert!((g[0].r - 0.5).abs() < 1e-6);
        assert_eq!(g[0].g, 1.0);
        let s = spiral_vertices(
            &[Sample3D::new(0.5, 0.25, 0.0, 1.0, 0.0, 0.0)],
            &SpiralSettings::default(),
        );
        assert_eq!(s[0].y, -0.75);
        assert_eq!(s[0].x, 0.5);
    }
}
