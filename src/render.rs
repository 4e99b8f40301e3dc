use crate::scene::Scene;
use crate::settings::{Settings, SpiralSettings};
use crate::types::{Color, Pos, Sample2D, Sample3D};
use crate::{Error, Result};
use tiny_skia::{
    GradientStop, LineCap, LinearGradient, Paint, PathBuilder, Pixmap, Shader, SpreadMode,
    Stroke, Transform,
};
///rasterizes line strips given in clip coordinates, x and y in [-1,1] with +y up
pub struct Painter {
    pub canvas: Pixmap,
    pub background: Color,
    pub anti_alias: bool,
}
impl Painter {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        Ok(Self {
            canvas: pixmap(width, height)?,
            background,
            anti_alias: true,
        })
    }
    ///reallocates only when the size actually changed
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) != (self.canvas.width(), self.canvas.height()) {
            self.canvas = pixmap(width, height)?;
        }
        Ok(())
    }
    pub fn clear(&mut self) {
        self.canvas.fill(self.background.to_col());
    }
    fn to_screen(&self, p: Pos) -> Pos {
        Pos::new(
            (p.x + 1.0) * 0.5 * self.canvas.width() as f32,
            (1.0 - p.y) * 0.5 * self.canvas.height() as f32,
        )
    }
    fn segment(&mut self, a: (Pos, Color), b: (Pos, Color), width: f32) {
        if a.0 == b.0 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(a.0.x, a.0.y);
        pb.line_to(b.0.x, b.0.y);
        let Some(path) = pb.finish() else {
            return;
        };
        let shader = if a.1 == b.1 {
            Shader::SolidColor(a.1.to_col())
        } else {
            LinearGradient::new(
                a.0.to_point(),
                b.0.to_point(),
                vec![
                    GradientStop::new(0.0, a.1.to_col()),
                    GradientStop::new(1.0, b.1.to_col()),
                ],
                SpreadMode::Pad,
                Transform::identity(),
            )
            .unwrap_or(Shader::SolidColor(b.1.to_col()))
        };
        let paint = Paint {
            shader,
            anti_alias: self.anti_alias,
            ..Paint::default()
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.canvas
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
    ///connects consecutive points, each segment blends from its first color to its second
    pub fn line_strip<I>(&mut self, points: I, width: f32)
    where
        I: IntoIterator<Item = (Pos, Color)>,
    {
        let mut last: Option<(Pos, Color)> = None;
        for (p, c) in points {
            if !p.x.is_finite() || !p.y.is_finite() {
                last = None;
                continue;
            }
            let point = (self.to_screen(p), c);
            if let Some(last) = last {
                self.segment(last, point, width)
            }
            last = Some(point);
        }
    }
    pub fn graph(&mut self, vertices: &[Sample2D], width: f32) {
        self.line_strip(vertices.iter().map(|v| (v.pos(), v.color())), width)
    }
    ///turns the helix by angle about the vertical axis, tilts it and views it orthographically
    pub fn spiral(&mut self, vertices: &[Sample3D], angle: f32, settings: &SpiralSettings) {
        let project = |v: &Sample3D| {
            let p = v.pos().rotate_y(angle).rotate_x(settings.tilt).to_pos();
            Pos::new(
                p.x * settings.view_scale,
                p.y * settings.view_scale + settings.view_shift,
            )
        };
        self.line_strip(
            vertices.iter().map(|v| (project(v), v.color())),
            settings.line_width,
        )
    }
    ///paints one full frame of the scene
    pub fn draw(&mut self, scene: &Scene, settings: &Settings) {
        self.clear();
        match scene {
            Scene::Graph(graph) => self.graph(graph.vertices(), settings.graph.line_width),
            Scene::Spiral { vertices, angle } => self.spiral(vertices, *angle, &settings.spiral),
        }
    }
    ///copies the canvas into a 0RGB framebuffer of the same size
    pub fn save(&self, buffer: &mut [u32]) {
        for (dst, p) in buffer.iter_mut().zip(self.canvas.pixels()) {
            *dst = Color::new(p.red(), p.green(), p.blue()).to_u32();
        }
    }
}
fn pixmap(width: u32, height: u32) -> Result<Pixmap> {
    Pixmap::new(width, height)
        .ok_or_else(|| Error::Initialization(format!("cannot allocate a {width}x{height} canvas")))
}
