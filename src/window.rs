use crate::render::Painter;
use crate::scene::{Scene, cursor_factor};
use crate::settings::{Settings, WindowSettings};
use crate::{Error, Result};
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};
fn init(e: impl std::fmt::Display) -> Error {
    Error::Initialization(e.to_string())
}
fn present(e: impl std::fmt::Display) -> Error {
    Error::Present(e.to_string())
}
///the window, its framebuffer and the canvas frames are painted on
pub struct RenderContext {
    pub window: Arc<Window>,
    surface: Surface<Arc<Window>, Arc<Window>>,
    painter: Painter,
}
impl RenderContext {
    pub fn new(event_loop: &ActiveEventLoop, settings: &WindowSettings) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(PhysicalSize::new(settings.width, settings.height));
        let window = Arc::new(event_loop.create_window(attributes).map_err(init)?);
        let context = Context::new(window.clone()).map_err(init)?;
        let surface = Surface::new(&context, window.clone()).map_err(init)?;
        let painter = Painter::new(settings.width, settings.height, settings.background)?;
        log::debug!("opened {}x{} window", settings.width, settings.height);
        Ok(Self {
            window,
            surface,
            painter,
        })
    }
    ///paints the scene and presents it, a minimized window is skipped
    pub fn draw(&mut self, scene: &Scene, settings: &Settings) -> Result<()> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        self.surface.resize(width, height).map_err(present)?;
        self.painter.resize(size.width, size.height)?;
        self.painter.draw(scene, settings);
        let mut buffer = self.surface.buffer_mut().map_err(present)?;
        self.painter.save(&mut buffer);
        buffer.present().map_err(present)
    }
}
///drives the render loop until the window is closed or escape is pressed
pub struct Viewer {
    settings: Settings,
    scene: Scene,
    context: Option<RenderContext>,
    cursor_y: f64,
    error: Option<Error>,
}
impl Viewer {
    pub fn new(settings: Settings, scene: Scene) -> Self {
        Self {
            settings,
            scene,
            context: None,
            cursor_y: 0.0,
            error: None,
        }
    }
    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Error) {
        log::error!("{e}");
        self.error = Some(e);
        event_loop.exit();
    }
}
impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() {
            return;
        }
        match RenderContext::new(event_loop, &self.settings.window) {
            Ok(context) => {
                context.window.request_redraw();
                self.context = Some(context);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit()
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_y = position.y,
            WindowEvent::Resized(_) => {
                if let Some(context) = self.context.as_ref() {
                    context.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(context) = self.context.as_mut() else {
                    return;
                };
                let height = context.window.inner_size().height as f64;
                self.scene.update(cursor_factor(self.cursor_y, height));
                if let Err(e) = context.draw(&self.scene, &self.settings) {
                    self.fail(event_loop, e);
                    return;
                }
                context.window.request_redraw();
            }
            _ => {}
        }
    }
    fn suspended(&mut self, _: &ActiveEventLoop) {
        self.context = None;
    }
}
///opens the window and blocks until it closes
pub fn run(settings: Settings, scene: Scene) -> Result<()> {
    let event_loop = EventLoop::new().map_err(init)?;
    let mut viewer = Viewer::new(settings, scene);
    event_loop.run_app(&mut viewer).map_err(init)?;
    match viewer.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
