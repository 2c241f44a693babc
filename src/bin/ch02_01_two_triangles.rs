//! Two triangles stored back to back in one buffer and drawn with a single call.

use gl_chapters::app::{self, ApplicationContext};
use gl_chapters::geometry::{PositionVertex, TWO_TRIANGLES};
use gl_chapters::{shaders, ChapterOptions, Result, Shader};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Surface, VertexBuffer};
use glutin::surface::WindowSurface;

struct Application {
    vertex_buffer: VertexBuffer<PositionVertex>,
    shader: Shader,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Two triangles";

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        Ok(Self {
            vertex_buffer: VertexBuffer::new(display, &TWO_TRIANGLES)?,
            shader: Shader::from_catalog(display, &shaders::HELLO_TRIANGLE, options)?,
        })
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        app::render_frame(display, |frame| {
            frame.clear_color(0.2, 0.3, 0.3, 1.0);
            self.shader.draw(
                frame,
                &self.vertex_buffer,
                NoIndices(PrimitiveType::TrianglesList),
                [],
                &Default::default(),
            )
        })
    }
}

fn main() {
    app::launch::<Application>()
}
