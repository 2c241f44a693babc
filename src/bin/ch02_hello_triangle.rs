//! One vertex buffer, one program, one orange triangle.

use gl_chapters::app::{self, ApplicationContext};
use gl_chapters::geometry::{PositionVertex, TRIANGLE};
use gl_chapters::{shaders, ChapterOptions, Result, Shader};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Surface, VertexBuffer};
use glutin::surface::WindowSurface;

struct Application {
    vertex_buffer: VertexBuffer<PositionVertex>,
    shader: Shader,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Hello triangle";

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        let vertex_buffer = VertexBuffer::new(display, &TRIANGLE)?;
        let shader = Shader::from_catalog(display, &shaders::HELLO_TRIANGLE, options)?;
        Ok(Self { vertex_buffer, shader })
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
