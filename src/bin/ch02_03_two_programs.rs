//! Two triangles in separate buffers, each drawn with its own program.

use gl_chapters::app::{self, ApplicationContext};
use gl_chapters::geometry::{PositionVertex, LEFT_TRIANGLE, RIGHT_TRIANGLE};
use gl_chapters::{shaders, ChapterOptions, Result, Shader};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Surface, VertexBuffer};
use glutin::surface::WindowSurface;

struct Application {
    left: VertexBuffer<PositionVertex>,
    right: VertexBuffer<PositionVertex>,
    orange: Shader,
    yellow: Shader,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Two programs";

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        Ok(Self {
            left: VertexBuffer::new(display, &LEFT_TRIANGLE)?,
            right: VertexBuffer::new(display, &RIGHT_TRIANGLE)?,
            orange: Shader::from_catalog(display, &shaders::HELLO_TRIANGLE, options)?,
            yellow: Shader::from_catalog(display, &shaders::YELLOW, options)?,
        })
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        app::render_frame(display, |frame| {
            frame.clear_color(0.2, 0.3, 0.3, 1.0);

            let indices = NoIndices(PrimitiveType::TrianglesList);
            self.orange.draw(frame, &self.left, indices, [], &Default::default())?;
            self.yellow.draw(frame, &self.right, indices, [], &Default::default())
        })
    }
}

fn main() {
    app::launch::<Application>()
}
