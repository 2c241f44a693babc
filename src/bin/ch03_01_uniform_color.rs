//! A triangle whose color is driven by a uniform that pulses over time.

use gl_chapters::app::{self, ApplicationContext, FrameTime};
use gl_chapters::geometry::{PositionVertex, TRIANGLE};
use gl_chapters::input::InputState;
use gl_chapters::{shaders, ChapterOptions, Result, Shader};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Surface, VertexBuffer};
use glutin::surface::WindowSurface;

/// Green channel for `seconds` since startup, cycling between 0 and 1.
fn pulse(seconds: f32) -> f32 {
    seconds.sin() / 2.0 + 0.5
}

struct Application {
    vertex_buffer: VertexBuffer<PositionVertex>,
    shader: Shader,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Uniform color";

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        Ok(Self {
            vertex_buffer: VertexBuffer::new(display, &TRIANGLE)?,
            shader: Shader::from_catalog(display, &shaders::UNIFORM_COLOR, options)?,
        })
    }

    fn update(&mut self, time: &FrameTime, _input: &InputState) {
        self.shader.set_uniform_4fv("ourColor", [0.0, pulse(time.elapsed), 0.0, 1.0]);
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
