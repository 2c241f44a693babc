//! An indexed quad with per-vertex colors, textured with two images mixed together.

use gl_chapters::app::{self, ApplicationContext};
use gl_chapters::geometry::{ColorTexVertex, QUAD, QUAD_INDICES};
use gl_chapters::input::adjust_clamped;
use gl_chapters::{procedural, shaders, ChapterOptions, Result, Shader, Texture};
use glium::index::PrimitiveType;
use glium::{Display, IndexBuffer, Surface, VertexBuffer};
use glutin::surface::WindowSurface;
use winit::event::VirtualKeyCode;

const MIX_STEP: f32 = 0.1;

struct Application {
    vertex_buffer: VertexBuffer<ColorTexVertex>,
    index_buffer: IndexBuffer<u16>,
    shader: Shader,
    brick: Texture,
    face: Texture,
    mix_amount: f32,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Textured quad";

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        let vertex_buffer = VertexBuffer::new(display, &QUAD)?;
        let index_buffer = IndexBuffer::new(display, PrimitiveType::TrianglesList, &QUAD_INDICES)?;
        let shader = Shader::from_catalog(display, &shaders::TEXTURED_QUAD, options)?;

        let brick = Texture::load_or_generate(display, options.resolve_asset("models/brick.jpg"), false, false, || {
            procedural::brick(procedural::DEFAULT_SIZE)
        })?;
        let face = Texture::load_or_generate(display, options.resolve_asset("models/awesomeface.png"), false, true, || {
            procedural::smiley(procedural::DEFAULT_SIZE)
        })?;

        log::info!("Up/Down change how much of the second texture shows through");

        Ok(Self { vertex_buffer, index_buffer, shader, brick, face, mix_amount: 0.2 })
    }

    fn key_pressed(&mut self, key: VirtualKeyCode) {
        let delta = match key {
            VirtualKeyCode::Up => MIX_STEP,
            VirtualKeyCode::Down => -MIX_STEP,
            _ => return,
        };
        self.mix_amount = adjust_clamped(self.mix_amount, delta, 0.0, 1.0);
        log::info!("mix {:.1}", self.mix_amount);
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        self.shader.set_uniform_1f("mixAmount", self.mix_amount);

        app::render_frame(display, |frame| {
            frame.clear_color(0.2, 0.3, 0.3, 1.0);
            self.shader.draw(
                frame,
                &self.vertex_buffer,
                &self.index_buffer,
                [("texture1", self.brick.uniform_value()), ("texture2", self.face.uniform_value())],
                &Default::default(),
            )
        })
    }
}

fn main() {
    app::launch::<Application>()
}
