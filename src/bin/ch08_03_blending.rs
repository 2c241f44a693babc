//! Semi-transparent windows blended over the scene, drawn from the farthest to the nearest.

use cgmath::{EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector3};
use gl_chapters::app::{self, ApplicationContext, FrameTime};
use gl_chapters::camera::Projection;
use gl_chapters::geometry::{self, TexVertex};
use gl_chapters::input::InputState;
use gl_chapters::shader::depth_tested;
use gl_chapters::transparency::{blended, sort_back_to_front};
use gl_chapters::{procedural, shaders, Camera, ChapterOptions, Result, Shader, Texture};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Surface, VertexBuffer};
use glutin::surface::WindowSurface;
use winit::event::VirtualKeyCode;

const CUBE_POSITIONS: [[f32; 3]; 2] = [[-1.0, 0.0, -1.0], [2.0, 0.0, 0.0]];

const WINDOWS: [[f32; 3]; 5] = [
    [-1.5, 0.0, -0.48],
    [1.5, 0.0, 0.51],
    [0.0, 0.0, 0.7],
    [-0.3, 0.0, -2.3],
    [0.5, 0.0, -0.6],
];

struct Application {
    cube: VertexBuffer<TexVertex>,
    floor: VertexBuffer<TexVertex>,
    window_quad: VertexBuffer<TexVertex>,
    shader: Shader,
    cube_texture: Texture,
    floor_texture: Texture,
    window_texture: Texture,
    windows: Vec<Point3<f32>>,
    sorted: bool,
    camera: Camera,
    projection: Projection,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Blending";

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        let size = procedural::DEFAULT_SIZE;
        let cube_texture = Texture::load_or_generate(
            display,
            options.resolve_asset("models/brick_color_map.png"),
            false,
            false,
            || procedural::brick(size),
        )?;
        let floor_texture = Texture::load_or_generate(
            display,
            options.resolve_asset("models/wooden_plane.png"),
            false,
            false,
            || procedural::wood_planks(size),
        )?;
        let window_texture =
            Texture::load_or_generate(display, options.resolve_asset("models/window.png"), false, true, || {
                procedural::window_pane(size)
            })?;

        log::info!("WASD moves the camera, F1 toggles mouse look");
        log::info!("O toggles sorting the windows by distance");

        let camera = Camera::new(Point3::new(0.0, 0.0, 3.0), Vector3::unit_y());
        Ok(Self {
            cube: VertexBuffer::new(display, &geometry::textured_cube())?,
            floor: VertexBuffer::new(display, &geometry::ground_plane(-0.5, 10.0, 1.0).map(TexVertex::from))?,
            window_quad: VertexBuffer::new(display, &geometry::billboard())?,
            shader: Shader::from_catalog(display, &shaders::BLENDING, options)?,
            cube_texture,
            floor_texture,
            window_texture,
            windows: WINDOWS.iter().map(|&p| Point3::from(p)).collect(),
            sorted: true,
            projection: Projection::for_camera(&camera, display.get_framebuffer_dimensions(), 0.1, 50.0),
            camera,
        })
    }

    fn update(&mut self, time: &FrameTime, input: &InputState) {
        self.camera.process_keyboard(&input.keys, time.delta);
        self.shader.set_uniform_matrix_4fv("viewMatrix", self.camera.view_matrix());
        self.shader.set_uniform_matrix_4fv("projectionMatrix", self.projection.matrix());

        if self.sorted {
            sort_back_to_front(&mut self.windows, self.camera.position());
        }
    }

    fn key_pressed(&mut self, key: VirtualKeyCode) {
        if key == VirtualKeyCode::O {
            self.sorted = !self.sorted;
            log::info!("sorting {}", if self.sorted { "on" } else { "off" });
        }
    }

    fn mouse_moved(&mut self, xoffset: f32, yoffset: f32) {
        self.camera.process_mouse_movement(xoffset, yoffset, true);
    }

    fn resized(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        app::render_frame(display, |frame| {
            frame.clear_color_and_depth((0.3, 0.3, 0.3, 1.0), 1.0);
            let indices = NoIndices(PrimitiveType::TrianglesList);
            let opaque = depth_tested();

            for position in CUBE_POSITIONS {
                self.shader.set_uniform_matrix_4fv("modelMatrix", Matrix4::from_translation(position.into()));
                let samplers = [("texture1", self.cube_texture.uniform_value())];
                self.shader.draw(frame, &self.cube, indices, samplers, &opaque)?;
            }

            self.shader.set_uniform_matrix_4fv("modelMatrix", Matrix4::identity());
            self.shader.draw(frame, &self.floor, indices, [("texture1", self.floor_texture.uniform_value())], &opaque)?;

            let transparent = blended();
            for position in &self.windows {
                self.shader.set_uniform_matrix_4fv("modelMatrix", Matrix4::from_translation(position.to_vec()));
                self.shader.draw(
                    frame,
                    &self.window_quad,
                    indices,
                    [("texture1", self.window_texture.uniform_value())],
                    &transparent,
                )?;
            }

            Ok(())
        })
    }
}

fn main() {
    app::launch::<Application>()
}
