//! A textured OBJ model spinning in front of a fly camera.

use cgmath::{Deg, Matrix4, Point3, Vector3};
use gl_chapters::app::{self, ApplicationContext, FrameTime};
use gl_chapters::camera::Projection;
use gl_chapters::input::InputState;
use gl_chapters::model::MeshData;
use gl_chapters::shader::depth_tested;
use gl_chapters::{procedural, shaders, Camera, ChapterOptions, Model, Result, Shader, Texture};
use glium::{Display, Surface};
use glutin::surface::WindowSurface;

/// Degrees per second the model turns around the vertical axis.
const SPIN: f32 = -90.0;

struct Application {
    model: Model,
    texture: Texture,
    shader: Shader,
    camera: Camera,
    projection: Projection,
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "OBJ model";

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        let model = Model::load_or_generate(display, options.resolve_asset("models/alliance.obj"), || {
            MeshData::uv_sphere(32, 16)
        })?;
        log::info!("{} triangles", model.triangle_count());

        let texture_path = options.resolve_asset("models/alliance.png");
        let texture = Texture::load_or_generate(display, texture_path, false, false, || {
            procedural::checkerboard(procedural::DEFAULT_SIZE, 8, [230, 230, 230, 255], [60, 90, 160, 255])
        })?;

        log::info!("WASD moves the camera, F1 toggles mouse look");

        let camera = Camera::new(Point3::new(0.0, 0.0, 10.0), Vector3::unit_y());
        Ok(Self {
            model,
            texture,
            shader: Shader::from_catalog(display, &shaders::MODEL, options)?,
            projection: Projection::for_camera(&camera, display.get_framebuffer_dimensions(), 0.1, 100.0),
            camera,
        })
    }

    fn update(&mut self, time: &FrameTime, input: &InputState) {
        self.camera.process_keyboard(&input.keys, time.delta);

        let model_matrix = Matrix4::from_angle_y(Deg(SPIN * time.elapsed));
        self.shader.set_uniform_matrix_4fv("modelMatrix", model_matrix);
        self.shader.set_uniform_matrix_4fv("viewMatrix", self.camera.view_matrix());
        self.shader.set_uniform_matrix_4fv("projectionMatrix", self.projection.matrix());
    }

    fn mouse_moved(&mut self, xoffset: f32, yoffset: f32) {
        self.camera.process_mouse_movement(xoffset, yoffset, true);
    }

    fn resized(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        app::render_frame(display, |frame| {
            frame.clear_color_and_depth((0.6784, 0.8, 1.0, 1.0), 1.0);
            self.model.draw(frame, &self.shader, [("tex", self.texture.uniform_value())], &depth_tested())
        })
    }
}

fn main() {
    app::launch::<Application>()
}
