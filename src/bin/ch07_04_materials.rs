//! Phong lighting driven by a `material` struct uniform that can be changed from the
//! keyboard.

use cgmath::{Deg, Matrix4, Point3, Vector3};
use gl_chapters::app::{self, ApplicationContext, FrameTime};
use gl_chapters::camera::Projection;
use gl_chapters::geometry::{self, NormalVertex};
use gl_chapters::input::InputState;
use gl_chapters::shader::depth_tested;
use gl_chapters::{shaders, Camera, ChapterOptions, Material, Result, Shader};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Surface, VertexBuffer};
use glutin::surface::WindowSurface;
use winit::event::VirtualKeyCode;

const LIGHT_POS: [f32; 3] = [1.0, 0.5, 1.0];
const SHININESS_STEP: f32 = 4.0;

struct Application {
    cube: VertexBuffer<NormalVertex>,
    shader: Shader,
    camera: Camera,
    projection: Projection,
    spin: Matrix4<f32>,
    preset: usize,
    material: Material,
}

impl Application {
    fn select_preset(&mut self, preset: usize) {
        self.preset = preset % Material::PRESETS.len();
        let (name, material) = Material::PRESETS[self.preset];
        self.material = material;
        log::info!("material: {name}");
    }
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Materials";
    const WINDOW_SIZE: (u32, u32) = (1920, 1080);

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        let mut shader = Shader::from_catalog(display, &shaders::MATERIALS, options)?;
        shader.set_uniform_3fv("lightColor", [1.0f32, 1.0, 1.0]);
        shader.set_uniform_3fv("lightPos", LIGHT_POS);

        log::info!("WASD moves the camera, F1 toggles mouse look");
        log::info!("M cycles materials, +/- change the shininess");

        let camera = Camera::new(Point3::new(0.0, 0.0, 3.0), Vector3::unit_y());
        Ok(Self {
            cube: VertexBuffer::new(display, &geometry::normal_cube())?,
            shader,
            projection: Projection::for_camera(&camera, display.get_framebuffer_dimensions(), 0.1, 10.0),
            camera,
            spin: Matrix4::from_scale(1.0),
            preset: 0,
            material: Material::default(),
        })
    }

    fn update(&mut self, time: &FrameTime, input: &InputState) {
        self.camera.process_keyboard(&input.keys, time.delta);
        self.spin = Matrix4::from_angle_y(Deg(-90.0 * time.elapsed));

        self.shader.set_uniform_matrix_4fv("viewMatrix", self.camera.view_matrix());
        self.shader.set_uniform_matrix_4fv("projectionMatrix", self.projection.matrix());
        self.shader.set_uniform_3fv("cameraPos", self.camera.position());
    }

    fn key_pressed(&mut self, key: VirtualKeyCode) {
        match key {
            VirtualKeyCode::M => self.select_preset(self.preset + 1),
            VirtualKeyCode::Equals | VirtualKeyCode::Plus | VirtualKeyCode::NumpadAdd => {
                self.material.adjust_shininess(SHININESS_STEP);
                log::info!("shininess {}", self.material.shininess);
            }
            VirtualKeyCode::Minus | VirtualKeyCode::NumpadSubtract => {
                self.material.adjust_shininess(-SHININESS_STEP);
                log::info!("shininess {}", self.material.shininess);
            }
            _ => (),
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
            let params = depth_tested();

            self.shader.set_uniform_matrix_4fv("modelMatrix", self.spin);
            self.material.apply(self.shader.uniforms_mut(), "material");
            self.shader.draw(frame, &self.cube, indices, [], &params)?;

            let lamp = Matrix4::from_translation(Vector3::from(LIGHT_POS)) * Matrix4::from_scale(0.2);
            self.shader.set_uniform_matrix_4fv("modelMatrix", lamp);
            Material { shininess: 1.0, ..Material::LAMP }.apply(self.shader.uniforms_mut(), "material");
            self.shader.draw(frame, &self.cube, indices, [], &params)
        })
    }
}

fn main() {
    app::launch::<Application>()
}
