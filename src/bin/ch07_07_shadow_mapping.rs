//! Textured cubes over a tiled floor, lit by one light that casts soft shadows.
//!
//! Each frame renders the scene's depth from the light into a shadow map, then renders it
//! from the camera, sampling the shadow map with percentage-closer filtering.

use cgmath::{Deg, EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector3};
use gl_chapters::app::{self, ApplicationContext, FrameTime};
use gl_chapters::camera::Projection;
use gl_chapters::geometry::{self, PositionVertex, TexVertex};
use gl_chapters::input::{adjust_clamped, InputState};
use gl_chapters::model::MeshVertex;
use gl_chapters::shader::depth_tested;
use gl_chapters::shadow::{self, ShadowSettings};
use gl_chapters::{procedural, shaders, Camera, ChapterOptions, Light, Result, Shader, ShadowMap, Texture};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Surface, VertexBuffer};
use glutin::surface::WindowSurface;
use winit::event::VirtualKeyCode;

const CUBE_POSITIONS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// The light can be moved within this distance of the origin on each axis.
const LIGHT_RANGE: f32 = 5.0;
/// Light movement in units per second.
const LIGHT_SPEED: f32 = 2.0;
const MAX_SHININESS: f32 = 32.0;
const SHININESS_STEP: f32 = 4.0;

struct Application {
    cube: VertexBuffer<MeshVertex>,
    plane: VertexBuffer<MeshVertex>,
    lamp: VertexBuffer<PositionVertex>,
    debug_quad: VertexBuffer<TexVertex>,

    lit: Shader,
    shadow_pass: Shader,
    lamp_shader: Shader,
    debug_shader: Shader,

    container_diffuse: Texture,
    container_specular: Texture,
    floor: Texture,
    shadow_map: ShadowMap,
    settings: ShadowSettings,

    light: Light,
    shininess: f32,
    show_depth: bool,

    camera: Camera,
    projection: Projection,
    elapsed: f32,
}

impl Application {
    fn cube_matrices(&self) -> impl Iterator<Item = Matrix4<f32>> + '_ {
        CUBE_POSITIONS.iter().map(move |&position| {
            Matrix4::from_translation(position.into()) * Matrix4::from_angle_y(Deg(-90.0 * self.elapsed))
        })
    }

    fn render_shadow_pass(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        let indices = NoIndices(PrimitiveType::TrianglesList);
        let params = depth_tested();
        let matrices: Vec<_> = self.cube_matrices().collect();

        self.shadow_pass.set_uniform_matrix_4fv("world2lightNDC", self.light.world_to_light_ndc());

        let mut target = self.shadow_map.framebuffer(display)?;
        target.clear_depth(1.0);

        self.shadow_pass.set_uniform_matrix_4fv("modelMatrix", Matrix4::identity());
        self.shadow_pass.draw(&mut target, &self.plane, indices, [], &params)?;

        for model in matrices {
            self.shadow_pass.set_uniform_matrix_4fv("modelMatrix", model);
            self.shadow_pass.draw(&mut target, &self.cube, indices, [], &params)?;
        }

        Ok(())
    }

    fn render_scene<S: Surface>(&mut self, target: &mut S) -> Result<()> {
        let indices = NoIndices(PrimitiveType::TrianglesList);
        let params = depth_tested();
        let view = self.camera.view_matrix();
        let projection = self.projection.matrix();
        let matrices: Vec<_> = self.cube_matrices().collect();

        self.lit.set_uniform_matrix_4fv("viewMatrix", view);
        self.lit.set_uniform_matrix_4fv("projectionMatrix", projection);
        self.lit.set_uniform_matrix_4fv("world2lightNDC", self.light.world_to_light_ndc());
        self.lit.set_uniform_3fv("cameraPos", self.camera.position());
        self.lit.set_uniform_1f("shininess", self.shininess);
        self.light.apply(self.lit.uniforms_mut(), "light");
        self.settings.apply(self.lit.uniforms_mut());

        self.lit.set_uniform_matrix_4fv("modelMatrix", Matrix4::identity());
        self.lit.draw(
            target,
            &self.plane,
            indices,
            [
                ("diffuseMap", self.floor.uniform_value()),
                ("specularMap", self.container_specular.uniform_value()),
                ("shadowMap", self.shadow_map.uniform_value()),
            ],
            &params,
        )?;

        for model in matrices {
            self.lit.set_uniform_matrix_4fv("modelMatrix", model);
            self.lit.draw(
                target,
                &self.cube,
                indices,
                [
                    ("diffuseMap", self.container_diffuse.uniform_value()),
                    ("specularMap", self.container_specular.uniform_value()),
                    ("shadowMap", self.shadow_map.uniform_value()),
                ],
                &params,
            )?;
        }

        // a directional light has no position to mark
        if self.light.is_point() {
            let model = Matrix4::from_translation(self.light.eye().to_vec()) * Matrix4::from_scale(0.2);
            self.lamp_shader.set_uniform_matrix_4fv("modelMatrix", model);
            self.lamp_shader.set_uniform_matrix_4fv("viewMatrix", view);
            self.lamp_shader.set_uniform_matrix_4fv("projectionMatrix", projection);
            self.lamp_shader.set_uniform_3fv("lightColor", self.light.diffuse);
            self.lamp_shader.draw(target, &self.lamp, indices, [], &params)?;
        }

        Ok(())
    }

    fn render_depth_preview<S: Surface>(&mut self, target: &mut S) -> Result<()> {
        shadow::apply_debug_view(&self.light, self.debug_shader.uniforms_mut());
        self.debug_shader.draw(
            target,
            &self.debug_quad,
            NoIndices(PrimitiveType::TrianglesList),
            [("shadowMap", self.shadow_map.uniform_value())],
            &Default::default(),
        )
    }
}

impl ApplicationContext for Application {
    const WINDOW_TITLE: &'static str = "Shadow mapping";
    const WINDOW_SIZE: (u32, u32) = (1920, 1080);

    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self> {
        let settings = ShadowSettings::from_options(options);
        let size = procedural::DEFAULT_SIZE;

        let container_diffuse = Texture::load_or_generate(
            display,
            options.resolve_asset("models/container_diffuse.png"),
            false,
            false,
            || procedural::container_diffuse(size),
        )?;
        let container_specular = Texture::load_or_generate(
            display,
            options.resolve_asset("models/container_specular.png"),
            false,
            false,
            || procedural::container_specular(size),
        )?;
        let floor = Texture::load_or_generate(
            display,
            options.resolve_asset("models/Stone_Tiles_003_COLOR.png"),
            false,
            false,
            || procedural::stone_tiles(size),
        )?;

        let mut light = Light::point(Point3::new(-2.0, 2.0, 0.0));
        light.ambient = Vector3::new(0.2, 0.2, 0.2);

        log::info!("WASD moves the camera, F1 toggles mouse look");
        log::info!("arrows move the light over the floor, PageUp/PageDown raise and lower it");
        log::info!("L switches point/directional, +/- change shininess, [ ] change the PCF radius");
        log::info!("V shows the shadow map");

        let camera = Camera::new(Point3::new(0.0, 0.0, 3.0), Vector3::unit_y());
        Ok(Self {
            cube: VertexBuffer::new(display, &geometry::cube())?,
            plane: VertexBuffer::new(display, &geometry::ground_plane(-0.5, 10.0, 2.0))?,
            lamp: VertexBuffer::new(display, &geometry::position_cube())?,
            debug_quad: VertexBuffer::new(display, &geometry::fullscreen_quad())?,

            lit: Shader::from_catalog(display, &shaders::SHADOW_MAPPING, options)?,
            shadow_pass: Shader::from_catalog(display, &shaders::SHADOW_PASS, options)?,
            lamp_shader: Shader::from_catalog(display, &shaders::LIGHT_CUBE, options)?,
            debug_shader: Shader::from_catalog(display, &shaders::DEBUG_SHADOW_PASS, options)?,

            container_diffuse,
            container_specular,
            floor,
            shadow_map: ShadowMap::new(display, settings.size)?,
            settings,

            light,
            shininess: MAX_SHININESS,
            show_depth: false,

            projection: Projection::for_camera(&camera, display.get_framebuffer_dimensions(), 0.1, 100.0),
            camera,
            elapsed: 0.0,
        })
    }

    fn update(&mut self, time: &FrameTime, input: &InputState) {
        self.elapsed = time.elapsed;
        self.camera.process_keyboard(&input.keys, time.delta);

        let step = LIGHT_SPEED * time.delta;
        let bindings = [
            (VirtualKeyCode::Left, Vector3::new(-step, 0.0, 0.0)),
            (VirtualKeyCode::Right, Vector3::new(step, 0.0, 0.0)),
            (VirtualKeyCode::Up, Vector3::new(0.0, 0.0, -step)),
            (VirtualKeyCode::Down, Vector3::new(0.0, 0.0, step)),
            (VirtualKeyCode::PageUp, Vector3::new(0.0, step, 0.0)),
            (VirtualKeyCode::PageDown, Vector3::new(0.0, -step, 0.0)),
        ];
        // a directional light keeps shining from the side its xyz points to
        let mut xyz = self.light.position.truncate();
        for (key, offset) in bindings {
            if input.keys.is_pressed(key) {
                xyz.x = adjust_clamped(xyz.x, offset.x, -LIGHT_RANGE, LIGHT_RANGE);
                xyz.y = adjust_clamped(xyz.y, offset.y, -LIGHT_RANGE, LIGHT_RANGE);
                xyz.z = adjust_clamped(xyz.z, offset.z, -LIGHT_RANGE, LIGHT_RANGE);
            }
        }
        self.light.set_xyz(xyz);
    }

    fn key_pressed(&mut self, key: VirtualKeyCode) {
        match key {
            VirtualKeyCode::L => {
                self.light.set_point(!self.light.is_point());
                log::info!("{} light", if self.light.is_point() { "point" } else { "directional" });
            }
            VirtualKeyCode::V => self.show_depth = !self.show_depth,
            VirtualKeyCode::Equals | VirtualKeyCode::Plus | VirtualKeyCode::NumpadAdd => {
                self.shininess = adjust_clamped(self.shininess, SHININESS_STEP, 0.0, MAX_SHININESS);
                log::info!("shininess {}", self.shininess);
            }
            VirtualKeyCode::Minus | VirtualKeyCode::NumpadSubtract => {
                self.shininess = adjust_clamped(self.shininess, -SHININESS_STEP, 0.0, MAX_SHININESS);
                log::info!("shininess {}", self.shininess);
            }
            VirtualKeyCode::LBracket => {
                self.settings.adjust_pcf_radius(-1);
                log::info!("PCF over {} texels", self.settings.kernel_taps());
            }
            VirtualKeyCode::RBracket => {
                self.settings.adjust_pcf_radius(1);
                log::info!("PCF over {} texels", self.settings.kernel_taps());
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
        self.render_shadow_pass(display)?;

        app::render_frame(display, |frame| {
            frame.clear_color_and_depth((0.3, 0.3, 0.3, 1.0), 1.0);
            if self.show_depth {
                self.render_depth_preview(frame)
            } else {
                self.render_scene(frame)
            }
        })
    }
}

fn main() {
    app::launch::<Application>()
}
