//! First-person fly camera driven by Euler angles.

use cgmath::{Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3};
use winit::event::VirtualKeyCode;

use crate::input::KeyboardState;

/// Default yaw, in degrees. -90° makes the camera look down -Z.
pub const YAW: f32 = -90.0;
/// Default pitch, in degrees.
pub const PITCH: f32 = 0.0;
/// Movement speed in units per second.
pub const SPEED: f32 = 2.0;
/// Degrees of rotation per pixel of mouse motion.
pub const SENSITIVITY: f32 = 0.1;
/// Default vertical field of view, in degrees.
pub const ZOOM: f32 = 60.0;

const PITCH_LIMIT: f32 = 89.0;

/// Directions the camera can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Along the negative right vector.
    Left,
    /// Along the right vector.
    Right,
}

impl Movement {
    /// WASD bindings.
    pub const BINDINGS: [(VirtualKeyCode, Movement); 4] = [
        (VirtualKeyCode::W, Movement::Forward),
        (VirtualKeyCode::S, Movement::Backward),
        (VirtualKeyCode::A, Movement::Left),
        (VirtualKeyCode::D, Movement::Right),
    ];
}

/// A camera with a position and a yaw/pitch orientation.
///
/// The `front`, `right` and `up` vectors are derived from the angles and recomputed after
/// every change, so they are always orthonormal.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Point3<f32>,
    front: Vector3<f32>,
    up: Vector3<f32>,
    right: Vector3<f32>,
    world_up: Vector3<f32>,

    yaw: f32,
    pitch: f32,

    /// Units per second.
    pub movement_speed: f32,
    /// Degrees per pixel.
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees, read when building the [`Projection`].
    pub zoom: f32,
}

impl Camera {
    /// Camera at `position` with the default orientation.
    pub fn new(position: Point3<f32>, world_up: Vector3<f32>) -> Camera {
        Camera::with_angles(position, world_up, YAW, PITCH)
    }

    /// Camera at `position` looking along the given yaw and pitch, in degrees.
    pub fn with_angles(position: Point3<f32>, world_up: Vector3<f32>, yaw: f32, pitch: f32) -> Camera {
        let mut camera = Camera {
            position,
            front: Vector3::new(0.0, 0.0, -1.0),
            up: world_up,
            right: Vector3::new(1.0, 0.0, 0.0),
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Position in world space.
    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    /// Unit view direction.
    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    /// Unit right vector.
    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    /// Unit up vector.
    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Moves the camera for `delta_time` seconds.
    pub fn process_movement(&mut self, movement: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match movement {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
        }
    }

    /// Applies every held WASD key for `delta_time` seconds.
    pub fn process_keyboard(&mut self, keys: &KeyboardState, delta_time: f32) {
        for (key, movement) in Movement::BINDINGS {
            if keys.is_pressed(key) {
                self.process_movement(movement, delta_time);
            }
        }
    }

    /// Rotates the camera by a mouse offset in pixels.
    ///
    /// With `constrain_pitch`, pitch stays within ±89° so the view never flips over.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Camera {
        Camera::new(Point3::origin(), Vector3::unit_y())
    }
}

/// Perspective projection parameters that follow the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view.
    pub fov: Deg<f32>,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
}

impl Projection {
    /// Projection for a `width` x `height` viewport.
    pub fn new(fov: Deg<f32>, (width, height): (u32, u32), near: f32, far: f32) -> Projection {
        Projection { fov, width: width as f32, height: height as f32, near, far }
    }

    /// Projection with the camera's [`zoom`](Camera::zoom) as field of view.
    pub fn for_camera(camera: &Camera, size: (u32, u32), near: f32, far: f32) -> Projection {
        Projection::new(Deg(camera.zoom), size, near, far)
    }

    /// Updates the viewport size after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    /// The projection matrix.
    pub fn matrix(&self) -> Matrix4<f32> {
        perspective_fov(self.fov, self.width, self.height, self.near, self.far)
    }
}

/// Perspective projection from a vertical field of view and a viewport size.
///
/// A zero-sized viewport (minimized window) falls back to a square aspect ratio.
pub fn perspective_fov(fov: Deg<f32>, width: f32, height: f32, near: f32, far: f32) -> Matrix4<f32> {
    let aspect = if width > 0.0 && height > 0.0 { width / height } else { 1.0 };
    cgmath::perspective(Rad::from(fov), aspect, near, far)
}
