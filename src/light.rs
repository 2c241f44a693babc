//! Light sources.

use cgmath::{Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, Vector3, Vector4};

use crate::shader::UniformStorage;

/// Half-size of the orthographic box that directional shadows are rendered in.
pub const SHADOW_EXTENT: f32 = 10.0;
/// Near plane of the light's projection.
pub const SHADOW_NEAR: f32 = 0.1;
/// Far plane of the light's projection.
pub const SHADOW_FAR: f32 = 30.0;
/// Field of view of point-light shadows.
pub const POINT_SHADOW_FOV: Deg<f32> = Deg(90.0);

/// Distance from the origin a directional light is placed at when rendering its shadow map.
const DIRECTIONAL_DISTANCE: f32 = 10.0;

/// A directional or point light with Phong colors and distance attenuation.
///
/// `position.w` selects the kind: `0.0` means `position.xyz` points from the scene towards a
/// light infinitely far away, `1.0` means it is a position in world space. Switching the kind
/// with [`set_point`](Light::set_point) keeps the light on the same side of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Direction towards the light (`w == 0`) or position (`w == 1`).
    pub position: Vector4<f32>,
    /// Ambient color.
    pub ambient: Vector3<f32>,
    /// Diffuse color.
    pub diffuse: Vector3<f32>,
    /// Specular color.
    pub specular: Vector3<f32>,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
}

impl Light {
    /// White light with the default attenuation terms.
    pub fn new(position: Vector4<f32>) -> Light {
        Light {
            position,
            ambient: Vector3::new(1.0, 1.0, 1.0),
            diffuse: Vector3::new(1.0, 1.0, 1.0),
            specular: Vector3::new(1.0, 1.0, 1.0),
            constant: 0.5,
            linear: 0.03,
            quadratic: 0.01,
        }
    }

    /// Point light at `position`.
    pub fn point(position: Point3<f32>) -> Light {
        Light::new(position.to_vec().extend(1.0))
    }

    /// Directional light travelling along `direction`.
    pub fn directional(direction: Vector3<f32>) -> Light {
        Light::new((-direction).extend(0.0))
    }

    /// Whether this is a point light.
    pub fn is_point(&self) -> bool {
        self.position.w != 0.0
    }

    /// Unit vector from the scene towards a directional light.
    ///
    /// A zero vector has no direction and is read as a light straight above.
    pub fn towards_light(&self) -> Vector3<f32> {
        let xyz = self.position.truncate();
        if xyz.magnitude2() > f32::EPSILON {
            xyz.normalize()
        } else {
            Vector3::unit_y()
        }
    }

    /// World position of a point light. For a directional light, the point it is placed at
    /// when rendering shadows.
    pub fn eye(&self) -> Point3<f32> {
        if self.is_point() {
            Point3::from_vec(self.position.truncate())
        } else {
            Point3::from_vec(self.towards_light() * DIRECTIONAL_DISTANCE)
        }
    }

    /// Switches between point and directional without touching the colors.
    pub fn set_point(&mut self, point: bool) {
        self.position.w = if point { 1.0 } else { 0.0 };
    }

    /// Moves the light, keeping its kind.
    pub fn set_xyz(&mut self, xyz: Vector3<f32>) {
        self.position = xyz.extend(self.position.w);
    }

    /// Matrix taking world space to the light's clip space, looking at the origin.
    ///
    /// Directional lights use an orthographic box, point lights a 90° perspective.
    pub fn world_to_light_ndc(&self) -> Matrix4<f32> {
        let target = Point3::origin();
        let mut eye = self.eye();
        if (eye - target).magnitude2() < 1e-6 {
            // a light sitting on its own target would have no view direction
            eye = Point3::new(0.0, 1.0, 0.0);
        }

        let forward = (target - eye).normalize();
        let up = if forward.dot(Vector3::unit_y()).abs() > 0.999 {
            Vector3::unit_z()
        } else {
            Vector3::unit_y()
        };
        let view = Matrix4::look_at_rh(eye, target, up);

        let projection = if self.is_point() {
            cgmath::perspective(POINT_SHADOW_FOV, 1.0, SHADOW_NEAR, SHADOW_FAR)
        } else {
            cgmath::ortho(-SHADOW_EXTENT, SHADOW_EXTENT, -SHADOW_EXTENT, SHADOW_EXTENT, SHADOW_NEAR, SHADOW_FAR)
        };

        projection * view
    }

    /// Writes `<prefix>.position`, the colors and the attenuation terms.
    ///
    /// Directional lights are written as a unit [`towards_light`](Light::towards_light)
    /// vector.
    pub fn apply(&self, uniforms: &mut UniformStorage, prefix: &str) {
        let position = if self.is_point() { self.position } else { self.towards_light().extend(0.0) };
        uniforms.set(format!("{prefix}.position"), position);
        uniforms.set(format!("{prefix}.ambient"), self.ambient);
        uniforms.set(format!("{prefix}.diffuse"), self.diffuse);
        uniforms.set(format!("{prefix}.specular"), self.specular);
        uniforms.set(format!("{prefix}.constant"), self.constant);
        uniforms.set(format!("{prefix}.linear"), self.linear);
        uniforms.set(format!("{prefix}.quadratic"), self.quadratic);
    }
}
