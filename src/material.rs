//! Phong material colors.

use cgmath::Vector3;

use crate::shader::UniformStorage;

/// Upper bound the chapters allow for the specular exponent.
pub const MAX_SHININESS: f32 = 256.0;

/// Reflectance of a surface under the Phong model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Reflected ambient light.
    pub ambient: Vector3<f32>,
    /// Reflected diffuse light.
    pub diffuse: Vector3<f32>,
    /// Color of the specular highlight.
    pub specular: Vector3<f32>,
    /// Specular exponent. Larger values give smaller, sharper highlights.
    pub shininess: f32,
}

impl Material {
    /// A material from its four components.
    pub const fn new(ambient: [f32; 3], diffuse: [f32; 3], specular: [f32; 3], shininess: f32) -> Material {
        Material {
            ambient: Vector3 { x: ambient[0], y: ambient[1], z: ambient[2] },
            diffuse: Vector3 { x: diffuse[0], y: diffuse[1], z: diffuse[2] },
            specular: Vector3 { x: specular[0], y: specular[1], z: specular[2] },
            shininess,
        }
    }

    /// Coral plastic, the default of the materials chapter.
    pub const CORAL: Material = Material::new([1.0, 0.5, 0.31], [1.0, 0.5, 0.31], [0.5, 0.5, 0.5], 32.0);

    /// Fully reflective white, used for the lamp cube.
    pub const LAMP: Material = Material::new([1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0], 32.0);

    /// Emerald. This and the following presets come from the classic OpenGL material table,
    /// with exponents scaled by 128.
    pub const EMERALD: Material =
        Material::new([0.0215, 0.1745, 0.0215], [0.07568, 0.61424, 0.07568], [0.633, 0.727811, 0.633], 76.8);
    /// Gold.
    pub const GOLD: Material =
        Material::new([0.24725, 0.1995, 0.0745], [0.75164, 0.60648, 0.22648], [0.628281, 0.555802, 0.366065], 51.2);
    /// Chrome.
    pub const CHROME: Material =
        Material::new([0.25, 0.25, 0.25], [0.4, 0.4, 0.4], [0.774597, 0.774597, 0.774597], 76.8);
    /// Cyan plastic.
    pub const CYAN_PLASTIC: Material =
        Material::new([0.0, 0.1, 0.06], [0.0, 0.50980392, 0.50980392], [0.50196078, 0.50196078, 0.50196078], 32.0);

    /// Presets in the order the materials chapter cycles through them.
    pub const PRESETS: [(&'static str, Material); 5] = [
        ("coral", Material::CORAL),
        ("emerald", Material::EMERALD),
        ("gold", Material::GOLD),
        ("chrome", Material::CHROME),
        ("cyan plastic", Material::CYAN_PLASTIC),
    ];

    /// Changes the exponent by `delta`, keeping it within `[0, MAX_SHININESS]`.
    pub fn adjust_shininess(&mut self, delta: f32) {
        self.shininess = crate::input::adjust_clamped(self.shininess, delta, 0.0, MAX_SHININESS);
    }

    /// Writes `<prefix>.ambient`, `<prefix>.diffuse`, `<prefix>.specular` and
    /// `<prefix>.shininess`.
    pub fn apply(&self, uniforms: &mut UniformStorage, prefix: &str) {
        uniforms.set(format!("{prefix}.ambient"), self.ambient);
        uniforms.set(format!("{prefix}.diffuse"), self.diffuse);
        uniforms.set(format!("{prefix}.specular"), self.specular);
        uniforms.set(format!("{prefix}.shininess"), self.shininess);
    }
}

impl Default for Material {
    fn default() -> Material {
        Material::CORAL
    }
}
