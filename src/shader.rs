//! Shader programs with persistent uniform values.
//!
//! glium takes uniforms as an argument of every draw call. The chapters are written in the
//! "set a uniform once, draw many times" style instead, so `Shader` keeps the values it was
//! given in a `UniformStorage` and hands them to glium on each draw, together with the
//! textures bound for that particular draw.

use std::fs;
use std::path::Path;

use cgmath::{Matrix4, Point3, Vector3, Vector4};
use fnv::FnvHashMap;
use glium::backend::Facade;
use glium::index::IndicesSource;
use glium::uniforms::{UniformValue, Uniforms};
use glium::vertex::MultiVerticesSource;
use glium::draw_parameters::DepthTest;
use glium::{Depth, DrawParameters, Program, Surface};
use smallvec::SmallVec;

use crate::config::ChapterOptions;
use crate::error::{Error, Result};
use crate::shaders::ShaderSource;

/// An owned uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformData {
    /// `int`, also used for `bool`.
    Int(i32),
    /// `float`.
    Float(f32),
    /// `vec3`.
    Vec3([f32; 3]),
    /// `vec4`.
    Vec4([f32; 4]),
    /// Column-major `mat4`.
    Mat4([[f32; 4]; 4]),
}

impl UniformData {
    fn as_uniform_value<'a>(&self) -> UniformValue<'a> {
        match *self {
            UniformData::Int(v) => UniformValue::SignedInt(v),
            UniformData::Float(v) => UniformValue::Float(v),
            UniformData::Vec3(v) => UniformValue::Vec3(v),
            UniformData::Vec4(v) => UniformValue::Vec4(v),
            UniformData::Mat4(v) => UniformValue::Mat4(v),
        }
    }
}

impl From<i32> for UniformData {
    fn from(v: i32) -> UniformData {
        UniformData::Int(v)
    }
}

impl From<bool> for UniformData {
    fn from(v: bool) -> UniformData {
        UniformData::Int(v as i32)
    }
}

impl From<f32> for UniformData {
    fn from(v: f32) -> UniformData {
        UniformData::Float(v)
    }
}

impl From<[f32; 3]> for UniformData {
    fn from(v: [f32; 3]) -> UniformData {
        UniformData::Vec3(v)
    }
}

impl From<Vector3<f32>> for UniformData {
    fn from(v: Vector3<f32>) -> UniformData {
        UniformData::Vec3(v.into())
    }
}

impl From<Point3<f32>> for UniformData {
    fn from(v: Point3<f32>) -> UniformData {
        UniformData::Vec3(v.into())
    }
}

impl From<[f32; 4]> for UniformData {
    fn from(v: [f32; 4]) -> UniformData {
        UniformData::Vec4(v)
    }
}

impl From<Vector4<f32>> for UniformData {
    fn from(v: Vector4<f32>) -> UniformData {
        UniformData::Vec4(v.into())
    }
}

impl From<[[f32; 4]; 4]> for UniformData {
    fn from(v: [[f32; 4]; 4]) -> UniformData {
        UniformData::Mat4(v)
    }
}

impl From<Matrix4<f32>> for UniformData {
    fn from(v: Matrix4<f32>) -> UniformData {
        UniformData::Mat4(v.into())
    }
}

/// Uniform values keyed by their GLSL name, including struct members such as `light.position`.
#[derive(Debug, Default, Clone)]
pub struct UniformStorage {
    values: FnvHashMap<String, UniformData>,
}

impl UniformStorage {
    /// An empty storage.
    pub fn new() -> UniformStorage {
        UniformStorage::default()
    }

    /// Sets or replaces a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<UniformData>) {
        self.values.insert(name.into(), value.into());
    }

    /// Looks up a value.
    pub fn get(&self, name: &str) -> Option<&UniformData> {
        self.values.get(name)
    }

    /// Removes a value so that the program's default is used again.
    pub fn remove(&mut self, name: &str) -> Option<UniformData> {
        self.values.remove(name)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Combines the stored values with per-draw samplers.
    pub fn with_samplers<'s, T>(&'s self, samplers: T) -> BoundUniforms<'s>
    where
        T: IntoIterator<Item = (&'s str, UniformValue<'s>)>,
    {
        BoundUniforms { storage: self, samplers: samplers.into_iter().collect() }
    }
}

impl Uniforms for UniformStorage {
    fn visit_values<'a, F: FnMut(&str, UniformValue<'a>)>(&'a self, mut output: F) {
        for (name, value) in &self.values {
            output(name, value.as_uniform_value());
        }
    }
}

/// Stored uniforms plus the samplers of a single draw call.
pub struct BoundUniforms<'s> {
    storage: &'s UniformStorage,
    samplers: SmallVec<[(&'s str, UniformValue<'s>); 4]>,
}

impl<'s> BoundUniforms<'s> {
    /// Number of samplers bound for this draw.
    pub fn sampler_count(&self) -> usize {
        self.samplers.len()
    }
}

impl<'s> Uniforms for BoundUniforms<'s> {
    fn visit_values<'a, F: FnMut(&str, UniformValue<'a>)>(&'a self, mut output: F) {
        self.storage.visit_values(&mut output);
        for (name, value) in &self.samplers {
            output(name, value.clone());
        }
    }
}

/// Draw parameters with depth testing and depth writes enabled.
pub fn depth_tested() -> DrawParameters<'static> {
    DrawParameters {
        depth: Depth { test: DepthTest::IfLess, write: true, ..Default::default() },
        ..Default::default()
    }
}

/// A linked program and the uniform values set on it.
pub struct Shader {
    program: Program,
    uniforms: UniformStorage,
}

impl Shader {
    /// Compiles and links a vertex and a fragment shader.
    pub fn from_source<F>(facade: &F, vertex: &str, fragment: &str) -> Result<Shader>
    where
        F: Facade + ?Sized,
    {
        let program = Program::from_source(facade, vertex, fragment, None)?;
        Ok(Shader { program, uniforms: UniformStorage::new() })
    }

    /// Reads `vertex` and `fragment` from `dir` and builds a program out of them.
    pub fn load<F>(facade: &F, dir: &Path, vertex: &str, fragment: &str) -> Result<Shader>
    where
        F: Facade + ?Sized,
    {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|err| Error::io(path, err))
        };

        let vertex_source = read(vertex)?;
        let fragment_source = read(fragment)?;
        log::debug!("compiling {} + {} from {}", vertex, fragment, dir.display());
        Shader::from_source(facade, &vertex_source, &fragment_source)
    }

    /// Builds the program for `source`, preferring files from `--shaders` when it is set.
    pub fn from_catalog<F>(facade: &F, source: &ShaderSource, options: &ChapterOptions) -> Result<Shader>
    where
        F: Facade + ?Sized,
    {
        match &options.shaders {
            Some(dir) => Shader::load(facade, dir, source.vertex_file, source.fragment_file),
            None => Shader::from_source(facade, source.vertex, source.fragment),
        }
    }

    /// Mutable access to the stored values, for helpers such as `Light::apply`.
    pub fn uniforms_mut(&mut self) -> &mut UniformStorage {
        &mut self.uniforms
    }

    /// Sets an `int` uniform.
    pub fn set_uniform_1i(&mut self, name: &str, value: i32) {
        self.uniforms.set(name, value);
    }

    /// Sets a `float` uniform.
    pub fn set_uniform_1f(&mut self, name: &str, value: f32) {
        self.uniforms.set(name, value);
    }

    /// Sets a `vec3` uniform.
    pub fn set_uniform_3fv(&mut self, name: &str, value: impl Into<UniformData>) {
        self.uniforms.set(name, value);
    }

    /// Sets a `vec4` uniform.
    pub fn set_uniform_4fv(&mut self, name: &str, value: impl Into<UniformData>) {
        self.uniforms.set(name, value);
    }

    /// Sets a `mat4` uniform.
    pub fn set_uniform_matrix_4fv(&mut self, name: &str, value: Matrix4<f32>) {
        self.uniforms.set(name, value);
    }

    /// Issues one draw call with the stored uniforms and the given samplers.
    pub fn draw<'a, 'b, 's, S, V, I, T>(
        &'s self,
        surface: &mut S,
        vertices: V,
        indices: I,
        samplers: T,
        params: &DrawParameters<'_>,
    ) -> Result<()>
    where
        S: Surface,
        V: MultiVerticesSource<'b>,
        I: Into<IndicesSource<'a>>,
        T: IntoIterator<Item = (&'s str, UniformValue<'s>)>,
    {
        let uniforms = self.uniforms.with_samplers(samplers);
        surface.draw(vertices, indices, &self.program, &uniforms, params)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    fn collect(uniforms: &impl Uniforms) -> Vec<String> {
        let mut names = Vec::new();
        uniforms.visit_values(|name, _| names.push(name.to_owned()));
        names.sort();
        names
    }

    #[test]
    fn values_persist_and_replace() {
        let mut storage = UniformStorage::new();
        storage.set("material.shininess", 32.0f32);
        storage.set("material.shininess", 8.0f32);
        storage.set("texture1", 0);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("material.shininess"), Some(&UniformData::Float(8.0)));
        assert_eq!(storage.get("texture1"), Some(&UniformData::Int(0)));
    }

    #[test]
    fn math_types_convert() {
        let mut storage = UniformStorage::new();
        storage.set("cameraPos", Point3::new(1.0f32, 2.0, 3.0));
        storage.set("light.position", Vector4::new(0.0f32, 1.0, 0.0, 1.0));
        storage.set("modelMatrix", Matrix4::<f32>::identity());
        storage.set("debug", true);

        assert_eq!(storage.get("cameraPos"), Some(&UniformData::Vec3([1.0, 2.0, 3.0])));
        assert_eq!(storage.get("light.position"), Some(&UniformData::Vec4([0.0, 1.0, 0.0, 1.0])));
        assert_eq!(storage.get("debug"), Some(&UniformData::Int(1)));
        match storage.get("modelMatrix") {
            Some(UniformData::Mat4(m)) => assert_eq!(m[3], [0.0, 0.0, 0.0, 1.0]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn samplers_are_visited_after_values() {
        let mut storage = UniformStorage::new();
        storage.set("viewMatrix", Matrix4::<f32>::identity());
        storage.set("shininess", 4.0f32);

        let bound = storage.with_samplers([("shadowMap", UniformValue::SignedInt(2))]);
        assert_eq!(bound.sampler_count(), 1);
        assert_eq!(collect(&bound), ["shadowMap", "shininess", "viewMatrix"]);

        let mut last = String::new();
        bound.visit_values(|name, _| last = name.to_owned());
        assert_eq!(last, "shadowMap");
    }

    #[test]
    fn remove_restores_default() {
        let mut storage = UniformStorage::new();
        storage.set("ourColor", [0.0f32, 1.0, 0.0, 1.0]);
        assert!(storage.remove("ourColor").is_some());
        assert!(storage.is_empty());
        assert!(collect(&storage).is_empty());
    }
}
