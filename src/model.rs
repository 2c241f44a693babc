//! Triangle meshes loaded from Wavefront OBJ files.

use std::f32::consts::PI;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cgmath::{InnerSpace, Vector3};
use genmesh::generators::SphereUv;
use genmesh::{Triangulate, Vertices};
use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::uniforms::UniformValue;
use glium::{implement_vertex, DrawParameters, Surface, VertexBuffer};

use crate::error::{Error, Result};
use crate::shader::Shader;

/// Vertex layout shared by every mesh: position, normal and texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub tex_coords: [f32; 2],
}

implement_vertex!(MeshVertex, position, normal, tex_coords);

/// A triangle list kept in CPU memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Name used in logs and errors.
    pub name: String,
    /// Three vertices per triangle.
    pub vertices: Vec<MeshVertex>,
}

impl MeshData {
    /// Parses a Wavefront OBJ document.
    ///
    /// Polygons with more than three corners are split into fans around their first corner.
    /// Corners without texture coordinates get `(0, 0)`; corners without a normal get the
    /// normal of the triangle they end up in.
    pub fn from_obj<R: BufRead>(name: &str, reader: R) -> Result<MeshData> {
        let data = obj::ObjData::load_buf(reader)?;

        let corner = |index: &obj::IndexTuple| -> Result<(MeshVertex, bool)> {
            let missing = |attribute, index| Error::MeshIndex { mesh: name.to_owned(), attribute, index };

            let position = *data.position.get(index.0).ok_or_else(|| missing("position", index.0))?;
            let tex_coords = match index.1 {
                Some(i) => *data.texture.get(i).ok_or_else(|| missing("texture coordinate", i))?,
                None => [0.0, 0.0],
            };
            let normal = match index.2 {
                Some(i) => Some(*data.normal.get(i).ok_or_else(|| missing("normal", i))?),
                None => None,
            };

            let vertex = MeshVertex { position, normal: normal.unwrap_or([0.0; 3]), tex_coords };
            Ok((vertex, normal.is_some()))
        };

        let mut vertices = Vec::new();
        for object in &data.objects {
            for obj::SimplePolygon(corners) in object.groups.iter().flat_map(|g| g.polys.iter()) {
                if corners.len() < 3 {
                    continue;
                }

                let first = corner(&corners[0])?;
                for pair in corners[1..].windows(2) {
                    let mut triangle = [first, corner(&pair[0])?, corner(&pair[1])?];
                    fill_missing_normals(&mut triangle);
                    vertices.extend(triangle.iter().map(|(vertex, _)| *vertex));
                }
            }
        }

        if vertices.is_empty() {
            return Err(Error::EmptyMesh(name.to_owned()));
        }

        Ok(MeshData { name: name.to_owned(), vertices })
    }

    /// Reads and parses an OBJ file.
    pub fn load(path: impl AsRef<Path>) -> Result<MeshData> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| Error::io(path, err))?;
        let name = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        MeshData::from_obj(&name, BufReader::new(file))
    }

    /// Unit sphere with spherical texture coordinates.
    pub fn uv_sphere(u: usize, v: usize) -> MeshData {
        let vertices = SphereUv::new(u.max(3), v.max(2))
            .triangulate()
            .vertices()
            .map(|vertex| {
                let [x, y, z] = [vertex.pos.x, vertex.pos.y, vertex.pos.z];
                MeshVertex {
                    position: [x, y, z],
                    normal: [vertex.normal.x, vertex.normal.y, vertex.normal.z],
                    tex_coords: [0.5 + z.atan2(x) / (2.0 * PI), 0.5 + y.clamp(-1.0, 1.0).asin() / PI],
                }
            })
            .collect();

        MeshData { name: "sphere".to_owned(), vertices }
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(mut min, mut max), vertex| {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex.position[axis]);
                max[axis] = max[axis].max(vertex.position[axis]);
            }
            (min, max)
        }))
    }
}

/// Gives corners that had no normal in the file the face normal of their triangle.
fn fill_missing_normals(triangle: &mut [(MeshVertex, bool); 3]) {
    if triangle.iter().all(|(_, has_normal)| *has_normal) {
        return;
    }

    let p = |i: usize| Vector3::from(triangle[i].0.position);
    let face = (p(1) - p(0)).cross(p(2) - p(0));
    // degenerate triangles keep the zero normal
    let normal: [f32; 3] = if face.magnitude2() > 0.0 { face.normalize().into() } else { [0.0; 3] };

    for (vertex, has_normal) in triangle.iter_mut() {
        if !*has_normal {
            vertex.normal = normal;
        }
    }
}

/// A mesh uploaded to the GPU.
pub struct Model {
    vertices: VertexBuffer<MeshVertex>,
    triangles: usize,
}

impl Model {
    /// Uploads a mesh.
    pub fn from_mesh<F>(facade: &F, mesh: &MeshData) -> Result<Model>
    where
        F: Facade + ?Sized,
    {
        if mesh.vertices.is_empty() {
            return Err(Error::EmptyMesh(mesh.name.clone()));
        }

        let vertices = VertexBuffer::new(facade, &mesh.vertices)?;
        if let Some((min, max)) = mesh.bounds() {
            log::debug!("uploaded {} ({} triangles, {:?} to {:?})", mesh.name, mesh.triangle_count(), min, max);
        }
        Ok(Model { vertices, triangles: mesh.triangle_count() })
    }

    /// Loads an OBJ file and uploads it.
    pub fn load<F>(facade: &F, path: impl AsRef<Path>) -> Result<Model>
    where
        F: Facade + ?Sized,
    {
        Model::from_mesh(facade, &MeshData::load(path)?)
    }

    /// Loads `path`, or uploads `fallback()` when the file is missing or malformed.
    pub fn load_or_generate<F, G>(facade: &F, path: impl AsRef<Path>, fallback: G) -> Result<Model>
    where
        F: Facade + ?Sized,
        G: FnOnce() -> MeshData,
    {
        let path = path.as_ref();
        match MeshData::load(path) {
            Ok(mesh) => Model::from_mesh(facade, &mesh),
            Err(err) => {
                log::warn!("could not load {}: {}, using a generated mesh", path.display(), err);
                Model::from_mesh(facade, &fallback())
            }
        }
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles
    }

    /// Draws every triangle with `shader`.
    pub fn draw<'s, S, T>(
        &self,
        surface: &mut S,
        shader: &'s Shader,
        samplers: T,
        params: &DrawParameters<'_>,
    ) -> Result<()>
    where
        S: Surface,
        T: IntoIterator<Item = (&'s str, UniformValue<'s>)>,
    {
        shader.draw(surface, &self.vertices, NoIndices(PrimitiveType::TrianglesList), samplers, params)
    }
}
