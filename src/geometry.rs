//! Vertex types and the small meshes the chapters draw.

use cgmath::Vector3;
use glium::implement_vertex;

use crate::model::MeshVertex;

/// Position only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionVertex {
    /// Position, in clip space for the 2D chapters.
    pub position: [f32; 3],
}
implement_vertex!(PositionVertex, position);

/// Position, per-vertex color and texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTexVertex {
    /// Position.
    pub position: [f32; 3],
    /// RGB color.
    pub color: [f32; 3],
    /// Texture coordinates.
    pub tex_coords: [f32; 2],
}
implement_vertex!(ColorTexVertex, position, color, tex_coords);

/// Position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalVertex {
    /// Position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
}
implement_vertex!(NormalVertex, position, normal);

/// Position and texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexVertex {
    /// Position.
    pub position: [f32; 3],
    /// Texture coordinates.
    pub tex_coords: [f32; 2],
}
implement_vertex!(TexVertex, position, tex_coords);

impl From<MeshVertex> for PositionVertex {
    fn from(v: MeshVertex) -> PositionVertex {
        PositionVertex { position: v.position }
    }
}

impl From<MeshVertex> for NormalVertex {
    fn from(v: MeshVertex) -> NormalVertex {
        NormalVertex { position: v.position, normal: v.normal }
    }
}

impl From<MeshVertex> for TexVertex {
    fn from(v: MeshVertex) -> TexVertex {
        TexVertex { position: v.position, tex_coords: v.tex_coords }
    }
}

const fn p(x: f32, y: f32) -> PositionVertex {
    PositionVertex { position: [x, y, 0.0] }
}

/// A single triangle in the middle of the screen.
pub const TRIANGLE: [PositionVertex; 3] = [p(-0.5, -0.5), p(0.5, -0.5), p(0.0, 0.5)];

/// Two triangles side by side, drawn with one call.
pub const TWO_TRIANGLES: [PositionVertex; 6] = [
    p(-0.9, -0.5),
    p(0.0, -0.5),
    p(-0.45, 0.5),
    p(0.0, -0.5),
    p(0.9, -0.5),
    p(0.45, 0.5),
];

/// The left half of [`TWO_TRIANGLES`].
pub const LEFT_TRIANGLE: [PositionVertex; 3] = [p(-0.9, -0.5), p(0.0, -0.5), p(-0.45, 0.5)];

/// The right half of [`TWO_TRIANGLES`].
pub const RIGHT_TRIANGLE: [PositionVertex; 3] = [p(0.0, -0.5), p(0.9, -0.5), p(0.45, 0.5)];

/// Corners of a colored, textured quad: top right, bottom right, bottom left, top left.
pub const QUAD: [ColorTexVertex; 4] = [
    ColorTexVertex { position: [0.5, 0.5, 0.0], color: [1.0, 0.0, 0.0], tex_coords: [1.0, 1.0] },
    ColorTexVertex { position: [0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0], tex_coords: [1.0, 0.0] },
    ColorTexVertex { position: [-0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0], tex_coords: [0.0, 0.0] },
    ColorTexVertex { position: [-0.5, 0.5, 0.0], color: [1.0, 1.0, 0.0], tex_coords: [0.0, 1.0] },
];

/// Two triangles covering [`QUAD`].
pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// A rectangle centered on `center` and spanned by `u` and `v`, as two counter-clockwise
/// triangles facing `u × v`.
///
/// `size` is the full edge length and texture coordinates run from 0 to `uv_scale`.
pub fn quad(center: Vector3<f32>, u: Vector3<f32>, v: Vector3<f32>, size: f32, uv_scale: f32) -> [MeshVertex; 6] {
    let normal = u.cross(v);
    let corner = |su: f32, sv: f32| MeshVertex {
        position: (center + u * (su * size / 2.0) + v * (sv * size / 2.0)).into(),
        normal: normal.into(),
        tex_coords: [(su + 1.0) / 2.0 * uv_scale, (sv + 1.0) / 2.0 * uv_scale],
    };

    let (a, b, c, d) = (corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0));
    [a, b, c, a, c, d]
}

/// Unit cube centered on the origin, 36 vertices with outward normals and per-face texture
/// coordinates.
pub fn cube() -> Vec<MeshVertex> {
    let axes = [
        (Vector3::unit_x(), -Vector3::unit_z(), Vector3::unit_y()),
        (-Vector3::unit_x(), Vector3::unit_z(), Vector3::unit_y()),
        (Vector3::unit_y(), Vector3::unit_x(), -Vector3::unit_z()),
        (-Vector3::unit_y(), Vector3::unit_x(), Vector3::unit_z()),
        (Vector3::unit_z(), Vector3::unit_x(), Vector3::unit_y()),
        (-Vector3::unit_z(), -Vector3::unit_x(), Vector3::unit_y()),
    ];

    axes.iter().flat_map(|&(normal, u, v)| quad(normal * 0.5, u, v, 1.0, 1.0)).collect()
}

/// [`cube`] without texture coordinates.
pub fn normal_cube() -> Vec<NormalVertex> {
    cube().into_iter().map(NormalVertex::from).collect()
}

/// [`cube`] without normals.
pub fn textured_cube() -> Vec<TexVertex> {
    cube().into_iter().map(TexVertex::from).collect()
}

/// [`cube`] positions only.
pub fn position_cube() -> Vec<PositionVertex> {
    cube().into_iter().map(PositionVertex::from).collect()
}

/// Horizontal square at `y`, `size` units across, facing up.
pub fn ground_plane(y: f32, size: f32, uv_scale: f32) -> [MeshVertex; 6] {
    quad(Vector3::new(0.0, y, 0.0), Vector3::unit_x(), -Vector3::unit_z(), size, uv_scale)
}

/// Upright unit quad with its left edge on the origin, for vegetation and windows.
///
/// `v` grows upward, matching textures uploaded bottom row first.
pub fn billboard() -> [TexVertex; 6] {
    quad(Vector3::new(0.5, 0.0, 0.0), Vector3::unit_x(), Vector3::unit_y(), 1.0, 1.0).map(TexVertex::from)
}

/// Quad covering the whole viewport in clip space.
pub fn fullscreen_quad() -> [TexVertex; 6] {
    quad(Vector3::new(0.0, 0.0, 0.0), Vector3::unit_x(), Vector3::unit_y(), 2.0, 1.0).map(TexVertex::from)
}
