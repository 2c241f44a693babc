use cgmath::{InnerSpace, Vector3};

use gl_chapters::geometry::{self, QUAD, QUAD_INDICES};
use gl_chapters::model::MeshVertex;

fn winding_normal(triangle: &[MeshVertex]) -> Vector3<f32> {
    let p = |i: usize| Vector3::from(triangle[i].position);
    (p(1) - p(0)).cross(p(2) - p(0))
}

#[test]
fn cube_faces_point_outward() {
    let cube = geometry::cube();
    assert_eq!(cube.len(), 36);

    for triangle in cube.chunks(3) {
        let normal = Vector3::from(triangle[0].normal);
        assert!(triangle.iter().all(|v| v.normal == triangle[0].normal));
        assert!(winding_normal(triangle).dot(normal) > 0.0, "clockwise triangle {triangle:?}");

        let centroid = triangle.iter().map(|v| Vector3::from(v.position)).sum::<Vector3<f32>>() / 3.0;
        assert!(centroid.dot(normal) > 0.0);
    }
}

#[test]
fn cube_spans_half_a_unit() {
    for vertex in geometry::cube() {
        assert!(vertex.position.iter().all(|c| c.abs() == 0.5));
        assert!(vertex.tex_coords.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn cube_variants_share_positions() {
    let full = geometry::cube();
    let normals = geometry::normal_cube();
    let textured = geometry::textured_cube();
    let positions = geometry::position_cube();

    for i in 0..full.len() {
        assert_eq!(normals[i].position, full[i].position);
        assert_eq!(normals[i].normal, full[i].normal);
        assert_eq!(textured[i].tex_coords, full[i].tex_coords);
        assert_eq!(positions[i].position, full[i].position);
    }
}

#[test]
fn quad_indices_stay_in_range() {
    assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD.len()));
}

#[test]
fn ground_plane_faces_up() {
    let plane = geometry::ground_plane(-0.5, 10.0, 2.0);
    for vertex in &plane {
        assert_eq!(vertex.position[1], -0.5);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert!(vertex.position[0].abs() <= 5.0 && vertex.position[2].abs() <= 5.0);
        assert!(vertex.tex_coords.iter().all(|c| (0.0..=2.0).contains(c)));
    }
    for triangle in plane.chunks(3) {
        assert!(winding_normal(triangle).y > 0.0);
    }
}

#[test]
fn billboard_stands_on_its_left_edge() {
    for vertex in geometry::billboard() {
        let [x, y, z] = vertex.position;
        assert!((0.0..=1.0).contains(&x));
        assert!((-0.5..=0.5).contains(&y));
        assert_eq!(z, 0.0);
        // texture rows are stored bottom first
        assert_eq!(vertex.tex_coords[1], y + 0.5);
        assert_eq!(vertex.tex_coords[0], x);
    }
}

#[test]
fn fullscreen_quad_covers_clip_space() {
    let quad = geometry::fullscreen_quad();
    let xs: Vec<f32> = quad.iter().map(|v| v.position[0]).collect();
    assert!(xs.contains(&-1.0) && xs.contains(&1.0));
    let ys: Vec<f32> = quad.iter().map(|v| v.position[1]).collect();
    assert!(ys.contains(&-1.0) && ys.contains(&1.0));
}
