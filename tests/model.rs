use std::io::Cursor;

use gl_chapters::model::MeshData;
use gl_chapters::Error;

mod support;

#[test]
fn quad_is_split_into_two_triangles() {
    let mesh = MeshData::load(support::fixture("quad.obj")).unwrap();
    assert_eq!(mesh.name, "quad.obj");
    assert_eq!(mesh.vertices.len(), 6);
    assert_eq!(mesh.triangle_count(), 2);

    // fan around the first corner
    let positions: Vec<_> = mesh.vertices.iter().map(|v| v.position).collect();
    assert_eq!(positions[0], [-1.0, -1.0, 0.0]);
    assert_eq!(positions[3], [-1.0, -1.0, 0.0]);
    assert_eq!(positions[5], [-1.0, 1.0, 0.0]);
}

#[test]
fn missing_normals_become_face_normals() {
    let mesh = MeshData::load(support::fixture("quad.obj")).unwrap();
    for vertex in &mesh.vertices {
        assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn texture_coordinates_follow_the_corners() {
    let mesh = MeshData::load(support::fixture("quad.obj")).unwrap();
    for vertex in &mesh.vertices {
        let expected = [(vertex.position[0] + 1.0) / 2.0, (vertex.position[1] + 1.0) / 2.0];
        assert_eq!(vertex.tex_coords, expected);
    }
}

#[test]
fn file_normals_are_kept() {
    let mesh = MeshData::load(support::fixture("triangle.obj")).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    for vertex in &mesh.vertices {
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertex.tex_coords, [0.0, 0.0]);
    }
}

#[test]
fn out_of_range_index_is_an_error() {
    let source = "o broken\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
    assert!(MeshData::from_obj("broken", Cursor::new(source)).is_err());
}

#[test]
fn file_without_faces_is_empty() {
    let source = "o points\nv 0 0 0\nv 1 0 0\nv 0 1 0\n";
    match MeshData::from_obj("points", Cursor::new(source)) {
        Err(Error::EmptyMesh(name)) => assert_eq!(name, "points"),
        other => panic!("expected an empty mesh error, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_the_path() {
    let err = MeshData::load(support::fixture("does_not_exist.obj")).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.obj"));
}

#[test]
fn bounds_of_the_quad() {
    let mesh = MeshData::load(support::fixture("quad.obj")).unwrap();
    assert_eq!(mesh.bounds(), Some(([-1.0, -1.0, 0.0], [1.0, 1.0, 0.0])));
}

#[test]
fn sphere_has_unit_normals_and_wrapped_uvs() {
    let sphere = MeshData::uv_sphere(16, 8);
    assert!(sphere.triangle_count() > 0);
    assert_eq!(sphere.vertices.len() % 3, 0);

    for vertex in &sphere.vertices {
        let [x, y, z] = vertex.normal;
        support::assert_close((x * x + y * y + z * z).sqrt(), 1.0);
        for uv in vertex.tex_coords {
            assert!((-1e-4..=1.0 + 1e-4).contains(&uv), "uv {uv} out of range");
        }
    }
}
