use cgmath::{Point3, Vector3, Vector4};

use gl_chapters::shader::{UniformData, UniformStorage};
use gl_chapters::Light;

mod support;

fn to_ndc(light: &Light, point: Point3<f32>) -> Vector3<f32> {
    let clip = light.world_to_light_ndc() * Vector4::new(point.x, point.y, point.z, 1.0);
    clip.truncate() / clip.w
}

fn assert_finite(light: &Light) {
    let matrix: [[f32; 4]; 4] = light.world_to_light_ndc().into();
    assert!(matrix.iter().flatten().all(|v| v.is_finite()), "{matrix:?}");
}

#[test]
fn point_light_looks_at_the_origin() {
    let light = Light::point(Point3::new(-2.0, 2.0, 0.0));
    assert!(light.is_point());

    let ndc = to_ndc(&light, Point3::new(0.0, 0.0, 0.0));
    support::assert_close(ndc.x, 0.0);
    support::assert_close(ndc.y, 0.0);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn directional_light_looks_at_the_origin() {
    let light = Light::directional(Vector3::new(2.0, -2.0, 0.0));
    assert!(!light.is_point());

    let eye = light.eye();
    support::assert_close(eye.x, -(50.0f32).sqrt());
    support::assert_close(eye.y, (50.0f32).sqrt());

    let ndc = to_ndc(&light, Point3::new(0.0, 0.0, 0.0));
    support::assert_close(ndc.x, 0.0);
    support::assert_close(ndc.y, 0.0);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn degenerate_lights_still_project() {
    assert_finite(&Light::point(Point3::new(0.0, 0.0, 0.0)));
    assert_finite(&Light::point(Point3::new(0.0, 5.0, 0.0)));
    assert_finite(&Light::directional(Vector3::new(0.0, -1.0, 0.0)));
    assert_finite(&Light::directional(Vector3::new(0.0, 0.0, 0.0)));
}

#[test]
fn switching_kind_keeps_the_position() {
    let mut light = Light::point(Point3::new(-2.0, 2.0, 0.0));
    light.set_point(false);
    assert_eq!(light.position, Vector4::new(-2.0, 2.0, 0.0, 0.0));
    light.set_xyz(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(light.position.w, 0.0);
    light.set_point(true);
    assert_eq!(light.position, Vector4::new(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn directional_light_keeps_the_side_of_the_point_light() {
    let mut light = Light::point(Point3::new(-2.0, 2.0, 0.0));
    light.set_point(false);

    let towards = light.towards_light();
    support::assert_close_vec(towards, Vector3::new(-1.0, 1.0, 0.0) / 2.0f32.sqrt());
    assert!(light.eye().x < 0.0 && light.eye().y > 0.0);
}

#[test]
fn directional_uniform_is_a_unit_vector() {
    let mut uniforms = UniformStorage::new();
    Light::directional(Vector3::new(0.0, -4.0, 0.0)).apply(&mut uniforms, "light");
    assert_eq!(uniforms.get("light.position"), Some(&UniformData::Vec4([0.0, 1.0, 0.0, 0.0])));
}

#[test]
fn zero_direction_falls_back_to_a_light_above() {
    let light = Light::directional(Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(light.towards_light(), Vector3::unit_y());
    assert_eq!(light.eye(), Point3::new(0.0, 10.0, 0.0));

    let mut uniforms = UniformStorage::new();
    light.apply(&mut uniforms, "light");
    assert_eq!(uniforms.get("light.position"), Some(&UniformData::Vec4([0.0, 1.0, 0.0, 0.0])));
}

#[test]
fn apply_writes_the_struct_members() {
    let mut light = Light::point(Point3::new(-2.0, 2.0, 0.0));
    light.ambient = Vector3::new(0.2, 0.2, 0.2);

    let mut uniforms = UniformStorage::new();
    light.apply(&mut uniforms, "light");

    assert_eq!(uniforms.len(), 7);
    assert_eq!(uniforms.get("light.position"), Some(&UniformData::Vec4([-2.0, 2.0, 0.0, 1.0])));
    assert_eq!(uniforms.get("light.ambient"), Some(&UniformData::Vec3([0.2, 0.2, 0.2])));
    assert_eq!(uniforms.get("light.constant"), Some(&UniformData::Float(0.5)));
    assert!(uniforms.get("light.quadratic").is_some());
}
