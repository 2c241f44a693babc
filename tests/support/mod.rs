/*!
Test supports module.

*/

#![allow(dead_code)]

use std::path::PathBuf;

use cgmath::Vector3;

/// Path of a file under `tests/fixture`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixture").join(name)
}

/// Asserts that two floats differ by less than `1e-4`.
pub fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
}

/// Component-wise [`assert_close`].
pub fn assert_close_vec(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert_close(actual.x, expected.x);
    assert_close(actual.y, expected.y);
    assert_close(actual.z, expected.z);
}
