//! GLSL sources shipped with the crate.
//!
//! Every program is compiled into the binaries. Passing `--shaders <dir>` makes
//! [`Shader::from_catalog`](crate::Shader::from_catalog) read the same file names from that
//! directory instead, so shaders can be edited without rebuilding.

/// A vertex/fragment pair and the file names it was embedded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource {
    /// Name used in logs and for lookups.
    pub name: &'static str,
    /// Vertex shader file name, relative to the shader directory.
    pub vertex_file: &'static str,
    /// Fragment shader file name, relative to the shader directory.
    pub fragment_file: &'static str,
    /// Embedded vertex shader.
    pub vertex: &'static str,
    /// Embedded fragment shader.
    pub fragment: &'static str,
}

macro_rules! shader_source {
    ($(#[$attr:meta])* $ident:ident, $name:expr, $vert:expr, $frag:expr) => {
        $(#[$attr])*
        pub const $ident: ShaderSource = ShaderSource {
            name: $name,
            vertex_file: $vert,
            fragment_file: $frag,
            vertex: include_str!(concat!("../shaders/", $vert)),
            fragment: include_str!(concat!("../shaders/", $frag)),
        };
    };
}

shader_source!(
    /// Passes positions through and paints orange.
    HELLO_TRIANGLE, "hello_triangle", "ch02.vert", "ch02_orange.frag"
);
shader_source!(
    /// Same vertex stage as [`HELLO_TRIANGLE`], painting yellow.
    YELLOW, "yellow", "ch02.vert", "ch02_yellow.frag"
);
shader_source!(
    /// Flat color from the `ourColor` uniform.
    UNIFORM_COLOR, "uniform_color", "ch03_01.vert", "ch03_01.frag"
);
shader_source!(
    /// Vertex colors mixed with two textures.
    TEXTURED_QUAD, "textured_quad", "ch04_01.vert", "ch04_01.frag"
);
shader_source!(
    /// Textured mesh with model, view and projection matrices.
    MODEL, "model", "ch06_01.vert", "ch06_01.frag"
);
shader_source!(
    /// Phong lighting with a single object color.
    PHONG, "phong", "ch07_02.vert", "ch07_02.frag"
);
shader_source!(
    /// Phong lighting with a `material` struct.
    MATERIALS, "materials", "ch07_04.vert", "ch07_04.frag"
);
shader_source!(
    /// Textured Phong lighting with PCF shadows.
    SHADOW_MAPPING, "shadow_mapping", "ch07_07_shadowmap.vert", "ch07_07_shadowmap_pcf.frag"
);
shader_source!(
    /// Unlit cube showing where the light is.
    LIGHT_CUBE, "light_cube", "lightcube.vert", "lightcube.frag"
);
shader_source!(
    /// Depth-only pass rendering the scene from the light.
    SHADOW_PASS, "shadow_pass", "shadowpass.vert", "shadowpass.frag"
);
shader_source!(
    /// Fullscreen quad displaying a shadow map.
    DEBUG_SHADOW_PASS, "debug_shadow_pass", "debug_shadowpass.vert", "debug_shadowpass.frag"
);
shader_source!(
    /// Textured geometry discarding fragments below `alphaCutoff`.
    ALPHA_TEST, "alpha_test", "ch08_02_alphatest.vert", "ch08_02_alphatest.frag"
);
shader_source!(
    /// Textured geometry keeping the texture's alpha for blending.
    BLENDING, "blending", "ch08_02_alphatest.vert", "ch08_03_blending.frag"
);

/// Every embedded program.
pub const ALL: &[ShaderSource] = &[
    HELLO_TRIANGLE,
    YELLOW,
    UNIFORM_COLOR,
    TEXTURED_QUAD,
    MODEL,
    PHONG,
    MATERIALS,
    SHADOW_MAPPING,
    LIGHT_CUBE,
    SHADOW_PASS,
    DEBUG_SHADOW_PASS,
    ALPHA_TEST,
    BLENDING,
];

/// Looks up an embedded program by name.
pub fn find(name: &str) -> Option<&'static ShaderSource> {
    ALL.iter().find(|source| source.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn every_source_targets_core_330() {
        for source in ALL {
            assert!(source.vertex.starts_with("#version 330 core"), "{}", source.vertex_file);
            assert!(source.fragment.starts_with("#version 330 core"), "{}", source.fragment_file);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(find("shadow_mapping").map(|s| s.fragment_file), Some("ch07_07_shadowmap_pcf.frag"));
        assert!(find("missing").is_none());
    }

    #[test]
    fn shadow_shader_declares_the_uniforms_it_is_fed() {
        for name in ["world2lightNDC", "shadowMap", "diffuseMap", "specularMap", "pcfRadius", "light"] {
            let declared = SHADOW_MAPPING.vertex.contains(name) || SHADOW_MAPPING.fragment.contains(name);
            assert!(declared, "{name}");
        }
    }
}
