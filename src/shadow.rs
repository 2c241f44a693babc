//! Shadow mapping parameters.
//!
//! A frame with shadows is drawn in two passes. The first renders the scene's depth from the
//! light into a [`ShadowMap`](crate::ShadowMap). The second renders from the camera and
//! compares each fragment's depth as seen by the light with the stored one, averaging the
//! comparison over a `(2r + 1)²` texel neighborhood (percentage-closer filtering).

use crate::config::ChapterOptions;
use crate::light::{Light, SHADOW_FAR, SHADOW_NEAR};
use crate::shader::UniformStorage;

/// Largest PCF radius the chapters offer. Radius 4 already samples 81 texels.
pub const MAX_PCF_RADIUS: i32 = 4;

/// Tunables of the shadow lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Depth map resolution.
    pub size: u32,
    /// Depth bias of surfaces facing the light.
    pub bias_min: f32,
    /// Depth bias of surfaces at grazing angles. The lit pass scales it by `1 - cos θ` and
    /// never goes below `bias_min`.
    pub bias_max: f32,
    /// PCF kernel radius in texels. Zero is a single hard lookup.
    pub pcf_radius: i32,
}

impl Default for ShadowSettings {
    fn default() -> ShadowSettings {
        ShadowSettings { size: 2048, bias_min: 0.005, bias_max: 0.05, pcf_radius: 1 }
    }
}

impl ShadowSettings {
    /// Default settings with the resolution from the command line.
    pub fn from_options(options: &ChapterOptions) -> ShadowSettings {
        ShadowSettings { size: options.shadow_map_size, ..Default::default() }
    }

    /// Number of depth texels averaged per fragment.
    pub fn kernel_taps(&self) -> u32 {
        let side = 2 * self.pcf_radius.max(0) as u32 + 1;
        side * side
    }

    /// Grows or shrinks the kernel, staying within `0..=MAX_PCF_RADIUS`.
    pub fn adjust_pcf_radius(&mut self, delta: i32) {
        self.pcf_radius = (self.pcf_radius + delta).clamp(0, MAX_PCF_RADIUS);
    }

    /// Writes `shadowBiasMin`, `shadowBiasMax` and `pcfRadius`.
    pub fn apply(&self, uniforms: &mut UniformStorage) {
        uniforms.set("shadowBiasMin", self.bias_min);
        uniforms.set("shadowBiasMax", self.bias_max);
        uniforms.set("pcfRadius", self.pcf_radius.max(0));
    }
}

/// Writes the uniforms of the depth map preview: whether depth needs linearizing and the
/// planes it was rendered with.
pub fn apply_debug_view(light: &Light, uniforms: &mut UniformStorage) {
    uniforms.set("perspectiveDepth", light.is_point());
    uniforms.set("nearPlane", SHADOW_NEAR);
    uniforms.set("farPlane", SHADOW_FAR);
}
