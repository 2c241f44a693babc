//! 2D textures and shadow maps.

use std::path::Path;

use glium::backend::Facade;
use glium::framebuffer::SimpleFrameBuffer;
use glium::texture::{DepthTexture2d, MipmapsOption, RawImage2d, SrgbTexture2d, Texture2d};
use glium::uniforms::{
    MagnifySamplerFilter, MinifySamplerFilter, SamplerBehavior, SamplerWrapFunction, UniformValue,
};
use image::{DynamicImage, RgbaImage};

use crate::error::Result;

/// Sampler used for color textures.
///
/// Images with an alpha channel clamp to the edge so that their transparent borders are not
/// blended with the opposite side when sampled near 0 or 1.
pub fn sampler_for(has_alpha: bool) -> SamplerBehavior {
    let wrap = if has_alpha { SamplerWrapFunction::Clamp } else { SamplerWrapFunction::Repeat };
    SamplerBehavior {
        wrap_function: (wrap, wrap, wrap),
        minify_filter: MinifySamplerFilter::LinearMipmapLinear,
        magnify_filter: MagnifySamplerFilter::Linear,
        ..Default::default()
    }
}

enum Storage {
    Linear(Texture2d),
    Srgb(SrgbTexture2d),
}

/// A mipmapped color texture together with the sampler it should be read with.
pub struct Texture {
    storage: Storage,
    sampler: SamplerBehavior,
}

impl Texture {
    /// Decodes an image file and uploads it.
    ///
    /// With `gamma_correction`, the texels are stored as sRGB and linearized by the sampler.
    pub fn load<F>(facade: &F, path: impl AsRef<Path>, gamma_correction: bool) -> Result<Texture>
    where
        F: Facade + ?Sized,
    {
        let path = path.as_ref();
        let image = image::open(path)?;
        log::debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
        Texture::from_image(facade, &image, gamma_correction)
    }

    /// Uploads an already decoded image.
    pub fn from_image<F>(facade: &F, image: &DynamicImage, gamma_correction: bool) -> Result<Texture>
    where
        F: Facade + ?Sized,
    {
        let has_alpha = image.color().has_alpha();
        Texture::from_rgba(facade, image.to_rgba8(), has_alpha, gamma_correction)
    }

    /// Uploads RGBA pixels. `has_alpha` picks the wrap mode, see [`sampler_for`].
    pub fn from_rgba<F>(facade: &F, image: RgbaImage, has_alpha: bool, gamma_correction: bool) -> Result<Texture>
    where
        F: Facade + ?Sized,
    {
        let dimensions = image.dimensions();
        // image rows go top to bottom, OpenGL expects the bottom row first
        let raw = RawImage2d::from_raw_rgba_reversed(&image.into_raw(), dimensions);

        let storage = if gamma_correction {
            Storage::Srgb(SrgbTexture2d::with_mipmaps(facade, raw, MipmapsOption::AutoGeneratedMipmaps)?)
        } else {
            Storage::Linear(Texture2d::with_mipmaps(facade, raw, MipmapsOption::AutoGeneratedMipmaps)?)
        };

        Ok(Texture { storage, sampler: sampler_for(has_alpha) })
    }

    /// Loads `path`, or uploads `fallback()` when the file is missing or cannot be decoded.
    ///
    /// The fallback image is assumed to carry meaningful alpha when `fallback_alpha` is set.
    pub fn load_or_generate<F, G>(
        facade: &F,
        path: impl AsRef<Path>,
        gamma_correction: bool,
        fallback_alpha: bool,
        fallback: G,
    ) -> Result<Texture>
    where
        F: Facade + ?Sized,
        G: FnOnce() -> RgbaImage,
    {
        let path = path.as_ref();
        match image::open(path) {
            Ok(image) => Texture::from_image(facade, &image, gamma_correction),
            Err(err) => {
                log::warn!("could not load {}: {}, using a generated texture", path.display(), err);
                Texture::from_rgba(facade, fallback(), fallback_alpha, gamma_correction)
            }
        }
    }

    /// Value to bind to a `sampler2D` uniform.
    pub fn uniform_value(&self) -> UniformValue<'_> {
        match &self.storage {
            Storage::Linear(texture) => UniformValue::Texture2d(texture, Some(self.sampler)),
            Storage::Srgb(texture) => UniformValue::SrgbTexture2d(texture, Some(self.sampler)),
        }
    }
}

/// Square depth texture rendered from a light's point of view.
pub struct ShadowMap {
    depth: DepthTexture2d,
}

impl ShadowMap {
    /// Allocates a `size` x `size` depth texture.
    pub fn new<F>(facade: &F, size: u32) -> Result<ShadowMap>
    where
        F: Facade + ?Sized,
    {
        let depth = DepthTexture2d::empty(facade, size, size)?;
        log::debug!("allocated {size}x{size} shadow map");
        Ok(ShadowMap { depth })
    }

    /// Depth-only framebuffer writing into this map.
    pub fn framebuffer<'a, F>(&'a self, facade: &F) -> Result<SimpleFrameBuffer<'a>>
    where
        F: Facade + ?Sized,
    {
        Ok(SimpleFrameBuffer::depth_only(facade, &self.depth)?)
    }

    /// Value to bind to a `sampler2D` uniform. Depth is read raw, without comparison.
    pub fn uniform_value(&self) -> UniformValue<'_> {
        UniformValue::DepthTexture2d(&self.depth, Some(shadow_sampler()))
    }
}

/// Nearest filtering so that PCF sees individual depth texels; clamped so lookups just
/// outside the map reuse its edge.
pub fn shadow_sampler() -> SamplerBehavior {
    SamplerBehavior {
        wrap_function: (SamplerWrapFunction::Clamp, SamplerWrapFunction::Clamp, SamplerWrapFunction::Clamp),
        minify_filter: MinifySamplerFilter::Nearest,
        magnify_filter: MagnifySamplerFilter::Nearest,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_images_repeat() {
        let sampler = sampler_for(false);
        assert_eq!(sampler.wrap_function.0, SamplerWrapFunction::Repeat);
        assert_eq!(sampler.wrap_function.1, SamplerWrapFunction::Repeat);
        assert_eq!(sampler.minify_filter, MinifySamplerFilter::LinearMipmapLinear);
        assert_eq!(sampler.magnify_filter, MagnifySamplerFilter::Linear);
    }

    #[test]
    fn images_with_alpha_clamp() {
        let sampler = sampler_for(true);
        assert_eq!(sampler.wrap_function.0, SamplerWrapFunction::Clamp);
        assert_eq!(sampler.wrap_function.1, SamplerWrapFunction::Clamp);
    }

    #[test]
    fn shadow_maps_are_sampled_nearest() {
        let sampler = shadow_sampler();
        assert_eq!(sampler.minify_filter, MinifySamplerFilter::Nearest);
        assert_eq!(sampler.magnify_filter, MagnifySamplerFilter::Nearest);
        assert!(sampler.depth_texture_comparison.is_none());
    }
}
