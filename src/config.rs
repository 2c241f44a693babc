//! Command-line options shared by every chapter.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Options accepted by every chapter binary.
#[derive(Debug, Clone, Parser)]
#[command(about = "Real-time rendering chapter built on glium")]
pub struct ChapterOptions {
    /// Window width in pixels. Defaults to the chapter's own size.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels. Defaults to the chapter's own size.
    #[arg(long)]
    pub height: Option<u32>,

    /// Directory that textures and models are looked up in.
    #[arg(long, env = "GL_CHAPTERS_ASSETS", default_value = "assets")]
    pub assets: PathBuf,

    /// Load GLSL sources from this directory instead of the copies built into the binary.
    #[arg(long)]
    pub shaders: Option<PathBuf>,

    /// Resolution of the depth map for chapters that render shadows.
    #[arg(long, default_value_t = 2048, value_parser = clap::value_parser!(u32).range(64..=16384))]
    pub shadow_map_size: u32,

    /// Log filter, in `env_logger` syntax (`info`, `gl_chapters=debug`, ...).
    #[arg(long)]
    pub log: Option<String>,
}

impl Default for ChapterOptions {
    fn default() -> ChapterOptions {
        ChapterOptions {
            width: None,
            height: None,
            assets: PathBuf::from("assets"),
            shaders: None,
            shadow_map_size: 2048,
            log: None,
        }
    }
}

impl ChapterOptions {
    /// Resolves a path relative to the asset directory. Absolute paths are returned as-is.
    pub fn resolve_asset(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.assets.join(name)
        }
    }

    /// Window size to open, falling back to `default` for missing dimensions.
    ///
    /// Zero is not a valid surface size and is treated as missing.
    pub fn window_size(&self, default: (u32, u32)) -> (u32, u32) {
        let width = self.width.filter(|&w| w > 0).unwrap_or(default.0);
        let height = self.height.filter(|&h| h > 0).unwrap_or(default.1);
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ChapterOptions::try_parse_from(["chapter"]).unwrap();
        assert_eq!(options.width, None);
        assert_eq!(options.shadow_map_size, 2048);
        assert!(options.shaders.is_none());
        assert_eq!(options.window_size((1024, 768)), (1024, 768));
    }

    #[test]
    fn size_override() {
        let options = ChapterOptions::try_parse_from(["chapter", "--width", "800"]).unwrap();
        assert_eq!(options.window_size((1920, 1080)), (800, 1080));
    }

    #[test]
    fn zero_size_falls_back() {
        let options = ChapterOptions::try_parse_from(["chapter", "--width", "0", "--height", "600"]).unwrap();
        assert_eq!(options.window_size((1024, 768)), (1024, 600));
    }

    #[test]
    fn shadow_map_size_is_range_checked() {
        assert!(ChapterOptions::try_parse_from(["chapter", "--shadow-map-size", "16"]).is_err());
        let options = ChapterOptions::try_parse_from(["chapter", "--shadow-map-size", "1024"]).unwrap();
        assert_eq!(options.shadow_map_size, 1024);
    }

    #[test]
    fn assets_resolve_relative_to_root() {
        let options = ChapterOptions::try_parse_from(["chapter", "--assets", "/data/res"]).unwrap();
        assert_eq!(options.resolve_asset("models/brick.jpg"), PathBuf::from("/data/res/models/brick.jpg"));
        assert_eq!(options.resolve_asset("/tmp/grass.png"), PathBuf::from("/tmp/grass.png"));
    }
}
