/*!
Shared helpers for the rendering chapters.

Every chapter under `src/bin/` is a standalone program that opens a window, uploads a few
buffers, compiles its shaders and runs a draw loop. What they have in common lives here:

 - `app` owns the window, the OpenGL context and the event loop. A chapter implements
   `ApplicationContext` and calls `app::launch`.
 - `shader`, `texture` and `model` are thin wrappers around glium objects, in the spirit of
   the classic `Shader`/`Texture`/`Model` helper classes.
 - `camera`, `light`, `material` and `shadow` hold the small amount of math the lighting
   chapters need.

```no_run
use gl_chapters::app::{self, ApplicationContext, FrameTime};
use gl_chapters::input::InputState;
use gl_chapters::{ChapterOptions, Result};
use glium::{Display, Surface};
use glutin::surface::WindowSurface;

struct Blank;

impl ApplicationContext for Blank {
    const WINDOW_TITLE: &'static str = "Blank";

    fn new(_: &Display<WindowSurface>, _: &ChapterOptions) -> Result<Self> {
        Ok(Blank)
    }

    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        let mut target = display.draw();
        target.clear_color(0.2, 0.3, 0.3, 1.0);
        target.finish()?;
        Ok(())
    }
}

fn main() {
    app::launch::<Blank>();
}
```

*/

#![warn(missing_docs)]

pub mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod light;
pub mod logging;
pub mod material;
pub mod model;
pub mod procedural;
pub mod shader;
pub mod shaders;
pub mod shadow;
pub mod texture;
pub mod time;
pub mod transparency;

pub use camera::Camera;
pub use config::ChapterOptions;
pub use error::{Error, Result};
pub use light::Light;
pub use material::Material;
pub use model::Model;
pub use shader::Shader;
pub use texture::{ShadowMap, Texture};
