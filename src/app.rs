//! Window, OpenGL context and event loop shared by every chapter.

use std::num::NonZeroU32;

use glium::{Display, Frame};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::{PhysicalSize, Size};
use winit::event::{DeviceEvent, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{EventLoopBuilder, EventLoopWindowTarget};
use winit::window::{CursorGrabMode, Window, WindowBuilder};

use clap::Parser;

use crate::config::ChapterOptions;
use crate::error::{Error, Result};
use crate::input::{InputState, MouseLook};
use crate::logging::init_logging;
use crate::time::FrameClock;

pub use crate::time::FrameTime;

/// A chapter: the state it keeps between frames and how it reacts to input.
pub trait ApplicationContext {
    /// Window title.
    const WINDOW_TITLE: &'static str;
    /// Window size unless overridden on the command line.
    const WINDOW_SIZE: (u32, u32) = (1024, 768);
    /// Whether the cursor starts captured for mouse look.
    const CAPTURE_CURSOR: bool = false;

    /// Creates buffers, programs and textures.
    fn new(display: &Display<WindowSurface>, options: &ChapterOptions) -> Result<Self>
    where
        Self: Sized;

    /// Advances the chapter by one frame.
    fn update(&mut self, _time: &FrameTime, _input: &InputState) {}

    /// Renders one frame.
    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<()>;

    /// Called for key presses not handled by the run loop. Repeats are filtered out.
    fn key_pressed(&mut self, _key: VirtualKeyCode) {}

    /// Called with camera offsets while the cursor is captured.
    fn mouse_moved(&mut self, _xoffset: f32, _yoffset: f32) {}

    /// Called after the surface was resized to a non-zero size.
    fn resized(&mut self, _width: u32, _height: u32) {}

    /// Any other window event.
    fn handle_window_event(&mut self, _event: &WindowEvent<'_>, _window: &Window) {}
}

/// A running chapter together with its window and context.
pub struct State<T> {
    /// The glium display.
    pub display: Display<WindowSurface>,
    /// The window the display renders to.
    pub window: Window,
    /// The chapter.
    pub context: T,
    input: InputState,
    mouse_look: MouseLook,
    clock: FrameClock,
}

impl<T: ApplicationContext + 'static> State<T> {
    /// Opens the window and creates an OpenGL 3.3 core context, falling back to whatever
    /// the platform offers by default.
    pub fn new<W>(event_loop: &EventLoopWindowTarget<W>, options: &ChapterOptions) -> Result<Self> {
        let (width, height) = options.window_size(T::WINDOW_SIZE);
        let window_builder = WindowBuilder::new()
            .with_title(T::WINDOW_TITLE)
            .with_inner_size(Size::Physical(PhysicalSize::new(width, height)));
        let config_template_builder = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(event_loop, config_template_builder, |configs| {
                // the picker has to return a config, so an empty match cannot become an `Err`
                configs
                    .reduce(|best, config| if config.num_samples() < best.num_samples() { config } else { best })
                    .expect("at least one matching config")
            })
            .map_err(|err| Error::Window(err.to_string()))?;
        let window = window.ok_or_else(|| Error::Window("no window was created".to_owned()))?;

        let raw_window_handle = window.raw_window_handle();
        let core_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));
        let fallback_attributes = ContextAttributesBuilder::new().build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current_context = match unsafe { gl_display.create_context(&gl_config, &core_attributes) } {
            Ok(context) => context,
            Err(err) => {
                log::warn!("no OpenGL 3.3 core context ({err}), trying the default");
                unsafe { gl_display.create_context(&gl_config, &fallback_attributes)? }
            }
        };

        let (width, height): (u32, u32) = window.inner_size().into();
        let non_zero = |v: u32| NonZeroU32::new(v).ok_or_else(|| Error::Window("window has a zero size".to_owned()));
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            non_zero(width)?,
            non_zero(height)?,
        );
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs)? };
        let current_context = not_current_context.make_current(&surface)?;
        let display = Display::from_context_surface(current_context, surface)?;

        log::info!("OpenGL {} on {}", display.get_opengl_version_string(), display.get_opengl_renderer_string());

        State::from_display_window(display, window, options)
    }

    /// Wraps an existing display and window.
    pub fn from_display_window(
        display: Display<WindowSurface>,
        window: Window,
        options: &ChapterOptions,
    ) -> Result<Self> {
        let context = T::new(&display, options)?;
        let mut state = State {
            display,
            window,
            context,
            input: InputState::default(),
            mouse_look: MouseLook::new(),
            clock: FrameClock::new(),
        };
        if T::CAPTURE_CURSOR {
            state.set_cursor_captured(true);
        }
        Ok(state)
    }

    /// Grabs and hides the cursor, or releases it.
    pub fn set_cursor_captured(&mut self, captured: bool) {
        let result = if captured {
            // not every platform can confine the cursor, some can only lock it
            self.window
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Locked))
        } else {
            self.window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(err) = result {
            log::warn!("could not change the cursor grab: {err}");
        }

        self.window.set_cursor_visible(!captured);
        self.input.cursor_captured = captured;
        self.mouse_look.reset();
        log::debug!("cursor {}", if captured { "captured" } else { "released" });
    }

    fn redraw(&mut self) -> Result<()> {
        let time = self.clock.tick();
        self.context.update(&time, &self.input);
        self.context.draw_frame(&self.display)
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.display.resize(size.into());
        if size.width > 0 && size.height > 0 {
            self.context.resized(size.width, size.height);
        }
    }

    fn mouse_motion(&mut self, (dx, dy): (f64, f64)) {
        if !self.input.cursor_captured {
            return;
        }
        if let Some((xoffset, yoffset)) = self.mouse_look.motion(dx, dy) {
            self.context.mouse_moved(xoffset, yoffset);
        }
    }

    /// Returns `true` when the chapter should close.
    fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> bool {
        match event {
            WindowEvent::KeyboardInput { input, .. } => match self.input.keys.process(input) {
                Some(VirtualKeyCode::Escape) => return true,
                Some(VirtualKeyCode::F1) => self.set_cursor_captured(!self.input.cursor_captured),
                Some(key) => self.context.key_pressed(key),
                None => (),
            },
            WindowEvent::Focused(false) => self.input.keys.clear(),
            _ => (),
        }

        self.context.handle_window_event(event, &self.window);
        false
    }

    /// Runs the chapter until its window is closed.
    pub fn run_loop(options: ChapterOptions) -> ! {
        let event_loop = EventLoopBuilder::new().build();
        let mut state: Option<State<T>> = None;

        event_loop.run(move |event, window_target, control_flow| {
            match event {
                // Resumed is also delivered once at startup on desktop platforms.
                Event::Resumed => match State::new(window_target, &options) {
                    Ok(new_state) => state = Some(new_state),
                    Err(err) => {
                        log::error!("{err}");
                        control_flow.set_exit_with_code(1);
                    }
                },
                Event::Suspended => state = None,
                Event::RedrawRequested(_) => {
                    if let Some(state) = &mut state {
                        if let Err(err) = state.redraw() {
                            log::error!("{err}");
                            control_flow.set_exit_with_code(1);
                        }
                    }
                }
                // continuous rendering
                Event::RedrawEventsCleared => {
                    if let Some(state) = &state {
                        state.window.request_redraw();
                    }
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    WindowEvent::Resized(new_size) => {
                        if let Some(state) = &mut state {
                            state.resize(new_size);
                        }
                    }
                    ev => {
                        if let Some(state) = &mut state {
                            if state.handle_window_event(&ev) {
                                control_flow.set_exit();
                            }
                        }
                    }
                },
                Event::DeviceEvent { event: DeviceEvent::MouseMotion { delta }, .. } => {
                    if let Some(state) = &mut state {
                        state.mouse_motion(delta);
                    }
                }
                _ => (),
            };
        })
    }
}

/// Draws one frame with `draw` and presents it.
///
/// The frame is finished even when `draw` fails, glium does not allow dropping it otherwise.
pub fn render_frame<F>(display: &Display<WindowSurface>, draw: F) -> Result<()>
where
    F: FnOnce(&mut Frame) -> Result<()>,
{
    let mut frame = display.draw();
    let result = draw(&mut frame);
    frame.finish()?;
    result
}

/// Parses the command line, installs the logger and runs `T`.
pub fn launch<T: ApplicationContext + 'static>() -> ! {
    let options = ChapterOptions::parse();
    init_logging(options.log.as_deref());
    log::info!("{}", T::WINDOW_TITLE);
    log::info!("Escape closes the window, F1 toggles mouse look");
    State::<T>::run_loop(options)
}
