//! Classic Pong entry point
//!
//! Opens the window, then runs one input/step/draw pass per event-loop
//! iteration until the window closes or Escape is pressed.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use classic_pong::input::{InputMapper, KeyState};
use classic_pong::platform::{FrameClock, map_key_code};
use classic_pong::renderer::RenderState;
use classic_pong::sim::{FixedStep, GameEvent, GameState};
use classic_pong::{Settings, Tuning};

/// Window plus the GPU state bound to it
struct Graphics {
    window: Arc<Window>,
    render_state: RenderState,
}

struct App {
    settings: Settings,
    state: GameState,
    keys: KeyState,
    mapper: InputMapper,
    clock: FrameClock,
    stepper: FixedStep,
    graphics: Option<Graphics>,
    /// Fatal error that stopped the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let state = GameState::new(
            settings.width as f32,
            settings.height as f32,
            Tuning::default(),
        );

        Self {
            settings,
            state,
            keys: KeyState::new(),
            mapper: InputMapper::new(),
            clock: FrameClock::new(),
            stepper: FixedStep::default(),
            graphics: None,
            error: None,
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Graphics> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.settings))?;

        log::info!(
            "Window created: {}x{}",
            render_state.size.0,
            render_state.size.1
        );

        Ok(Graphics {
            window,
            render_state,
        })
    }

    /// Adopt the surface size granted by the window system
    ///
    /// Returns the opening score line.
    fn start(&mut self, width: u32, height: u32) -> String {
        // Startup may have taken a while; do not feed it to the first step
        self.clock = FrameClock::new();
        self.viewport_changed(width, height);
        self.state.score.to_string()
    }

    /// Keep the arena and the projection on the same viewport
    fn viewport_changed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(graphics) = self.graphics.as_mut() {
            graphics.render_state.resize(width, height);
        }
        self.state.resize(width as f32, height as f32);
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.error = Some(error);
        event_loop.exit();
    }

    /// One frame: input, step, score output, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();

        let mapped = self.mapper.map(&self.keys, &self.state);
        if mapped.quit {
            log::info!("Escape pressed, exiting.");
            event_loop.exit();
            return;
        }

        if let Err(e) = self.stepper.advance(&mut self.state, &mapped.tick, dt) {
            self.fail(event_loop, anyhow::Error::new(e).context("Simulation step failed"));
            return;
        }

        if self.settings.print_scores {
            for event in &self.state.events {
                if let GameEvent::Scored { score, .. } = event {
                    println!("{}", score);
                }
            }
        }

        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };
        match graphics.render_state.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => graphics.render_state.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Out of GPU memory"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(graphics) => {
                let (width, height) = graphics.render_state.size;
                let opening = self.start(width, height);
                println!("{}", opening);
                self.graphics = Some(graphics);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.viewport_changed(size.width, size.height),

            WindowEvent::Focused(false) => self.keys.clear(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key_code(code) {
                        match event.state {
                            ElementState::Pressed => self.keys.press(key),
                            ElementState::Released => self.keys.release(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}

fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);

    event_loop.run_app(&mut app).context("Event loop error")?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Hello, Atari!");
    log::info!("Classic Pong starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
