mod camera;
mod error;
mod input;
mod logging;
mod mesh;
mod renderer;

use std::sync::Arc;

use anyhow::Context;
use game_core::{Clock, Config, EventSource, GameLoop, SystemClock};
use tracing::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use error::ClientError;
use input::Keyboard;
use renderer::resources::FrameBatch;
use renderer::Renderer;

struct App {
    game_loop: GameLoop,
    clock: SystemClock,
    keyboard: Keyboard,
    batch: FrameBatch,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    error: Option<ClientError>,
}

impl App {
    fn new(config: Config) -> Result<Self, ClientError> {
        Ok(Self {
            game_loop: GameLoop::new(config)?,
            clock: SystemClock::new(),
            keyboard: Keyboard::new(),
            batch: FrameBatch::new(),
            window: None,
            renderer: None,
            error: None,
        })
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        let field = *self.game_loop.game().playfield();
        let attrs = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(LogicalSize::new(field.width, field.height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            (field.width, field.height),
        ))?;
        info!(width = renderer.size.0, height = renderer.size.1, "renderer ready");

        self.window = Some(window);
        self.renderer = Some(renderer);
        // Don't count startup time as game time
        self.clock = SystemClock::new();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ClientError) {
        error!(%err, "shutting down");
        self.error = Some(err);
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let polled = self.keyboard.poll();
        if polled.close_requested {
            event_loop.exit();
            return;
        }

        let elapsed = self.clock.elapsed();
        self.game_loop.advance(elapsed, &polled.input);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        self.batch.clear();
        self.game_loop.render(&mut self.batch);

        match renderer.draw(&self.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::Timeout) => warn!("surface timeout, skipping frame"),
            Err(e) => {
                let err = ClientError::from(e);
                self.fail(event_loop, err);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return; // Already initialized
        }
        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.keyboard.request_close();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.keyboard.handle_key(code, state),
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut app = App::new(Config::new()).context("failed to set up the match")?;

    let event_loop = EventLoop::new()
        .map_err(ClientError::from)
        .context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    info!("starting pong");
    event_loop
        .run_app(&mut app)
        .map_err(ClientError::from)
        .context("event loop terminated abnormally")?;

    if let Some(err) = app.error.take() {
        return Err(err).context("client stopped");
    }

    let board = app.game_loop.game().scoreboard();
    info!(left = board.left, right = board.right, "match closed");
    Ok(())
}
