use std::time::{Duration, Instant};

use log::{error, info};
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::controllers::startup::{StartupError, build_controller};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::key_bindings::{KeyAction, action_for_key};
use crate::presenters::pixels::presenter::PixelsPresenter;

const WINDOW_TITLE: &str = "Mandelbrot Explorer";
const TITLE_REFRESH: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window: {0}")]
    Window(#[from] OsError),
    #[error("could not create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
}

/// Opens a fixed-size window and renders continuously, applying navigation
/// between frames.
pub struct RunGuiCommand {
    config: MandelbrotConfig,
}

impl RunGuiCommand {
    pub fn new(config: MandelbrotConfig) -> Self {
        Self { config }
    }

    /// Blocks until the window is closed or a frame fails to present.
    pub fn execute(self) -> Result<(), GuiError> {
        let config = self.config;
        let mut controller = build_controller(&config)?;

        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(config.width, config.height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let mut presenter = PixelsPresenter::new(window, config.width, config.height)?;
        let mut last_title_update = Instant::now();

        info!(
            "Window open at {}x{}, colouring {}",
            config.width,
            config.height,
            controller.colour_map().kind()
        );

        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                logical_key,
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => match action_for_key(logical_key.as_ref()) {
                        Some(KeyAction::Quit) => elwt.exit(),
                        Some(KeyAction::Navigate(action)) => {
                            controller.handle(action.command(&config));
                        }
                        None => {}
                    },
                    WindowEvent::Resized(size) => {
                        if let Err(e) = presenter.resize_surface(size.width, size.height) {
                            error!("Resize error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::RedrawRequested => match controller.run_frame(&mut presenter) {
                        Ok(stats) => {
                            if last_title_update.elapsed() >= TITLE_REFRESH {
                                if let Some(fps) = stats.fps {
                                    window.set_title(&format!("{WINDOW_TITLE} - {fps:.1} fps"));
                                }
                                last_title_update = Instant::now();
                            }
                        }
                        Err(e) => {
                            error!("Render error: {e}");
                            elwt.exit();
                        }
                    },
                    _ => {}
                },
                Event::AboutToWait => window.request_redraw(),
                _ => {}
            }
        })?;

        Ok(())
    }
}
