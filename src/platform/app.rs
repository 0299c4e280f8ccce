//! Window and frame loop
//!
//! [`run`] drives a [`Demo`] with winit's `ApplicationHandler`: the window
//! and GPU are created on `resumed`, then every redraw polls input, updates
//! the demo with the clamped frame time, draws and presents.

use std::sync::Arc;
use std::time::Instant;

use glam::Mat4;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::input::KeyInput;
use crate::consts::{BACKGROUND, MAX_FRAME_DT};
use crate::error::AppError;
use crate::playfield_projection;
use crate::renderer::{DrawList, RenderState};

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One self-contained game program
pub trait Demo {
    fn title(&self) -> &str;

    /// Logical window size in pixels
    fn window_size(&self) -> (u32, u32);

    fn clear_color(&self) -> [f64; 4] {
        BACKGROUND
    }

    /// Upload textures once the renderer exists
    fn load(&mut self, renderer: &mut RenderState) -> Result<(), AppError>;

    fn update(&mut self, input: &KeyInput, dt: f32) -> Flow;

    fn view_proj(&self) -> Mat4 {
        playfield_projection()
    }

    fn draw(&self, list: &mut DrawList);
}

struct DemoApp<D: Demo> {
    demo: D,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    input: KeyInput,
    draw_list: DrawList,
    last_frame: Option<Instant>,
    error: Option<AppError>,
}

impl<D: Demo> DemoApp<D> {
    fn new(demo: D) -> Self {
        Self {
            demo,
            window: None,
            renderer: None,
            input: KeyInput::new(),
            draw_list: DrawList::new(),
            last_frame: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let (width, height) = self.demo.window_size();
        let attrs = Window::default_attributes()
            .with_title(self.demo.title())
            .with_inner_size(LogicalSize::new(width as f64, height as f64));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let mut renderer =
            pollster::block_on(RenderState::new(window.clone(), self.demo.clear_color()))?;
        self.demo.load(&mut renderer)?;

        log::info!("{} started", self.demo.title());
        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn frame_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        dt.min(MAX_FRAME_DT)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.frame_dt();
        let flow = self.demo.update(&self.input, dt);
        self.input.end_frame();
        if flow == Flow::Exit {
            log::info!("{} finished", self.demo.title());
            event_loop.exit();
            return;
        }

        self.draw_list.clear();
        self.demo.draw(&mut self.draw_list);

        if let Some(renderer) = self.renderer.as_mut() {
            match renderer.render(self.demo.view_proj(), &self.draw_list) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory!");
                    event_loop.exit();
                    return;
                }
                Err(e) => {
                    log::warn!("Surface error: {:?}", e);
                }
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<D: Demo> ApplicationHandler for DemoApp<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if matches!(key_code, KeyCode::KeyQ | KeyCode::Escape) {
                                log::info!("Quit key pressed, exiting.");
                                event_loop.exit();
                                return;
                            }
                            self.input.press(key_code);
                        }
                        ElementState::Released => self.input.release(key_code),
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

/// Open a window and run `demo` until it exits or the window closes
pub fn run<D: Demo>(demo: D) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(demo);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
