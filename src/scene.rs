//! Scene composition and the windowed run loop.
//!
//! [`Scene`] is a builder: configure the shard pool, pointer smoothing, the
//! scroll range, and the style, then call [`Scene::run`]. Each redraw takes
//! one snapshot of time, pointer, and scroll, feeds it through the three
//! animators, uploads their output, and draws the composited frame through
//! the post chain.
//!
//! # Example
//!
//! ```ignore
//! use shards::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     Scene::new()
//!         .with_assembly(AssemblyConfig { count: 2000, ..Default::default() })
//!         .with_pages(3)
//!         .run()
//! }
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::assembly::{AssemblyConfig, ShardPool};
use crate::error::SceneError;
use crate::gpu::{FrameData, GpuState};
use crate::input::PointerTracker;
use crate::parallax::{ParallaxRig, Smoothing};
use crate::scroll::{FlipTransform, ScrollTracker};
use crate::shader::ShardInstance;
use crate::style::Style;
use crate::time::FrameClock;

/// A composed scene, configured with method chaining and started with
/// [`Scene::run`].
pub struct Scene {
    assembly: AssemblyConfig,
    smoothing: Smoothing,
    pages: u32,
    scroll_damping: f32,
    style: Style,
    title: String,
}

impl Scene {
    /// Create a scene with default settings.
    pub fn new() -> Self {
        Self {
            assembly: AssemblyConfig::default(),
            smoothing: Smoothing::default(),
            pages: 3,
            scroll_damping: 6.0,
            style: Style::default(),
            title: "Shards".to_string(),
        }
    }

    /// Configure the shard pool.
    pub fn with_assembly(mut self, assembly: AssemblyConfig) -> Self {
        self.assembly = assembly;
        self
    }

    /// Configure how the group rotation chases the pointer.
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Number of virtual scroll pages (default 3).
    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = pages;
        self
    }

    /// Damping rate for the published scroll offset.
    pub fn with_scroll_damping(mut self, damping: f32) -> Self {
        self.scroll_damping = damping;
        self
    }

    /// Visual style: background, panels, post chain.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and run the scene. Blocks until the window closes.
    pub fn run(self) -> Result<(), SceneError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    scene: Scene,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    clock: FrameClock,
    pool: ShardPool,
    rig: ParallaxRig,
    pointer: PointerTracker,
    scroll: ScrollTracker,
    failure: Option<SceneError>,
}

impl App {
    fn new(scene: Scene) -> Self {
        let pool = ShardPool::new(&scene.assembly);
        let rig = ParallaxRig::new(scene.smoothing);
        let mut scroll = ScrollTracker::new(scene.pages);
        scroll.set_damping(scene.scroll_damping);

        Self {
            scene,
            window: None,
            gpu: None,
            clock: FrameClock::new(),
            pool,
            rig,
            pointer: PointerTracker::new(),
            scroll,
            failure: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = &mut self.gpu else { return };

        // One snapshot of time and input; every animator output below is a
        // function of these values alone.
        let (elapsed, delta) = self.clock.update();
        let pointer = self.pointer.ndc();
        self.scroll.advance(delta);
        let offset = self.scroll.offset();

        self.rig.advance(pointer, delta);
        let flip = FlipTransform::at(offset);
        let panels = panel_instances(&self.scene.style, flip);
        let shards = self.pool.sample(elapsed);

        let frame = FrameData {
            shards,
            panels,
            group: self.rig.matrix(),
            time: elapsed,
            delta_time: delta,
        };

        match gpu.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                width: gpu.config.width,
                height: gpu.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.scene.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.failure = Some(SceneError::Window(e));
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());
        self.pointer.set_window_size(window.inner_size());

        match pollster::block_on(GpuState::new(
            window,
            self.pool.len() as u32,
            &self.scene.style,
        )) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                // The assembly starts when the scene is mounted, not when the
                // process did.
                self.clock.reset();
            }
            Err(e) => {
                self.failure = Some(SceneError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.pointer.set_window_size(physical_size);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            event => self.pointer.handle_event(&event, &mut self.scroll),
        }
    }
}

/// Build the two panel instances for this frame's flip transform.
fn panel_instances(style: &Style, flip: FlipTransform) -> [ShardInstance; 2] {
    style.panels.map(|panel| ShardInstance {
        position: [panel.offset.x, panel.offset.y, flip.position_z],
        scale: 1.0,
        rotation: [0.0, flip.rotation_y, 0.0],
        half_size: panel.half_size,
        color: panel.color.to_array(),
        _pad: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};
    use std::f32::consts::PI;

    #[test]
    fn test_panel_instances_follow_scroll() {
        let style = Style::default();

        let top = panel_instances(&style, FlipTransform::at(0.0));
        assert_eq!(top[0].position[2], -2.0);
        assert_eq!(top[0].rotation[1], 0.0);

        let quarter = panel_instances(&style, FlipTransform::at(0.25));
        assert!((quarter[0].rotation[1] - PI).abs() < 1e-6);
        assert!((quarter[1].position[2] - (-1.5)).abs() < 1e-6);
    }

    #[test]
    fn test_panel_instances_keep_style() {
        let mut style = Style::default();
        style.panels[0].offset = Vec2::new(-2.0, 0.5);
        style.panels[0].color = Vec3::new(1.0, 0.0, 0.0);

        let panels = panel_instances(&style, FlipTransform::at(0.5));
        assert_eq!(panels[0].position[0], -2.0);
        assert_eq!(panels[0].position[1], 0.5);
        assert_eq!(panels[0].color, [1.0, 0.0, 0.0]);
    }
}
