//! Driftland - scrolling procedural noise terrain
//!
//! A layered-noise height field drifts across a lit grid; keyboard controls
//! edit the noise parameters live.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use rand::rngs::ThreadRng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use driftland::camera::CameraRig;
use driftland::cli::Args;
use driftland::controls::{self, ControlAction};
use driftland::export::export_heightmap;
use driftland::params::{CameraConfig, RenderConfig, SceneParams};
use driftland::rendering::{RenderSystem, Uniforms};
use driftland::stats::FrameStats;
use driftland::terrain::TerrainSystem;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    terrain: TerrainSystem,
    camera: CameraRig,
    scene: SceneParams,
    rng: ThreadRng,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
    stats: FrameStats,
}

impl App {
    fn new(args: &Args) -> Self {
        let now = Instant::now();
        Self {
            window: None,
            render_system: None,
            terrain: TerrainSystem::new(&args.terrain_config(), args.noise_parameters()),
            camera: CameraRig::new(CameraConfig::default()),
            scene: args.scene_params(),
            rng: rand::thread_rng(),
            render_config: RenderConfig::default(),
            start_time: now,
            stats: FrameStats::new(now),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Driftland")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.render_config.window_width = size.width.max(1);
        self.render_config.window_height = size.height.max(1);

        let render_system =
            match pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.terrain.mesh)) {
                Ok(render_system) => render_system,
                Err(e) => {
                    error!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

        info!("Driftland is running");
        info!("Keys: R seed | T randomize | Up/Down octaves | Left/Right complexity");
        info!("      PgUp/PgDn amplitude | +/- scroll speed | [/] sun | C color | W wireframe | Esc quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    event_loop.exit();
                } else if let Some(action) = ControlAction::from_key(key) {
                    controls::apply(action, &mut self.terrain, &mut self.scene, &mut self.rng);
                }
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.render_config.window_width = size.width;
                    self.render_config.window_height = size.height;
                }
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Tick the terrain and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let now = Instant::now();
        let elapsed_s = now.duration_since(self.start_time).as_secs_f64();

        // A failed tick keeps the previous frame's field on screen
        match self.terrain.tick(elapsed_s) {
            Ok(()) => render_system.update_vertices(self.terrain.mesh.vertices()),
            Err(e) => warn!("Terrain update skipped: {}", e),
        }

        let (view_proj, eye) = self.camera.view_proj(&self.render_config);
        render_system.update_uniforms(&Uniforms::new(view_proj, eye, &self.scene));

        match render_system.render(self.scene.wireframe) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }

        if let Some(fps) = self.stats.frame(now) {
            info!("FPS: {:.1}", fps);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(path) = &args.export_heightmap {
        export_heightmap(
            path,
            &args.terrain_config(),
            args.noise_parameters(),
            args.export_time,
        )?;
        return Ok(());
    }

    info!("Driftland - procedural noise terrain");
    info!(
        "Seed: {} | octaves: {} | amplitude: {} | complexity: {} | scroll speed: {}",
        args.seed, args.octaves, args.amplitude, args.complexity, args.scroll_speed
    );

    let mut app = App::new(&args);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
