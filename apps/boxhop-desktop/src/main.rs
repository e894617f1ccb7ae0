use anyhow::Result;
use boxhop_input::{Action, InputState};
use boxhop_kernel::{Session, SimConfig};
use boxhop_render::RenderView;
use boxhop_render_wgpu::{OrthoCamera, QuadRenderer};
use boxhop_tools::WorldInspector;
use clap::Parser;
use egui::Context as EguiContext;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "boxhop-desktop", about = "Boxhop desktop application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Record the player position trace (shown in the inspector)
    #[arg(long)]
    trace: bool,
}

/// Application state: the simulation session plus frame-loop bookkeeping.
struct AppState {
    session: Session,
    sim_config: SimConfig,
    input: InputState,
    view: RenderView,
    show_inspector: bool,
    last_frame: Instant,
}

impl AppState {
    fn new(sim_config: SimConfig) -> Self {
        Self {
            session: Session::playground(sim_config),
            sim_config,
            input: InputState::new(),
            view: RenderView::default(),
            show_inspector: true,
            last_frame: Instant::now(),
        }
    }

    /// Advance the simulation by one frame's wall-clock delta (in ms; the
    /// substep driver bounds oversized deltas itself).
    fn update(&mut self, dt_ms: f32) {
        if self.input.take_reset() {
            self.reset();
        }
        let frame = self.input.take_frame();
        self.session.advance(dt_ms, frame);
    }

    fn reset(&mut self) {
        self.session = Session::playground(self.sim_config);
        tracing::info!("world reset");
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let action = match key {
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Action::MoveLeft),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Action::MoveRight),
            KeyCode::KeyW | KeyCode::Space => Some(Action::Jump),
            KeyCode::KeyX => Some(Action::Reset),
            _ => None,
        };
        if let Some(action) = action {
            self.input.apply(action, pressed);
        }

        if pressed && key == KeyCode::F1 {
            self.show_inspector = !self.show_inspector;
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_inspector {
            return;
        }

        let summary = WorldInspector::summary(self.session.world());

        egui::SidePanel::left("inspector")
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Boxhop");
                ui.separator();
                ui.label(format!("Tick: {}", summary.tick));
                ui.label(format!("Sim time: {:.1} ms", summary.sim_time_ms));
                ui.label(format!(
                    "Pos: ({:.2}, {:.2})",
                    summary.player_pos[0], summary.player_pos[1]
                ));
                ui.label(format!(
                    "Vel: ({:.4}, {:.4})",
                    summary.player_vel[0], summary.player_vel[1]
                ));
                ui.label(format!("On ground: {}", summary.on_ground));
                ui.label(format!("Solids: {}", summary.solid_count));
                if summary.trace_len > 0 {
                    ui.label(format!("Trace points: {}", summary.trace_len));
                }
                ui.separator();
                if ui.button("Reset (X)").clicked() {
                    self.reset();
                }
                ui.separator();
                ui.small("A/D: Move | W/Space: Jump | F1: Toggle panel");
            });
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<QuadRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(sim_config: SimConfig) -> Self {
        Self {
            state: AppState::new(sim_config),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }

    fn aspect(&self) -> f32 {
        self.config
            .as_ref()
            .map(|c| c.width as f32 / c.height.max(1) as f32)
            .unwrap_or(4.0 / 3.0)
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Boxhop")
            .with_inner_size(PhysicalSize::new(1024u32, 768));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("boxhop_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = QuadRenderer::new(&device, surface_format);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        // Frame deltas start from the first presented frame, not app launch.
        self.state.last_frame = Instant::now();

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                // Key repeat would re-queue the jump edge every repeat tick.
                if !repeat {
                    self.state
                        .handle_key(key, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                // Delta in ms, the simulation's native unit. Capped so a
                // debugger pause does not turn into a huge substep batch.
                let dt_ms = ((now - self.state.last_frame).as_secs_f32() * 1000.0).min(100.0);
                self.state.last_frame = now;
                self.state.update(dt_ms);

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let camera = OrthoCamera::from_view(&self.state.view, self.aspect());
                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &view, &camera, self.state.session.world());
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("boxhop-desktop starting");

    let sim_config = SimConfig {
        trace: cli.trace,
        ..SimConfig::default()
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(sim_config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
