// src/app.rs

use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

use sierpinski_gasket::config::GasketConfig;
use sierpinski_gasket::generator::PointSequence;

use crate::rendering_lib::{PointRenderer, WGSL_SHADER_SOURCE};

/// Everything needed to draw the gasket, returned by setup and handed to
/// `render` explicitly.
pub struct GasketApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: PointRenderer,
    clear_color: wgpu::Color,
}

impl GasketApp {
    pub async fn new(
        window: Arc<Window>,
        gasket: &GasketConfig,
        points: &PointSequence,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .context("failed to create surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible adapter")?;

        let required_limits = if cfg!(target_arch = "wasm32") {
            wgpu::Limits::downlevel_webgl2_defaults()
        } else {
            wgpu::Limits::default()
        };
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: required_limits.using_resolution(adapter.limits()),
                    label: None,
                },
                None,
            )
            .await
            .context("failed to request device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats.iter().copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reported no supported formats")?;
        let alpha_mode = surface_caps.alpha_modes.first().copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("surface configured: {}x{} {:?}", config.width, config.height, config.format);

        let renderer = PointRenderer::new(
            &device, config.format, WGSL_SHADER_SOURCE,
            points, gasket.point_color,
        );

        Ok(Self {
            surface, device, queue, config, size, renderer,
            clear_color: gasket.clear_color_wgpu(),
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> { self.size }

    /// Keeps the swapchain matching the window; the point data is untouched.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        self.renderer.render(&mut encoder, &view, self.clear_color);

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        log::trace!("presented {} points", self.renderer.point_count());
        Ok(())
    }
}
