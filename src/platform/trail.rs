//! Pixel trail canvas
//!
//! Owns the decay buffer and the GPU pipeline drawing it. Pointer samples
//! arrive in viewport pixels and are mapped into trail space here.

use glam::Vec2;
use web_sys::{Document, HtmlCanvasElement};

use super::{PlatformError, element_by_id, window};
use crate::fx::{TrailBuffer, cover_uv, goo_radius_cells};
use crate::renderer::{TrailRenderState, backing_size};
use crate::settings::Settings;

pub const TRAIL_CANVAS_ID: &str = "pixel-trail";

pub struct TrailView {
    canvas: HtmlCanvasElement,
    buffer: TrailBuffer,
    renderer: TrailRenderState,
    grid_size: usize,
    goo_strength: Option<f32>,
    /// Redraw pending; stays set one frame past idle so the canvas clears
    needs_draw: bool,
}

impl TrailView {
    pub async fn new(document: &Document, settings: &Settings) -> Result<Self, PlatformError> {
        let canvas: HtmlCanvasElement =
            element_by_id(document, TRAIL_CANVAS_ID, "HtmlCanvasElement")?;
        let (width, height) = Self::measure(&canvas)?;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| PlatformError::Gpu(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| PlatformError::Gpu(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = TrailRenderState::new(
            surface,
            &adapter,
            width,
            height,
            settings.grid_size,
            settings.trail_color,
        )
        .await?;

        Ok(Self {
            canvas,
            buffer: TrailBuffer::new(settings.trail_config()),
            renderer,
            grid_size: settings.grid_size.max(1),
            goo_strength: settings.goo_enabled.then_some(settings.goo_strength),
            needs_draw: true,
        })
    }

    fn measure(canvas: &HtmlCanvasElement) -> Result<(u32, u32), PlatformError> {
        let dpr = window()?.device_pixel_ratio();
        Ok(backing_size(
            canvas.client_width() as f64,
            canvas.client_height() as f64,
            dpr,
        ))
    }

    /// Re-derive the backing size after a window resize
    pub fn resize(&mut self) {
        if let Ok((w, h)) = Self::measure(&self.canvas) {
            if (w, h) != self.renderer.size {
                self.canvas.set_width(w);
                self.canvas.set_height(h);
                self.renderer.resize(w, h);
                self.needs_draw = true;
            }
        }
    }

    fn client_size(&self) -> Vec2 {
        Vec2::new(
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        )
    }

    pub fn pointer_move(&mut self, client: Vec2) {
        let rect = self.canvas.get_bounding_client_rect();
        let size = self.client_size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let local = client - Vec2::new(rect.left() as f32, rect.top() as f32);
        let screen_uv = local / size;
        self.buffer.pointer_move(cover_uv(screen_uv, size));
        self.needs_draw = true;
    }

    pub fn pointer_leave(&mut self) {
        self.buffer.pointer_leave();
    }

    pub fn frame(&mut self, dt: f32) {
        let was_idle = self.buffer.is_idle();
        self.buffer.advance(dt);
        if !was_idle {
            self.needs_draw = true;
        }
        if !self.needs_draw {
            return;
        }

        let mut grid = self.buffer.render(self.grid_size);
        if let Some(strength) = self.goo_strength {
            let size = self.client_size();
            let cell_px = size.max_element() / self.grid_size as f32;
            let radius = goo_radius_cells(strength, cell_px);
            if radius > 0 {
                grid = grid.goo(radius);
            }
        }

        match self.renderer.render(&grid) {
            Ok(()) => self.needs_draw = !self.buffer.is_idle(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.renderer.size;
                self.renderer.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}
