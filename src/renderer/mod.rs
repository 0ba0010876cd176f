//! WebGPU rendering module
//!
//! Draws the pixel trail as one fullscreen triangle. The CPU resolves the
//! trail into a small intensity grid; the fragment shader only looks it up.

pub mod trail_pipeline;

pub use trail_pipeline::TrailRenderState;

use crate::fx::Rgb;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// sRGB channel to linear light, for colors written to an sRGB surface
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Shader color for `rgb` on a surface of `format`. An sRGB target encodes
/// on write, so it gets linear values; a plain unorm target takes the sRGB
/// bytes as they are.
pub fn surface_color(rgb: Rgb, format: wgpu::TextureFormat) -> [f32; 4] {
    let [r, g, b] = rgb.to_f32();
    if format.is_srgb() {
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0]
    } else {
        [r, g, b, 1.0]
    }
}

/// Canvas backing size for a CSS size at the given device pixel ratio
pub fn backing_size(client_w: f64, client_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() {
        dpr.clamp(crate::consts::MIN_DPR, crate::consts::MAX_DPR)
    } else {
        crate::consts::MIN_DPR
    };
    let w = (client_w.max(0.0) * dpr).round() as u32;
    let h = (client_h.max(0.0) * dpr).round() as u32;
    (w.max(1), h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((srgb_to_linear(0.5) - 0.214).abs() < 1e-3);
    }

    #[test]
    fn test_surface_color_follows_format() {
        let trail = Rgb::from_hex("#29ff7b").unwrap();
        let plain = surface_color(trail, wgpu::TextureFormat::Bgra8Unorm);
        assert!((plain[0] - 0x29 as f32 / 255.0).abs() < 1e-6);
        assert!((plain[2] - 0x7b as f32 / 255.0).abs() < 1e-6);
        assert_eq!(plain[3], 1.0);

        let srgb = surface_color(trail, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert!((srgb[0] - srgb_to_linear(0x29 as f32 / 255.0)).abs() < 1e-6);
        assert!(srgb[0] < plain[0]);
        assert_eq!(srgb[1], 1.0);
    }

    #[test]
    fn test_backing_size_clamps_dpr() {
        assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
        assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
        assert_eq!(backing_size(800.0, 600.0, 0.5), (800, 600));
        assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
        assert_eq!(backing_size(100.0, 100.0, f64::NAN), (100, 100));
    }
}
