//! Pixel trail decay buffer
//!
//! A square buffer of "seconds since the pointer last touched this cell".
//! Pointer moves stamp discs of age 0, `advance` ages everything, and
//! `render` resamples the buffer into the coarse pixel grid the GPU draws.
//!
//! Coordinates are normalized trail UVs with (0, 0) at the top-left. Use
//! [`cover_uv`] to map a screen UV into trail space.

use glam::Vec2;

use super::easing::Ease;
use crate::consts::{TRAIL_INTERPOLATE, TRAIL_MAX_AGE, TRAIL_RADIUS, TRAIL_TEXTURE_SIZE};

/// Interpolated stamps per pointer move, upper bound
const MAX_INTERPOLATED_STAMPS: usize = 256;
/// Goo alpha threshold: `a' = GOO_GAIN * a + GOO_BIAS`
const GOO_GAIN: f32 = 19.0;
const GOO_BIAS: f32 = -9.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailConfig {
    /// Buffer side length in cells
    pub size: usize,
    /// Stamp radius as a fraction of `size`
    pub radius: f32,
    /// Seconds until a visited cell fades out completely
    pub max_age: f32,
    /// Stamp density between consecutive pointer samples
    pub interpolate: f32,
    pub ease: Ease,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            size: TRAIL_TEXTURE_SIZE,
            radius: TRAIL_RADIUS,
            max_age: TRAIL_MAX_AGE,
            interpolate: TRAIL_INTERPOLATE,
            ease: Ease::Linear,
        }
    }
}

/// Map a screen UV to the square trail space so the grid is never stretched
pub fn cover_uv(uv: Vec2, resolution: Vec2) -> Vec2 {
    let longest = resolution.max_element();
    if !(longest > 0.0) {
        return uv;
    }
    ((uv - 0.5) * (resolution / longest) + 0.5).clamp(Vec2::ZERO, Vec2::ONE)
}

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    config: TrailConfig,
    ages: Vec<f32>,
    last: Option<Vec2>,
}

impl TrailBuffer {
    pub fn new(config: TrailConfig) -> Self {
        let size = config.size.max(1);
        let config = TrailConfig {
            size,
            max_age: config.max_age.max(f32::EPSILON),
            ..config
        };
        Self {
            ages: vec![config.max_age; size * size],
            config,
            last: None,
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Stamp radius in cells
    fn radius_cells(&self) -> f32 {
        (self.config.radius * self.config.size as f32).max(0.5)
    }

    /// Reset every cell within the stamp radius of `uv` to age 0
    pub fn stamp(&mut self, uv: Vec2) {
        if !uv.is_finite() {
            return;
        }
        let size = self.config.size;
        let r = self.radius_cells();
        let center = uv * size as f32;

        let lo = (center - r).floor().max(Vec2::ZERO);
        let hi = (center + r).ceil().min(Vec2::splat(size as f32));
        let (x0, y0) = (lo.x as usize, lo.y as usize);
        let (x1, y1) = (hi.x as usize, hi.y as usize);

        for y in y0..y1 {
            for x in x0..x1 {
                let cell = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if cell.distance_squared(center) <= r * r {
                    self.ages[y * size + x] = 0.0;
                }
            }
        }
    }

    /// Record a pointer sample, filling the gap from the previous one
    pub fn pointer_move(&mut self, uv: Vec2) {
        if !uv.is_finite() {
            return;
        }
        match self.last {
            Some(prev) => {
                let spacing = self.config.radius * 0.5 / self.config.interpolate.max(f32::EPSILON);
                let distance = prev.distance(uv);
                let steps = if spacing > 0.0 {
                    ((distance / spacing).ceil() as usize).clamp(1, MAX_INTERPOLATED_STAMPS)
                } else {
                    1
                };
                for i in 1..=steps {
                    self.stamp(prev.lerp(uv, i as f32 / steps as f32));
                }
            }
            None => self.stamp(uv),
        }
        self.last = Some(uv);
    }

    /// Pointer left the canvas; the next move starts a fresh stroke
    pub fn pointer_leave(&mut self) {
        self.last = None;
    }

    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let max_age = self.config.max_age;
        for age in &mut self.ages {
            *age = (*age + dt).min(max_age);
        }
    }

    pub fn age_at(&self, x: usize, y: usize) -> Option<f32> {
        let size = self.config.size;
        (x < size && y < size).then(|| self.ages[y * size + x])
    }

    fn intensity_of(&self, age: f32) -> f32 {
        if age >= self.config.max_age {
            return 0.0;
        }
        crate::saturate(self.config.ease.apply(1.0 - age / self.config.max_age))
    }

    pub fn intensity_at(&self, x: usize, y: usize) -> f32 {
        self.age_at(x, y).map_or(0.0, |age| self.intensity_of(age))
    }

    /// True when every cell has faded out
    pub fn is_idle(&self) -> bool {
        self.ages.iter().all(|&a| a >= self.config.max_age)
    }

    /// Resample into a `grid × grid` intensity grid at cell centers
    pub fn render(&self, grid: usize) -> TrailGrid {
        let grid = grid.max(1);
        let size = self.config.size;
        let scale = size as f32 / grid as f32;
        let mut cells = Vec::with_capacity(grid * grid);
        for gy in 0..grid {
            let by = (((gy as f32 + 0.5) * scale) as usize).min(size - 1);
            for gx in 0..grid {
                let bx = (((gx as f32 + 0.5) * scale) as usize).min(size - 1);
                cells.push(self.intensity_of(self.ages[by * size + bx]));
            }
        }
        TrailGrid { size: grid, cells }
    }
}

/// Blur radius in grid cells for a goo strength given in screen pixels
pub fn goo_radius_cells(strength_px: f32, cell_px: f32) -> usize {
    if !(strength_px > 0.0) || !(cell_px > 0.0) {
        return 0;
    }
    (strength_px / cell_px).ceil() as usize
}

/// Square grid of intensities in [0, 1], row-major from the top-left
#[derive(Debug, Clone, PartialEq)]
pub struct TrailGrid {
    pub size: usize,
    pub cells: Vec<f32>,
}

impl TrailGrid {
    pub fn get(&self, x: usize, y: usize) -> f32 {
        if x < self.size && y < self.size {
            self.cells[y * self.size + x]
        } else {
            0.0
        }
    }

    /// Gooey merge: box blur of `radius` cells then a steep alpha threshold,
    /// so nearby blobs fuse and faint fringes disappear.
    pub fn goo(&self, radius: usize) -> TrailGrid {
        let blurred = if radius == 0 {
            self.cells.clone()
        } else {
            let horizontal = box_blur(&self.cells, self.size, radius, true);
            box_blur(&horizontal, self.size, radius, false)
        };
        TrailGrid {
            size: self.size,
            cells: blurred
                .into_iter()
                .map(|a| crate::saturate(GOO_GAIN * a + GOO_BIAS))
                .collect(),
        }
    }

    /// One byte per cell for an R8 texture upload
    pub fn to_texture_data(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|&v| (crate::saturate(v) * 255.0).round() as u8)
            .collect()
    }
}

/// Separable box blur pass. Edges are treated as transparent.
fn box_blur(src: &[f32], size: usize, radius: usize, horizontal: bool) -> Vec<f32> {
    let window = (2 * radius + 1) as f32;
    let mut out = vec![0.0; src.len()];
    for line in 0..size {
        let at = |i: usize| {
            if horizontal {
                line * size + i
            } else {
                i * size + line
            }
        };
        let mut sum: f32 = (0..=radius.min(size - 1)).map(|i| src[at(i)]).sum();
        for i in 0..size {
            out[at(i)] = sum / window;
            let enter = i + radius + 1;
            if enter < size {
                sum += src[at(enter)];
            }
            if i >= radius {
                sum -= src[at(i - radius)];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small() -> TrailBuffer {
        TrailBuffer::new(TrailConfig {
            size: 64,
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_cold() {
        let t = small();
        assert!(t.is_idle());
        assert_eq!(t.intensity_at(10, 10), 0.0);
        assert!(t.render(16).cells.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_stamp_marks_disc() {
        let mut t = small();
        t.stamp(Vec2::splat(0.5));
        assert_eq!(t.intensity_at(32, 32), 1.0);
        // radius is 0.1 * 64 = 6.4 cells
        assert_eq!(t.intensity_at(32 + 5, 32), 1.0);
        assert_eq!(t.intensity_at(32 + 8, 32), 0.0);
        assert_eq!(t.intensity_at(0, 0), 0.0);
    }

    #[test]
    fn test_stamp_at_edge_stays_in_bounds() {
        let mut t = small();
        t.stamp(Vec2::new(0.0, 1.0));
        assert_eq!(t.intensity_at(0, 63), 1.0);
        t.stamp(Vec2::new(-3.0, 9.0));
        t.stamp(Vec2::new(f32::NAN, 0.5));
    }

    #[test]
    fn test_decay_is_linear_then_zero() {
        let mut t = small();
        t.stamp(Vec2::splat(0.5));
        t.advance(TRAIL_MAX_AGE / 2.0);
        assert!((t.intensity_at(32, 32) - 0.5).abs() < 1e-5);
        t.advance(TRAIL_MAX_AGE / 2.0);
        assert_eq!(t.intensity_at(32, 32), 0.0);
        assert!(t.is_idle());
    }

    #[test]
    fn test_interpolation_fills_gap() {
        let mut t = small();
        t.pointer_move(Vec2::new(0.1, 0.5));
        t.pointer_move(Vec2::new(0.9, 0.5));
        for x in (6..58).step_by(4) {
            assert_eq!(t.intensity_at(x, 32), 1.0, "gap at x={}", x);
        }
    }

    #[test]
    fn test_leave_breaks_stroke() {
        let mut t = small();
        t.pointer_move(Vec2::new(0.1, 0.5));
        t.pointer_leave();
        t.pointer_move(Vec2::new(0.9, 0.5));
        assert_eq!(t.intensity_at(32, 32), 0.0);
    }

    #[test]
    fn test_render_grid_samples_centers() {
        let mut t = small();
        t.stamp(Vec2::splat(0.5));
        let grid = t.render(8);
        assert_eq!(grid.size, 8);
        assert_eq!(grid.cells.len(), 64);
        assert_eq!(grid.get(4, 4), 1.0);
        assert_eq!(grid.get(0, 0), 0.0);
        assert_eq!(grid.get(99, 0), 0.0);
    }

    #[test]
    fn test_cover_uv_keeps_square() {
        let res = Vec2::new(1600.0, 800.0);
        assert_eq!(cover_uv(Vec2::splat(0.5), res), Vec2::splat(0.5));
        let top_left = cover_uv(Vec2::ZERO, res);
        assert_eq!(top_left, Vec2::new(0.0, 0.25));
        // a square on screen maps to a square in trail space
        let a = cover_uv(Vec2::new(0.25, 0.25), res);
        let b = cover_uv(Vec2::new(0.5, 0.75), res);
        let d = b - a;
        assert!((d.x - d.y).abs() < 1e-6);
        assert_eq!(cover_uv(Vec2::new(0.3, 0.6), Vec2::ZERO), Vec2::new(0.3, 0.6));
    }

    #[test]
    fn test_goo_drops_faint_pixels() {
        let mut cells = vec![0.0; 100];
        cells[0] = 0.3;
        for y in 4..9 {
            for x in 4..9 {
                cells[y * 10 + x] = 1.0;
            }
        }
        let grid = TrailGrid { size: 10, cells };
        let goo = grid.goo(0);
        assert_eq!(goo.get(0, 0), 0.0);
        assert_eq!(goo.get(6, 6), 1.0);

        let blurred = grid.goo(1);
        assert_eq!(blurred.get(0, 0), 0.0);
        assert_eq!(blurred.get(6, 6), 1.0);
        // corner of the block rounds off
        assert_eq!(blurred.get(4, 4), 0.0);
    }

    #[test]
    fn test_box_blur_preserves_flat_interior() {
        let src = vec![1.0; 25];
        let out = box_blur(&src, 5, 1, true);
        assert!((out[2 * 5 + 2] - 1.0).abs() < 1e-6);
        assert!((out[2 * 5] - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_texture_bytes() {
        let grid = TrailGrid {
            size: 2,
            cells: vec![0.0, 0.5, 1.0, 2.0],
        };
        assert_eq!(grid.to_texture_data(), vec![0, 128, 255, 255]);
    }

    #[test]
    fn test_goo_radius_cells() {
        assert_eq!(goo_radius_cells(5.0, 19.2), 1);
        assert_eq!(goo_radius_cells(5.0, 2.0), 3);
        assert_eq!(goo_radius_cells(0.0, 2.0), 0);
    }

    proptest! {
        #[test]
        fn prop_unvisited_cells_decay_monotonically(
            steps in proptest::collection::vec(0.0f32..0.1, 1..40),
        ) {
            let mut t = small();
            t.stamp(Vec2::new(0.3, 0.7));
            let (x, y) = (19, 44);
            let mut prev = t.intensity_at(x, y);
            let mut total = 0.0;
            for dt in steps {
                t.advance(dt);
                total += dt;
                let now = t.intensity_at(x, y);
                prop_assert!(now <= prev);
                if total >= TRAIL_MAX_AGE {
                    prop_assert_eq!(now, 0.0);
                }
                prev = now;
            }
        }
    }
}
