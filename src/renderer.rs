//! Framebuffer rendering: the scalar field as a colour map with a sparse
//! grid of velocity arrows on top. Output is a `0x00RRGGBB` pixel buffer
//! sized for `minifb`.

use crate::grid::Grid;

/// Forge palette stops: charcoal -> ember -> orange -> amber -> white hot.
pub(crate) const FORGE_STOPS: [(f64, f64, f64); 5] = [
    (25.0, 22.0, 28.0),    // charcoal      (0.00)
    (140.0, 40.0, 30.0),   // ember red     (0.25)
    (230.0, 110.0, 30.0),  // orange        (0.50)
    (255.0, 190.0, 70.0),  // amber         (0.75)
    (255.0, 250.0, 235.0), // white hot     (1.00)
];

const ARROW_COLOR: u32 = 0x00d8e0e8;

/// Convert a [0.0, 1.0] value to a packed `0x00RRGGBB` pixel.
pub fn heat_to_rgb(t: f64) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = FORGE_STOPS[i];
    let (r1, g1, b1) = FORGE_STOPS[i + 1];

    let r = (r0 + s * (r1 - r0)) as u32;
    let g = (g0 + s * (g1 - g0)) as u32;
    let b = (b0 + s * (b1 - b0)) as u32;
    (r << 16) | (g << 8) | b
}

pub struct Renderer {
    width: usize,
    height: usize,
    scale_max: f64,
    ticks: usize,
    framebuf: Vec<u32>,
}

impl Renderer {
    pub fn new(width: usize, height: usize, scale_max: f64, ticks: usize) -> Self {
        assert!(width > 0 && height > 0, "frame must have positive size");
        assert!(scale_max > 0.0, "scale_max must be positive");
        Self {
            width,
            height,
            scale_max,
            ticks,
            framebuf: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Render one frame: scalar field as background, velocity arrows on
    /// top. Screen y runs downward, domain y upward, so rows are flipped.
    pub fn draw(&mut self, grid: &Grid, q: &[f64], u: &[f64], v: &[f64]) -> &[u32] {
        self.draw_scalar(grid, q);
        self.draw_arrows(grid, u, v);
        &self.framebuf
    }

    /// Nearest-cell mapping of the scalar onto the pixel grid.
    fn draw_scalar(&mut self, grid: &Grid, q: &[f64]) {
        let (nx, ny) = (grid.nx(), grid.ny());
        for py in 0..self.height {
            let j = ((self.height - 1 - py) * (ny + 1) / self.height).min(ny);
            for px in 0..self.width {
                let i = (px * (nx + 1) / self.width).min(nx);
                let t = q[grid.idx(i, j)] / self.scale_max;
                self.framebuf[py * self.width + px] = heat_to_rgb(t);
            }
        }
    }

    /// A `ticks x ticks` subsample of the velocity field, each sample drawn
    /// as a line segment from the cell centre along the local velocity.
    /// Arrows are normalized per frame so the fastest one spans about one
    /// tick spacing.
    fn draw_arrows(&mut self, grid: &Grid, u: &[f64], v: &[f64]) {
        if self.ticks < 2 {
            return;
        }
        let max_speed = u
            .iter()
            .zip(v.iter())
            .map(|(a, b)| (a * a + b * b).sqrt())
            .fold(0.0_f64, f64::max);
        if max_speed == 0.0 {
            return;
        }
        let tick_px = (self.width.min(self.height) / self.ticks).max(2) as f64;
        let scale = tick_px / max_speed;

        let (nx, ny) = (grid.nx(), grid.ny());
        for ti in 0..self.ticks {
            let i = ti * nx / (self.ticks - 1);
            let x0 = ((i * self.width) / (nx + 1) + self.width / (2 * (nx + 1))) as f64;
            for tj in 0..self.ticks {
                let j = tj * ny / (self.ticks - 1);
                let y0 = (self.height - 1 - ((j * self.height) / (ny + 1) + self.height / (2 * (ny + 1)))) as f64;
                let m = grid.idx(i, j);
                // Screen y grows downward.
                let x1 = x0 + scale * u[m];
                let y1 = y0 - scale * v[m];
                self.draw_line(x0, y0, x1, y1);
            }
        }
    }

    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize;
        for k in 0..=steps {
            let t = if steps == 0 { 0.0 } else { k as f64 / steps as f64 };
            let x = x0 + t * (x1 - x0);
            let y = y0 + t * (y1 - y0);
            if x >= 0.0 && y >= 0.0 {
                let (px, py) = (x as usize, y as usize);
                if px < self.width && py < self.height {
                    self.framebuf[py * self.width + px] = ARROW_COLOR;
                }
            }
        }
    }
}
