/// Uniform rectangular grid of `nx` x `ny` cells centred on the origin.
///
/// Fields are stored as flat `Vec<f64>` arrays of `(nx + 1) * (ny + 1)`
/// values: the interior plus one boundary layer on each side. Spacing and
/// dimensions are fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    nx: usize,
    ny: usize,
    lx: f64,
    ly: f64,
    dx: f64,
    dy: f64,
}

impl Grid {
    /// Build a grid over a `lx` x `ly` domain. Needs at least 3 cells per
    /// axis so every implicit sweep has two or more interior unknowns.
    pub fn new(nx: usize, ny: usize, lx: f64, ly: f64) -> Self {
        assert!(nx >= 3 && ny >= 3, "grid must be at least 3x3 cells, got {}x{}", nx, ny);
        assert!(lx > 0.0 && ly > 0.0, "domain extents must be positive, got {}x{}", lx, ly);
        Self {
            nx,
            ny,
            lx,
            ly,
            dx: lx / nx as f64,
            dy: ly / ny as f64,
        }
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn lx(&self) -> f64 {
        self.lx
    }

    pub fn ly(&self) -> f64 {
        self.ly
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Number of values in a field array, boundary layer included.
    pub fn len(&self) -> usize {
        (self.nx + 1) * (self.ny + 1)
    }

    /// Flat index for cell `(i, j)`, x-major. Valid for
    /// `0 <= i <= nx`, `0 <= j <= ny`.
    #[inline(always)]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * (self.ny + 1) + j
    }

    /// x coordinate of column `i`, from `-lx/2` to `+lx/2`.
    pub fn x(&self, i: usize) -> f64 {
        -self.lx / 2.0 + i as f64 * self.dx
    }

    /// y coordinate of row `j`, from `-ly/2` to `+ly/2`.
    pub fn y(&self, j: usize) -> f64 {
        -self.ly / 2.0 + j as f64 * self.dy
    }

    /// Fresh all-zero field of matching shape.
    pub fn zeros(&self) -> Vec<f64> {
        vec![0.0; self.len()]
    }
}
