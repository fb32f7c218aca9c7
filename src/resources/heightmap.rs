use nalgebra::Vector2;

/// Opaque terrain height query.
///
/// Implementations must be pure and reentrant: the controller samples the
/// map several times per frame at arbitrary coordinates. Off-map queries
/// should return a value far outside the plausible height band so the
/// look-ahead probes can discard them.
pub trait HeightMap: Send + Sync {
    /// Terrain height at world `(x, z)`.
    fn lookup(&self, x: f64, z: f64) -> f64;
}

/// Constant-height map. Handy for flat test tracks.
#[derive(Debug, Clone, Copy)]
pub struct UniformHeightMap {
    pub height: f64,
}

impl UniformHeightMap {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl HeightMap for UniformHeightMap {
    fn lookup(&self, _x: f64, _z: f64) -> f64 {
        self.height
    }
}

/// Regular-grid height field with bilinear sampling.
///
/// Samples are row-major: `width` columns along x, `depth` rows along z,
/// one square `cell` apart, anchored at `origin`. Queries outside the grid
/// return the `out_of_bounds` sentinel instead of clamping, so callers
/// relying on a plausibility bound can tell on-map from off-map samples.
#[derive(Debug, Clone)]
pub struct GridHeightMap {
    width: usize,
    depth: usize,
    cell: f64,
    origin: Vector2<f64>,
    heights: Vec<f64>,
    out_of_bounds: f64,
}

impl GridHeightMap {
    /// Sentinel far below any plausible track height.
    pub const DEFAULT_OUT_OF_BOUNDS: f64 = -1000.0;

    /// Builds a grid from row-major samples. `heights.len()` must equal
    /// `width * depth`, and the grid needs at least two samples per axis to
    /// interpolate.
    pub fn from_heights(width: usize, depth: usize, cell: f64, heights: Vec<f64>) -> Self {
        assert!(width >= 2 && depth >= 2, "grid needs at least 2x2 samples");
        assert!(cell > 0.0, "cell size must be positive");
        assert_eq!(width * depth, heights.len());
        Self {
            width,
            depth,
            cell,
            origin: Vector2::zeros(),
            heights,
            out_of_bounds: Self::DEFAULT_OUT_OF_BOUNDS,
        }
    }

    /// World position of the (0, 0) sample.
    pub fn with_origin(mut self, origin: Vector2<f64>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_out_of_bounds(mut self, sentinel: f64) -> Self {
        self.out_of_bounds = sentinel;
        self
    }

    fn sample(&self, col: usize, row: usize) -> f64 {
        self.heights[row * self.width + col]
    }
}

impl HeightMap for GridHeightMap {
    fn lookup(&self, x: f64, z: f64) -> f64 {
        let fx = (x - self.origin.x) / self.cell;
        let fz = (z - self.origin.y) / self.cell;
        if fx < 0.0 || fz < 0.0 || fx > (self.width - 1) as f64 || fz > (self.depth - 1) as f64 {
            return self.out_of_bounds;
        }

        let col = (fx.floor() as usize).min(self.width - 2);
        let row = (fz.floor() as usize).min(self.depth - 2);
        let tx = fx - col as f64;
        let tz = fz - row as f64;

        let h00 = self.sample(col, row);
        let h10 = self.sample(col + 1, row);
        let h01 = self.sample(col, row + 1);
        let h11 = self.sample(col + 1, row + 1);

        let near = h00 * (1.0 - tx) + h10 * tx;
        let far = h01 * (1.0 - tx) + h11 * tx;
        near * (1.0 - tz) + far * tz
    }
}
