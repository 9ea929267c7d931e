/// Boolean stability verdict for every point of a sample grid.
///
/// Row-major with the same square shape as the grid it was computed from.
/// `true` marks a point whose orbit stayed bounded for the full iteration
/// budget.
#[derive(Clone, Debug, PartialEq)]
pub struct StabilityMask {
    pixel_density: usize,
    values: Vec<bool>,
}

impl StabilityMask {
    /// Wrap a row-major flag buffer as a square mask.
    ///
    /// Panics if `values.len()` is not `pixel_density * pixel_density`.
    pub fn new(pixel_density: usize, values: Vec<bool>) -> Self {
        assert_eq!(
            values.len(),
            pixel_density * pixel_density,
            "mask buffer length does not match pixel density"
        );
        Self {
            pixel_density,
            values,
        }
    }

    /// Samples per axis.
    pub fn pixel_density(&self) -> usize {
        self.pixel_density
    }

    /// Mask shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.pixel_density, self.pixel_density)
    }

    /// Total number of verdicts.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Verdict at `(row, col)`.
    ///
    /// Panics if either index is out of bounds.
    pub fn is_stable(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.pixel_density,
            "row {row} out of bounds for {} rows",
            self.pixel_density
        );
        assert!(
            col < self.pixel_density,
            "col {col} out of bounds for {} cols",
            self.pixel_density
        );
        self.values[row * self.pixel_density + col]
    }

    /// Flat row-major view of all verdicts.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Number of points marked stable.
    pub fn stable_count(&self) -> usize {
        self.values.iter().filter(|&&stable| stable).count()
    }
}
