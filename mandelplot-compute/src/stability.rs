use mandelplot_core::{SampleGrid, StabilityMask};
use num_complex::Complex64;
use rayon::prelude::*;

/// Orbit magnitude bound for membership: a point is stable when its orbit
/// ends within this radius after the full iteration budget.
pub const STABILITY_RADIUS: f64 = 2.0;

const STABILITY_RADIUS_SQ: f64 = STABILITY_RADIUS * STABILITY_RADIUS;

/// Classifier for the quadratic map z = z^2 + c using f64 arithmetic.
///
/// Every point receives the full iteration budget and the magnitude test
/// runs once, on the final orbit value. There is intentionally NO early-exit
/// escape check inside the loop: the classification is defined by the orbit
/// value after exactly `num_iterations` steps, so a small budget can report
/// points as stable that a larger budget rules out.
pub struct StabilityClassifier {
    num_iterations: u32,
}

impl StabilityClassifier {
    pub fn new(num_iterations: u32) -> Self {
        Self { num_iterations }
    }

    /// Iteration budget applied to every sample.
    pub fn num_iterations(&self) -> u32 {
        self.num_iterations
    }

    /// Classify every grid point, processing rows in parallel.
    ///
    /// The returned mask always has the same shape as `grid`. A zero budget
    /// leaves every orbit at the origin, so every point classifies stable.
    pub fn classify(&self, grid: &SampleGrid) -> StabilityMask {
        let cols = grid.pixel_density();
        let mut stable = vec![false; grid.len()];

        stable
            .par_chunks_mut(cols)
            .zip(grid.values().par_chunks(cols))
            .for_each(|(flag_row, sample_row)| {
                for (flag, &c) in flag_row.iter_mut().zip(sample_row) {
                    *flag = self.compute_point(c);
                }
            });

        StabilityMask::new(cols, stable)
    }

    /// Stable members of the grid, in row-major grid order.
    pub fn members(&self, grid: &SampleGrid) -> Vec<Complex64> {
        grid.select(&self.classify(grid))
    }

    /// Run the full iteration budget for a single point and test the final
    /// orbit value. Orbits that overflow to infinity or NaN fail the
    /// comparison and classify as unstable.
    fn compute_point(&self, c: Complex64) -> bool {
        let mut z = Complex64::new(0.0, 0.0);
        for _ in 0..self.num_iterations {
            z = z * z + c;
        }
        z.norm_sqr() <= STABILITY_RADIUS_SQ
    }
}
