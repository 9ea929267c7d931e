use crate::{Region, StabilityMask};
use num_complex::Complex64;

/// Row-major grid of complex sample points covering a region.
///
/// Row 0 holds the smallest imaginary part (`ymin`), column 0 the smallest
/// real part (`xmin`), and both endpoints are included, so the four region
/// corners appear exactly at the grid corners. The grid is immutable once
/// built.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    pixel_density: usize,
    values: Vec<Complex64>,
}

impl SampleGrid {
    /// Materialize the sample grid for a region.
    ///
    /// Every grid point pairs one real-axis sample with one imaginary-axis
    /// sample: `values[row * n + col] = re[col] + im[row] * i`.
    pub fn from_region(region: &Region) -> Self {
        let re = region.re_samples();
        let im = region.im_samples();
        let n = region.pixel_density;

        let mut values = Vec::with_capacity(n * n);
        for &im_part in &im {
            for &re_part in &re {
                values.push(Complex64::new(re_part, im_part));
            }
        }

        Self {
            pixel_density: n,
            values,
        }
    }

    /// Samples per axis.
    pub fn pixel_density(&self) -> usize {
        self.pixel_density
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.pixel_density, self.pixel_density)
    }

    /// Total number of sample points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at `(row, col)`.
    ///
    /// Panics if either index is out of bounds.
    pub fn value_at(&self, row: usize, col: usize) -> Complex64 {
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

    /// Flat row-major view of all samples.
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Iterate over grid rows as contiguous slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        self.values.chunks(self.pixel_density)
    }

    /// Keep the samples whose mask entry is stable, in row-major order.
    ///
    /// Panics if the mask shape does not match the grid shape.
    pub fn select(&self, mask: &StabilityMask) -> Vec<Complex64> {
        assert_eq!(
            self.shape(),
            mask.shape(),
            "mask shape does not match grid shape"
        );
        self.values
            .iter()
            .zip(mask.values())
            .filter_map(|(&value, &stable)| stable.then_some(value))
            .collect()
    }
}
