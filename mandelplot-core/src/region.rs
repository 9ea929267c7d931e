use crate::RegionError;
use serde::{Deserialize, Serialize};

/// Rectangular sampling window in the complex plane.
///
/// Bounds are endpoint-inclusive on both axes:
/// - `xmin`/`xmax`: real axis range
/// - `ymin`/`ymax`: imaginary axis range
/// - `pixel_density`: samples per axis, so the region yields
///   `pixel_density * pixel_density` grid points
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub pixel_density: usize,
}

impl Region {
    /// Create a validated region.
    ///
    /// Returns an error if any bound is non-finite, if either axis range
    /// is empty or inverted, or if `pixel_density` is zero.
    pub fn new(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        pixel_density: usize,
    ) -> Result<Self, RegionError> {
        if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
            return Err(RegionError::NonFinite {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }
        if xmin >= xmax {
            return Err(RegionError::InvertedReal {
                min: xmin,
                max: xmax,
            });
        }
        if ymin >= ymax {
            return Err(RegionError::InvertedImag {
                min: ymin,
                max: ymax,
            });
        }
        if pixel_density == 0 {
            return Err(RegionError::ZeroDensity);
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            pixel_density,
        })
    }

    /// Extent along the real axis.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Width-to-height ratio, used to keep rendered panels undistorted.
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Evenly spaced real-axis sample positions, endpoints included.
    pub fn re_samples(&self) -> Vec<f64> {
        linspace(self.xmin, self.xmax, self.pixel_density)
    }

    /// Evenly spaced imaginary-axis sample positions, endpoints included.
    pub fn im_samples(&self) -> Vec<f64> {
        linspace(self.ymin, self.ymax, self.pixel_density)
    }
}

/// Evenly spaced samples over `[start, stop]`, endpoints included.
///
/// The final sample is set to `stop` directly rather than accumulated,
/// so the boundary value survives float rounding exactly.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            samples[count - 1] = stop;
            samples
        }
    }
}
