//! Procedural 3D force field.
//!
//! The field is a cubic grid of scalar force samples recomputed in full every
//! frame from a closed-form function of cell coordinate and simulation time.
//! It is a deterministic field sample, not an accumulator: nothing ever
//! writes back into it, and two fields resampled at the same time are
//! bit-identical.
//!
//! Each cell holds the product of three phase-shifted waves over the
//! normalized cell coordinate, plus a radial pulse travelling outward from
//! the grid center.

/// Speed of the radial pulse travelling through the grid.
const WAVE_SPEED: f32 = 2.0;
/// Amplitude of the radial pulse term.
const WAVE_AMPLITUDE: f32 = 0.2;

/// A cubic grid of scalar force samples.
///
/// Cells are indexed `x + y * size + z * size²`.
#[derive(Clone, Debug)]
pub struct ForceField {
    grid_size: usize,
    values: Vec<f32>,
}

impl ForceField {
    /// Create a field with `grid_size` cells per axis, all zero.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size < 2` (the normalized coordinate needs at least
    /// two samples per axis).
    pub fn new(grid_size: usize) -> Self {
        assert!(grid_size >= 2, "Force field grid must be at least 2 cells per axis");
        Self {
            grid_size,
            values: vec![0.0; grid_size * grid_size * grid_size],
        }
    }

    /// Cells per axis.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// All cell values in `x + y*size + z*size²` order.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Flat index of a cell coordinate.
    #[inline]
    pub fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.grid_size + z * self.grid_size * self.grid_size
    }

    /// Value at a cell coordinate.
    #[inline]
    pub fn value_at(&self, x: usize, y: usize, z: usize) -> f32 {
        self.values[self.cell_index(x, y, z)]
    }

    /// Recompute every cell for the given simulation time.
    pub fn resample(&mut self, time: f32) {
        let gs = self.grid_size as f32;
        for i in 0..self.values.len() {
            let x = (i % self.grid_size) as f32;
            let y = ((i / self.grid_size) % self.grid_size) as f32;
            let z = (i / (self.grid_size * self.grid_size)) as f32;

            let value = ((x / gs - 0.5) * 5.0 + time).sin()
                * ((y / gs - 0.5) * 4.0 + time * 1.3).cos()
                * ((z / gs - 0.5) * 3.0 + time * 0.7).sin()
                * 0.5;

            // Radial pulse rippling outward from the grid center.
            let dx = x / gs - 0.5;
            let dy = y / gs - 0.5;
            let dz = z / gs - 0.5;
            let distance_from_center = (dx * dx + dy * dy + dz * dz).sqrt();
            let wave = (distance_from_center * 10.0 - time * WAVE_SPEED).sin() * WAVE_AMPLITUDE;

            self.values[i] = value + wave;
        }
    }

    /// Mean absolute value over all cells.
    pub fn average_magnitude(&self) -> f32 {
        let sum: f32 = self.values.iter().map(|v| v.abs()).sum();
        sum / self.values.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_is_deterministic() {
        let mut a = ForceField::new(16);
        let mut b = ForceField::new(16);
        a.resample(1.234);
        b.resample(1.234);
        assert_eq!(a.values(), b.values());

        // Same field resampled again at the same time must not drift.
        let snapshot = a.values().to_vec();
        a.resample(1.234);
        assert_eq!(a.values(), &snapshot[..]);
    }

    #[test]
    fn test_resample_varies_with_time() {
        let mut field = ForceField::new(16);
        field.resample(0.0);
        let before = field.values().to_vec();
        field.resample(0.5);
        assert_ne!(field.values(), &before[..]);
    }

    #[test]
    fn test_values_bounded_by_terms() {
        // Wave product is at most 0.5, pulse at most 0.2.
        let mut field = ForceField::new(16);
        field.resample(3.7);
        for &v in field.values() {
            assert!(v.abs() <= 0.5 + WAVE_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_cell_indexing() {
        let field = ForceField::new(4);
        assert_eq!(field.cell_index(1, 2, 3), 1 + 2 * 4 + 3 * 16);
        assert_eq!(field.values().len(), 64);
    }

    #[test]
    fn test_average_magnitude_nonnegative() {
        let mut field = ForceField::new(8);
        field.resample(2.0);
        assert!(field.average_magnitude() >= 0.0);
    }

    #[test]
    #[should_panic(expected = "at least 2 cells")]
    fn test_rejects_tiny_grid() {
        ForceField::new(1);
    }
}
