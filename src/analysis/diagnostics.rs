//! Per-step diagnostics of a height profile.

/// Summary of one height profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnDiagnostics {
    /// Time step the profile belongs to
    pub step: usize,
    /// Integrated height: Σ h * dx
    pub mass: f64,
    /// Largest height
    pub max_height: f64,
    /// Smallest height
    pub min_height: f64,
    /// Node holding the largest height (first one on ties)
    pub peak_index: usize,
}

impl ColumnDiagnostics {
    /// Compute diagnostics for a profile sampled with spacing `dx`.
    ///
    /// NaN values are skipped by the extrema but poison `mass`, so
    /// [`ColumnDiagnostics::is_finite`] still reports them.
    pub fn from_column(step: usize, column: &[f64], dx: f64) -> Self {
        let mut max_height = f64::NEG_INFINITY;
        let mut min_height = f64::INFINITY;
        let mut peak_index = 0;

        for (i, &h) in column.iter().enumerate() {
            if h > max_height {
                max_height = h;
                peak_index = i;
            }
            min_height = min_height.min(h);
        }

        Self {
            step,
            mass: total_mass(column, dx),
            max_height,
            min_height,
            peak_index,
        }
    }

    /// True if mass and extrema are all finite.
    pub fn is_finite(&self) -> bool {
        self.mass.is_finite() && self.max_height.is_finite() && self.min_height.is_finite()
    }
}

/// Integrated height Σ h * dx.
pub fn total_mass(column: &[f64], dx: f64) -> f64 {
    column.iter().sum::<f64>() * dx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_profile() {
        let d = ColumnDiagnostics::from_column(3, &[0.1, 0.7, 0.2, 0.7], 2.0);
        assert_eq!(d.step, 3);
        assert!((d.mass - 3.4).abs() < 1e-12);
        assert_eq!(d.max_height, 0.7);
        assert_eq!(d.min_height, 0.1);
        assert_eq!(d.peak_index, 1);
        assert!(d.is_finite());
    }

    #[test]
    fn test_nan_detected() {
        let d = ColumnDiagnostics::from_column(0, &[1.0, f64::NAN, 0.5], 1.0);
        assert!(d.mass.is_nan());
        assert!(!d.is_finite());
    }

    #[test]
    fn test_infinity_detected() {
        let d = ColumnDiagnostics::from_column(0, &[1.0, f64::INFINITY], 1.0);
        assert!(!d.is_finite());
        assert_eq!(d.peak_index, 1);
    }
}
