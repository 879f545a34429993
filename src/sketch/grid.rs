use crate::error::{FloorplanError, Result};
use crate::math::Point2;

/// Upper bound on grid lines along one axis.
const MAX_LINES_PER_AXIS: f64 = 1_000_000.0;

/// The snapping grid laid over the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    spacing: f64,
    width: f64,
    height: f64,
}

impl Grid {
    /// Creates a grid over a `width × height` canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if `spacing` is not positive, the canvas size is
    /// negative or not finite, or the canvas needs more than a million grid
    /// lines along one axis.
    pub fn new(spacing: f64, width: f64, height: f64) -> Result<Self> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(FloorplanError::InvalidConfig(format!(
                "grid spacing must be positive, got {spacing}"
            )));
        }
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(FloorplanError::InvalidConfig(format!(
                "canvas size must be finite and non-negative, got {width}×{height}"
            )));
        }
        if width / spacing > MAX_LINES_PER_AXIS || height / spacing > MAX_LINES_PER_AXIS {
            return Err(FloorplanError::InvalidConfig(format!(
                "canvas {width}×{height} is too large for grid spacing {spacing}"
            )));
        }
        Ok(Self {
            spacing,
            width,
            height,
        })
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Snaps a canvas position down to the grid.
    ///
    /// Returns `None` when the snapped point falls outside the canvas.
    #[must_use]
    pub fn snap(&self, x: f64, y: f64) -> Option<Point2> {
        let sx = (x / self.spacing).floor() * self.spacing;
        let sy = (y / self.spacing).floor() * self.spacing;
        let inside = (0.0..=self.width).contains(&sx) && (0.0..=self.height).contains(&sy);
        inside.then(|| Point2::new(sx, sy))
    }

    /// Grid lines covering the canvas: vertical lines first, then horizontal.
    #[must_use]
    pub fn lines(&self) -> Vec<(Point2, Point2)> {
        let columns = self.line_count(self.width);
        let rows = self.line_count(self.height);
        let mut lines = Vec::with_capacity(columns + rows + 2);
        for i in 0..=columns {
            let x = self.offset(i);
            lines.push((Point2::new(x, 0.0), Point2::new(x, self.height)));
        }
        for i in 0..=rows {
            let y = self.offset(i);
            lines.push((Point2::new(0.0, y), Point2::new(self.width, y)));
        }
        lines
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn line_count(&self, extent: f64) -> usize {
        (extent / self.spacing).floor() as usize
    }

    #[allow(clippy::cast_precision_loss)]
    fn offset(&self, i: usize) -> f64 {
        i as f64 * self.spacing
    }
}
