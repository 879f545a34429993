use tracing::debug;

use super::{Floorplan, Segment};

/// Builds a fresh [`Floorplan`] from an ordered list of segments.
///
/// Each segment becomes one wall. Endpoints are registered as corners in
/// segment order (start before end), so the first occurrence of a point
/// receives the lowest index. The result never depends on an earlier
/// conversion: running it twice over the same segments gives equal
/// floorplans.
#[derive(Debug)]
pub struct ConvertSegments<'a> {
    segments: &'a [Segment],
}

impl<'a> ConvertSegments<'a> {
    /// Creates a new `ConvertSegments` operation.
    #[must_use]
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }

    /// Executes the conversion.
    #[must_use]
    pub fn execute(&self) -> Floorplan {
        let mut floorplan = Floorplan::new();
        floorplan.add_segments(self.segments);
        debug!(
            segments = self.segments.len(),
            corners = floorplan.corners().len(),
            walls = floorplan.walls().len(),
            "converted segments to floorplan"
        );
        floorplan
    }
}
