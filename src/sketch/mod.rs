//! The 2D drawing surface: grid snapping, the stroke list and the pointer
//! interaction that produces it.
//!
//! Interaction is a two-state machine:
//!
//! ```text
//! Idle ──pointer_down──► Drawing { segment } ──pointer_up──► Idle
//!                          │  ▲
//!                          └──┘ pointer_move (updates segment.end)
//! ```
//!
//! A stroke is committed to the segment list when the pointer is released.

mod draw_list;
mod grid;

pub use draw_list::{DrawCommand, DrawList};
pub use grid::Grid;

use tracing::debug;

use crate::floorplan::Segment;

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawState {
    #[default]
    Idle,
    /// A stroke is in progress; its end point follows the pointer.
    Drawing { segment: Segment },
}

/// Committed strokes plus the stroke being drawn.
#[derive(Debug, Clone)]
pub struct Sketch {
    grid: Grid,
    segments: Vec<Segment>,
    state: DrawState,
}

impl Sketch {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            segments: Vec::new(),
            state: DrawState::Idle,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Committed strokes, oldest first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// The stroke currently being drawn, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<&Segment> {
        match &self.state {
            DrawState::Drawing { segment } => Some(segment),
            DrawState::Idle => None,
        }
    }

    /// Starts a stroke at the snapped pointer position.
    ///
    /// Returns `false` if the position snaps outside the canvas. A press while
    /// already drawing commits the previous stroke first.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let Some(point) = self.grid.snap(x, y) else {
            return false;
        };
        self.commit();
        self.state = DrawState::Drawing {
            segment: Segment::at(point),
        };
        true
    }

    /// Moves the end of the in-progress stroke to the snapped pointer position.
    ///
    /// Returns `true` if the stroke changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let DrawState::Drawing { segment } = &mut self.state else {
            return false;
        };
        let Some(point) = self.grid.snap(x, y) else {
            return false;
        };
        if segment.end == point {
            return false;
        }
        segment.end = point;
        true
    }

    /// Finishes the in-progress stroke.
    pub fn pointer_up(&mut self) {
        self.commit();
    }

    /// Removes the most recent stroke and returns it.
    ///
    /// A stroke still being drawn is discarded first.
    pub fn undo(&mut self) -> Option<Segment> {
        if let DrawState::Drawing { segment } = std::mem::take(&mut self.state) {
            return Some(segment);
        }
        let removed = self.segments.pop();
        debug!(remaining = self.segments.len(), "undo");
        removed
    }

    /// Removes every stroke.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.state = DrawState::Idle;
    }

    /// Builds the primitives needed to redraw the canvas.
    #[must_use]
    pub fn draw_list(&self) -> DrawList {
        DrawList::build(&self.grid, self.segments.iter().chain(self.in_progress()))
    }

    fn commit(&mut self) {
        if let DrawState::Drawing { segment } = std::mem::take(&mut self.state) {
            self.segments.push(segment);
            debug!(
                count = self.segments.len(),
                length = segment.length(),
                "committed segment"
            );
        }
    }
}
