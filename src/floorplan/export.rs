//! JSON form of a [`Floorplan`].
//!
//! ```text
//! {"corners":[{"x":0.0,"y":0.0}],"walls":[{"corner1":0,"corner2":0}],"floorTextures":{}}
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Floorplan, Wall};
use crate::error::{FloorplanError, Result};
use crate::math::Point2;

#[derive(Serialize, Deserialize)]
struct CornerJson {
    x: f64,
    y: f64,
}

#[derive(Serialize, Deserialize)]
struct WallJson {
    corner1: usize,
    corner2: usize,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FloorplanJson {
    corners: Vec<CornerJson>,
    walls: Vec<WallJson>,
    #[serde(default)]
    floor_textures: BTreeMap<String, String>,
}

impl From<&Floorplan> for FloorplanJson {
    fn from(plan: &Floorplan) -> Self {
        Self {
            corners: plan
                .corners
                .iter()
                .map(|c| CornerJson { x: c.x, y: c.y })
                .collect(),
            walls: plan
                .walls
                .iter()
                .map(|w| WallJson {
                    corner1: w.corner1,
                    corner2: w.corner2,
                })
                .collect(),
            floor_textures: plan.floor_textures.clone(),
        }
    }
}

impl Floorplan {
    /// Serializes the floorplan as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate cannot be represented in JSON (NaN or infinite).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&FloorplanJson::from(self))?)
    }

    /// Serializes the floorplan as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate cannot be represented in JSON (NaN or infinite).
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&FloorplanJson::from(self))?)
    }

    /// Parses a floorplan previously produced by [`Floorplan::to_json`].
    ///
    /// Corners are re-registered through [`Floorplan::add_corner`]; a
    /// document that lists the same point twice is rejected rather than
    /// silently renumbered.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a corner is duplicated, or
    /// a wall references a corner that does not exist.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: FloorplanJson = serde_json::from_str(json)?;
        let mut plan = Floorplan::new();

        for (i, c) in doc.corners.iter().enumerate() {
            if plan.add_corner(Point2::new(c.x, c.y)) != i {
                return Err(FloorplanError::InvalidConfig(format!(
                    "corner {i} duplicates an earlier corner"
                )));
            }
        }

        let corner_count = plan.corners.len();
        for (wall, w) in doc.walls.iter().enumerate() {
            for corner in [w.corner1, w.corner2] {
                if corner >= corner_count {
                    return Err(FloorplanError::InvalidWall {
                        wall,
                        corner,
                        corner_count,
                    });
                }
            }
            plan.walls.push(Wall::new(w.corner1, w.corner2));
        }

        plan.floor_textures = doc.floor_textures;
        Ok(plan)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::floorplan::{ConvertSegments, Segment};

    #[test]
    fn export_layout() {
        let segments = [Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))];
        let json = ConvertSegments::new(&segments).execute().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"corners":[{"x":0.0,"y":0.0},{"x":10.0,"y":0.0}],"walls":[{"corner1":0,"corner2":1}],"floorTextures":{}}"#
        );
    }

    #[test]
    fn import_restores_plan() {
        let segments = [
            Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)),
            Segment::new(Point2::new(10.0, 0.0), Point2::new(10.0, 20.0)),
        ];
        let plan = ConvertSegments::new(&segments).execute();
        let restored = Floorplan::from_json(&plan.to_json_pretty().unwrap()).unwrap();
        assert_eq!(restored, plan);
    }

    #[test]
    fn import_rejects_dangling_wall() {
        let json = r#"{"corners":[{"x":0.0,"y":0.0}],"walls":[{"corner1":0,"corner2":4}]}"#;
        assert!(matches!(
            Floorplan::from_json(json),
            Err(FloorplanError::InvalidWall {
                wall: 0,
                corner: 4,
                corner_count: 1
            })
        ));
    }

    #[test]
    fn import_rejects_duplicate_corner() {
        let json = r#"{"corners":[{"x":1.0,"y":1.0},{"x":1.0,"y":1.0}],"walls":[]}"#;
        assert!(Floorplan::from_json(json).is_err());
    }
}
