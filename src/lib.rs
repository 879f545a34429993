pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod extrusion;
pub mod floorplan;
pub mod math;
pub mod scene;
pub mod sketch;
pub mod tessellation;

pub use app::Floorplanner;
pub use config::SceneConfig;
pub use error::{FloorplanError, Result};
