//! The floorplanner controller.
//!
//! [`Floorplanner`] owns every piece of state (the sketch, the last built
//! floorplan, the 3D scene and its camera) and exposes the UI triggers:
//! drawing, undo, export and switching the 3D view on and off.

use tracing::{debug, info};

use crate::config::SceneConfig;
use crate::error::Result;
use crate::extrusion::{ExtrudeFloorplan, SceneDescription, TextureLoader};
use crate::floorplan::{ConvertSegments, Floorplan};
use crate::scene::{aspect_ratio, Camera, OrbitControls, RenderLoop, Renderer, Scene};
use crate::sketch::{DrawList, Grid, Sketch};

pub struct Floorplanner {
    config: SceneConfig,
    sketch: Sketch,
    floorplan: Floorplan,
    scene: Scene,
    description: Option<SceneDescription>,
    camera: Camera,
    controls: OrbitControls,
    render_loop: RenderLoop,
}

impl Floorplanner {
    /// Creates a controller for a `width × height` canvas and viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the canvas size is negative.
    pub fn new(config: SceneConfig, width: f64, height: f64) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_spacing, width, height)?;
        let aspect = aspect_ratio(width, height).unwrap_or(1.0);
        let camera = Camera::from_config(&config, aspect);
        let controls = OrbitControls::new(&camera, config.max_polar_angle);
        let render_loop = RenderLoop::new(config.clear_color);
        Ok(Self {
            config,
            sketch: Sketch::new(grid),
            floorplan: Floorplan::new(),
            scene: Scene::new(),
            description: None,
            camera,
            controls,
            render_loop,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    /// The floorplan from the last export or 3D activation.
    #[must_use]
    pub fn floorplan(&self) -> &Floorplan {
        &self.floorplan
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The primitives behind the current scene, if the 3D view has been built.
    #[must_use]
    pub fn scene_description(&self) -> Option<&SceneDescription> {
        self.description.as_ref()
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    #[must_use]
    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.sketch.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.sketch.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self) {
        self.sketch.pointer_up();
    }

    /// Removes the most recent stroke. Returns `true` if one was removed.
    pub fn undo(&mut self) -> bool {
        self.sketch.undo().is_some()
    }

    /// What the 2D canvas should show right now.
    #[must_use]
    pub fn draw_list(&self) -> DrawList {
        self.sketch.draw_list()
    }

    /// Rebuilds the floorplan from the current strokes and returns it as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the floorplan cannot be serialized.
    pub fn export(&mut self) -> Result<String> {
        self.rebuild_floorplan();
        let json = self.floorplan.to_json()?;
        info!(floorplan = %json, "exported floorplan");
        Ok(json)
    }

    /// Rebuilds the floorplan, extrudes it into a fresh scene, resets the
    /// camera and starts the render loop.
    ///
    /// On error the scene is left empty and the loop stays stopped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FloorplanError::EmptyFloorplan`] when nothing has been
    /// drawn, or an error if the scene cannot be built.
    pub fn activate_3d_view(&mut self, textures: &dyn TextureLoader) -> Result<()> {
        self.render_loop.stop();
        self.scene.clear();
        self.description = None;
        self.rebuild_floorplan();

        let description = ExtrudeFloorplan::new(&self.floorplan, &self.config).execute(textures)?;
        if let Err(err) = self.scene.populate(&description) {
            self.scene.clear();
            return Err(err);
        }

        self.camera.position = self.config.camera_position;
        self.camera.look_at(self.config.camera_target);
        self.controls.sync(&self.camera);
        self.render_loop.start();

        debug!(objects = self.scene.len(), "3D view activated");
        self.description = Some(description);
        Ok(())
    }

    /// Stops repainting the 3D view. The scene is kept for the next activation.
    pub fn deactivate_3d_view(&mut self) {
        self.render_loop.stop();
    }

    /// One display refresh. Returns `true` if a frame was rendered.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> bool {
        self.render_loop
            .tick(renderer, &self.scene, &mut self.camera, &mut self.controls)
    }

    /// Resizes the 3D viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    fn rebuild_floorplan(&mut self) {
        self.floorplan = ConvertSegments::new(self.sketch.segments()).execute();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FloorplanError;
    use crate::extrusion::MemoryTextureLoader;
    use crate::scene::FrameStats;

    fn app() -> Floorplanner {
        Floorplanner::new(SceneConfig::default(), 800.0, 600.0).unwrap()
    }

    fn draw(app: &mut Floorplanner, from: (f64, f64), to: (f64, f64)) {
        app.pointer_down(from.0, from.1);
        app.pointer_move(to.0, to.1);
        app.pointer_up();
    }

    #[test]
    fn activating_empty_sketch_fails_cleanly() {
        let mut app = app();
        let err = app.activate_3d_view(&MemoryTextureLoader::new()).unwrap_err();
        assert!(matches!(err, FloorplanError::EmptyFloorplan));
        assert!(app.scene().is_empty());
        assert!(!app.render_loop().is_running());
        assert!(app.scene_description().is_none());
    }

    #[test]
    fn repeated_activation_does_not_duplicate_walls() {
        let mut app = app();
        draw(&mut app, (0.0, 0.0), (100.0, 0.0));
        draw(&mut app, (100.0, 0.0), (100.0, 100.0));
        let loader = MemoryTextureLoader::new();
        app.activate_3d_view(&loader).unwrap();
        let objects = app.scene().len();
        app.activate_3d_view(&loader).unwrap();
        assert_eq!(app.floorplan().walls().len(), 2);
        assert_eq!(app.scene().len(), objects);
    }

    #[test]
    fn deactivate_stops_rendering() {
        let mut app = app();
        draw(&mut app, (0.0, 0.0), (100.0, 0.0));
        app.activate_3d_view(&MemoryTextureLoader::new()).unwrap();
        let mut stats = FrameStats::default();
        assert!(app.tick(&mut stats));
        app.deactivate_3d_view();
        assert!(!app.tick(&mut stats));
        assert_eq!(stats.frames, 1);
    }

    #[test]
    fn activation_resets_camera() {
        let mut app = app();
        draw(&mut app, (0.0, 0.0), (100.0, 0.0));
        let loader = MemoryTextureLoader::new();
        app.activate_3d_view(&loader).unwrap();
        app.controls_mut().rotate(1.0, 0.2);
        app.tick(&mut FrameStats::default());
        assert!(app.camera().position != app.config().camera_position);
        app.activate_3d_view(&loader).unwrap();
        assert_eq!(app.camera().position, app.config().camera_position);
    }

    #[test]
    fn export_reflects_current_strokes() {
        let mut app = app();
        draw(&mut app, (0.0, 0.0), (10.0, 0.0));
        draw(&mut app, (10.0, 0.0), (10.0, 10.0));
        assert!(app.undo());
        let json = app.export().unwrap();
        assert_eq!(
            json,
            r#"{"corners":[{"x":0.0,"y":0.0},{"x":10.0,"y":0.0}],"walls":[{"corner1":0,"corner2":1}],"floorTextures":{}}"#
        );
    }

    #[test]
    fn zero_width_viewport_does_not_break_projection() {
        let mut app = Floorplanner::new(SceneConfig::default(), 0.0, 600.0).unwrap();
        assert_eq!(app.camera().aspect, 1.0);
        app.resize(800.0, 400.0);
        app.resize(0.0, 600.0);
        assert_eq!(app.camera().aspect, 2.0);
        assert!(app.camera().projection_matrix().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig {
            wall_height: -1.0,
            ..SceneConfig::default()
        };
        assert!(Floorplanner::new(config, 800.0, 600.0).is_err());
    }
}
