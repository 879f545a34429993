use tracing::debug;

use crate::color::Color;

use super::{Camera, OrbitControls, Scene};

/// Draws a scene from a camera's point of view.
pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &Camera, clear_color: Color);
}

/// A headless renderer that only records what it was asked to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub last_object_count: usize,
    pub last_triangle_count: usize,
    pub last_clear_color: Option<Color>,
}

impl Renderer for FrameStats {
    fn render(&mut self, scene: &Scene, _camera: &Camera, clear_color: Color) {
        self.frames += 1;
        self.last_object_count = scene.len();
        self.last_triangle_count = scene.meshes().map(|m| m.geometry.triangle_count()).sum();
        self.last_clear_color = Some(clear_color);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

/// Repaints the scene once per display refresh while the 3D view is shown.
///
/// The host calls [`RenderLoop::tick`] on every refresh signal; nothing is
/// drawn unless the loop has been started.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    state: LoopState,
    clear_color: Color,
    frame: u64,
}

impl RenderLoop {
    #[must_use]
    pub fn new(clear_color: Color) -> Self {
        Self {
            state: LoopState::Stopped,
            clear_color,
            frame: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames rendered since the loop was created.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn start(&mut self) {
        if self.state == LoopState::Stopped {
            debug!(frame = self.frame, "render loop started");
            self.state = LoopState::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            debug!(frame = self.frame, "render loop stopped");
            self.state = LoopState::Stopped;
        }
    }

    /// Runs one refresh: applies orbit input, then renders.
    ///
    /// Returns `false` without doing anything if the loop is stopped.
    pub fn tick(
        &mut self,
        renderer: &mut dyn Renderer,
        scene: &Scene,
        camera: &mut Camera,
        controls: &mut OrbitControls,
    ) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        controls.update(camera);
        renderer.render(scene, camera, self.clear_color);
        self.frame += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    fn fixtures() -> (Scene, Camera, OrbitControls) {
        let camera = Camera::from_config(&SceneConfig::default(), 1.0);
        let controls = OrbitControls::new(&camera, std::f64::consts::FRAC_PI_2);
        (Scene::new(), camera, controls)
    }

    #[test]
    fn stopped_loop_renders_nothing() {
        let (scene, mut camera, mut controls) = fixtures();
        let mut render_loop = RenderLoop::new(Color(0xee_eeee));
        let mut stats = FrameStats::default();
        assert!(!render_loop.tick(&mut stats, &scene, &mut camera, &mut controls));
        assert_eq!(stats.frames, 0);
    }

    #[test]
    fn running_loop_renders_each_tick() {
        let (scene, mut camera, mut controls) = fixtures();
        let mut render_loop = RenderLoop::new(Color(0xee_eeee));
        let mut stats = FrameStats::default();
        render_loop.start();
        for _ in 0..3 {
            assert!(render_loop.tick(&mut stats, &scene, &mut camera, &mut controls));
        }
        assert_eq!(stats.frames, 3);
        assert_eq!(render_loop.frame(), 3);
        assert_eq!(stats.last_clear_color, Some(Color(0xee_eeee)));
    }

    #[test]
    fn stop_halts_rendering() {
        let (scene, mut camera, mut controls) = fixtures();
        let mut render_loop = RenderLoop::new(Color::WHITE);
        let mut stats = FrameStats::default();
        render_loop.start();
        render_loop.tick(&mut stats, &scene, &mut camera, &mut controls);
        render_loop.stop();
        assert!(!render_loop.tick(&mut stats, &scene, &mut camera, &mut controls));
        assert_eq!(stats.frames, 1);
        assert_eq!(render_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn tick_applies_orbit_input() {
        let (scene, mut camera, mut controls) = fixtures();
        let mut render_loop = RenderLoop::new(Color::WHITE);
        render_loop.start();
        let before = camera.position;
        controls.rotate(0.5, 0.0);
        render_loop.tick(&mut FrameStats::default(), &scene, &mut camera, &mut controls);
        assert!(camera.position != before);
    }
}
