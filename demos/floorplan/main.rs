//! Floorplan demo — draws a small L-shaped room through the controller,
//! builds the 3D scene and renders a few headless frames.
//!
//! Usage:
//! ```text
//! cargo run --example floorplan                     # summary only
//! cargo run --example floorplan -- path/to/assets   # load textures from disk
//! RUST_LOG=floorplanner=debug cargo run --example floorplan
//! ```

use floorplanner::extrusion::FsTextureLoader;
use floorplanner::scene::{FrameStats, ObjectKind};
use floorplanner::{Floorplanner, Result, SceneConfig};

const ROOM: [((f64, f64), (f64, f64)); 6] = [
    ((100.0, 100.0), (400.0, 100.0)),
    ((400.0, 100.0), (400.0, 250.0)),
    ((400.0, 250.0), (250.0, 250.0)),
    ((250.0, 250.0), (250.0, 400.0)),
    ((250.0, 400.0), (100.0, 400.0)),
    ((100.0, 400.0), (100.0, 100.0)),
];

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for floorplanner.
    // Override with RUST_LOG env var (e.g. RUST_LOG=floorplanner=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("floorplanner=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let asset_root = std::env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    let textures = FsTextureLoader::new(asset_root);

    let mut app = Floorplanner::new(SceneConfig::default(), 800.0, 600.0)?;
    for (from, to) in ROOM {
        app.pointer_down(from.0, from.1);
        app.pointer_move(to.0, to.1);
        app.pointer_up();
    }
    // A stray click, then take it back.
    app.pointer_down(600.0, 500.0);
    app.pointer_up();
    app.undo();

    app.export()?;
    app.activate_3d_view(&textures)?;

    let mut renderer = FrameStats::default();
    for _ in 0..3 {
        app.controls_mut().rotate(0.1, 0.0);
        app.tick(&mut renderer);
    }
    app.deactivate_3d_view();

    let scene = app.scene();
    println!(
        "corners: {}, walls: {}",
        app.floorplan().corners().len(),
        app.floorplan().walls().len()
    );
    println!(
        "meshes: {} walls, {} posts, {} ground",
        scene.count(|k| matches!(k, ObjectKind::Wall { .. })),
        scene.count(|k| matches!(k, ObjectKind::Post { .. })),
        scene.count(|k| *k == ObjectKind::Ground),
    );
    println!(
        "rendered {} frames, {} triangles per frame",
        renderer.frames, renderer.last_triangle_count
    );
    Ok(())
}
