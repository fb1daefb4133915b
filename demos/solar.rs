//! Minimal solar system: a three-level hierarchy driven through the
//! transform pipeline for a few simulated frames, printing where each
//! body ends up.
//!
//! Run with `cargo run --example solar`.

use anyhow::Result;
use tartan::geometry;
use tartan::math::m4;
use tartan::scene::{pipeline, Object3D, ObjectDesc, Scene, Settings};

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = Scene::new();
    scene.camera.set_position(0.0, 20.0, 120.0);
    scene.camera.set_target(0.0, 0.0, 0.0);

    scene.add_object(
        ObjectDesc::new("sun", geometry::cuboid(10.0, 10.0, 10.0))
            .compute_bbox()
            .child(
                ObjectDesc::new("planet", geometry::cuboid(3.0, 3.0, 3.0))
                    .position(40.0, 0.0, 0.0)
                    .compute_bbox()
                    .child(
                        ObjectDesc::new("moon", geometry::cuboid(1.0, 1.0, 1.0))
                            .position(8.0, 0.0, 0.0),
                    ),
            ),
    )?;

    // The sun spins; the planet orbit comes from the parent rotation.
    scene.set_update_handler(
        "sun",
        Box::new(|object: &mut Object3D, dt_ms: f32| {
            object.rotation.y += 0.0005 * dt_ms;
        }),
    );

    let settings = Settings::default();
    for step in 0..5 {
        scene.run_updates(16.0);
        let frame = pipeline::run_frame(&mut scene, &settings, 16.0 / 9.0);

        println!("frame {step}:");
        for name in ["sun", "planet", "moon"] {
            let (world, bbox) = &frame.outputs[name];
            let t = m4::translation_of(world);
            println!(
                "  {name:8} at ({:8.3}, {:8.3}, {:8.3})  bbox extents ({:.2}, {:.2}, {:.2})",
                t.x, t.y, t.z, bbox.w, bbox.h, bbox.d
            );
        }
    }

    Ok(())
}
