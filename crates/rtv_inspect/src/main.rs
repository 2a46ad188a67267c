// Inspect an RTV scene file: element counts, camera orientation and primary rays.
// Run with: cargo run --bin rtv_inspect -- <scene.json> [px py]
//
// Log verbosity follows RUST_LOG (default: info).

use anyhow::{Context, Result};
use rtv_core::{load_scene, Scene};
use rtv_math::Ray;
use std::env;

fn parse_pixel(x: &str, y: &str) -> Result<(u32, u32)> {
    let px = x.parse().with_context(|| format!("invalid pixel x '{x}'"))?;
    let py = y.parse().with_context(|| format!("invalid pixel y '{y}'"))?;
    Ok((px, py))
}

fn describe_ray(label: &str, ray: &Ray) -> String {
    format!("{label:<14} origin {:.4}  direction {:.4}", ray.origin, ray.direction)
}

/// Build the report lines for a loaded scene.
///
/// With no pixel the four image corners and the centre are traced.
fn report(scene: &Scene, pixel: Option<(u32, u32)>) -> Result<Vec<String>> {
    let camera = &scene.camera;
    let mut lines = vec![
        format!("Spheres:   {}", scene.sphere_count()),
        format!("Materials: {}", scene.material_count()),
        format!("Lights:    {}", scene.light_count()),
        format!(
            "Camera:    {}x{} fov {} at {} rotation {}",
            camera.width, camera.height, camera.fov, camera.position, camera.rotation
        ),
        format!("Forward:   {:.4}", camera.forward()),
        format!("Up:        {:.4}", camera.up()),
    ];

    let pixels = match pixel {
        Some(p) => vec![("pixel", p)],
        None => {
            let (w, h) = (camera.width.saturating_sub(1), camera.height.saturating_sub(1));
            vec![
                ("top-left", (0, 0)),
                ("top-right", (w, 0)),
                ("bottom-left", (0, h)),
                ("bottom-right", (w, h)),
                ("centre", (camera.width / 2, camera.height / 2)),
            ]
        }
    };

    for (label, (px, py)) in pixels {
        let ray = camera
            .primary_ray(px, py)
            .with_context(|| format!("cannot trace pixel ({px}, {py})"))?;
        lines.push(describe_ray(&format!("{label} ({px}, {py})"), &ray));
    }

    Ok(lines)
}

/// Split the command line into a scene path and an optional pixel.
///
/// Returns `Ok(None)` when the arguments do not match the usage.
fn parse_args(args: &[String]) -> Result<Option<(&str, Option<(u32, u32)>)>> {
    match args {
        [_, path] => Ok(Some((path.as_str(), None))),
        [_, path, x, y] => Ok(Some((path.as_str(), Some(parse_pixel(x, y)?)))),
        _ => Ok(None),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let Some((path, pixel)) = parse_args(&args)? else {
        let program = args.first().map_or("rtv_inspect", String::as_str);
        eprintln!("Usage: {program} <scene.json> [px py]");
        std::process::exit(1);
    };

    let scene = load_scene(path).with_context(|| format!("failed to load scene {path}"))?;

    for line in report(&scene, pixel)? {
        println!("{line}");
    }

    Ok(())
}
