//! JSON scene loading.
//!
//! A scene file is a single JSON object with optional `camera`, `materials`,
//! `spheres` and `lights` keys. Vectors and colours are written as
//! `{"x": .., "y": .., "z": ..}`. Every loaded scene is validated before it is
//! returned.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::{Scene, SceneError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene file.
///
/// # Example
///
/// ```ignore
/// use rtv_core::load_scene;
///
/// let scene = load_scene("scenes/three_spheres.json")?;
/// println!("{} spheres", scene.sphere_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::debug!("Loading scene from {}", path.display());

    let text = fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<Scene> {
    let scene: Scene = serde_json::from_str(text)?;
    scene.validate()?;

    log::info!(
        "Loaded scene: {} spheres, {} materials, {} lights",
        scene.sphere_count(),
        scene.material_count(),
        scene.light_count()
    );
    if scene.light_count() == 0 && scene.sphere_count() > 0 {
        log::warn!("Scene has {} spheres but no lights", scene.sphere_count());
    }

    Ok(scene)
}

/// Serialize a scene to pretty-printed JSON that [`load_scene_from_str`] accepts.
pub fn scene_to_string(scene: &Scene) -> LoadResult<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}
