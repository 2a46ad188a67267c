//! RTV Core - scene description for the RTV ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Material`, `Light`, `Colour`
//! - **Camera**: Euler-angle oriented pinhole camera producing primary rays
//! - **Loading**: JSON scene files with validation
//!
//! # Example
//!
//! ```ignore
//! use rtv_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! let ray = scene.camera.primary_ray(0, 0)?;
//! println!("top-left ray: {}", ray.direction);
//! ```

pub mod camera;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use loader::{load_scene, load_scene_from_str, scene_to_string, LoadError, LoadResult};
pub use scene::{Colour, Light, Material, Scene, SceneError, SceneResult, Sphere};
