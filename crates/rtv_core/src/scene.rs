//! Scene description types for RTV.
//!
//! Plain data: spheres, materials and lights with a camera. None of these
//! types carries behaviour beyond construction and validation; shading and
//! intersection consume them through the vector kernel.

use rtv_math::{MathError, Vector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Camera;

/// Colour type alias (x = red, y = green, z = blue; typically 0-1)
pub type Colour = Vector;

/// Errors found while validating scene elements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{field} has a non-finite component {value}")]
    NonFinite { field: &'static str, value: Vector },

    #[error("{field} has a negative colour component {value}")]
    NegativeColour { field: &'static str, value: Colour },

    #[error("reflection {0} outside [0, 1]")]
    ReflectionOutOfRange(f64),

    #[error("radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("references material {material}, but the scene has {count} materials")]
    MissingMaterial { material: usize, count: usize },

    #[error("image size {width}x{height} must be non-zero")]
    EmptyImage { width: u32, height: u32 },

    #[error("field of view {0} must be in (0, 180) degrees")]
    InvalidFov(f64),

    #[error("pixel ({x}, {y}) outside the {width}x{height} image")]
    PixelOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("{element}: {source}")]
    InElement {
        element: String,
        source: Box<SceneError>,
    },

    #[error(transparent)]
    Math(#[from] MathError),
}

impl SceneError {
    fn in_element(self, kind: &str, index: usize) -> Self {
        SceneError::InElement {
            element: format!("{kind} {index}"),
            source: Box::new(self),
        }
    }
}

/// Result type for scene validation.
pub type SceneResult<T> = Result<T, SceneError>;

pub(crate) fn check_finite(field: &'static str, value: Vector) -> SceneResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite { field, value })
    }
}

fn check_colour(field: &'static str, value: Colour) -> SceneResult<()> {
    check_finite(field, value)?;
    if value.x < 0.0 || value.y < 0.0 || value.z < 0.0 {
        return Err(SceneError::NegativeColour { field, value });
    }
    Ok(())
}

/// Surface material: a diffuse colour and a mirror reflection coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse colour (RGB, 0-1)
    pub diffuse: Colour,

    /// Fraction of light reflected as a mirror (0 = matte, 1 = perfect mirror)
    #[serde(default)]
    pub reflection: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Colour::splat(0.5), // Grey default
            reflection: 0.0,
        }
    }
}

impl Material {
    pub fn new(diffuse: Colour, reflection: f64) -> Self {
        Self {
            diffuse,
            reflection,
        }
    }

    /// Check colour and reflection are usable.
    pub fn validate(&self) -> SceneResult<()> {
        check_colour("diffuse", self.diffuse)?;
        if !(0.0..=1.0).contains(&self.reflection) {
            return Err(SceneError::ReflectionOutOfRange(self.reflection));
        }
        Ok(())
    }

    /// True if the material reflects any light as a mirror.
    pub fn is_reflective(&self) -> bool {
        self.reflection > 0.0
    }
}

/// A sphere referencing a material by index into [`Scene::materials`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vector,
    pub radius: f64,
    #[serde(default)]
    pub material: usize,
}

impl Sphere {
    pub fn new(center: Vector, radius: f64, material: usize) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Check the geometry. The material index is checked by [`Scene::validate`].
    pub fn validate(&self) -> SceneResult<()> {
        check_finite("center", self.center)?;
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(SceneError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vector,
    pub intensity: Colour,
}

impl Light {
    pub fn new(position: Vector, intensity: Colour) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn validate(&self) -> SceneResult<()> {
        check_finite("position", self.position)?;
        check_colour("intensity", self.intensity)
    }
}

/// A complete scene: one camera plus flat lists of spheres, materials and lights.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub camera: Camera,
    pub materials: Vec<Material>,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene with the default camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the scene and return its ID.
    pub fn add_material(&mut self, material: Material) -> usize {
        let id = self.materials.len();
        self.materials.push(material);
        id
    }

    /// Add a sphere to the scene and return its ID.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        let id = self.spheres.len();
        self.spheres.push(sphere);
        id
    }

    /// Add a light to the scene and return its ID.
    pub fn add_light(&mut self, light: Light) -> usize {
        let id = self.lights.len();
        self.lights.push(light);
        id
    }

    /// Get a material by ID.
    pub fn get_material(&self, id: usize) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Get the material a sphere uses.
    pub fn sphere_material(&self, sphere: &Sphere) -> Option<&Material> {
        self.get_material(sphere.material)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Validate the camera and every element, and resolve material references.
    ///
    /// Element errors are wrapped in [`SceneError::InElement`] naming the
    /// offending element, e.g. `sphere 2: radius must be positive, got 0`.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera
            .validate()
            .map_err(|e| e.in_element("camera", 0))?;

        for (i, material) in self.materials.iter().enumerate() {
            material.validate().map_err(|e| e.in_element("material", i))?;
        }

        for (i, sphere) in self.spheres.iter().enumerate() {
            sphere.validate().map_err(|e| e.in_element("sphere", i))?;
            if sphere.material >= self.materials.len() {
                return Err(SceneError::MissingMaterial {
                    material: sphere.material,
                    count: self.materials.len(),
                }
                .in_element("sphere", i));
            }
        }

        for (i, light) in self.lights.iter().enumerate() {
            light.validate().map_err(|e| e.in_element("light", i))?;
        }

        Ok(())
    }
}
