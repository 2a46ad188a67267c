use serde::{Deserialize, Serialize};

use crate::{Result, Vector};

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length; use [`Ray::normalized`]
/// when the ray parameter must measure distance.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vector,
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose direction is normalized.
    ///
    /// Fails with [`crate::MathError::ZeroLength`] for a zero direction.
    pub fn normalized(origin: Vector, direction: Vector) -> Result<Self> {
        Ok(Self::new(origin, direction.normalize()?))
    }

    /// Get the origin point of the ray.
    ///
    /// Note: Since `origin` is public, you can also access it directly via `ray.origin`.
    #[inline]
    pub fn origin(&self) -> Vector {
        self.origin
    }

    /// Get the direction vector of the ray.
    ///
    /// Note: Since `direction` is public, you can also access it directly via `ray.direction`.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vector {
        self.origin + self.direction * t
    }
}
