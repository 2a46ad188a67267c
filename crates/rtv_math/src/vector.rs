use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::{MathError, Result};

/// A 3-component double precision vector.
///
/// Used for points, directions and colours alike; the kernel does not care
/// which. Every operation takes `self` by value and returns a fresh vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);
    pub const ONE: Vector = Vector::new(1.0, 1.0, 1.0);
    pub const X: Vector = Vector::new(1.0, 0.0, 0.0);
    pub const Y: Vector = Vector::new(0.0, 1.0, 0.0);
    pub const Z: Vector = Vector::new(0.0, 0.0, 1.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with all three components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Dot product: sum of the component-wise products.
    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        DVec3::from(self).dot(other.into())
    }

    /// Magnitude of the vector, `sqrt(self · self)`.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Largest absolute component.
    #[inline]
    fn max_abs(self) -> f64 {
        DVec3::from(self).abs().max_element()
    }

    /// Returns the unit vector pointing the same way as `self`.
    ///
    /// The vector is first divided by its largest absolute component so the
    /// squared length can neither overflow nor underflow; every finite
    /// non-zero vector normalizes.
    ///
    /// # Errors
    ///
    /// The zero vector yields [`MathError::ZeroLength`]. A vector with an
    /// infinite or NaN component yields [`MathError::NonFinite`].
    pub fn normalize(self) -> Result<Vector> {
        if !self.is_finite() {
            return Err(MathError::NonFinite {
                length: self.length(),
            });
        }

        let m = self.max_abs();
        if m == 0.0 {
            return Err(MathError::ZeroLength);
        }

        // Divide rather than multiply by 1 / m, which overflows for subnormal m
        let unit_box = Vector::new(self.x / m, self.y / m, self.z / m);
        Ok(unit_box.scale(1.0 / unit_box.length()))
    }

    /// Like [`Vector::normalize`], but degenerate input maps to [`Vector::ZERO`].
    pub fn normalize_or_zero(self) -> Vector {
        self.normalize().unwrap_or(Vector::ZERO)
    }

    /// Multiply every component by `t`.
    #[inline]
    pub fn scale(self, t: f64) -> Vector {
        Vector::new(self.x * t, self.y * t, self.z * t)
    }

    /// Reflect the incoming direction `self` about the normal `n`.
    ///
    /// Computes `d - 2 (d · n) n`. `n` must already be unit length; it is not
    /// normalized here, and a non-unit normal gives a scaled result.
    #[inline]
    pub fn reflect(self, n: Vector) -> Vector {
        self - n.scale(2.0 * self.dot(n))
    }

    /// Right-handed cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Vector) -> Vector {
        DVec3::from(self).cross(other.into()).into()
    }

    /// Rotate `self` by Euler angles given in degrees.
    ///
    /// `rot.x` is pitch (about the right axis), `rot.y` is yaw (about the up
    /// axis) and `rot.z` is roll (about the forward axis). Roll is applied
    /// first, then yaw, then pitch:
    ///
    /// ```text
    /// rotate_x(pitch, rotate_y(yaw, rotate_z(roll, dir)))
    /// ```
    ///
    /// The order is fixed. Composing the same angles in any other order gives
    /// a different direction for non axis-aligned rotations.
    pub fn rotate(self, rot: Vector) -> Vector {
        let d2r = std::f64::consts::PI / 180.0;

        rotate_x(d2r * rot.x, rotate_y(d2r * rot.y, rotate_z(d2r * rot.z, self)))
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Narrow to single precision for GPU buffers and other `f32` consumers.
    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

// Right-handed single axis rotations, angle in radians.

#[inline]
fn rotate_x(a: f64, d: Vector) -> Vector {
    let (sin, cos) = a.sin_cos();
    Vector::new(d.x, d.y * cos - d.z * sin, d.y * sin + d.z * cos)
}

#[inline]
fn rotate_y(a: f64, d: Vector) -> Vector {
    let (sin, cos) = a.sin_cos();
    Vector::new(d.x * cos + d.z * sin, d.y, d.z * cos - d.x * sin)
}

#[inline]
fn rotate_z(a: f64, d: Vector) -> Vector {
    let (sin, cos) = a.sin_cos();
    Vector::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos, d.z)
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, t: f64) -> Vector {
        self.scale(t)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v.scale(self)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Vector::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}
