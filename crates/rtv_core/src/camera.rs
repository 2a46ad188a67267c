//! Camera for primary ray generation.

use rtv_math::{Ray, Vector};
use serde::{Deserialize, Serialize};

use crate::scene::{check_finite, SceneError, SceneResult};

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f64 = 60.0;

/// Pinhole camera oriented by Euler angles.
///
/// In camera space the view looks down +Z with +Y up, and screen right maps
/// to +X. `rotation` holds pitch, yaw and roll in degrees (x, y, z) and is
/// applied to every view direction with [`Vector::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub position: Vector,
    pub rotation: Vector,
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector::ZERO,
            rotation: Vector::ZERO,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fov: DEFAULT_FOV,
        }
    }
}

impl Camera {
    /// Create a camera at `position` with default image settings.
    pub fn new(position: Vector, rotation: Vector) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Width over height.
    ///
    /// Fails with [`SceneError::EmptyImage`] when either dimension is zero.
    pub fn aspect(&self) -> SceneResult<f64> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width as f64 / self.height as f64)
    }

    /// World-space view direction.
    pub fn forward(&self) -> Vector {
        Vector::Z.rotate(self.rotation)
    }

    /// World-space up direction.
    pub fn up(&self) -> Vector {
        Vector::Y.rotate(self.rotation)
    }

    pub fn validate(&self) -> SceneResult<()> {
        check_finite("position", self.position)?;
        check_finite("rotation", self.rotation)?;
        self.aspect()?;
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::InvalidFov(self.fov));
        }
        Ok(())
    }

    /// Generate the primary ray through the centre of pixel (`px`, `py`).
    ///
    /// Pixel (0, 0) is the top-left corner of the image. The returned
    /// direction is unit length.
    pub fn primary_ray(&self, px: u32, py: u32) -> SceneResult<Ray> {
        self.validate()?;
        if px >= self.width || py >= self.height {
            return Err(SceneError::PixelOutOfBounds {
                x: px,
                y: py,
                width: self.width,
                height: self.height,
            });
        }

        // Pixel centre in [-1, 1] on both axes
        let ndc_x = (px as f64 + 0.5) / self.width as f64 * 2.0 - 1.0;
        let ndc_y = (py as f64 + 0.5) / self.height as f64 * 2.0 - 1.0;
        let half_height = (self.fov.to_radians() * 0.5).tan();

        let local = Vector::new(ndc_x * self.aspect()? * half_height, -ndc_y * half_height, 1.0);
        let direction = local.normalize()?.rotate(self.rotation);

        Ok(Ray::new(self.position, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Vector, b: Vector) {
        assert!((a - b).length() < EPS, "expected {b}, got {a}");
    }

    #[test]
    fn test_camera_default() {
        let camera = Camera::default();

        assert_eq!(camera.width, 1920);
        assert_eq!(camera.height, 1080);
        assert_eq!(camera.aspect(), Ok(1920.0 / 1080.0));
        assert_close(camera.forward(), Vector::Z);
        assert_close(camera.up(), Vector::Y);
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::new(Vector::new(0.0, 0.0, -5.0), Vector::ZERO).with_resolution(3, 3);
        let ray = camera.primary_ray(1, 1).unwrap();

        assert_eq!(ray.origin, Vector::new(0.0, 0.0, -5.0));
        assert_close(ray.direction, Vector::Z);
    }

    #[test]
    fn test_yaw_turns_the_view() {
        let camera = Camera::new(Vector::ZERO, Vector::new(0.0, 90.0, 0.0)).with_resolution(3, 3);

        assert_close(camera.forward(), Vector::X);
        assert_close(camera.primary_ray(1, 1).unwrap().direction, Vector::X);
    }

    #[test]
    fn test_pitch_tilts_the_view() {
        // Pitch of -90 brings +Z up to +Y
        let camera = Camera::new(Vector::ZERO, Vector::new(-90.0, 0.0, 0.0));
        assert_close(camera.forward(), Vector::Y);
        assert_close(camera.up(), Vector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_corner_rays() {
        let camera = Camera::default().with_resolution(4, 2).with_fov(90.0);

        let top_left = camera.primary_ray(0, 0).unwrap().direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0 && top_left.z > 0.0);

        let bottom_right = camera.primary_ray(3, 1).unwrap().direction;
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0 && bottom_right.z > 0.0);

        // Symmetric about the view axis
        assert!((top_left.x + bottom_right.x).abs() < EPS);
        assert!((top_left.y + bottom_right.y).abs() < EPS);
        assert!((top_left.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_fov_controls_spread() {
        let narrow = Camera::default().with_resolution(2, 2).with_fov(30.0);
        let wide = Camera::default().with_resolution(2, 2).with_fov(120.0);

        let n = narrow.primary_ray(0, 0).unwrap().direction;
        let w = wide.primary_ray(0, 0).unwrap().direction;
        assert!(n.dot(Vector::Z) > w.dot(Vector::Z));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let camera = Camera::default().with_resolution(10, 10);
        assert_eq!(
            camera.primary_ray(10, 0),
            Err(SceneError::PixelOutOfBounds {
                x: 10,
                y: 0,
                width: 10,
                height: 10
            })
        );
    }

    #[test]
    fn test_aspect_of_empty_image() {
        let camera = Camera::default().with_resolution(640, 0);
        assert_eq!(
            camera.aspect(),
            Err(SceneError::EmptyImage {
                width: 640,
                height: 0
            })
        );
        assert_eq!(Camera::default().with_resolution(4, 2).aspect(), Ok(2.0));
    }

    #[test]
    fn test_camera_validation() {
        assert!(Camera::default().validate().is_ok());
        assert_eq!(
            Camera::default().with_resolution(0, 10).validate(),
            Err(SceneError::EmptyImage {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Camera::default().with_fov(180.0).validate(),
            Err(SceneError::InvalidFov(180.0))
        );
        assert!(Camera::default().with_fov(0.0).primary_ray(0, 0).is_err());
    }
}
