//! Orbit camera and view frustum.
//!
//! The camera always looks at the origin from a position the interaction
//! controller computes each frame. The frustum built from its matrices backs
//! the visible-particle metric.

use glam::{Mat4, Vec3};

/// Perspective camera orbiting the origin.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    /// World position, updated from the controller each frame.
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl OrbitCamera {
    /// Camera at the default viewing distance, with a 75° vertical fov and
    /// a 0.1..1000 clip range.
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 50.0),
            fov_y: 75f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// View matrix looking at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    /// Perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Frustum for point-containment queries.
    pub fn frustum(&self) -> Frustum {
        Frustum {
            view_proj: self.projection_matrix() * self.view_matrix(),
        }
    }
}

/// View frustum as a combined view-projection transform.
///
/// Containment is a clip-space test: a point is visible when its homogeneous
/// coordinates satisfy `|x| <= w`, `|y| <= w`, `0 <= z <= w` with `w > 0`.
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    view_proj: Mat4,
}

impl Frustum {
    /// Build from an already-combined view-projection matrix.
    pub fn from_view_proj(view_proj: Mat4) -> Self {
        Self { view_proj }
    }

    /// Whether a world-space point lies inside the frustum.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        let clip = self.view_proj * point.extend(1.0);
        let w = clip.w;
        w > 0.0
            && clip.x.abs() <= w
            && clip.y.abs() <= w
            && clip.z >= 0.0
            && clip.z <= w
    }

    /// The underlying view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        self.view_proj
    }
}

/// Convert an angle pair to degrees wrapped into (-360, 360), the form the
/// status readout displays.
pub fn rotation_degrees(rotation_x: f32, rotation_y: f32) -> (f32, f32) {
    (
        rotation_x.to_degrees() % 360.0,
        rotation_y.to_degrees() % 360.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_visible() {
        let camera = OrbitCamera::new(16.0 / 9.0);
        assert!(camera.frustum().contains(Vec3::ZERO));
    }

    #[test]
    fn test_point_behind_camera_is_culled() {
        let camera = OrbitCamera::new(16.0 / 9.0);
        // Camera sits at +z looking at the origin; +z beyond it is behind.
        assert!(!camera.frustum().contains(Vec3::new(0.0, 0.0, 100.0)));
    }

    #[test]
    fn test_point_outside_far_plane_is_culled() {
        let camera = OrbitCamera::new(1.0);
        assert!(!camera.frustum().contains(Vec3::new(0.0, 0.0, -2000.0)));
    }

    #[test]
    fn test_lateral_cull() {
        let camera = OrbitCamera::new(1.0);
        assert!(!camera.frustum().contains(Vec3::new(500.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotation_degrees_wraps() {
        let (x, _) = rotation_degrees(4.0 * std::f32::consts::PI, 0.0);
        assert!((x - 360.0).abs() < 1.0 || x.abs() < 1.0);
        let (x, y) = rotation_degrees(std::f32::consts::PI, -std::f32::consts::FRAC_PI_3);
        assert!((x - 180.0).abs() < 0.01);
        assert!((y + 60.0).abs() < 0.01);
    }
}
