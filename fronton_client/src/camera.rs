//! Camera for Fronton
//!
//! 2D orthographic camera in field units, origin top-left, y pointing down

use glam::{Mat4, Vec2, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera covering a `width` x `height` field
    pub fn orthographic(width: f32, height: f32) -> Self {
        // Bottom and top swapped so y grows downwards like screen pixels
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }

    /// Field position to normalized device coordinates
    pub fn project(&self, point: Vec2) -> Vec2 {
        let clip = (self.projection * self.view).project_point3(Vec3::new(point.x, point.y, 0.0));
        Vec2::new(clip.x, clip.y)
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_field_corners_map_to_ndc() {
        let camera = Camera::orthographic(400.0, 600.0);
        assert_close(camera.project(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_close(camera.project(Vec2::new(400.0, 600.0)), Vec2::new(1.0, -1.0));
        assert_close(camera.project(Vec2::new(200.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
