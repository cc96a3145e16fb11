//! World to terminal-cell projection.
//!
//! The camera orbits the city centre. World points are rotated about the
//! vertical axis by the camera yaw, then mapped with an oblique projection:
//! depth pushes a point down the screen, height pushes it up. Terminal cells
//! are roughly twice as tall as they are wide, so vertical units are halved.

use memomate_core::Vec3;

/// Closest the camera may get to the city centre.
pub const MIN_DISTANCE: f32 = 10.0;
/// Farthest the camera may get from the city centre.
pub const MAX_DISTANCE: f32 = 50.0;
/// Distance at which one world unit spans the base cell scale.
pub const DEFAULT_DISTANCE: f32 = 25.0;

/// Fraction of the vertical scale applied per unit of depth.
const DEPTH_TILT: f32 = 0.35;
/// Row of the ground plane's centre as a fraction of the viewport height.
const HORIZON: f32 = 0.78;

/// Orbit camera around the city centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    yaw: f32,
    distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl Camera {
    pub fn new(yaw: f32, distance: f32) -> Self {
        Self {
            yaw: yaw.rem_euclid(std::f32::consts::TAU),
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Orbit by `delta` radians.
    pub fn rotate(self, delta: f32) -> Self {
        Self::new(self.yaw + delta, self.distance)
    }

    /// Move towards (negative) or away from (positive) the centre.
    pub fn zoom(self, delta: f32) -> Self {
        Self::new(self.yaw, self.distance + delta)
    }

    /// Magnification relative to the default distance.
    pub fn magnification(&self) -> f32 {
        DEFAULT_DISTANCE / self.distance
    }
}

/// A projected point in fractional cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub col: f32,
    pub row: f32,
    /// Larger is nearer the viewer.
    pub depth: f32,
}

impl ScreenPoint {
    pub fn cell(&self) -> (i32, i32) {
        (self.col.round() as i32, self.row.round() as i32)
    }
}

/// Maps world coordinates into a viewport of `width` by `height` cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    camera: Camera,
    center_col: f32,
    horizon_row: f32,
    /// Columns per world unit.
    scale_x: f32,
    /// Rows per world unit.
    scale_y: f32,
}

impl Projector {
    pub fn new(camera: Camera, width: u16, height: u16) -> Self {
        let unit = (width as f32 / 26.0).min(height as f32 / 13.0) * camera.magnification();
        Self {
            camera,
            center_col: width as f32 / 2.0,
            horizon_row: height as f32 * HORIZON,
            scale_x: unit,
            scale_y: unit * 0.5,
        }
    }

    /// Rotate a world point about the vertical axis into camera space.
    fn to_camera(&self, p: Vec3) -> Vec3 {
        let (sin, cos) = self.camera.yaw.sin_cos();
        Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
    }

    pub fn project(&self, p: Vec3) -> ScreenPoint {
        let c = self.to_camera(p);
        ScreenPoint {
            col: self.center_col + c.x * self.scale_x,
            row: self.horizon_row + c.z * self.scale_y * DEPTH_TILT - c.y * self.scale_y,
            depth: c.z,
        }
    }

    /// Apparent width, in columns, of a box footprint seen from the camera.
    pub fn footprint_cols(&self, width: f32, depth: f32) -> f32 {
        let (sin, cos) = self.camera.yaw.sin_cos();
        (width * cos.abs() + depth * sin.abs()) * self.scale_x
    }

    /// Rows spanned by a vertical extent.
    pub fn height_rows(&self, height: f32) -> f32 {
        height * self.scale_y
    }

    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn test_camera_distance_is_clamped() {
        assert_eq!(Camera::new(0.0, 5.0).distance(), MIN_DISTANCE);
        assert_eq!(Camera::new(0.0, 80.0).distance(), MAX_DISTANCE);
        assert_eq!(Camera::default().zoom(-100.0).distance(), MIN_DISTANCE);
        assert_eq!(Camera::default().magnification(), 1.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let projector = Projector::new(Camera::default(), 100, 40);
        let p = projector.project(Vec3::ZERO);
        assert_eq!(p.col, 50.0);
        assert!((p.row - 40.0 * HORIZON).abs() < 1e-4);
    }

    #[test]
    fn test_height_moves_up_depth_moves_down() {
        let projector = Projector::new(Camera::default(), 100, 40);
        let ground = projector.project(Vec3::ZERO);
        let raised = projector.project(Vec3::new(0.0, 5.0, 0.0));
        let near = projector.project(Vec3::new(0.0, 0.0, 5.0));
        assert!(raised.row < ground.row);
        assert!(near.row > ground.row);
        assert!(near.depth > ground.depth);
    }

    #[test]
    fn test_half_turn_mirrors_the_city() {
        let projector = Projector::new(Camera::new(PI, DEFAULT_DISTANCE), 100, 40);
        let right = projector.project(Vec3::new(4.0, 0.0, 0.0));
        assert!(right.col < 50.0);
        let far = projector.project(Vec3::new(0.0, 0.0, -4.0));
        assert!(far.depth > 0.0);
    }

    #[test]
    fn test_zoom_scales_footprint() {
        let near = Projector::new(Camera::new(0.0, MIN_DISTANCE), 100, 40);
        let far = Projector::new(Camera::new(0.0, MAX_DISTANCE), 100, 40);
        assert!(near.footprint_cols(4.0, 4.0) > far.footprint_cols(4.0, 4.0));
    }
}
